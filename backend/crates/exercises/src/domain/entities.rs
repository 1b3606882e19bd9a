//! Domain Entities
//!
//! Core entities for the exercises domain.

use chrono::NaiveDate;
use kernel::id::ExerciseId;

use crate::domain::value_objects::{ExerciseName, Unit};

/// The five client-supplied fields of an exercise
///
/// Used both for creation and for whole-record replacement. Updates are
/// always full overwrites; there is no partial patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: ExerciseName,
    pub reps: i32,
    pub weight: f64,
    pub unit: Unit,
    pub date: NaiveDate,
}

/// Exercise entity - one persisted record
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: ExerciseName,
    pub reps: i32,
    pub weight: f64,
    pub unit: Unit,
    pub date: NaiveDate,
}

impl Exercise {
    /// Create a new exercise; the id is assigned here, at creation time,
    /// and never changes afterwards.
    pub fn new(draft: ExerciseDraft) -> Self {
        Self {
            id: ExerciseId::new(),
            name: draft.name,
            reps: draft.reps,
            weight: draft.weight,
            unit: draft.unit,
            date: draft.date,
        }
    }

    /// Reconstruct an exercise from its stored parts
    pub fn from_parts(id: ExerciseId, draft: ExerciseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            reps: draft.reps,
            weight: draft.weight,
            unit: draft.unit,
            date: draft.date,
        }
    }
}
