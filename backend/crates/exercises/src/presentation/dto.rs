//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Exercise;
use crate::domain::value_objects::Unit;
use kernel::id::ExerciseId;

/// Request body for POST /exercises and PUT /exercises/{id}
///
/// `unit` arrives as a raw string so enum violations surface through the
/// use case as a 400 with the normalized error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseBody {
    pub name: String,
    pub reps: i32,
    pub weight: f64,
    pub unit: String,
    pub date: NaiveDate,
}

/// Wire representation of one stored exercise
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub id: ExerciseId,
    pub name: String,
    pub reps: i32,
    pub weight: f64,
    pub unit: Unit,
    pub date: NaiveDate,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.into_inner(),
            reps: exercise.reps,
            weight: exercise.weight,
            unit: exercise.unit,
            date: exercise.date,
        }
    }
}

/// Query parameters for GET /exercises
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub reps: Option<i32>,
}
