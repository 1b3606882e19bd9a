//! Replace Exercise Use Case
//!
//! Whole-record overwrite. The response carries the row the database
//! actually stored, not an echo of the client body.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::{Exercise, ExerciseDraft};
use crate::domain::repository::ExerciseRepository;
use crate::domain::value_objects::{ExerciseName, Unit};
use crate::error::{ExerciseError, ExerciseResult};
use kernel::id::ExerciseId;

/// Replace exercise input - the full replacement fields
pub struct ReplaceExerciseInput {
    pub name: String,
    pub reps: i32,
    pub weight: f64,
    pub unit: String,
    pub date: NaiveDate,
}

/// Replace Exercise Use Case
pub struct ReplaceExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    repo: Arc<R>,
}

impl<R> ReplaceExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: ExerciseId,
        input: ReplaceExerciseInput,
    ) -> ExerciseResult<Exercise> {
        let name = ExerciseName::new(&input.name)?;
        let unit: Unit = input.unit.parse()?;

        let draft = ExerciseDraft {
            name,
            reps: input.reps,
            weight: input.weight,
            unit,
            date: input.date,
        };

        match self.repo.replace(id, &draft).await? {
            Some(stored) => {
                tracing::info!(exercise_id = %id, "Exercise replaced");
                Ok(stored)
            }
            None => Err(ExerciseError::NotFound),
        }
    }
}
