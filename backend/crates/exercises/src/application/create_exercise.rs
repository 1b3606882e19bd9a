//! Create Exercise Use Case

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::{Exercise, ExerciseDraft};
use crate::domain::repository::ExerciseRepository;
use crate::domain::value_objects::{ExerciseName, Unit};
use crate::error::ExerciseResult;

/// Create exercise input
pub struct CreateExerciseInput {
    pub name: String,
    pub reps: i32,
    pub weight: f64,
    pub unit: String,
    pub date: NaiveDate,
}

/// Create Exercise Use Case
pub struct CreateExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    repo: Arc<R>,
}

impl<R> CreateExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateExerciseInput) -> ExerciseResult<Exercise> {
        // Validate the enum and name before anything reaches storage
        let name = ExerciseName::new(&input.name)?;
        let unit: Unit = input.unit.parse()?;

        let exercise = Exercise::new(ExerciseDraft {
            name,
            reps: input.reps,
            weight: input.weight,
            unit,
            date: input.date,
        });

        self.repo.create(&exercise).await?;

        tracing::info!(exercise_id = %exercise.id, "Exercise created");

        Ok(exercise)
    }
}
