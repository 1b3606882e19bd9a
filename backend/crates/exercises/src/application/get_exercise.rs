//! Get Exercise Use Case

use std::sync::Arc;

use crate::domain::entities::Exercise;
use crate::domain::repository::ExerciseRepository;
use crate::error::{ExerciseError, ExerciseResult};
use kernel::id::ExerciseId;

/// Get Exercise Use Case
pub struct GetExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    repo: Arc<R>,
}

impl<R> GetExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ExerciseId) -> ExerciseResult<Exercise> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ExerciseError::NotFound)
    }
}
