//! Delete Exercise Use Case

use std::sync::Arc;

use crate::domain::repository::ExerciseRepository;
use crate::error::{ExerciseError, ExerciseResult};
use kernel::id::ExerciseId;

/// Delete Exercise Use Case
pub struct DeleteExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteExerciseUseCase<R>
where
    R: ExerciseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ExerciseId) -> ExerciseResult<()> {
        let deleted = self.repo.delete(id).await?;

        if deleted == 0 {
            return Err(ExerciseError::NotFound);
        }

        tracing::info!(exercise_id = %id, "Exercise deleted");
        Ok(())
    }
}
