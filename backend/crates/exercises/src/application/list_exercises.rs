//! List Exercises Use Case

use std::sync::Arc;

use crate::application::config::ExercisesConfig;
use crate::domain::entities::Exercise;
use crate::domain::repository::ExerciseRepository;
use crate::domain::value_objects::ExerciseFilter;
use crate::error::ExerciseResult;

/// List exercises input
///
/// `reps` narrows the result to records with exactly that rep count;
/// absent means every record.
#[derive(Debug, Clone, Default)]
pub struct ListExercisesInput {
    pub reps: Option<i32>,
}

/// List Exercises Use Case
pub struct ListExercisesUseCase<R>
where
    R: ExerciseRepository,
{
    repo: Arc<R>,
    config: Arc<ExercisesConfig>,
}

impl<R> ListExercisesUseCase<R>
where
    R: ExerciseRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ExercisesConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListExercisesInput) -> ExerciseResult<Vec<Exercise>> {
        let filter = match input.reps {
            Some(reps) => ExerciseFilter::by_reps(reps),
            None => ExerciseFilter::default(),
        };

        self.repo.find(&filter, self.config.list_limit).await
    }
}
