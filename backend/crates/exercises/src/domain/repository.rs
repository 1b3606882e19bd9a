//! Repository Trait
//!
//! Interface for data persistence. Implementation is in the infra layer.
//! Every method is a single storage round trip.

use crate::domain::entities::{Exercise, ExerciseDraft};
use crate::domain::value_objects::ExerciseFilter;
use crate::error::ExerciseResult;
use kernel::id::ExerciseId;

/// Exercise repository trait
#[trait_variant::make(ExerciseRepository: Send)]
pub trait LocalExerciseRepository {
    /// Persist a new exercise (id already assigned)
    async fn create(&self, exercise: &Exercise) -> ExerciseResult<()>;

    /// Find exercises matching the filter, in storage (insertion) order.
    /// `limit == 0` means no limit.
    async fn find(&self, filter: &ExerciseFilter, limit: i64) -> ExerciseResult<Vec<Exercise>>;

    /// Find one exercise by id
    async fn find_by_id(&self, id: ExerciseId) -> ExerciseResult<Option<Exercise>>;

    /// Replace the whole record matching id; returns the stored record,
    /// or `None` when zero rows matched.
    async fn replace(
        &self,
        id: ExerciseId,
        draft: &ExerciseDraft,
    ) -> ExerciseResult<Option<Exercise>>;

    /// Delete the record matching id; returns the removed-row count (0 or 1)
    async fn delete(&self, id: ExerciseId) -> ExerciseResult<u64>;
}
