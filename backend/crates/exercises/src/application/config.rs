//! Application Configuration
//!
//! Configuration for the exercises application layer.

/// Exercises application configuration
#[derive(Debug, Clone)]
pub struct ExercisesConfig {
    /// Maximum rows returned by the list operation.
    /// `0` means no limit, matching the storage driver convention.
    pub list_limit: i64,
}

impl Default for ExercisesConfig {
    fn default() -> Self {
        Self { list_limit: 0 }
    }
}
