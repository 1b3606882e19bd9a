//! Exercises Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Contract
//! - Five operations: create, get by id, filtered list, full replace, delete
//! - Every operation is a single repository round trip
//! - The repository is constructor-injected; handlers are generic over the
//!   repository trait so tests run against an in-memory double

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ExercisesConfig;
pub use error::{ExerciseError, ExerciseResult};
pub use infra::postgres::PgExerciseRepository;
pub use presentation::router::{exercises_router, exercises_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
