//! Exercise Error Types
//!
//! This module provides exercise-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

use crate::domain::value_objects::{ExerciseNameError, UnitParseError};

/// Exercise-specific result type alias
pub type ExerciseResult<T> = Result<T, ExerciseError>;

/// Exercise-specific error variants
///
/// These map to appropriate HTTP status codes through `AppError`:
/// validation rejections are 400, missing records are 404, and
/// infrastructure failures stay in the 5xx range.
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// Requested id matched zero records (or could never match one)
    #[error("Resource not found")]
    NotFound,

    /// Request payload violated a field constraint
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExerciseError {
    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ExerciseError::Database(e) => {
                tracing::error!(error = %e, "Exercise database error");
            }
            ExerciseError::Internal(msg) => {
                tracing::error!(message = %msg, "Exercise internal error");
            }
            ExerciseError::Validation(msg) => {
                tracing::warn!(message = %msg, "Exercise validation rejected");
            }
            ExerciseError::NotFound => {
                tracing::debug!("Exercise not found");
            }
        }
    }
}

impl From<ExerciseNameError> for ExerciseError {
    fn from(err: ExerciseNameError) -> Self {
        ExerciseError::Validation(err.to_string())
    }
}

impl From<UnitParseError> for ExerciseError {
    fn from(err: UnitParseError) -> Self {
        ExerciseError::Validation(err.to_string())
    }
}

impl From<ExerciseError> for AppError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::NotFound => AppError::not_found("Resource not found"),
            ExerciseError::Validation(msg) => AppError::bad_request(msg),
            // The kernel carries the sqlx error-code mapping table
            ExerciseError::Database(e) => AppError::from(e),
            ExerciseError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for ExerciseError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
