//! Exercises Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ExercisesConfig;
use crate::domain::repository::ExerciseRepository;
use crate::infra::postgres::PgExerciseRepository;
use crate::presentation::handlers::{self, ExercisesAppState};

/// Create the exercises router with PostgreSQL repository
pub fn exercises_router(repo: PgExerciseRepository, config: ExercisesConfig) -> Router {
    exercises_router_generic(repo, config)
}

/// Create a generic exercises router for any repository implementation
pub fn exercises_router_generic<R>(repo: R, config: ExercisesConfig) -> Router
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let state = ExercisesAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/exercises",
            post(handlers::create_exercise::<R>).get(handlers::list_exercises::<R>),
        )
        .route(
            "/exercises/{id}",
            get(handlers::get_exercise::<R>)
                .put(handlers::replace_exercise::<R>)
                .delete(handlers::delete_exercise::<R>),
        )
        .with_state(state)
}
