//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::ExercisesConfig;
use crate::application::create_exercise::{CreateExerciseInput, CreateExerciseUseCase};
use crate::application::delete_exercise::DeleteExerciseUseCase;
use crate::application::get_exercise::GetExerciseUseCase;
use crate::application::list_exercises::{ListExercisesInput, ListExercisesUseCase};
use crate::application::replace_exercise::{ReplaceExerciseInput, ReplaceExerciseUseCase};
use crate::domain::repository::ExerciseRepository;
use crate::error::{ExerciseError, ExerciseResult};
use crate::presentation::dto::{ExerciseBody, ExerciseResponse, ListQuery};
use kernel::id::ExerciseId;

/// Shared state for exercise handlers
#[derive(Clone)]
pub struct ExercisesAppState<R>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ExercisesConfig>,
}

/// POST /exercises
pub async fn create_exercise<R>(
    State(state): State<ExercisesAppState<R>>,
    Json(body): Json<ExerciseBody>,
) -> ExerciseResult<impl IntoResponse>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateExerciseUseCase::new(state.repo.clone());

    let input = CreateExerciseInput {
        name: body.name,
        reps: body.reps,
        weight: body.weight,
        unit: body.unit,
        date: body.date,
    };

    let exercise = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(exercise))))
}

/// GET /exercises/{id}
pub async fn get_exercise<R>(
    State(state): State<ExercisesAppState<R>>,
    Path(id): Path<String>,
) -> ExerciseResult<Json<ExerciseResponse>>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_exercise_id(&id)?;

    let use_case = GetExerciseUseCase::new(state.repo.clone());

    let exercise = use_case.execute(id).await?;

    Ok(Json(exercise.into()))
}

/// GET /exercises
pub async fn list_exercises<R>(
    State(state): State<ExercisesAppState<R>>,
    Query(query): Query<ListQuery>,
) -> ExerciseResult<Json<Vec<ExerciseResponse>>>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListExercisesUseCase::new(state.repo.clone(), state.config.clone());

    let exercises = use_case
        .execute(ListExercisesInput { reps: query.reps })
        .await?;

    Ok(Json(exercises.into_iter().map(Into::into).collect()))
}

/// PUT /exercises/{id}
pub async fn replace_exercise<R>(
    State(state): State<ExercisesAppState<R>>,
    Path(id): Path<String>,
    Json(body): Json<ExerciseBody>,
) -> ExerciseResult<Json<ExerciseResponse>>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_exercise_id(&id)?;

    let use_case = ReplaceExerciseUseCase::new(state.repo.clone());

    let input = ReplaceExerciseInput {
        name: body.name,
        reps: body.reps,
        weight: body.weight,
        unit: body.unit,
        date: body.date,
    };

    let exercise = use_case.execute(id, input).await?;

    Ok(Json(exercise.into()))
}

/// DELETE /exercises/{id}
pub async fn delete_exercise<R>(
    State(state): State<ExercisesAppState<R>>,
    Path(id): Path<String>,
) -> ExerciseResult<StatusCode>
where
    R: ExerciseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_exercise_id(&id)?;

    let use_case = DeleteExerciseUseCase::new(state.repo.clone());

    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// A malformed id can never name a record, so it folds into not-found
// instead of getting a distinct status.
fn parse_exercise_id(raw: &str) -> ExerciseResult<ExerciseId> {
    ExerciseId::parse_str(raw).map_err(|_| ExerciseError::NotFound)
}
