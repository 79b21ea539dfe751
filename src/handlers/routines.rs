use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{CreateExerciseRow, CreateRoutine, UpdateExerciseRow, UpdateRoutine};
use crate::repositories::RoutineRepository;

#[derive(Clone)]
pub struct RoutinesState {
    pub routine_repo: RoutineRepository,
}

pub async fn list(State(state): State<RoutinesState>) -> Result<Response> {
    let routines = state.routine_repo.find_all().await;
    Ok(Json(routines).into_response())
}

pub async fn create(
    State(state): State<RoutinesState>,
    Json(payload): Json<CreateRoutine>,
) -> Result<Response> {
    let routine = state.routine_repo.create(payload).await;
    tracing::info!("Created routine {}", routine.id);

    Ok((StatusCode::CREATED, Json(routine)).into_response())
}

pub async fn show(
    State(state): State<RoutinesState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let routine = state
        .routine_repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;

    Ok(Json(routine).into_response())
}

pub async fn update(
    State(state): State<RoutinesState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoutine>,
) -> Result<Response> {
    let routine = state.routine_repo.update_info(&id, payload).await?;
    Ok(Json(routine).into_response())
}

pub async fn add_row(
    State(state): State<RoutinesState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateExerciseRow>,
) -> Result<Response> {
    let row = state.routine_repo.add_row(&id, payload).await?;
    Ok((StatusCode::CREATED, Json(row)).into_response())
}

pub async fn update_row(
    State(state): State<RoutinesState>,
    Path((id, row_id)): Path<(String, String)>,
    Json(payload): Json<UpdateExerciseRow>,
) -> Result<Response> {
    let row = state.routine_repo.update_row(&id, &row_id, payload).await?;
    Ok(Json(row).into_response())
}

pub async fn delete_row(
    State(state): State<RoutinesState>,
    Path((id, row_id)): Path<(String, String)>,
) -> Result<Response> {
    state.routine_repo.delete_row(&id, &row_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn duplicate_row(
    State(state): State<RoutinesState>,
    Path((id, row_id)): Path<(String, String)>,
) -> Result<Response> {
    let row = state.routine_repo.duplicate_row(&id, &row_id).await?;
    Ok((StatusCode::CREATED, Json(row)).into_response())
}
