use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::CreateClient;
use crate::repositories::ClientRepository;

#[derive(Clone)]
pub struct ClientsState {
    pub client_repo: ClientRepository,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

pub async fn list(
    State(state): State<ClientsState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let clients = match query.q.as_deref() {
        Some(term) if !term.is_empty() => state.client_repo.search(term).await,
        _ => state.client_repo.find_all().await,
    };

    Ok(Json(clients).into_response())
}

pub async fn create(
    State(state): State<ClientsState>,
    Json(payload): Json<CreateClient>,
) -> Result<Response> {
    if payload.name.trim().is_empty() {
        return Err(AppError::MissingRequiredField("name"));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::MissingRequiredField("email"));
    }

    let client = state.client_repo.create(payload).await;
    tracing::info!("Created client {}", client.id);

    Ok((StatusCode::CREATED, Json(client)).into_response())
}
