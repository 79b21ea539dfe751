use axum::{extract::State, Json};
use serde::Serialize;

use crate::repositories::ClientRepository;

#[derive(Clone)]
pub struct DashboardState {
    pub client_repo: ClientRepository,
}

#[derive(Serialize)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub routines_sent: u32,
    pub active_programs: usize,
}

pub async fn index(State(state): State<DashboardState>) -> Json<DashboardStats> {
    let total_clients = state.client_repo.count().await;
    let routines_sent = state.client_repo.total_routines_sent().await;
    let active_programs = state.client_repo.count_active_programs().await;

    Json(DashboardStats {
        total_clients,
        routines_sent,
        active_programs,
    })
}
