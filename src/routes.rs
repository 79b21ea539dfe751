use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{clients, dashboard, exports, health, routines};

pub fn create_router(
    clients_state: clients::ClientsState,
    dashboard_state: dashboard::DashboardState,
    routines_state: routines::RoutinesState,
    exports_state: exports::ExportsState,
) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Dashboard stats
        .route("/dashboard", get(dashboard::index))
        .with_state(dashboard_state)
        // Client routes
        .route("/clients", get(clients::list).post(clients::create))
        .with_state(clients_state)
        // Routine routes
        .route("/routines", get(routines::list).post(routines::create))
        .route("/routines/{id}", get(routines::show).post(routines::update))
        .route("/routines/{id}/rows", post(routines::add_row))
        .route("/routines/{id}/rows/{row_id}", post(routines::update_row))
        .route(
            "/routines/{id}/rows/{row_id}/delete",
            post(routines::delete_row),
        )
        .route(
            "/routines/{id}/rows/{row_id}/duplicate",
            post(routines::duplicate_row),
        )
        .with_state(routines_state)
        // Export downloads
        .route("/routines/{id}/export", get(exports::download))
        .with_state(exports_state)
}
