use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::export::{self, ExportTarget};
use crate::repositories::RoutineRepository;

#[derive(Clone)]
pub struct ExportsState {
    pub routine_repo: RoutineRepository,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: String,
}

/// Serves a routine's export as an attachment download.
pub async fn download(
    State(state): State<ExportsState>,
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response> {
    let routine = state
        .routine_repo
        .find_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;

    let target: ExportTarget = query.format.parse()?;
    let download = export::export(target, &routine.rows, &routine.title);

    tracing::info!(
        "Exporting routine {} as {} ({} rows)",
        routine.id,
        target,
        routine.rows.len()
    );

    let content_type = HeaderValue::from_static(download.content_type);
    let disposition =
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", download.filename))
            .map_err(|e| AppError::DownloadSinkUnavailable(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.body,
    )
        .into_response())
}
