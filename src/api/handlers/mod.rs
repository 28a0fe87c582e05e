use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::content;
use crate::error::LogbookError;
use crate::models::*;
use crate::render;

// ============================================================
// Error Handling
// ============================================================

/// Map a logbook error to a response.
///
/// Selection and lookup errors are returned to the client as-is. Read
/// faults are logged in full and reported as a generic server error so
/// local paths don't leak.
fn error_response(e: LogbookError) -> (StatusCode, String) {
    match e {
        LogbookError::InvalidSelection(_) => {
            tracing::warn!("Rejected selection: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        LogbookError::UnknownPhase(_) => (StatusCode::NOT_FOUND, e.to_string()),
        LogbookError::FileNotFound(ref path) => {
            tracing::warn!("{}", e);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (StatusCode::NOT_FOUND, format!("File not found: {}", name))
        }
        LogbookError::ReadError { .. } => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn phase_from_slug(slug: &str) -> Result<Phase, (StatusCode, String)> {
    Phase::from_slug(slug).ok_or_else(|| error_response(LogbookError::UnknownPhase(slug.to_string())))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Menu label to select before rendering.
    pub phase: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut nav = state.navigator();
    if let Some(label) = query.phase {
        nav.select(&label).map_err(error_response)?;
    }
    Ok(Html(render::html::page(&nav, state.assets())))
}

pub async fn phase_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let phase = phase_from_slug(&slug)?;
    let mut nav = state.navigator();
    nav.select_phase(phase);
    Ok(Html(render::html::page(&nav, state.assets())))
}

// ============================================================
// Downloads
// ============================================================

pub async fn download_asset(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let payload = state.assets().find(&file_name).map_err(error_response)?;
    tracing::info!(file = payload.file_name, size = payload.bytes.len(), "Serving download");

    let disposition = format!("attachment; filename=\"{}\"", payload.file_name);
    let mut response = (
        [
            (header::CONTENT_TYPE, payload.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload.bytes,
    )
        .into_response();

    if let Some(modified) = payload.modified {
        let stamp = modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        if let Ok(value) = HeaderValue::from_str(&stamp) {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
    }

    Ok(response)
}

// ============================================================
// Phases
// ============================================================

pub async fn list_phases() -> Json<Vec<PhaseSummary>> {
    Json(Phase::ALL.into_iter().map(PhaseSummary::from).collect())
}

pub async fn get_phase(Path(slug): Path<String>) -> Result<Json<PhaseContent>, (StatusCode, String)> {
    let phase = phase_from_slug(&slug)?;
    Ok(Json(PhaseContent {
        phase: phase.into(),
        blocks: content::blocks(phase),
    }))
}

// ============================================================
// Selection
// ============================================================

pub async fn get_selection(State(state): State<AppState>) -> Json<PhaseSummary> {
    Json(state.navigator().current().into())
}

pub async fn update_selection(
    State(state): State<AppState>,
    Json(input): Json<SelectionInput>,
) -> Result<Json<PhaseSummary>, (StatusCode, String)> {
    state
        .navigator()
        .select(&input.label)
        .map(|phase| Json(phase.into()))
        .map_err(error_response)
}
