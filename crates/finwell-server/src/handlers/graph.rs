//! Graph retrieval handler

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{AppError, AppState};

/// GET /get-graph/ - Serve the last-rendered spending chart as PNG
///
/// Returns 404 until the first scoring request of the process lifetime
/// has rendered a chart (the legacy service answered 200 with a JSON
/// error body here).
pub async fn get_graph(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let artifact = state.graphs.latest().ok_or_else(|| {
        AppError::not_found(
            "Graph file not found. Please generate it first using /calculate-financial-score-and-graph/.",
        )
    })?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", artifact.filename),
        ),
    ];

    Ok((headers, artifact.png.clone()).into_response())
}
