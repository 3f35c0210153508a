//! Scoring handler

use std::sync::Arc;

use axum::{extract::State, Json};
use base64::Engine;
use serde::Serialize;
use tracing::info;

use crate::{AppError, AppState};
use finwell_core::{
    render_spending_chart, score, ChartArtifact, Error, FinancialProfile, ScoreBreakdown,
};

/// Response envelope for the scoring endpoint, using the legacy key names.
#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(rename = "Financial Data")]
    pub financial_data: ScoreBreakdown,
    /// Chart as a data URI carrying the real base64-encoded PNG bytes
    /// (the legacy service put a base64-labeled filename string here)
    #[serde(rename = "Graph")]
    pub graph: String,
}

/// POST /calculate-financial-score-and-graph/ - Score a profile and render its chart
///
/// Malformed or missing body fields are rejected by the `Json` extractor
/// with 422; a non-positive income is rejected here with 400.
pub async fn calculate_score_and_graph(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<FinancialProfile>,
) -> Result<Json<ScoreResponse>, AppError> {
    let breakdown = score(&profile).map_err(|err| match err {
        Error::InvalidInput(msg) => AppError::bad_request(&msg),
        other => AppError::from(other),
    })?;

    let png = render_spending_chart(&profile.category_distribution)?;
    let graph = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&png)
    );

    // Overwrite the shared slot; GET /get-graph/ serves this render until
    // the next scoring request lands
    state.graphs.put(ChartArtifact::new(png));

    info!(
        total = breakdown.total_score,
        categories = profile.category_distribution.len(),
        "scored profile"
    );

    Ok(Json(ScoreResponse {
        financial_data: breakdown,
        graph,
    }))
}
