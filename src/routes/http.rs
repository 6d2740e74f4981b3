// GET handlers: version, ranges, chart

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::error::FetchError;
use crate::models::TimeRange;
use crate::version::{NAME, VERSION};

#[derive(Debug, Deserialize)]
pub(super) struct ChartQuery {
    #[serde(default)]
    pub(super) range: TimeRange,
}

/// Upstream fetch failed; the client keeps whatever it showed before.
pub(super) struct NoData(FetchError);

impl IntoResponse for NoData {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "chart fetch failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": "no data available" })),
        )
            .into_response()
    }
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/ranges — selectable ranges and their lookback (null = unbounded).
pub(super) async fn ranges_handler() -> impl IntoResponse {
    let ranges: Vec<_> = TimeRange::ALL
        .iter()
        .map(|r| serde_json::json!({ "range": r, "lookbackHours": r.lookback_hours() }))
        .collect();
    Json(ranges)
}

/// GET /api/servers/{server_id}/chart?range=24h
pub(super) async fn chart_handler(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, NoData> {
    let samples = state
        .queue_repo
        .fetch_samples(&server_id, query.range)
        .await
        .map_err(NoData)?;
    let series = state.zone.aggregate(&samples, &server_id, query.range);
    Ok(Json(series))
}
