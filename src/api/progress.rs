use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{bad_request, ApiError, ApiResult};
use super::routes::AppState;
use crate::models::{ProgressEntry, ProgressForm};
use crate::services::{ChartMetric, ChartView, ProgressChart};

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub metric: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub entries: Vec<ProgressEntry>,
    /// Present only when there is at least one entry.
    pub chart: Option<ChartView>,
}

#[derive(Debug, Serialize)]
pub struct CreateProgressResponse {
    pub success: bool,
    pub entry: Option<ProgressEntry>,
}

pub fn progress_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_progress).post(create_progress))
        .with_state(state)
}

/// Progress history, newest first, with a trend chart for the chosen metric
pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> ApiResult<ProgressView> {
    let metric = match query.metric.as_deref() {
        None | Some("") => ChartMetric::default(),
        Some(raw) => raw
            .parse::<ChartMetric>()
            .map_err(|e| bad_request("invalid_metric", &e))?,
    };

    let entries = state.content.get_progress_entries().await;
    let chart = (!entries.is_empty()).then(|| ProgressChart::build(&entries, metric));

    Ok(Json(ProgressView { entries, chart }))
}

/// Log a new progress entry
pub async fn create_progress(
    State(state): State<AppState>,
    body: Result<Json<ProgressForm>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateProgressResponse>), (StatusCode, Json<ApiError>)> {
    let Json(form) = body.map_err(|rejection| {
        warn!("Rejected progress body: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ApiError::new("invalid_request_body", &rejection.body_text())),
        )
    })?;

    let entry = form.into_new_entry().map_err(|e| {
        warn!("Rejected progress form: {}", e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new("invalid_progress_entry", &e.to_string())),
        )
    })?;

    match state.content.create_progress_entry(entry).await {
        Some(created) => Ok((
            StatusCode::CREATED,
            Json(CreateProgressResponse {
                success: true,
                entry: Some(created),
            }),
        )),
        None => Ok((
            StatusCode::BAD_GATEWAY,
            Json(CreateProgressResponse {
                success: false,
                entry: None,
            }),
        )),
    }
}
