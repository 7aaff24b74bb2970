use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use super::error::{bad_request, not_found, ApiResult};
use super::routes::AppState;
use crate::models::{Workout, WorkoutFilter};

#[derive(Debug, Default, Deserialize)]
pub struct WorkoutQuery {
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutListView {
    pub workouts: Vec<Workout>,
    pub count: usize,
}

pub fn workout_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_workouts))
        .route("/:slug", get(get_workout))
        .with_state(state)
}

/// List workouts, optionally narrowed by type, difficulty and duration
pub async fn list_workouts(
    State(state): State<AppState>,
    Query(query): Query<WorkoutQuery>,
) -> ApiResult<WorkoutListView> {
    let filter = WorkoutFilter::from_params(
        query.workout_type.as_deref(),
        query.difficulty.as_deref(),
        query.duration.as_deref(),
    )
    .map_err(|e| bad_request("invalid_filter", &e))?;

    // The type filter is pushed down to Cosmic; the rest is applied locally.
    let workouts = match filter.workout_type {
        Some(workout_type) => state.content.get_workouts_by_type(workout_type).await,
        None => state.content.get_workouts().await,
    };
    let workouts = filter.apply(workouts);

    Ok(Json(WorkoutListView {
        count: workouts.len(),
        workouts,
    }))
}

/// Get a single workout by slug
pub async fn get_workout(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Workout> {
    state
        .content
        .get_workout_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| not_found("workout_not_found", &format!("No workout with slug '{}'", slug)))
}
