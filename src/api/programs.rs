use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;

use super::error::{not_found, ApiResult};
use super::routes::AppState;
use crate::models::Program;

#[derive(Debug, Serialize)]
pub struct ProgramListView {
    pub programs: Vec<Program>,
    pub count: usize,
}

pub fn program_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_programs))
        .route("/:slug", get(get_program))
        .with_state(state)
}

pub async fn list_programs(State(state): State<AppState>) -> Json<ProgramListView> {
    let programs = state.content.get_programs().await;

    Json(ProgramListView {
        count: programs.len(),
        programs,
    })
}

pub async fn get_program(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Program> {
    state
        .content
        .get_program_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| not_found("program_not_found", &format!("No program with slug '{}'", slug)))
}
