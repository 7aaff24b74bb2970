use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use super::routes::AppState;
use crate::models::{CommunityContent, Program, Workout};

const FEATURED_WORKOUTS: usize = 3;
const FEATURED_PROGRAMS: usize = 2;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub featured_workouts: Vec<Workout>,
    pub featured_programs: Vec<Program>,
    pub featured_community: Option<CommunityContent>,
    pub workout_count: usize,
    pub program_count: usize,
}

pub fn home_routes(state: AppState) -> Router {
    Router::new().route("/", get(get_home)).with_state(state)
}

/// Featured content for the landing page
pub async fn get_home(State(state): State<AppState>) -> Json<HomeView> {
    // All three lookups run together; the view waits for every one of them.
    let (workouts, programs, community) = tokio::join!(
        state.content.get_workouts(),
        state.content.get_programs(),
        state.content.get_community_content()
    );

    Json(HomeView {
        workout_count: workouts.len(),
        program_count: programs.len(),
        featured_workouts: workouts.into_iter().take(FEATURED_WORKOUTS).collect(),
        featured_programs: programs.into_iter().take(FEATURED_PROGRAMS).collect(),
        featured_community: community.into_iter().next(),
    })
}
