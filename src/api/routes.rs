use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::community::community_routes;
use super::health::health_check;
use super::home::home_routes;
use super::nutrition::nutrition_routes;
use super::programs::program_routes;
use super::progress::progress_routes;
use super::workouts::workout_routes;
use crate::services::ContentService;

/// Shared by every handler. Cloning is cheap: the HTTP client is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
}

pub fn create_routes(content: ContentService) -> Router {
    let state = AppState { content };

    let api = Router::new()
        .nest("/home", home_routes(state.clone()))
        .nest("/workouts", workout_routes(state.clone()))
        .nest("/programs", program_routes(state.clone()))
        .nest("/nutrition", nutrition_routes(state.clone()))
        .nest("/community", community_routes(state.clone()))
        .nest("/progress", progress_routes(state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
