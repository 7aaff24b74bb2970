use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use super::routes::AppState;
use crate::models::NutritionTip;

#[derive(Debug, Serialize)]
pub struct NutritionView {
    pub tips: Vec<NutritionTip>,
    pub count: usize,
}

pub fn nutrition_routes(state: AppState) -> Router {
    Router::new().route("/", get(list_nutrition_tips)).with_state(state)
}

pub async fn list_nutrition_tips(State(state): State<AppState>) -> Json<NutritionView> {
    let tips = state.content.get_nutrition_tips().await;

    Json(NutritionView {
        count: tips.len(),
        tips,
    })
}
