use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use super::routes::AppState;
use crate::models::{CommunityContent, CommunityContentType};

const QUOTES_SHOWN: usize = 2;

/// Community posts grouped by kind, each group newest first.
#[derive(Debug, Default, Serialize)]
pub struct CommunityView {
    pub quotes: Vec<CommunityContent>,
    pub tips: Vec<CommunityContent>,
    pub success_stories: Vec<CommunityContent>,
    pub is_empty: bool,
}

impl CommunityView {
    pub fn from_content(content: Vec<CommunityContent>) -> Self {
        let is_empty = content.is_empty();
        let mut view = CommunityView {
            is_empty,
            ..Default::default()
        };

        for item in content {
            match item.metadata.content_type {
                CommunityContentType::Quote => view.quotes.push(item),
                CommunityContentType::Tip => view.tips.push(item),
                CommunityContentType::SuccessStory => view.success_stories.push(item),
            }
        }
        view.quotes.truncate(QUOTES_SHOWN);

        view
    }
}

pub fn community_routes(state: AppState) -> Router {
    Router::new().route("/", get(get_community)).with_state(state)
}

pub async fn get_community(State(state): State<AppState>) -> Json<CommunityView> {
    let content = state.content.get_community_content().await;
    Json(CommunityView::from_content(content))
}
