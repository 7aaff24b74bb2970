// Shared helpers: a mock Cosmic bucket and record fixtures
#![allow(dead_code)]

use fitgirl::config::CosmicConfig;
use fitgirl::services::{ContentService, CosmicClient};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use std::sync::Once;

pub const BUCKET: &str = "fitgirl-test";
pub const READ_KEY: &str = "test-read-key";
pub const WRITE_KEY: &str = "test-write-key";
pub const OBJECTS_PATH: &str = "/buckets/fitgirl-test/objects";

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// A mockito server standing in for the Cosmic API.
pub struct MockCosmic {
    pub server: ServerGuard,
}

impl MockCosmic {
    pub async fn start() -> Self {
        init_test_logging();
        Self {
            server: mockito::Server::new_async().await,
        }
    }

    pub fn config(&self) -> CosmicConfig {
        CosmicConfig::new(BUCKET, READ_KEY, WRITE_KEY).with_api_url(self.server.url())
    }

    pub fn content_service(&self) -> ContentService {
        ContentService::new(CosmicClient::new(self.config()).unwrap())
    }

    /// Answer list queries whose `query` document equals `query`.
    pub async fn objects(&mut self, query: Value, status: usize, body: Value) -> Mock {
        self.server
            .mock("GET", OBJECTS_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), query.to_string()),
                Matcher::UrlEncoded("read_key".into(), READ_KEY.into()),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Answer every read with the same status and body.
    pub async fn any_read(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", OBJECTS_PATH)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn not_found_body() -> Value {
    json!({ "message": "No objects found", "status": 404 })
}

pub fn list(objects: Vec<Value>) -> Value {
    let total = objects.len();
    json!({ "objects": objects, "total": total, "limit": 1000, "skip": 0 })
}

pub fn workout(slug: &str, workout_type: &str, duration: u32) -> Value {
    json!({
        "id": format!("id-{}", slug),
        "slug": slug,
        "title": slug.replace('-', " "),
        "metadata": {
            "workout_type": workout_type,
            "duration": duration,
            "difficulty_level": "beginner",
            "body_part_focus": ["core"],
            "description": "A workout."
        },
        "created_at": "2024-01-05T09:00:00.000Z"
    })
}

pub fn program(slug: &str) -> Value {
    json!({
        "id": format!("id-{}", slug),
        "slug": slug,
        "title": slug.replace('-', " "),
        "metadata": {
            "goal": "toning",
            "duration_weeks": 4,
            "difficulty_level": "intermediate",
            "description": "A program.",
            "schedule": []
        },
        "created_at": "2024-01-06T09:00:00.000Z"
    })
}

pub fn nutrition_tip(slug: &str) -> Value {
    json!({
        "id": format!("id-{}", slug),
        "slug": slug,
        "title": slug.replace('-', " "),
        "metadata": {
            "meal_idea": "Overnight oats with berries",
            "calories": 320,
            "macros": { "protein": 18, "carbs": 45, "fat": 8 },
            "servings": 1,
            "meal_type": "breakfast"
        },
        "created_at": "2024-01-07T09:00:00.000Z"
    })
}

pub fn community(slug: &str, kind: &str, created_at: &str) -> Value {
    json!({
        "id": format!("id-{}", slug),
        "slug": slug,
        "title": slug.replace('-', " "),
        "content": "<p>Keep going!</p>",
        "metadata": { "content_type": kind, "is_featured": false },
        "created_at": created_at
    })
}

pub fn progress(id: &str, date: &str, weight: Option<f64>, energy: Option<u8>) -> Value {
    let mut metadata = json!({ "date": date, "completed_workouts": [] });
    if let Some(weight) = weight {
        metadata["weight"] = json!(weight);
    }
    if let Some(energy) = energy {
        metadata["energy_level"] = json!(energy);
    }
    json!({
        "id": id,
        "title": format!("Progress - {}", date),
        "metadata": metadata,
        "created_at": "2024-03-01T12:00:00.000Z"
    })
}
