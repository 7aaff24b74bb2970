use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content types defined in the Cosmic bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Workouts,
    Programs,
    NutritionTips,
    Progress,
    Community,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Workouts => "workouts",
            ContentType::Programs => "programs",
            ContentType::NutritionTips => "nutrition-tips",
            ContentType::Progress => "progress",
            ContentType::Community => "community",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as stored in Cosmic, generic over its metadata schema.
///
/// Fields the query projected away (`slug` on progress entries, `type` and
/// `modified_at` on most list queries) fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicObject<M> {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    pub metadata: M,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl<M> CosmicObject<M> {
    /// True when the record carries the given type tag. Projected-away tags never match.
    pub fn is_type(&self, content_type: ContentType) -> bool {
        self.object_type.as_deref() == Some(content_type.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    pub imgix_url: String,
}

/// Envelope returned by list queries. Objects stay raw so each one can be decoded separately.
#[derive(Debug, Deserialize)]
pub struct ObjectsResponse {
    #[serde(default)]
    pub objects: Vec<serde_json::Value>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
}

/// Envelope returned by single-object endpoints such as insert.
#[derive(Debug, Deserialize)]
pub struct ObjectResponse<M> {
    pub object: CosmicObject<M>,
}

/// Payload for creating an object.
#[derive(Debug, Clone, Serialize)]
pub struct NewObject<M> {
    #[serde(rename = "type")]
    pub object_type: ContentType,
    pub title: String,
    pub metadata: M,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_slugs() {
        assert_eq!(ContentType::NutritionTips.as_str(), "nutrition-tips");
        assert_eq!(
            serde_json::to_value(ContentType::NutritionTips).unwrap(),
            json!("nutrition-tips")
        );
        assert_eq!(ContentType::Community.to_string(), "community");
    }

    #[test]
    fn test_projected_object_defaults() {
        let object: CosmicObject<serde_json::Value> = serde_json::from_value(json!({
            "id": "65a1",
            "title": "Progress - 2024-03-01",
            "metadata": {},
            "created_at": "2024-03-01T08:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(object.slug, "");
        assert!(object.content.is_none());
        assert!(object.modified_at.is_none());
        assert!(!object.is_type(ContentType::Progress));
    }

    #[test]
    fn test_is_type() {
        let object: CosmicObject<serde_json::Value> = serde_json::from_value(json!({
            "id": "65a2",
            "slug": "morning-flow",
            "title": "Morning Flow",
            "type": "workouts",
            "metadata": {},
            "created_at": "2024-03-01T08:00:00Z",
            "modified_at": "2024-03-02T08:00:00Z"
        }))
        .unwrap();

        assert!(object.is_type(ContentType::Workouts));
        assert!(!object.is_type(ContentType::Programs));
    }
}
