use serde::{Deserialize, Serialize};

use super::cosmic::{CosmicObject, ImageAsset};

pub type CommunityContent = CosmicObject<CommunityMetadata>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunityContentType {
    Quote,
    Tip,
    SuccessStory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityMetadata {
    pub content_type: CommunityContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<ImageAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: bool,
}
