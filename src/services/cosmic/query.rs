use serde_json::{Map, Value};

use crate::models::ContentType;

/// Fields returned by catalog list queries.
pub const LIST_PROPS: &[&str] = &["id", "title", "slug", "metadata", "created_at"];

/// A query against the objects endpoint of a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQuery {
    content_type: ContentType,
    filters: Vec<(String, String)>,
    slug: Option<String>,
    props: Vec<String>,
    depth: Option<u8>,
    limit: Option<u32>,
}

impl ObjectQuery {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            filters: Vec::new(),
            slug: None,
            props: Vec::new(),
            depth: None,
            limit: None,
        }
    }

    /// Equality filter on a metadata field, e.g. `metadata("workout_type", "yoga")`.
    pub fn metadata(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push((format!("metadata.{}", field), value.into()));
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// How many levels of related objects Cosmic should expand inline.
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The JSON document sent in the `query` parameter.
    pub fn query_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("type".to_string(), Value::String(self.content_type.as_str().to_string()));
        if let Some(slug) = &self.slug {
            doc.insert("slug".to_string(), Value::String(slug.clone()));
        }
        for (field, value) in &self.filters {
            doc.insert(field.clone(), Value::String(value.clone()));
        }
        Value::Object(doc)
    }

    /// Query-string parameters, excluding credentials.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", self.query_document().to_string())];
        if !self.props.is_empty() {
            params.push(("props", self.props.join(",")));
        }
        if let Some(depth) = self.depth {
            params.push(("depth", depth.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filtered_query_params() {
        let query = ObjectQuery::new(ContentType::Workouts)
            .metadata("workout_type", "yoga")
            .props(LIST_PROPS)
            .depth(1);

        assert_eq!(
            query.query_document(),
            json!({ "type": "workouts", "metadata.workout_type": "yoga" })
        );

        let params = query.to_params();
        assert_eq!(params[1], ("props", "id,title,slug,metadata,created_at".to_string()));
        assert_eq!(params[2], ("depth", "1".to_string()));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_slug_query() {
        let query = ObjectQuery::new(ContentType::Programs).slug("strong-in-six").limit(1);
        assert_eq!(
            query.query_document(),
            json!({ "type": "programs", "slug": "strong-in-six" })
        );
        assert!(query.to_params().contains(&("limit", "1".to_string())));
    }
}
