use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.cosmicjs.com/v3";

/// Connection settings for the Cosmic bucket that holds all content.
#[derive(Debug, Clone)]
pub struct CosmicConfig {
    pub bucket_slug: String,
    pub read_key: String,
    pub write_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl CosmicConfig {
    pub fn new(bucket_slug: impl Into<String>, read_key: impl Into<String>, write_key: impl Into<String>) -> Self {
        Self {
            bucket_slug: bucket_slug.into(),
            read_key: read_key.into(),
            write_key: write_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Point the client at a different API root (used for staging buckets and tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Result<Self> {
        let bucket_slug = env::var("COSMIC_BUCKET_SLUG").context("COSMIC_BUCKET_SLUG must be set")?;
        let read_key = env::var("COSMIC_READ_KEY").context("COSMIC_READ_KEY must be set")?;
        // Reads still work without a write key; inserts will be rejected by the API.
        let write_key = env::var("COSMIC_WRITE_KEY").unwrap_or_default();
        let api_url = env::var("COSMIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs: u64 = env::var("COSMIC_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("COSMIC_TIMEOUT_SECONDS must be a whole number of seconds")?;

        let mut config = Self::new(bucket_slug, read_key, write_key).with_api_url(api_url);
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }

    pub fn objects_url(&self) -> String {
        format!("{}/buckets/{}/objects", self.api_url, self.bucket_slug)
    }

    pub fn has_write_key(&self) -> bool {
        !self.write_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_url() {
        let config = CosmicConfig::new("fitgirl-bucket", "read", "write");
        assert_eq!(
            config.objects_url(),
            "https://api.cosmicjs.com/v3/buckets/fitgirl-bucket/objects"
        );
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let config = CosmicConfig::new("b", "r", "").with_api_url("http://127.0.0.1:1234/");
        assert_eq!(config.objects_url(), "http://127.0.0.1:1234/buckets/b/objects");
        assert!(!config.has_write_key());
    }
}
