use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CosmicConfig;
use crate::models::{CosmicObject, NewObject, ObjectResponse, ObjectsResponse};

mod error;
mod query;

pub use error::CosmicError;
pub use query::{ObjectQuery, LIST_PROPS};

/// Client for the Cosmic bucket objects API.
///
/// Reads authenticate with the bucket read key as a query parameter, writes
/// with the write key as a bearer token. Every call is a single request: no
/// retries, no pagination.
#[derive(Clone)]
pub struct CosmicClient {
    client: Client,
    config: CosmicConfig,
}

impl CosmicClient {
    pub fn new(config: CosmicConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch every object matching the query.
    pub async fn find<M: DeserializeOwned>(
        &self,
        query: &ObjectQuery,
    ) -> Result<Vec<CosmicObject<M>>, CosmicError> {
        let url = self.config.objects_url();
        let mut params = query.to_params();
        params.push(("read_key", self.config.read_key.clone()));

        debug!("Querying {} objects: {}", query.content_type(), query.query_document());

        let response = self.client.get(&url).query(&params).send().await?;
        let body = Self::success_body(response).await?;
        let parsed: ObjectsResponse = serde_json::from_str(&body)?;
        let objects = decode_objects(parsed.objects, query);

        debug!(
            "Received {} of {} {} objects",
            objects.len(),
            parsed.total,
            query.content_type()
        );
        Ok(objects)
    }

    /// Fetch the first object matching the query. An empty result is `NotFound`.
    pub async fn find_one<M: DeserializeOwned>(
        &self,
        query: &ObjectQuery,
    ) -> Result<CosmicObject<M>, CosmicError> {
        let query = query.clone().limit(1);
        self.find(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CosmicError::NotFound(format!("No {} object matched", query.content_type())))
    }

    /// Create a single object and return it as stored.
    pub async fn insert_one<M, N>(&self, object: &NewObject<N>) -> Result<CosmicObject<M>, CosmicError>
    where
        M: DeserializeOwned,
        N: Serialize,
    {
        let url = self.config.objects_url();

        debug!("Inserting {} object '{}'", object.object_type, object.title);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.write_key)
            .json(object)
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        let parsed: ObjectResponse<M> = serde_json::from_str(&body)?;

        Ok(parsed.object)
    }

    async fn success_body(response: Response) -> Result<String, CosmicError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CosmicError::from_status(status, error_text))
        }
    }
}

/// Decode each object on its own; records that do not fit the schema are logged and skipped.
fn decode_objects<M: DeserializeOwned>(values: Vec<Value>, query: &ObjectQuery) -> Vec<CosmicObject<M>> {
    values
        .into_iter()
        .filter_map(|value| {
            let id = value.get("id").and_then(Value::as_str).unwrap_or("<unknown>").to_string();
            match serde_json::from_value(value) {
                Ok(object) => Some(object),
                Err(e) => {
                    warn!("Skipping {} object {}: {}", query.content_type(), id, e);
                    None
                }
            }
        })
        .collect()
}
