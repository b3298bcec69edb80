//! DynamoDB-backed movie store.
//!
//! Table layout:
//! - `title-index`: GSI keyed on `title` (String)
//! - `releaseYear-index`: GSI keyed on `releaseYear` (String)

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::attributes::item_to_movie;
use super::{MovieIndex, MovieStore};
use crate::core::config::AppConfig;
use crate::core::models::MovieRecord;
use crate::errors::MovieError;

pub struct DynamoMovieStore {
    client: Client,
    table_name: String,
    title_index: String,
    release_year_index: String,
}

impl DynamoMovieStore {
    /// Builds the store from the shared SDK config, honouring the optional
    /// endpoint override for local DynamoDB.
    #[must_use]
    pub fn new(shared: &SdkConfig, config: &AppConfig) -> Self {
        let client = if let Some(endpoint) = &config.dynamodb_endpoint {
            let dynamo_config = aws_sdk_dynamodb::config::Builder::from(shared)
                .endpoint_url(endpoint)
                .build();
            Client::from_conf(dynamo_config)
        } else {
            Client::new(shared)
        };

        info!(table = %config.table_name, "Configured DynamoDB movie store");

        Self::with_client(client, config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
            title_index: config.title_index.clone(),
            release_year_index: config.release_year_index.clone(),
        }
    }

    fn index_name(&self, index: MovieIndex) -> &str {
        match index {
            MovieIndex::Title => &self.title_index,
            MovieIndex::ReleaseYear => &self.release_year_index,
        }
    }
}

fn decode_items(
    items: Option<Vec<HashMap<String, AttributeValue>>>,
) -> Result<Vec<MovieRecord>, MovieError> {
    items
        .unwrap_or_default()
        .iter()
        .map(item_to_movie)
        .collect()
}

#[async_trait]
impl MovieStore for DynamoMovieStore {
    async fn scan_all(&self) -> Result<Vec<MovieRecord>, MovieError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| {
                MovieError::StoreUnavailable(format!("DynamoDB scan failed: {e}"))
            })?;

        let truncated = output.last_evaluated_key.is_some();
        let movies = decode_items(output.items)?;

        if truncated {
            // Only the first page is served; later pages are never fetched.
            warn!(
                table = %self.table_name,
                returned = movies.len(),
                "Scan result truncated to first page"
            );
        }

        debug!(table = %self.table_name, count = movies.len(), "Scanned movies");
        Ok(movies)
    }

    async fn query_by_index(
        &self,
        index: MovieIndex,
        value: &str,
    ) -> Result<Vec<MovieRecord>, MovieError> {
        let index_name = self.index_name(index);

        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index_name)
            .key_condition_expression("#key = :value")
            .expression_attribute_names("#key", index.key_attribute())
            .expression_attribute_values(":value", AttributeValue::S(value.to_string()))
            .send()
            .await
            .map_err(|e| {
                MovieError::StoreUnavailable(format!(
                    "DynamoDB query on {index_name} failed: {e}"
                ))
            })?;

        let movies = decode_items(output.items)?;
        debug!(
            index = %index_name,
            count = movies.len(),
            "Queried movies by index"
        );
        Ok(movies)
    }
}
