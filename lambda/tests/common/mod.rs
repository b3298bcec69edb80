#![allow(dead_code)]

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;
use movies::MovieError;
use movies::ai::SummaryGenerator;
use movies::core::models::MovieRecord;
use movies::store::{MovieIndex, MovieStore};
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory catalog that records every call made against it.
pub struct FakeStore {
    movies: Vec<MovieRecord>,
    fail: bool,
    scans: AtomicUsize,
    queries: Mutex<Vec<(MovieIndex, String)>>,
}

impl FakeStore {
    pub fn with_movies(movies: Vec<Value>) -> Self {
        Self {
            movies: movies
                .into_iter()
                .map(|v| serde_json::from_value(v).unwrap())
                .collect(),
            fail: false,
            scans: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        let mut store = Self::with_movies(Vec::new());
        store.fail = true;
        store
    }

    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn total_calls(&self) -> usize {
        self.scan_count() + self.query_count()
    }

    pub fn queries(&self) -> Vec<(MovieIndex, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieStore for FakeStore {
    async fn scan_all(&self) -> Result<Vec<MovieRecord>, MovieError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MovieError::StoreUnavailable(
                "ProvisionedThroughputExceededException: secret-detail".to_string(),
            ));
        }
        Ok(self.movies.clone())
    }

    async fn query_by_index(
        &self,
        index: MovieIndex,
        value: &str,
    ) -> Result<Vec<MovieRecord>, MovieError> {
        self.queries
            .lock()
            .unwrap()
            .push((index, value.to_string()));
        if self.fail {
            return Err(MovieError::StoreUnavailable(
                "AccessDeniedException: secret-detail".to_string(),
            ));
        }
        Ok(self
            .movies
            .iter()
            .filter(|m| match index {
                MovieIndex::Title => m.title.as_deref() == Some(value),
                MovieIndex::ReleaseYear => m
                    .release_year
                    .as_ref()
                    .is_some_and(|y| y.to_string() == value),
            })
            .cloned()
            .collect())
    }
}

/// Generator that answers every prompt with a canned reply.
pub struct FakeGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, MovieError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| {
            MovieError::GenerationFailed("quota exceeded: secret-detail".to_string())
        })
    }
}

pub fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

pub fn content_type(response: &Value) -> Option<&str> {
    response["headers"]["Content-Type"].as_str()
}

/// SDK config with static credentials and no retries, optionally pointed at
/// a local endpoint.
pub async fn local_sdk_config(endpoint: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "tests"))
        .retry_config(RetryConfig::disabled());
    if let Some(endpoint) = endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    loader.load().await
}
