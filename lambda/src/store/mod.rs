//! Read-only access to the movie catalog table

pub mod attributes;
pub mod dynamo;

use async_trait::async_trait;

use crate::core::models::MovieRecord;
use crate::errors::MovieError;

pub use dynamo::DynamoMovieStore;

/// Secondary indexes the catalog can be queried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieIndex {
    Title,
    ReleaseYear,
}

impl MovieIndex {
    /// Name of the attribute the index is keyed on.
    #[must_use]
    pub fn key_attribute(self) -> &'static str {
        match self {
            MovieIndex::Title => "title",
            MovieIndex::ReleaseYear => "releaseYear",
        }
    }
}

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns the first page of an unindexed scan over the whole table.
    async fn scan_all(&self) -> Result<Vec<MovieRecord>, MovieError>;

    /// Equality query on a secondary index, in the order the store returns.
    async fn query_by_index(
        &self,
        index: MovieIndex,
        value: &str,
    ) -> Result<Vec<MovieRecord>, MovieError>;
}
