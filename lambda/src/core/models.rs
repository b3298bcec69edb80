use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// JSON key the generated text is stored under in an enriched record.
pub const GENERATED_SUMMARY_FIELD: &str = "generatedSummary";

/// Release year as stored: tables written by different tools hold it either
/// as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Number(n) => write!(f, "{n}"),
            ReleaseYear::Text(s) => f.write_str(s),
        }
    }
}

/// A movie item as read from the catalog table.
///
/// Only `title` and `releaseYear` are interpreted; everything else rides
/// along untouched in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "releaseYear",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<ReleaseYear>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A movie record plus a summary produced for this response only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovieRecord {
    #[serde(flatten)]
    pub movie: MovieRecord,
    #[serde(rename = "generatedSummary")]
    pub generated_summary: String,
}

impl EnrichedMovieRecord {
    /// A stored `generatedSummary` attribute is replaced by the fresh one.
    #[must_use]
    pub fn new(mut movie: MovieRecord, generated_summary: String) -> Self {
        movie.attributes.remove(GENERATED_SUMMARY_FIELD);
        Self {
            movie,
            generated_summary,
        }
    }

    #[must_use]
    pub fn into_movie(self) -> MovieRecord {
        self.movie
    }
}
