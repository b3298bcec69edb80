//! `GET /movies/{movieName}/summary` - one movie plus a generated summary.
//!
//! Flow: decode the title, query the title index, take the first match,
//! ask the model for a summary and return the record with it appended.
//! Any failure after validation aborts the request; a bare record is
//! never returned in place of an enriched one.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::{helpers, parsing};
use crate::ai::SummaryGenerator;
use crate::core::models::EnrichedMovieRecord;
use crate::errors::MovieError;
use crate::prompt::summary_prompt;
use crate::store::{MovieIndex, MovieStore};

pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Lambda handler for the summary endpoint.
///
/// # Errors
///
/// Never fails at the Lambda level; every failure is shaped into a response.
#[tracing::instrument(
    level = "info",
    skip(store, generator, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    store: &dyn MovieStore,
    generator: &dyn SummaryGenerator,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_movie_summary(store, generator, &event.payload).await)
}

pub async fn handle_movie_summary(
    store: &dyn MovieStore,
    generator: &dyn SummaryGenerator,
    payload: &Value,
) -> Value {
    match summarize_movie(store, generator, payload).await {
        Ok(enriched) => helpers::ok_json(&enriched),
        Err(e) => {
            helpers::log_failure("Error generating summary", &e);
            helpers::parameter_error_response(&e).unwrap_or_else(|| match &e {
                MovieError::NotFound(_) => helpers::message_response(404, NOT_FOUND_MESSAGE),
                _ => helpers::message_response(500, helpers::INTERNAL_ERROR_MESSAGE),
            })
        }
    }
}

/// Looks up the first movie with the requested title and enriches it.
///
/// # Errors
///
/// Propagates parameter, store and generation errors; `NotFound` when the
/// title index has no match.
pub async fn summarize_movie(
    store: &dyn MovieStore,
    generator: &dyn SummaryGenerator,
    payload: &Value,
) -> Result<EnrichedMovieRecord, MovieError> {
    let requested = parsing::path_param(payload, parsing::MOVIE_NAME_PARAM)?;

    let movie = store
        .query_by_index(MovieIndex::Title, &requested)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| MovieError::NotFound(requested.clone()))?;

    let release_year = movie.release_year.as_ref().map(ToString::to_string);
    let prompt = summary_prompt(
        movie.title.as_deref().unwrap_or(&requested),
        release_year.as_deref(),
    );

    let summary = generator.generate(&prompt).await?;
    info!(title = %requested, summary_len = summary.len(), "Generated movie summary");

    Ok(EnrichedMovieRecord::new(movie, summary))
}
