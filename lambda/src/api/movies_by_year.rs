//! `GET /movies/year/{year}` - movies released in one year.
//!
//! A year with no movies is a 200 with an empty array, not a 404.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::{helpers, parsing};
use crate::core::models::MovieRecord;
use crate::errors::MovieError;
use crate::store::{MovieIndex, MovieStore};

pub const FETCH_FAILED_MESSAGE: &str = "Error fetching movies";

/// Lambda handler for the release-year lookup.
///
/// # Errors
///
/// Never fails at the Lambda level; every failure is shaped into a response.
#[tracing::instrument(
    level = "info",
    skip(store, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    store: &dyn MovieStore,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_movies_by_year(store, &event.payload).await)
}

pub async fn handle_movies_by_year(store: &dyn MovieStore, payload: &Value) -> Value {
    match movies_for_year(store, payload).await {
        Ok(movies) => helpers::ok_json(&movies),
        Err(e) => {
            helpers::log_failure("Error fetching movies by year", &e);
            helpers::parameter_error_response(&e)
                .unwrap_or_else(|| helpers::error_response(500, FETCH_FAILED_MESSAGE))
        }
    }
}

async fn movies_for_year(
    store: &dyn MovieStore,
    payload: &Value,
) -> Result<Vec<MovieRecord>, MovieError> {
    let year = parsing::path_param(payload, parsing::YEAR_PARAM)?;
    let movies = store.query_by_index(MovieIndex::ReleaseYear, &year).await?;
    info!(year = %year, count = movies.len(), "Found movies for year");
    Ok(movies)
}
