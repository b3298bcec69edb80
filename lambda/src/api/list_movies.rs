//! `GET /movies` - returns every movie in the catalog.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::helpers;
use crate::store::MovieStore;

pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch movies";

/// Lambda handler for the movie listing.
///
/// # Errors
///
/// Never fails at the Lambda level; store failures become a 500 response.
#[tracing::instrument(
    level = "info",
    skip(store, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    store: &dyn MovieStore,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_list_movies(store).await)
}

pub async fn handle_list_movies(store: &dyn MovieStore) -> Value {
    match store.scan_all().await {
        Ok(movies) => {
            info!(count = movies.len(), "Listed movies");
            helpers::ok_json(&movies)
        }
        Err(e) => {
            helpers::log_failure("Error fetching movies", &e);
            helpers::error_response(500, FETCH_FAILED_MESSAGE)
        }
    }
}
