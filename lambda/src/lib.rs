/// Movies - serverless handlers over a DynamoDB movie catalog.
///
/// This crate builds three independent Lambda functions:
/// 1. `list-movies` scans the catalog table and returns every movie
/// 2. `movies-by-year` queries the release-year index
/// 3. `movie-summary` looks a movie up by title and appends a Gemini summary
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda behind API Gateway for serverless execution
/// - DynamoDB secondary indexes for the title and year lookups
/// - Gemini `generateContent` for the summary text
/// - Tokio for async runtime
///
/// Clients are built once in each binary's `main` and lent to every
/// invocation; handlers only see the `MovieStore` and `SummaryGenerator`
/// traits.
///
/// # Example
///
/// ```no_run
/// use movies::ai::GeminiClient;
/// use movies::api::movie_summary::summarize_movie;
/// use movies::core::config::AppConfig;
/// use movies::store::DynamoMovieStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     movies::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let shared = aws_config::load_from_env().await;
///     let store = DynamoMovieStore::new(&shared, &config);
///     let gemini = GeminiClient::from_config(&config, "dummy_key".to_string());
///
///     let event = serde_json::json!({ "pathParameters": { "movieName": "The%20Matrix" } });
///     let enriched = summarize_movie(&store, &gemini, &event).await?;
///     println!("{}", enriched.generated_summary);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod store;

pub use errors::MovieError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of each Lambda binary.
///
/// # Example
///
/// ```
/// movies::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
