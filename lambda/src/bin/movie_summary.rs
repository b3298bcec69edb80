// Lambda entry point for the summary function. The Gemini key is resolved
// once at cold start so a missing credential fails the init phase.

use lambda_runtime::{Error, run, service_fn};
use movies::ai::GeminiClient;
use movies::api::movie_summary::function_handler;
use movies::core::config::AppConfig;
use movies::core::secrets::resolve_api_key;
use movies::store::DynamoMovieStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    movies::setup_logging();

    let config = AppConfig::from_env()?;
    let shared = aws_config::load_from_env().await;

    let ssm = aws_sdk_ssm::Client::new(&shared);
    let api_key = resolve_api_key(&config, &ssm).await.map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let store = DynamoMovieStore::new(&shared, &config);
    let gemini = GeminiClient::from_config(&config, api_key);
    info!(model = %gemini.model_name(), "Summary function initialised");

    let (store, gemini) = (&store, &gemini);
    run(service_fn(move |event| async move {
        function_handler(store, gemini, event).await
    }))
    .await
}
