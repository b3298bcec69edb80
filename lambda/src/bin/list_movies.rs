use lambda_runtime::{Error, run, service_fn};
use movies::api::list_movies::function_handler;
use movies::core::config::AppConfig;
use movies::store::DynamoMovieStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    movies::setup_logging();

    let config = AppConfig::from_env()?;
    let shared = aws_config::load_from_env().await;
    let store = DynamoMovieStore::new(&shared, &config);

    let store = &store;
    run(service_fn(move |event| async move {
        function_handler(store, event).await
    }))
    .await
}
