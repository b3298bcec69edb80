use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use super::config::AppConfig;
use crate::errors::MovieError;

/// Resolves the Gemini credential: `API_KEY` first, then the SSM parameter
/// named by `API_KEY_PARAMETER`.
///
/// # Errors
///
/// Returns an error if neither source is configured, or if the SSM lookup
/// fails or yields no value.
pub async fn resolve_api_key(
    config: &AppConfig,
    ssm: &SsmClient,
) -> Result<String, MovieError> {
    if let Some(key) = &config.api_key {
        return Ok(key.clone());
    }

    let Some(name) = &config.api_key_parameter else {
        return Err(MovieError::Config(
            "API_KEY or API_KEY_PARAMETER must be set".to_string(),
        ));
    };

    info!(parameter = %name, "Loading Gemini API key from SSM");

    let resp = ssm
        .get_parameter()
        .name(name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| MovieError::Config(format!("ssm get_parameter {name}: {e}")))?;

    resp.parameter
        .and_then(|p| p.value)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| MovieError::Config(format!("ssm parameter {name} has no value")))
}
