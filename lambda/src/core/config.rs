use std::env;

use crate::errors::MovieError;

pub const DEFAULT_TABLE_NAME: &str = "movies";
pub const DEFAULT_TITLE_INDEX: &str = "title-index";
pub const DEFAULT_RELEASE_YEAR_INDEX: &str = "releaseYear-index";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub title_index: String,
    pub release_year_index: String,
    pub dynamodb_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub api_key_parameter: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if any variable is set to a blank value.
    pub fn from_env() -> Result<Self, MovieError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MovieError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| -> Result<Option<String>, MovieError> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => {
                    Err(MovieError::Config(format!("{key} must not be blank")))
                }
                other => Ok(other),
            }
        };

        Ok(Self {
            table_name: var("MOVIES_TABLE")?.unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            title_index: var("TITLE_INDEX")?.unwrap_or_else(|| DEFAULT_TITLE_INDEX.to_string()),
            release_year_index: var("RELEASE_YEAR_INDEX")?
                .unwrap_or_else(|| DEFAULT_RELEASE_YEAR_INDEX.to_string()),
            dynamodb_endpoint: var("DYNAMODB_ENDPOINT")?,
            api_key: var("API_KEY")?,
            api_key_parameter: var("API_KEY_PARAMETER")?,
            gemini_model: var("GEMINI_MODEL")?
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")?
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
        })
    }
}
