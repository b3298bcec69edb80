use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Missing path parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid path parameter: {0}")]
    InvalidParameter(String),

    #[error("No movie found for title: {0}")]
    NotFound(String),

    #[error("Failed to query movie store: {0}")]
    StoreUnavailable(String),

    #[error("Failed to generate summary: {0}")]
    GenerationFailed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MovieError {
    /// HTTP status the error maps to at the handler boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            MovieError::MissingParameter(_) | MovieError::InvalidParameter(_) => 400,
            MovieError::NotFound(_) => 404,
            MovieError::StoreUnavailable(_)
            | MovieError::GenerationFailed(_)
            | MovieError::Config(_) => 500,
        }
    }

    /// True for errors caused by the caller's request rather than a dependency.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
