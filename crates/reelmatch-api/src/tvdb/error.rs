use thiserror::Error;

/// Errors from the TheTVDB v4 API client.
#[derive(Debug, Error)]
pub enum TvdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth error: {0}")]
    Auth(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<TvdbError> for reelmatch_core::ReelmatchError {
    fn from(e: TvdbError) -> Self {
        reelmatch_core::ReelmatchError::Provider(e.to_string())
    }
}
