use thiserror::Error;

/// Errors from the TMDB API client.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<TmdbError> for reelmatch_core::ReelmatchError {
    fn from(e: TmdbError) -> Self {
        reelmatch_core::ReelmatchError::Provider(e.to_string())
    }
}
