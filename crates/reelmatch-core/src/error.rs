use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReelmatchError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("title pattern error: {0}")]
    Title(#[from] reelmatch_parse::TitleError),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
