use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusqError {
    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
