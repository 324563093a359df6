#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Failed to fetch feed: {0}")]
    Fetch(String),

    #[error("Error parsing feed: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State file error: {0}")]
    State(String),

    #[error("Publish error: {0}")]
    Publish(String),
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Fetch(err.to_string())
    }
}

impl From<std::env::VarError> for BotError {
    fn from(err: std::env::VarError) -> Self {
        BotError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
