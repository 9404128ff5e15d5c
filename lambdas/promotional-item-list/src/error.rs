use lambda_http::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected environment variable {0} not set")]
    Missing(&'static str),
    #[error("Environment variable DB_PORT has to be a port number, got `{value}`")]
    InvalidPort { value: String },
    #[error("Database settings are incomplete: {0} not set")]
    IncompleteDatabase(&'static str),
}

#[derive(Error, Debug)]
pub enum ListPromotionalItemsError {
    #[error("Failed to encode promotional items: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ListPromotionalItemsError {
    pub fn status(&self) -> StatusCode {
        match self {
            ListPromotionalItemsError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
