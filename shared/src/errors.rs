use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("EventBridge error: {0}")]
    EventBridgeError(String),

    #[error("User API error: {0}")]
    HttpError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TriggerError {
    fn from(err: serde_json::Error) -> Self {
        TriggerError::SerializationError(err.to_string())
    }
}

pub type TriggerResult<T> = Result<T, TriggerError>;
