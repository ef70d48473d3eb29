use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{BmiResult, HistoryEntry, MeasurementInput};

/// Failures of a call to the BMI server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with an `{error}` payload
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request never produced a usable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not what the endpoint promises
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text the server wants shown to the user, if it sent any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Trait for the two remote calls the page makes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BmiApiTrait: Send + Sync {
    /// `POST /calculate`
    async fn calculate(&self, input: &MeasurementInput) -> Result<BmiResult, ApiError>;

    /// `GET /history`
    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
}
