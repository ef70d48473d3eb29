use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use bmi_tracker_domain::entities::{BmiResult, HistoryEntry, MeasurementInput, ServerError};
use bmi_tracker_domain::services::{ApiError, BmiApiTrait};

use crate::config::ClientConfig;

/// `reqwest` implementation of the BMI server API
#[derive(Debug, Clone)]
pub struct HttpBmiApi {
    client: Client,
    config: ClientConfig,
}

impl HttpBmiApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use an existing `reqwest` client, e.g. one with custom headers
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-success `/calculate` response body into an error
fn calculate_failure(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ServerError>(body) {
        Ok(payload) => ApiError::Server {
            status: status.as_u16(),
            message: payload.error,
        },
        Err(e) => {
            warn!(%status, "Error response without an error message");
            ApiError::Decode(format!("{} response: {}", status, e))
        }
    }
}

#[async_trait]
impl BmiApiTrait for HttpBmiApi {
    async fn calculate(&self, input: &MeasurementInput) -> Result<BmiResult, ApiError> {
        let url = self.config.endpoint("/calculate");
        debug!(%url, "POST calculate");

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            return Err(calculate_failure(status, &body));
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = self.config.endpoint("/history");
        debug!(%url, "GET history");

        let response = self.client.get(&url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!(
                "GET /history returned {}",
                status
            )));
        }

        let body = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
