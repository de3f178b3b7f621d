//! HTTP implementation of the prediction service contract.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use scorecast_core::error::ServiceError;
use scorecast_core::model::StudentRecord;
use scorecast_core::traits::{ModelInfo, Prediction, ScoreService, ServiceHealth};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the scoring service's HTTP API.
pub struct HttpScoreService {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpScoreService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else {
            ServiceError::Network(error_chain(&err))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

/// Render an error with its full source chain, so "connection refused" and
/// friends survive reqwest's outer wrapping.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl ScoreService for HttpScoreService {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, record))]
    async fn predict(&self, record: &StudentRecord) -> Result<Prediction, ServiceError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(record)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<ServiceHealth, ServiceError> {
        self.get_json("/health").await
    }

    #[instrument(skip(self))]
    async fn model_info(&self) -> Result<ModelInfo, ServiceError> {
        self.get_json("/model-info").await
    }
}
