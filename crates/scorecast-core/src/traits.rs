//! The prediction service contract.
//!
//! `ScoreService` is implemented by the HTTP client in `scorecast-client`
//! and by its test mock. Response types mirror the service's JSON shapes;
//! everything beyond the predicted score is optional so the minimal
//! documented response still parses.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::ServiceError;
use crate::model::StudentRecord;

/// A remote service that scores student records.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Human-readable service name (e.g. "http").
    fn name(&self) -> &str;

    /// Predict the reading score for one complete record.
    async fn predict(&self, record: &StudentRecord) -> Result<Prediction, ServiceError>;

    /// Check service health.
    async fn health(&self) -> Result<ServiceHealth, ServiceError>;

    /// Fetch metadata about the model behind the service.
    async fn model_info(&self) -> Result<ModelInfo, ServiceError>;
}

/// A successful prediction response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted reading score.
    pub predicted_reading_score: f64,
    /// Model confidence bucket, when the service reports one.
    #[serde(default)]
    pub confidence: Option<Confidence>,
    /// Feature names the model used, when the service reports them.
    #[serde(default)]
    pub features_used: Vec<String>,
}

impl Prediction {
    /// The score as displayed: one decimal place.
    pub fn formatted_score(&self) -> String {
        format!("{:.1}", self.predicted_reading_score)
    }
}

/// Confidence bucket derived from the model's holdout performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub features: Option<u32>,
    #[serde(default)]
    pub train_score: Option<f64>,
    #[serde(default)]
    pub test_score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Response from `GET /model-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub num_features: Option<u32>,
    #[serde(default)]
    pub training_score: Option<f64>,
    #[serde(default)]
    pub test_score: Option<f64>,
    #[serde(default)]
    pub mse: Option<f64>,
    #[serde(default)]
    pub mae: Option<f64>,
}
