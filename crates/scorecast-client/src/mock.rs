//! Mock service for testing without a live scoring endpoint.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use scorecast_core::error::ServiceError;
use scorecast_core::model::StudentRecord;
use scorecast_core::traits::{Confidence, ModelInfo, Prediction, ScoreService, ServiceHealth};

/// A mock `ScoreService` that replays a configured result and records
/// every request it receives.
pub struct MockScoreService {
    response: Mutex<Result<Prediction, ServiceError>>,
    call_count: AtomicU32,
    last_record: Mutex<Option<StudentRecord>>,
}

impl MockScoreService {
    /// A mock that always predicts the given score.
    pub fn with_prediction(score: f64) -> Self {
        Self {
            response: Mutex::new(Ok(Prediction {
                predicted_reading_score: score,
                confidence: Some(Confidence::Medium),
                features_used: Vec::new(),
            })),
            call_count: AtomicU32::new(0),
            last_record: Mutex::new(None),
        }
    }

    /// A mock that always fails with the given error.
    pub fn with_error(err: ServiceError) -> Self {
        Self {
            response: Mutex::new(Err(err)),
            call_count: AtomicU32::new(0),
            last_record: Mutex::new(None),
        }
    }

    /// Swap the replayed result.
    pub fn set_response(&self, response: Result<Prediction, ServiceError>) {
        *self.response.lock().unwrap() = response;
    }

    /// Number of predict calls made against this mock.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The most recent record submitted to this mock.
    pub fn last_record(&self) -> Option<StudentRecord> {
        self.last_record.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScoreService for MockScoreService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn predict(&self, record: &StudentRecord) -> Result<Prediction, ServiceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_record.lock().unwrap() = Some(record.clone());
        self.response.lock().unwrap().clone()
    }

    async fn health(&self) -> Result<ServiceHealth, ServiceError> {
        Ok(ServiceHealth {
            status: "healthy".to_string(),
            model_loaded: Some(true),
            features: Some(12),
            train_score: Some(0.41),
            test_score: Some(0.33),
            error: None,
        })
    }

    async fn model_info(&self) -> Result<ModelInfo, ServiceError> {
        Ok(ModelInfo {
            model_type: "MockRegression".to_string(),
            features: Vec::new(),
            num_features: Some(12),
            training_score: Some(0.41),
            test_score: Some(0.33),
            mse: None,
            mae: None,
        })
    }
}
