//! Batch run reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Confidence;

/// Outcome of one record in a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// The record's source (file path or label).
    pub record: String,
    /// Predicted reading score, absent on failure.
    #[serde(default)]
    pub predicted_reading_score: Option<f64>,
    /// Service-reported confidence, when present.
    #[serde(default)]
    pub confidence: Option<Confidence>,
    /// User-facing failure message, absent on success.
    #[serde(default)]
    pub error: Option<String>,
}

impl RecordOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A complete batch prediction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run started.
    pub created_at: DateTime<Utc>,
    /// Base URL of the service that was queried.
    pub service: String,
    /// Per-record outcomes, in submission order.
    pub results: Vec<RecordOutcome>,
}

impl RunReport {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            created_at: Utc::now(),
            service: service.into(),
            results: Vec::new(),
        }
    }

    pub fn predicted(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.predicted()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RunReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
