//! Submission session for one student profile.
//!
//! A `Session` owns the form, a pending flag, and the outcome of the most
//! recent submission. `submit` takes `&mut self` and awaits the response
//! inside the caller's task, so two requests from one session can never
//! overlap; the pending flag is observable state, set around the single
//! suspend point and cleared on every exit path.

use crate::model::{FieldError, FormState, IncompleteForm};
use crate::traits::{Prediction, ScoreService};

/// Result of the most recent submission.
///
/// At most one of the prediction and the failure message is present;
/// both are cleared when a new submission starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// No submission has completed since the last reset.
    #[default]
    None,
    /// The service returned a prediction.
    Predicted(Prediction),
    /// The submission failed; the message is already user-facing.
    Failed(String),
}

impl Outcome {
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Outcome::Predicted(p) => Some(p),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// One form-submission lifecycle: fill fields, submit, read the outcome.
#[derive(Debug, Default)]
pub struct Session {
    form: FormState,
    pending: bool,
    outcome: Outcome,
}

impl Session {
    /// Start with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already (partially) filled form.
    pub fn from_form(form: FormState) -> Self {
        Self {
            form,
            pending: false,
            outcome: Outcome::None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Update one field; see [`FormState::set_field`].
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        self.form.set_field(name, raw)
    }

    pub fn is_complete(&self) -> bool {
        self.form.is_complete()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.form.missing_fields()
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Submit the form once.
    ///
    /// Blocked without any network traffic while the form is incomplete.
    /// Otherwise clears the previous outcome, issues exactly one request,
    /// and records the prediction or the classified failure message. No
    /// retries and no caching: resubmitting a valid form always issues a
    /// fresh request and overwrites the outcome.
    pub async fn submit(&mut self, service: &dyn ScoreService) -> Result<&Outcome, IncompleteForm> {
        let record = self.form.complete()?;

        self.outcome = Outcome::None;
        self.pending = true;
        tracing::debug!(
            service = service.name(),
            payload = %serde_json::to_string(&record).unwrap_or_default(),
            "submitting prediction request"
        );

        self.outcome = match service.predict(&record).await {
            Ok(prediction) => Outcome::Predicted(prediction),
            Err(err) => {
                tracing::debug!(error = %err, "prediction request failed");
                Outcome::Failed(err.user_message())
            }
        };
        self.pending = false;

        Ok(&self.outcome)
    }
}
