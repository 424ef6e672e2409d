//! Submission controller: form input, validation, and the request/response
//! state machine behind the analyze screen.
//!
//! The controller never performs I/O. `submit` hands back a [`PendingRequest`]
//! for the caller to send, and the caller feeds the outcome back through
//! [`SubmissionController::resolve`] with the same id. Completions whose id is
//! no longer the in-flight one are dropped, so a late response cannot
//! overwrite state after a clear or a newer submission.

use crate::backend::{AnalysisResult, AnalyzeRequest, InputMode};
use crate::error::{ApiError, ErrorKind, SubmitError};

pub const URL_REQUIRED: &str = "Please enter a valid tweet URL";
pub const TEXT_REQUIRED: &str = "Please enter tweet text";
pub const TIMEOUT_HINT: &str = "Request timed out. Try pasting the tweet text directly.";
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub mode: InputMode,
    pub url_value: String,
    pub text_value: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl SubmissionState {
    pub fn active_value(&self) -> &str {
        match self.mode {
            InputMode::Url => &self.url_value,
            InputMode::Text => &self.text_value,
        }
    }
}

/// What the view should show. At most one of loading, result or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub request: AnalyzeRequest,
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    last_id: u64,
    in_flight: Option<u64>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_loading {
            Phase::Loading
        } else if self.state.error_message.is_some() {
            Phase::Failed
        } else if self.state.result.is_some() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.state.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
    }

    pub fn update_url(&mut self, value: impl Into<String>) {
        self.state.url_value = value.into();
    }

    pub fn update_text(&mut self, value: impl Into<String>) {
        self.state.text_value = value.into();
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.state.mode {
            InputMode::Url => &mut self.state.url_value,
            InputMode::Text => &mut self.state.text_value,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_buffer().push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.active_buffer().push_str(s);
    }

    pub fn pop_char(&mut self) {
        self.active_buffer().pop();
    }

    pub fn clear_active(&mut self) {
        self.active_buffer().clear();
    }

    pub fn can_submit(&self) -> bool {
        !self.state.is_loading && !self.state.active_value().trim().is_empty()
    }

    /// Validate the active field and start a request.
    pub fn submit(&mut self) -> Result<PendingRequest, SubmitError> {
        if self.state.is_loading {
            return Err(SubmitError::Busy);
        }

        if self.state.active_value().trim().is_empty() {
            let message = match self.state.mode {
                InputMode::Url => URL_REQUIRED,
                InputMode::Text => TEXT_REQUIRED,
            };
            self.state.result = None;
            self.state.error_message = Some(message.to_string());
            tracing::debug!(mode = ?self.state.mode, "submit rejected: empty input");
            return Err(SubmitError::Validation(message.to_string()));
        }

        self.state.error_message = None;
        self.state.result = None;
        self.state.is_loading = true;

        self.last_id += 1;
        let id = self.last_id;
        self.in_flight = Some(id);

        let request = match self.state.mode {
            InputMode::Url => AnalyzeRequest::Url {
                tweet_url: self.state.url_value.clone(),
            },
            InputMode::Text => AnalyzeRequest::Text {
                tweet_text: self.state.text_value.clone(),
            },
        };
        tracing::info!(id, endpoint = request.endpoint(), "submitting analysis");

        Ok(PendingRequest { id, request })
    }

    /// Apply a completed request. Returns false when the completion is stale.
    pub fn resolve(&mut self, id: u64, outcome: Result<AnalysisResult, ApiError>) -> bool {
        if self.in_flight != Some(id) {
            tracing::debug!(id, current = ?self.in_flight, "discarding stale completion");
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                tracing::info!(id, "analysis succeeded");
                self.state.result = Some(result);
                self.state.error_message = None;
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "analysis failed");
                let message = failure_message(&err);
                if err.kind().suggests_text_mode() {
                    self.state.mode = InputMode::Text;
                    self.state.url_value.clear();
                }
                self.state.result = None;
                self.state.error_message = Some(message);
            }
        }

        self.state.is_loading = false;
        true
    }

    /// Full reset, the "Next" action. Abandons any in-flight request.
    pub fn clear(&mut self) {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(id, "abandoning in-flight request");
        }
        self.state = SubmissionState::default();
    }
}

/// User-facing text for a failed analysis.
pub fn failure_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Timeout => TIMEOUT_HINT.to_string(),
        _ => GENERIC_FAILURE.to_string(),
    }
}
