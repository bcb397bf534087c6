//! Outcome of a validation step (login or enter-details).

use serde::Serialize;

/// Recoverable flow errors. Both are shown through the error indicator and
/// leave the flow in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid username or password")]
    Authentication,
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text for the error indicator.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowResult {
    Success,
    Error(FlowError),
}

impl FlowResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowResult::Success)
    }

    pub fn error(&self) -> Option<&FlowError> {
        match self {
            FlowResult::Success => None,
            FlowResult::Error(error) => Some(error),
        }
    }
}

impl From<Result<(), FlowError>> for FlowResult {
    fn from(result: Result<(), FlowError>) -> Self {
        match result {
            Ok(()) => FlowResult::Success,
            Err(error) => FlowResult::Error(error),
        }
    }
}
