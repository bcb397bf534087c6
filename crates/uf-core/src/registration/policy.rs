use serde::{Deserialize, Serialize};

use crate::flow::FlowError;

/// Rule applied to username/password before registration continues.
pub trait CredentialPolicy: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> Result<(), FlowError>;
}

/// Rejects an empty username or an empty password.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyPolicy;

impl CredentialPolicy for NonEmptyPolicy {
    fn validate(&self, username: &str, password: &str) -> Result<(), FlowError> {
        if username.is_empty() {
            return Err(FlowError::validation("Username must not be empty"));
        }
        if password.is_empty() {
            return Err(FlowError::validation("Password must not be empty"));
        }
        Ok(())
    }
}

/// Requires at least `min_len` characters in both fields.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthPolicy {
    pub min_len: usize,
}

impl Default for MinLengthPolicy {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LENGTH,
        }
    }
}

impl CredentialPolicy for MinLengthPolicy {
    fn validate(&self, username: &str, password: &str) -> Result<(), FlowError> {
        let shortest_rejected = self.min_len.saturating_sub(1);
        if username.chars().count() < self.min_len {
            return Err(FlowError::validation(format!(
                "Username has to be longer than {shortest_rejected} characters"
            )));
        }
        if password.chars().count() < self.min_len {
            return Err(FlowError::validation(format!(
                "Password has to be longer than {shortest_rejected} characters"
            )));
        }
        Ok(())
    }
}

pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Policy selection as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    NonEmpty,
    MinLength,
}

impl PolicyKind {
    pub fn build(self, min_len: usize) -> Box<dyn CredentialPolicy> {
        match self {
            PolicyKind::NonEmpty => Box::new(NonEmptyPolicy),
            PolicyKind::MinLength => Box::new(MinLengthPolicy { min_len }),
        }
    }
}
