use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, MAX_USER_LEN};

/// An incoming chat message before it reaches the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
        }
    }

    /// Rejects blank fields and user names that do not fit the `user` column.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user.trim().is_empty() {
            return Err(DomainError::invalid_input("user must not be empty"));
        }
        if self.user.chars().count() > MAX_USER_LEN {
            return Err(DomainError::invalid_input(format!(
                "user must be at most {} characters",
                MAX_USER_LEN
            )));
        }
        if self.message.trim().is_empty() {
            return Err(DomainError::invalid_input("message must not be empty"));
        }
        Ok(())
    }
}
