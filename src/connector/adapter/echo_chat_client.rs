use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Offline stand-in used when no API key is configured: replies with the prompt.
pub struct EchoChatClient;

impl EchoChatClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for EchoChatClient {
    async fn complete(&self, _system: Option<&str>, user: &str) -> Result<String, DomainError> {
        Ok(format!("(echo) {user}"))
    }
}
