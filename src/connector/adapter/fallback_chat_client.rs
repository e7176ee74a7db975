use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Wraps a provider so a failed call still produces a reply.
///
/// Provider errors are logged and turned into `"(error) <message>"` instead of
/// propagating, so a chat exchange is always recorded.
pub struct FallbackChatClient {
    inner: Arc<dyn ChatClient>,
}

impl FallbackChatClient {
    pub fn new(inner: Arc<dyn ChatClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ChatClient for FallbackChatClient {
    async fn complete(&self, system: Option<&str>, user: &str) -> Result<String, DomainError> {
        match self.inner.complete(system, user).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!("LLM call failed: {e}. Replying with the error text.");
                Ok(format!("(error) {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingClient;

    #[async_trait]
    impl ChatClient for FailingClient {
        async fn complete(
            &self,
            _system: Option<&str>,
            _user: &str,
        ) -> Result<String, DomainError> {
            Err(DomainError::llm("API returned 401 Unauthorized"))
        }
    }

    struct FixedClient;

    #[async_trait]
    impl ChatClient for FixedClient {
        async fn complete(
            &self,
            _system: Option<&str>,
            _user: &str,
        ) -> Result<String, DomainError> {
            Ok("fine".to_string())
        }
    }

    #[tokio::test]
    async fn passes_successful_replies_through() {
        let client = FallbackChatClient::new(Arc::new(FixedClient));
        assert_eq!(client.complete(None, "hi").await.unwrap(), "fine");
    }

    #[tokio::test]
    async fn converts_errors_into_reply() {
        let client = FallbackChatClient::new(Arc::new(FailingClient));
        let reply = client.complete(None, "hi").await.unwrap();
        assert_eq!(reply, "(error) LLM error: API returned 401 Unauthorized");
    }
}
