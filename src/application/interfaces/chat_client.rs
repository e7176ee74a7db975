use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Use cases stay decoupled from any particular provider or HTTP
/// client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send an optional `system` instruction followed by a `user` prompt and
    /// return the assistant's reply text.
    async fn complete(&self, system: Option<&str>, user: &str) -> Result<String, DomainError>;
}
