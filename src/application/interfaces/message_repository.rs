use async_trait::async_trait;

use crate::domain::{DomainError, Message, UserMessageCount};

/// Persistence for logged chat exchanges.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores the message and returns it with its storage-assigned id.
    async fn save(&self, message: &Message) -> Result<Message, DomainError>;

    /// Up to `limit` messages, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Message>, DomainError>;

    /// Message totals per user, in no particular order.
    async fn count_by_user(&self) -> Result<Vec<UserMessageCount>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
