use std::sync::Arc;

use crate::application::MessageRepository;
use crate::domain::{DomainError, Message};

/// Default number of entries returned by conversation listings.
pub const DEFAULT_CONVERSATION_LIMIT: i64 = 20;

pub struct ListConversationsUseCase {
    message_repo: Arc<dyn MessageRepository>,
}

impl ListConversationsUseCase {
    pub fn new(message_repo: Arc<dyn MessageRepository>) -> Self {
        Self { message_repo }
    }

    /// The `limit` most recent messages, oldest first.
    pub async fn execute(&self, limit: i64) -> Result<Vec<Message>, DomainError> {
        if limit <= 0 {
            return Err(DomainError::invalid_input("limit must be positive"));
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let mut messages = self.message_repo.recent(limit).await?;
        messages.reverse();
        Ok(messages)
    }
}
