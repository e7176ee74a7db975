use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::MessageRepository;
use crate::domain::{DomainError, Message, UserMessageCount};

/// Volatile message log, used with `--memory-storage` and in tests.
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> Result<Message, DomainError> {
        let mut store = self.messages.lock().await;
        let id = store.len() as i64 + 1;
        let saved = message.clone().with_id(id);
        store.push(saved.clone());

        debug!("Saved message {} to memory", id);
        Ok(saved)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Message>, DomainError> {
        let store = self.messages.lock().await;
        let mut messages = store.clone();
        messages.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| b.id().cmp(&a.id()))
        });
        messages.truncate(limit);
        Ok(messages)
    }

    async fn count_by_user(&self) -> Result<Vec<UserMessageCount>, DomainError> {
        let store = self.messages.lock().await;
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for message in store.iter() {
            *counts.entry(message.user()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(user, count)| UserMessageCount::new(user, count))
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.messages.lock().await.len() as u64)
    }
}
