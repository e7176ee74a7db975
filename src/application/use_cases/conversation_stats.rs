use std::sync::Arc;

use crate::application::MessageRepository;
use crate::domain::{ConversationStats, DomainError};

/// Default number of recent exchanges shown in the statistics report.
pub const DEFAULT_RECENT_MESSAGES: usize = 10;

pub struct ConversationStatsUseCase {
    message_repo: Arc<dyn MessageRepository>,
}

impl ConversationStatsUseCase {
    pub fn new(message_repo: Arc<dyn MessageRepository>) -> Self {
        Self { message_repo }
    }

    pub async fn execute(&self, n_recent: usize) -> Result<ConversationStats, DomainError> {
        let per_user = self.message_repo.count_by_user().await?;

        let mut recent = if n_recent == 0 {
            Vec::new()
        } else {
            self.message_repo.recent(n_recent).await?
        };
        recent.reverse();

        Ok(ConversationStats::new(per_user, recent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryMessageRepository;
    use crate::domain::Message;

    #[tokio::test]
    async fn counts_users_and_keeps_latest() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        for (user, text) in [("bob", "1"), ("alice", "2"), ("bob", "3")] {
            repo.save(&Message::new(user, text, "r")).await.unwrap();
        }

        let stats = ConversationStatsUseCase::new(repo)
            .execute(2)
            .await
            .expect("stats");

        assert_eq!(stats.per_user()[0].user, "bob");
        assert_eq!(stats.per_user()[0].count, 2);
        assert_eq!(stats.per_user()[1].user, "alice");

        let texts: Vec<_> = stats.recent().iter().map(|m| m.message()).collect();
        assert_eq!(texts, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn empty_history() {
        let stats = ConversationStatsUseCase::new(Arc::new(InMemoryMessageRepository::new()))
            .execute(DEFAULT_RECENT_MESSAGES)
            .await
            .expect("stats");

        assert!(stats.is_empty());
        assert!(stats.recent().is_empty());
    }
}
