use serde::{Deserialize, Serialize};

use super::Message;

/// Number of messages sent by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessageCount {
    pub user: String,
    pub count: u64,
}

impl UserMessageCount {
    pub fn new(user: impl Into<String>, count: u64) -> Self {
        Self {
            user: user.into(),
            count,
        }
    }
}

/// Activity overview: per-user totals plus the latest exchanges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationStats {
    /// Sorted by count descending, then user name ascending.
    per_user: Vec<UserMessageCount>,
    /// Chronological, oldest first.
    recent: Vec<Message>,
}

impl ConversationStats {
    pub fn new(mut per_user: Vec<UserMessageCount>, recent: Vec<Message>) -> Self {
        per_user.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.user.cmp(&b.user)));
        Self { per_user, recent }
    }

    pub fn per_user(&self) -> &[UserMessageCount] {
        &self.per_user
    }

    pub fn recent(&self) -> &[Message] {
        &self.recent
    }

    pub fn total_messages(&self) -> u64 {
        self.per_user.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.per_user.is_empty()
    }
}
