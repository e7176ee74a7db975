use anyhow::Result;

use crate::domain::Message;

use super::super::Container;

pub struct ConversationsController<'a> {
    container: &'a Container,
}

impl<'a> ConversationsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, limit: i64) -> Result<String> {
        let use_case = self.container.list_conversations_use_case();
        let messages = use_case.execute(limit).await?;
        Ok(self.format_conversations(&messages))
    }

    fn format_conversations(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return "No conversations recorded.".to_string();
        }

        let mut output = String::new();
        for msg in messages {
            output.push_str(&format!(
                "#{} [{}] {}\n  you: {}\n  bot: {}\n",
                msg.id().unwrap_or_default(),
                msg.timestamp_rfc3339(),
                msg.user(),
                msg.message(),
                msg.response()
            ));
        }
        output.trim_end().to_string()
    }
}
