use anyhow::Result;

use crate::domain::ConversationStats;

use super::super::Container;

pub struct StatsController<'a> {
    container: &'a Container,
}

impl<'a> StatsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn stats(&self, n_recent: usize) -> Result<String> {
        let use_case = self.container.stats_use_case();
        let stats = use_case.execute(n_recent).await?;
        Ok(format_stats(&stats))
    }
}

/// Renders the plain-text activity report.
pub fn format_stats(stats: &ConversationStats) -> String {
    let mut output = String::new();

    if stats.is_empty() {
        output.push_str("No conversations recorded.\n");
    } else {
        output.push_str("Messages per user:\n");
        for entry in stats.per_user() {
            output.push_str(&format!("  {}: {}\n", entry.user, entry.count));
        }
    }

    if !stats.recent().is_empty() {
        output.push_str(&format!("\nMost recent {} messages:\n", stats.recent().len()));
        for msg in stats.recent() {
            let user_line = format!("[{}] {} -> ", msg.timestamp_rfc3339(), msg.user());
            let indent = " ".repeat(user_line.chars().count());
            output.push_str(&format!("{}{}\n", user_line, msg.message()));
            output.push_str(&format!("{}bot -> {}\n\n", indent, msg.response()));
        }
    }

    output.trim_end().to_string()
}
