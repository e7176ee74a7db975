use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{
    ChatController, CheckSqlController, ConversationsController, InitController, StatsController,
};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    conversations_controller: ConversationsController<'a>,
    stats_controller: StatsController<'a>,
    init_controller: InitController<'a>,
    check_sql_controller: CheckSqlController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            conversations_controller: ConversationsController::new(container),
            stats_controller: StatsController::new(container),
            init_controller: InitController::new(container),
            check_sql_controller: CheckSqlController::new(),
        }
    }

    /// Runs a command and returns the text to print.
    ///
    /// `chat` without a message, or with an empty one, runs the interactive
    /// session on stdin/stdout and returns an empty string.
    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat { user, message } => match one_off_message(message) {
                Some(message) => self.chat_controller.chat(user, message).await,
                None => {
                    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                    self.chat_controller
                        .interactive(user, stdin, tokio::io::stdout())
                        .await?;
                    Ok(String::new())
                }
            },
            Commands::Conversations { limit } => self.conversations_controller.list(limit).await,
            Commands::Stats { recent } => self.stats_controller.stats(recent).await,
            Commands::Init => self.init_controller.init().await,
            Commands::CheckSql { query } => self.check_sql_controller.check(&query),
            Commands::Serve { .. } => bail!("serve runs the HTTP API and is started from main"),
        }
    }
}

fn one_off_message(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}
