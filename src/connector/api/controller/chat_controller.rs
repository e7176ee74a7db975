use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::ChatRequest;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Sends one message and returns the bot's reply.
    pub async fn chat(&self, user: String, message: String) -> Result<String> {
        let use_case = self.container.send_message_use_case();
        let saved = use_case.execute(ChatRequest::new(user, message)).await?;
        Ok(saved.response().to_string())
    }

    /// Line-based chat loop. Blank lines are skipped; end of input stops the session.
    pub async fn interactive<R, W>(&self, user: String, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(
                format!("Starting interactive chat for {user}. Press Ctrl+D to exit.\n").as_bytes(),
            )
            .await?;

        let mut lines = input.lines();
        loop {
            output.write_all(b"You: ").await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                output.write_all(b"\nExiting chat.\n").await?;
                break;
            };

            let message = line.trim();
            if message.is_empty() {
                continue;
            }

            let reply = self.chat(user.clone(), message.to_string()).await?;
            output.write_all(format!("Bot: {reply}\n\n").as_bytes()).await?;
        }

        output.flush().await?;
        Ok(())
    }
}
