use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::{ChatClient, MessageRepository};
use crate::domain::{ChatRequest, DomainError, Message};

/// Use case for sending a message to the bot and logging the exchange.
pub struct SendMessageUseCase {
    message_repo: Arc<dyn MessageRepository>,
    chat_client: Arc<dyn ChatClient>,
    system_prompt: Option<String>,
}

impl SendMessageUseCase {
    pub fn new(message_repo: Arc<dyn MessageRepository>, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            message_repo,
            chat_client,
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Validates the request, asks the model for a reply and persists both.
    pub async fn execute(&self, request: ChatRequest) -> Result<Message, DomainError> {
        request.validate()?;

        info!("Chat message from {}", request.user);
        let start_time = Instant::now();

        let reply = self
            .chat_client
            .complete(self.system_prompt.as_deref(), &request.message)
            .await?;

        debug!("Reply generated in {:?}", start_time.elapsed());

        let saved = self
            .message_repo
            .save(&Message::new(request.user, request.message, reply))
            .await?;

        debug!("Stored message {:?}", saved.id());
        Ok(saved)
    }
}
