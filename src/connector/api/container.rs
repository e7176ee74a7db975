use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{
    ChatClient, ConversationStatsUseCase, ListConversationsUseCase, MessageRepository,
    SendMessageUseCase,
};
use crate::connector::adapter::{
    DuckdbMessageRepository, EchoChatClient, FallbackChatClient, InMemoryMessageRepository,
    OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// File name of the conversation database inside the data directory.
pub const DATABASE_FILE: &str = "conversations.duckdb";

/// Language model settings.
///
/// | Variable               | Default                  |
/// |------------------------|--------------------------|
/// | `OPENAI_API_KEY`       | unset (echo mode)        |
/// | `MODEL_NAME`           | `gpt-3.5-turbo`          |
/// | `OPENAI_BASE_URL`      | `https://api.openai.com` |
/// | `SQLBOT_SYSTEM_PROMPT` | unset                    |
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub system_prompt: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_prompt: None,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank("OPENAI_API_KEY"),
            model: non_blank("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            system_prompt: non_blank("SQLBOT_SYSTEM_PROMPT"),
        }
    }

    /// True when no API key is configured and replies are echoed back.
    pub fn is_echo_mode(&self) -> bool {
        self.api_key.is_none()
    }
}

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep messages in process memory instead of DuckDB.
    pub memory_storage: bool,
    pub llm: LlmConfig,
}

pub struct Container {
    message_repo: Arc<dyn MessageRepository>,
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let message_repo: Arc<dyn MessageRepository> = if config.memory_storage {
            debug!("Using in-memory message storage");
            Arc::new(InMemoryMessageRepository::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)?;
            let db_path = PathBuf::from(&config.data_dir).join(DATABASE_FILE);
            debug!("Using DuckDB message storage at {:?}", db_path);
            Arc::new(DuckdbMessageRepository::new(&db_path)?)
        };

        let chat_client = Self::build_chat_client(&config.llm);

        Ok(Self {
            message_repo,
            chat_client,
            config,
        })
    }

    /// Builds a container around explicit collaborators.
    pub fn with_services(
        message_repo: Arc<dyn MessageRepository>,
        chat_client: Arc<dyn ChatClient>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            message_repo,
            chat_client,
            config,
        }
    }

    fn build_chat_client(llm: &LlmConfig) -> Arc<dyn ChatClient> {
        match llm.api_key.as_deref() {
            None => {
                info!("OPENAI_API_KEY not set, replies will echo the prompt");
                Arc::new(EchoChatClient::new())
            }
            Some(key) => {
                debug!("Using model {} at {}", llm.model, llm.base_url);
                let client = OpenAiClient::new(key, llm.model.as_str(), llm.base_url.as_str());
                Arc::new(FallbackChatClient::new(Arc::new(client)))
            }
        }
    }

    pub fn send_message_use_case(&self) -> SendMessageUseCase {
        let use_case = SendMessageUseCase::new(self.message_repo.clone(), self.chat_client.clone());
        match self.config.llm.system_prompt.as_deref() {
            Some(prompt) => use_case.with_system_prompt(prompt),
            None => use_case,
        }
    }

    pub fn list_conversations_use_case(&self) -> ListConversationsUseCase {
        ListConversationsUseCase::new(self.message_repo.clone())
    }

    pub fn stats_use_case(&self) -> ConversationStatsUseCase {
        ConversationStatsUseCase::new(self.message_repo.clone())
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        if self.config.memory_storage {
            None
        } else {
            Some(PathBuf::from(&self.config.data_dir).join(DATABASE_FILE))
        }
    }

    pub fn llm_config(&self) -> &LlmConfig {
        &self.config.llm
    }
}
