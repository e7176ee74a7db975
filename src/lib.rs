pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    ChatClient, ConversationStatsUseCase, ListConversationsUseCase, MessageRepository,
    SendMessageUseCase,
};

pub use connector::{
    build_router, serve, Container, ContainerConfig, DuckdbMessageRepository, EchoChatClient,
    FallbackChatClient, InMemoryMessageRepository, LlmConfig, OpenAiClient, Router,
};

pub use domain::{
    guard_query, is_safe_sql, ChatRequest, ConversationStats, DomainError, Message,
    UserMessageCount, UNSAFE_SQL_MESSAGE,
};
