mod duckdb_message_repository;
mod echo_chat_client;
mod fallback_chat_client;
mod in_memory_message_repository;
mod openai_client;

pub use duckdb_message_repository::*;
pub use echo_chat_client::*;
pub use fallback_chat_client::*;
pub use in_memory_message_repository::*;
pub use openai_client::*;
