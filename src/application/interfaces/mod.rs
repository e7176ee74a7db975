mod chat_client;
mod message_repository;

pub use chat_client::*;
pub use message_repository::*;
