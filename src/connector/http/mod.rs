//! HTTP API over the same use cases as the CLI.

mod error;
mod handlers;
mod server;

pub use error::ApiError;
pub use handlers::{ChatResponse, ConversationEntry};
pub use server::{build_router, serve};
