mod chat_request;
mod conversation_stats;
mod message;

pub use chat_request::*;
pub use conversation_stats::*;
pub use message::*;
