mod conversation_stats;
mod list_conversations;
mod send_message;

pub use conversation_stats::*;
pub use list_conversations::*;
pub use send_message::*;
