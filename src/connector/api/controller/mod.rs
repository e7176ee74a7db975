pub mod chat_controller;
pub mod check_sql_controller;
pub mod conversations_controller;
pub mod init_controller;
pub mod stats_controller;

pub use chat_controller::ChatController;
pub use check_sql_controller::CheckSqlController;
pub use conversations_controller::ConversationsController;
pub use init_controller::InitController;
pub use stats_controller::{format_stats, StatsController};
