use clap::Subcommand;

use crate::application::{DEFAULT_CONVERSATION_LIMIT, DEFAULT_RECENT_MESSAGES};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a message to the bot, or start an interactive session without --message
    Chat {
        #[arg(short, long, default_value = "anonymous")]
        user: String,

        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show the most recent conversation entries
    Conversations {
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_CONVERSATION_LIMIT,
            allow_negative_numbers = true
        )]
        limit: i64,
    },

    /// Print per-user message counts and the latest exchanges
    Stats {
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_MESSAGES)]
        recent: usize,
    },

    /// Start the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1", env = "SQLBOT_HOST")]
        host: String,

        #[arg(short, long, default_value_t = 8000, env = "SQLBOT_PORT")]
        port: u16,
    },

    /// Create the database tables
    Init,

    /// Check a SQL string against the destructive-keyword guard
    CheckSql {
        query: String,
    },
}
