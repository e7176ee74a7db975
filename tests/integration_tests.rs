//! Integration tests for SQLBot.
//!
//! These tests verify the end-to-end functionality of the system.

use std::sync::Arc;

use sqlbot::connector::api::controller::ChatController;
use sqlbot::{
    is_safe_sql, ChatClient, Commands, Container, ContainerConfig, DomainError, EchoChatClient,
    InMemoryMessageRepository, LlmConfig, Router,
};
use tempfile::tempdir;

fn memory_container(chat_client: Arc<dyn ChatClient>) -> Container {
    Container::with_services(
        Arc::new(InMemoryMessageRepository::new()),
        chat_client,
        ContainerConfig {
            data_dir: String::new(),
            memory_storage: true,
            llm: LlmConfig::default(),
        },
    )
}

#[tokio::test]
async fn test_one_off_chat_is_logged_and_reported() {
    let container = memory_container(Arc::new(EchoChatClient::new()));
    let router = Router::new(&container);

    let reply = router
        .route(Commands::Chat {
            user: "alice".to_string(),
            message: Some("Hello!".to_string()),
        })
        .await
        .expect("chat");
    assert_eq!(reply, "(echo) Hello!");

    let stats = router
        .route(Commands::Stats { recent: 10 })
        .await
        .expect("stats");
    assert!(stats.starts_with("Messages per user:\n  alice: 1"));
    assert!(stats.contains("Most recent 1 messages:"));
    assert!(stats.contains("alice -> Hello!"));
    assert!(stats.contains("bot -> (echo) Hello!"));
}

#[tokio::test]
async fn test_stats_on_empty_log() {
    let container = memory_container(Arc::new(EchoChatClient::new()));
    let output = Router::new(&container)
        .route(Commands::Stats { recent: 10 })
        .await
        .expect("stats");
    assert_eq!(output, "No conversations recorded.");
}

#[tokio::test]
async fn test_conversations_command_validates_limit() {
    let container = memory_container(Arc::new(EchoChatClient::new()));
    let router = Router::new(&container);

    let err = router
        .route(Commands::Conversations { limit: 0 })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("limit must be positive"));

    assert_eq!(
        router
            .route(Commands::Conversations { limit: 5 })
            .await
            .expect("list"),
        "No conversations recorded."
    );
}

#[tokio::test]
async fn test_interactive_session_skips_blank_lines() {
    let container = memory_container(Arc::new(EchoChatClient::new()));
    let controller = ChatController::new(&container);

    let input = tokio::io::BufReader::new(&b"hello\n\n   \nbye\n"[..]);
    let mut output = Vec::new();
    controller
        .interactive("alice".to_string(), input, &mut output)
        .await
        .expect("interactive");

    let text = String::from_utf8(output).expect("utf8");
    assert!(text.contains("Bot: (echo) hello"));
    assert!(text.contains("Bot: (echo) bye"));
    assert!(text.trim_end().ends_with("Exiting chat."));

    let stats = container.stats_use_case().execute(10).await.expect("stats");
    assert_eq!(stats.total_messages(), 2);
}

#[tokio::test]
async fn test_check_sql_command() {
    let container = memory_container(Arc::new(EchoChatClient::new()));
    let router = Router::new(&container);

    let ok = router
        .route(Commands::CheckSql {
            query: "select * from users".to_string(),
        })
        .await
        .expect("safe query");
    assert_eq!(ok, "safe");

    let err = router
        .route(Commands::CheckSql {
            query: "DROP TABLE users".to_string(),
        })
        .await
        .unwrap_err();
    let domain = err.downcast_ref::<DomainError>().expect("domain error");
    assert!(domain.is_validation_error());
}

#[tokio::test]
async fn test_init_creates_database_file() {
    let dir = tempdir().expect("tempdir");
    let container = Container::new(ContainerConfig {
        data_dir: dir.path().to_string_lossy().to_string(),
        memory_storage: false,
        llm: LlmConfig::default(),
    })
    .expect("container");

    let output = Router::new(&container)
        .route(Commands::Init)
        .await
        .expect("init");
    assert!(output.starts_with("Database tables created successfully."));
    assert!(dir.path().join(sqlbot::connector::DATABASE_FILE).exists());
}

#[tokio::test]
async fn test_duckdb_backed_chat_flow() {
    let dir = tempdir().expect("tempdir");
    let container = Container::new(ContainerConfig {
        data_dir: dir.path().to_string_lossy().to_string(),
        memory_storage: false,
        llm: LlmConfig::default(),
    })
    .expect("container");
    let router = Router::new(&container);

    for message in ["first", "second"] {
        router
            .route(Commands::Chat {
                user: "dana".to_string(),
                message: Some(message.to_string()),
            })
            .await
            .expect("chat");
    }

    let listing = router
        .route(Commands::Conversations { limit: 20 })
        .await
        .expect("list");
    let first = listing.find("you: first").expect("first listed");
    let second = listing.find("you: second").expect("second listed");
    assert!(first < second);
}

#[test]
fn test_guard_is_exposed_at_crate_root() {
    assert!(is_safe_sql("SELECT name FROM employees where id = 1"));
    assert!(!is_safe_sql("select 1 -- comment"));
}
