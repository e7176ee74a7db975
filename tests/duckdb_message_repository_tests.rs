use std::sync::Arc;

use chrono::{Duration, Utc};
use sqlbot::{DuckdbMessageRepository, Message, MessageRepository, UserMessageCount};
use tempfile::tempdir;

#[tokio::test]
async fn duckdb_message_repository_save_assigns_ids() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("conversations.duckdb");

    let repo = Arc::new(DuckdbMessageRepository::new(&db_path).expect("duckdb init"));

    let first = repo
        .save(&Message::new("alice", "hello", "(echo) hello"))
        .await
        .expect("save first");
    let second = repo
        .save(&Message::new("bob", "hi", "(echo) hi"))
        .await
        .expect("save second");

    let (a, b) = (first.id().expect("id"), second.id().expect("id"));
    assert!(b > a, "ids should increase: {a} then {b}");
    assert_eq!(repo.count().await.expect("count"), 2);
}

#[tokio::test]
async fn duckdb_message_repository_recent_is_newest_first() {
    let repo = DuckdbMessageRepository::in_memory().expect("duckdb init");
    let now = Utc::now();

    for (offset, text) in [(3, "oldest"), (2, "middle"), (1, "newest")] {
        let msg = Message::new("alice", text, "r").with_timestamp(now - Duration::minutes(offset));
        repo.save(&msg).await.expect("save");
    }

    let recent = repo.recent(2).await.expect("recent");
    let texts: Vec<_> = recent.iter().map(|m| m.message()).collect();
    assert_eq!(texts, vec!["newest", "middle"]);
    assert!(recent.iter().all(|m| m.is_persisted()));
}

#[tokio::test]
async fn duckdb_message_repository_roundtrips_fields() {
    let repo = DuckdbMessageRepository::in_memory().expect("duckdb init");
    let original = Message::new("carol", "what's -- up; drop it", "(echo) what's -- up; drop it");

    repo.save(&original).await.expect("save");
    let loaded = repo.recent(1).await.expect("recent").remove(0);

    assert_eq!(loaded.user(), "carol");
    assert_eq!(loaded.message(), original.message());
    assert_eq!(loaded.response(), original.response());
    assert_eq!(
        loaded.timestamp().timestamp_micros(),
        original.timestamp().timestamp_micros()
    );
}

#[tokio::test]
async fn duckdb_message_repository_saved_timestamp_matches_loaded() {
    let repo = DuckdbMessageRepository::in_memory().expect("duckdb init");

    let saved = repo
        .save(&Message::new("dave", "hello", "(echo) hello"))
        .await
        .expect("save");
    let loaded = repo.recent(1).await.expect("recent").remove(0);

    assert_eq!(loaded.timestamp(), saved.timestamp());
    assert_eq!(loaded.timestamp_rfc3339(), saved.timestamp_rfc3339());
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn duckdb_message_repository_counts_per_user() {
    let repo = DuckdbMessageRepository::in_memory().expect("duckdb init");
    for user in ["x", "y", "x", "x"] {
        repo.save(&Message::new(user, "m", "r")).await.expect("save");
    }

    let mut counts = repo.count_by_user().await.expect("count_by_user");
    counts.sort_by(|a, b| a.user.cmp(&b.user));
    assert_eq!(
        counts,
        vec![UserMessageCount::new("x", 3), UserMessageCount::new("y", 1)]
    );
}

#[tokio::test]
async fn duckdb_message_repository_persists_across_reopen() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("conversations.duckdb");

    {
        let repo = DuckdbMessageRepository::new(&db_path).expect("duckdb init");
        repo.save(&Message::new("alice", "kept", "r")).await.expect("save");
    }

    let reopened = DuckdbMessageRepository::new(&db_path).expect("duckdb reopen");
    assert_eq!(reopened.count().await.expect("count"), 1);
    let next = reopened
        .save(&Message::new("alice", "again", "r"))
        .await
        .expect("save after reopen");
    assert!(next.id().expect("id") > 1);
}
