use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::MessageRepository;
use crate::domain::{guard_query, DomainError, Message, UserMessageCount};

const SELECT_COLUMNS: &str = r#"SELECT id, "user", message, response, "timestamp" FROM messages"#;

pub struct DuckdbMessageRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbMessageRepository {
    /// Opens (or creates) the database file and makes sure the schema exists.
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE SEQUENCE IF NOT EXISTS messages_id_seq START 1;
            CREATE TABLE IF NOT EXISTS messages (
                id BIGINT PRIMARY KEY DEFAULT nextval('messages_id_seq'),
                "user" VARCHAR(100) NOT NULL,
                message TEXT NOT NULL,
                response TEXT NOT NULL,
                "timestamp" BIGINT NOT NULL
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB message schema initialized");
        Ok(())
    }

    fn read_row(row: &duckdb::Row<'_>) -> duckdb::Result<(i64, String, String, String, i64)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    }

    fn to_message(
        (id, user, message, response, micros): (i64, String, String, String, i64),
    ) -> Result<Message, DomainError> {
        let timestamp = DateTime::<Utc>::from_timestamp_micros(micros).ok_or_else(|| {
            DomainError::storage(format!("Invalid timestamp {} for message {}", micros, id))
        })?;
        Ok(Message::reconstitute(id, user, message, response, timestamp))
    }
}

#[async_trait]
impl MessageRepository for DuckdbMessageRepository {
    async fn save(&self, message: &Message) -> Result<Message, DomainError> {
        let conn = self.conn.lock().await;

        let id: i64 = conn
            .query_row("SELECT nextval('messages_id_seq')", [], |row| row.get(0))
            .map_err(|e| DomainError::storage(format!("Failed to allocate message id: {}", e)))?;

        conn.execute(
            r#"INSERT INTO messages (id, "user", message, response, "timestamp")
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            params![
                id,
                message.user(),
                message.message(),
                message.response(),
                message.timestamp().timestamp_micros(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to save message: {}", e)))?;

        Ok(message.clone().with_id(id))
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Message>, DomainError> {
        let sql = format!(
            r#"{SELECT_COLUMNS} ORDER BY "timestamp" DESC, id DESC LIMIT {}"#,
            limit
        );
        guard_query(&sql)?;

        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], Self::read_row)
            .map_err(|e| DomainError::storage(format!("Failed to query messages: {}", e)))?;

        let mut messages = Vec::new();
        for row in rows {
            let raw = row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?;
            messages.push(Self::to_message(raw)?);
        }
        Ok(messages)
    }

    async fn count_by_user(&self) -> Result<Vec<UserMessageCount>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(r#"SELECT "user", COUNT(*) FROM messages GROUP BY "user""#)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(UserMessageCount::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)? as u64,
                ))
            })
            .map_err(|e| DomainError::storage(format!("Failed to count messages: {}", e)))?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(
                row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?,
            );
        }
        Ok(counts)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let conn = self.conn.lock().await;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))
            .map_err(|e| DomainError::storage(format!("Failed to count messages: {}", e)))?;
        Ok(count as u64)
    }
}
