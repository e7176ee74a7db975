//! Domain services containing core business logic.

pub mod sql_guard;

pub use sql_guard::{guard_query, is_safe_sql, UNSAFE_SQL_MESSAGE};
