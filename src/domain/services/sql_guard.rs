//! Lexical guard for potentially destructive SQL.
//!
//! This is a last-line heuristic to run before executing dynamically built
//! SQL. It only looks for a fixed set of keywords and the `--` comment
//! marker; it is not a parser and not a security boundary. Statements built
//! through `exec`, `grant`, `union` tricks, string concatenation or encoding
//! pass straight through. Prefer parameterised statements.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

/// Message carried by the validation error raised by [`guard_query`].
pub const UNSAFE_SQL_MESSAGE: &str = "Potentially destructive SQL detected; execution aborted.";

/// Keywords rejected when they appear as whole words.
pub const DANGEROUS_KEYWORDS: &[&str] =
    &["drop", "delete", "truncate", "alter", "update", "insert"];

/// Comment marker rejected anywhere in the query. Not word-bounded.
pub const COMMENT_MARKER: &str = "--";

static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DANGEROUS_KEYWORDS
        .iter()
        .map(|word| {
            let pattern = format!(r"\b{}\b", regex::escape(word));
            Regex::new(&pattern).unwrap_or_else(|e| {
                panic!("Internal error: invalid regex pattern '{}': {}", pattern, e)
            })
        })
        .collect()
});

/// Returns `true` when `query` contains none of the blacklisted keywords.
///
/// Matching is case-insensitive. Keywords must stand as whole words, so
/// `updated_at` is fine while `update users` is not. The `--` marker is a
/// plain substring check.
pub fn is_safe_sql(query: &str) -> bool {
    let lowered = query.to_lowercase();

    if lowered.contains(COMMENT_MARKER) {
        return false;
    }

    !KEYWORD_PATTERNS.iter().any(|re| re.is_match(&lowered))
}

/// Fails with [`DomainError::ValidationError`] if `query` looks destructive.
///
/// The query is never modified or executed.
pub fn guard_query(query: &str) -> Result<(), DomainError> {
    if is_safe_sql(query) {
        Ok(())
    } else {
        Err(DomainError::validation(UNSAFE_SQL_MESSAGE))
    }
}
