use anyhow::Result;

use crate::domain::guard_query;

pub struct CheckSqlController;

impl CheckSqlController {
    pub fn new() -> Self {
        Self
    }

    /// Returns `safe`, or the guard's validation error.
    pub fn check(&self, query: &str) -> Result<String> {
        guard_query(query)?;
        Ok("safe".to_string())
    }
}

impl Default for CheckSqlController {
    fn default() -> Self {
        Self::new()
    }
}
