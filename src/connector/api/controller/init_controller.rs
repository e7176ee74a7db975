use anyhow::Result;

use super::super::Container;

pub struct InitController<'a> {
    container: &'a Container,
}

impl<'a> InitController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// The schema is created when storage is opened; this reports where it lives.
    pub async fn init(&self) -> Result<String> {
        match self.container.database_path() {
            Some(path) => Ok(format!(
                "Database tables created successfully.\nDatabase: {}",
                path.display()
            )),
            None => Ok("Using in-memory storage; nothing to create.".to_string()),
        }
    }
}
