pub mod container;
pub mod controller;
pub mod router;

pub use container::{Container, ContainerConfig, LlmConfig, DATABASE_FILE};
pub use router::Router;
