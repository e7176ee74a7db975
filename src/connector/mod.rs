//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - LLM providers (OpenAI-compatible, echo, error fallback)
//! - Storage (DuckDB, in-memory)
//! - Delivery (CLI controllers, HTTP API)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::*;
pub use http::*;
