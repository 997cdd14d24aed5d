//! skillsync-client — Assessment store implementations.
//!
//! Implements the `AssessmentStore` trait over the single-endpoint HTTP
//! protocol, plus an in-memory store for tests and offline use.

pub mod config;
pub mod http;
pub mod memory;
pub mod protocol;

pub use config::{create_store, load_config, Backend, SkillsyncConfig};
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use protocol::{Operation, Request};
