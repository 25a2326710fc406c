//! # hearth-config
//!
//! Configuration system for the Hearth agent. Reads from `hearth.toml` and a
//! couple of environment variables, with CLI flags layered on top by the caller.

pub mod schema;
pub mod loader;

pub use schema::HearthConfig;
pub use schema::{ConfigWarning, EvaluationConfig, LoggingConfig, MemoryConfig, WarningSeverity};
pub use loader::ConfigLoader;
