use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the entire Hearth agent.
#[derive(Error, Debug)]
pub enum HearthError {
    // ── Memory errors ──────────────────────────────────────────
    #[error("memory error: {0}")]
    Memory(String),

    #[error("failed to write memory store {}: {source}", path.display())]
    MemoryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Tool errors ────────────────────────────────────────────
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("tool execution failed: {tool}: {reason}")]
    ToolExecution { tool: String, reason: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Evaluation errors ──────────────────────────────────────
    #[error("evaluation error: {0}")]
    Evaluation(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HearthError>;
