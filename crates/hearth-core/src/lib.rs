//! # hearth-core
//!
//! Core types, traits, and primitives for the Hearth home-assistant agent.
//! This crate defines the shared vocabulary used by every other crate in the workspace.

pub mod error;
pub mod fs;
pub mod response;
pub mod tool;

pub use error::{HearthError, Result};
pub use response::AgentResponse;
pub use tool::{Tool, ToolAction, ToolCall, ToolExecutor, ToolResult, ToolStatus};
