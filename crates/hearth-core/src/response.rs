use serde::{Deserialize, Serialize};

use crate::tool::ToolResult;

/// What the agent says back for one input turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Text shown to the user.
    pub text: String,
    /// Raw tool result, present only when a tool ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ToolResult>,
}

impl AgentResponse {
    /// A plain text reply with no tool metadata.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: None,
        }
    }

    /// A reply backed by a tool result.
    pub fn with_meta(text: impl Into<String>, meta: ToolResult) -> Self {
        Self {
            text: text.into(),
            meta: Some(meta),
        }
    }
}
