use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Description of a tool the agent can call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Unique name, e.g. "turn_on_light", "get_schedule".
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema of the parameters object.
    pub parameters: Value,
    /// Whether this tool changes (simulated) device state.
    #[serde(default)]
    pub is_mutating: bool,
}

/// A request to call a tool by name with JSON arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool_name: String,
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>, arguments: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Outcome status of a tool call. The mock tools never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Ok,
}

/// Action-specific fields of a tool result, tagged by the action name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ToolAction {
    TurnOnLight { room: String },
    SetTemperature { temp: u8 },
    GetSchedule { date: String, events: Vec<String> },
}

/// The structured result of executing a tool call.
///
/// Serializes flat, e.g.
/// `{"status":"ok","action":"turn_on_light","room":"kitchen","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub status: ToolStatus,
    #[serde(flatten)]
    pub action: ToolAction,
    pub message: String,
}

impl ToolResult {
    pub fn ok(action: ToolAction, message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Ok,
            action,
            message: message.into(),
        }
    }
}

/// Trait implemented by anything that can execute tool calls.
pub trait ToolExecutor: Send + Sync {
    /// List all tools this executor provides.
    fn tools(&self) -> Vec<Tool>;

    /// Execute a single tool call and return the result.
    fn execute(&self, call: &ToolCall) -> crate::Result<ToolResult>;
}
