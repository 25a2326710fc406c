use std::sync::Arc;

use hearth_core::{AgentResponse, Result, ToolAction, ToolCall, ToolExecutor, ToolResult};
use hearth_memory::MemoryStore;
use serde_json::json;
use tracing::{debug, info};

use crate::intent::{Intent, normalize};
use crate::tools::{BuiltinTools, help_text};

pub const FALLBACK_TEXT: &str = "Sorry, I didn't understand. Type 'help' for examples.";

/// Turns one line of user text into a reply.
///
/// The agent keeps no conversation state of its own; the only thing that
/// carries across turns is the shared [`MemoryStore`].
pub struct Agent {
    memory: Arc<MemoryStore>,
    tools: Arc<dyn ToolExecutor>,
}

impl Agent {
    /// An agent backed by the built-in mock tools.
    pub fn new(memory: Arc<MemoryStore>) -> Self {
        Self::with_tools(memory, Arc::new(BuiltinTools::new()))
    }

    pub fn with_tools(memory: Arc<MemoryStore>, tools: Arc<dyn ToolExecutor>) -> Self {
        Self { memory, tools }
    }

    pub fn memory(&self) -> &Arc<MemoryStore> {
        &self.memory
    }

    /// Handle one input turn.
    ///
    /// Only the Remember intent can fail, when the fact cannot be written to disk.
    pub fn handle(&self, input: &str) -> Result<AgentResponse> {
        let text = normalize(input);
        let intent = Intent::classify(&text);
        debug!(intent = intent.name(), "classified input");

        match intent {
            Intent::Remember { key, value } => {
                self.memory.set(key.as_str(), value.as_str())?;
                info!(%key, "remembered fact");
                Ok(AgentResponse::text(format!("Saved '{key}' = '{value}'.")))
            }
            Intent::RecallAll => {
                let facts = self.memory.snapshot();
                Ok(AgentResponse::text(serde_json::to_string_pretty(&facts)?))
            }
            Intent::Light { room } => {
                let result = self.call("turn_on_light", json!({ "room": room }))?;
                Ok(AgentResponse::with_meta(result.message.clone(), result))
            }
            Intent::Temperature { temp } => {
                let result = self.call("set_temperature", json!({ "temp": temp }))?;
                Ok(AgentResponse::with_meta(result.message.clone(), result))
            }
            Intent::Schedule { date } => {
                let result = self.call("get_schedule", json!({ "date": date }))?;
                let text = match &result.action {
                    ToolAction::GetSchedule { events, .. } if !events.is_empty() => {
                        format!("Events on {date}: {}", events.join("; "))
                    }
                    _ => format!("No events found on {date}."),
                };
                Ok(AgentResponse::with_meta(text, result))
            }
            Intent::Help => Ok(AgentResponse::text(help_text())),
            Intent::Fallback => Ok(AgentResponse::text(FALLBACK_TEXT)),
        }
    }

    fn call(&self, tool_name: &str, arguments: serde_json::Value) -> Result<ToolResult> {
        let call = ToolCall::new(tool_name, arguments);
        let result = self.tools.execute(&call)?;
        debug!(tool = tool_name, message = %result.message, "tool finished");
        Ok(result)
    }
}
