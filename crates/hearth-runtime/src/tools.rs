use hearth_core::{HearthError, Result, Tool, ToolAction, ToolCall, ToolExecutor, ToolResult};
use serde_json::{Value, json};
use tracing::debug;

/// Mock calendar served by `get_schedule`.
const SCHEDULES: &[(&str, &[&str])] = &[
    (
        "2025-12-01",
        &["09:00 Meeting with team", "13:00 Lunch with mentor"],
    ),
    ("2025-12-02", &["10:00 Doctor", "15:00 Project review"]),
];

const HELP_TEXT: &str = "I understand commands like:\n\
- 'turn on the kitchen light'\n\
- 'set temperature to 24'\n\
- 'what's my schedule on 2025-12-01'\n\
- 'remember my favorite drink is coffee'\n\
- 'what did I ask you to remember?'\n";

pub fn turn_on_light(room: &str) -> ToolResult {
    ToolResult::ok(
        ToolAction::TurnOnLight {
            room: room.to_string(),
        },
        format!("Light turned on in {room}."),
    )
}

pub fn set_temperature(temp: u8) -> ToolResult {
    ToolResult::ok(
        ToolAction::SetTemperature { temp },
        format!("Temperature set to {temp}°C."),
    )
}

/// Look up the events on `date` (`YYYY-MM-DD`). Unknown dates have no events.
pub fn get_schedule(date: &str) -> ToolResult {
    let events: Vec<String> = SCHEDULES
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, events)| events.iter().map(|e| e.to_string()).collect())
        .unwrap_or_default();
    let message = format!("{} event(s) on {date}.", events.len());
    ToolResult::ok(
        ToolAction::GetSchedule {
            date: date.to_string(),
            events,
        },
        message,
    )
}

pub fn help_text() -> &'static str {
    HELP_TEXT
}

/// The mock home-automation tools that ship with Hearth.
#[derive(Clone, Copy, Default)]
pub struct BuiltinTools;

impl BuiltinTools {
    pub fn new() -> Self {
        Self
    }

    pub fn has_tool(&self, name: &str) -> bool {
        matches!(name, "turn_on_light" | "set_temperature" | "get_schedule")
    }
}

impl ToolExecutor for BuiltinTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: "turn_on_light".into(),
                description: "Turn on the light in a room".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "room": {
                            "type": "string",
                            "description": "Room name, e.g. kitchen, bedroom, living, bathroom"
                        }
                    },
                    "required": ["room"]
                }),
                is_mutating: true,
            },
            Tool {
                name: "set_temperature".into(),
                description: "Set the thermostat, in degrees Celsius".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "temp": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Target temperature"
                        }
                    },
                    "required": ["temp"]
                }),
                is_mutating: true,
            },
            Tool {
                name: "get_schedule".into(),
                description: "List the calendar events on a date".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "date": {
                            "type": "string",
                            "description": "ISO date, YYYY-MM-DD"
                        }
                    },
                    "required": ["date"]
                }),
                is_mutating: false,
            },
        ]
    }

    fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        debug!(tool = %call.tool_name, args = %call.arguments, "executing tool");
        match call.tool_name.as_str() {
            "turn_on_light" => {
                let room = str_arg(call, "room")?;
                Ok(turn_on_light(room))
            }
            "set_temperature" => {
                let temp = call.arguments["temp"]
                    .as_u64()
                    .and_then(|t| u8::try_from(t).ok())
                    .ok_or_else(|| bad_args(call, "'temp' must be an integer from 0 to 255"))?;
                Ok(set_temperature(temp))
            }
            "get_schedule" => {
                let date = str_arg(call, "date")?;
                Ok(get_schedule(date))
            }
            other => Err(HearthError::ToolNotFound(other.to_string())),
        }
    }
}

fn str_arg<'a>(call: &'a ToolCall, name: &str) -> Result<&'a str> {
    call.arguments
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| bad_args(call, &format!("missing string argument '{name}'")))
}

fn bad_args(call: &ToolCall, reason: &str) -> HearthError {
    HearthError::ToolExecution {
        tool: call.tool_name.clone(),
        reason: reason.to_string(),
    }
}
