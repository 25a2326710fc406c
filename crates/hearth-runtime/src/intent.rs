//! Intent classification.
//!
//! Input is matched against an ordered table of matchers and the first one
//! that fires decides the intent. Order matters: "remember to turn on the
//! kitchen light" has no " is ", so Remember passes and Light picks it up.

use regex::Regex;
use std::sync::LazyLock;

static REMEMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"remember (?:my )?(.+?) is (.+)").expect("remember pattern is valid")
});

static TEMPERATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"set (?:the )?temperature to ([0-9]{1,2})(?:[^0-9]|$)")
        .expect("temperature pattern is valid")
});

static SCHEDULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"schedule.*([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("schedule pattern is valid")
});

/// Rooms the light matcher knows, checked in this order.
pub const ROOMS: [&str; 4] = ["kitchen", "bedroom", "living", "bathroom"];

/// Room reported when the text names none of [`ROOMS`].
pub const UNKNOWN_ROOM: &str = "unknown";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Remember { key: String, value: String },
    RecallAll,
    Light { room: &'static str },
    Temperature { temp: u8 },
    Schedule { date: String },
    Help,
    Fallback,
}

type Matcher = fn(&str) -> Option<Intent>;

/// Priority-ordered matcher table. First match wins.
const MATCHERS: &[Matcher] = &[
    match_remember,
    match_recall_all,
    match_light,
    match_temperature,
    match_schedule,
    match_help,
];

impl Intent {
    /// Classify already-normalized text (see [`normalize`]).
    pub fn classify(text: &str) -> Self {
        MATCHERS
            .iter()
            .find_map(|matcher| matcher(text))
            .unwrap_or(Intent::Fallback)
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Remember { .. } => "remember",
            Intent::RecallAll => "recall_all",
            Intent::Light { .. } => "light",
            Intent::Temperature { .. } => "temperature",
            Intent::Schedule { .. } => "schedule",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

/// Trim and lower-case raw user input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn match_remember(text: &str) -> Option<Intent> {
    let caps = REMEMBER_RE.captures(text)?;
    Some(Intent::Remember {
        key: caps[1].trim().to_string(),
        value: caps[2].trim().to_string(),
    })
}

fn match_recall_all(text: &str) -> Option<Intent> {
    (text.contains("what did i ask you to remember") || text.starts_with("what did i ask"))
        .then_some(Intent::RecallAll)
}

fn match_light(text: &str) -> Option<Intent> {
    if !text.contains("light") {
        return None;
    }
    let room = ROOMS
        .iter()
        .copied()
        .find(|room| text.contains(room))
        .unwrap_or(UNKNOWN_ROOM);
    Some(Intent::Light { room })
}

fn match_temperature(text: &str) -> Option<Intent> {
    let caps = TEMPERATURE_RE.captures(text)?;
    // At most two ASCII digits, always fits
    let temp = caps[1].parse().ok()?;
    Some(Intent::Temperature { temp })
}

fn match_schedule(text: &str) -> Option<Intent> {
    let caps = SCHEDULE_RE.captures(text)?;
    Some(Intent::Schedule {
        date: caps[1].to_string(),
    })
}

fn match_help(text: &str) -> Option<Intent> {
    (text.contains("help") || text.contains("commands")).then_some(Intent::Help)
}
