use hearth_core::HearthError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `hearth.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    pub memory: MemoryConfig,
    pub evaluation: EvaluationConfig,
    pub logging: LoggingConfig,
}

// ── Memory ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Path to the JSON document backing the fact store.
    pub path: PathBuf,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("memory_store.json"),
        }
    }
}

// ── Evaluation ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Scripted scenarios replayed by `run_eval`.
    pub scenarios_path: PathBuf,
    /// Where transcripts are written, overwritten on every run.
    pub results_path: PathBuf,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            scenarios_path: PathBuf::from("evaluation").join("user_simulation_tests.json"),
            results_path: PathBuf::from("evaluation").join("eval_results.json"),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const VALID_LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

impl HearthConfig {
    /// Validate the config and return the non-fatal warnings.
    /// Any Error-severity finding becomes `HearthError::ConfigValidation`.
    pub fn validate(&self) -> hearth_core::Result<Vec<ConfigWarning>> {
        let mut warnings = Vec::new();

        // ── Paths ───
        let paths = [
            ("memory.path", &self.memory.path),
            ("evaluation.scenarios_path", &self.evaluation.scenarios_path),
            ("evaluation.results_path", &self.evaluation.results_path),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                warnings.push(ConfigWarning {
                    field: field.into(),
                    message: "path is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: Some("Set a file path, e.g. 'memory_store.json'".into()),
                });
            }
        }

        if !self.evaluation.results_path.as_os_str().is_empty()
            && self.evaluation.scenarios_path == self.evaluation.results_path
        {
            warnings.push(ConfigWarning {
                field: "evaluation.results_path".into(),
                message: "results would overwrite the scenario file".into(),
                severity: WarningSeverity::Error,
                hint: Some("Point results_path at a different file".into()),
            });
        }

        if self.memory.path == self.evaluation.results_path
            || self.memory.path == self.evaluation.scenarios_path
        {
            warnings.push(ConfigWarning {
                field: "memory.path".into(),
                message: "memory store shares a file with the evaluation runner".into(),
                severity: WarningSeverity::Warning,
                hint: None,
            });
        }

        // ── Logging format ───
        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_FORMATS.join(", "))),
            });
        }

        // ── Logging level ───
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_LEVELS.join(", "))),
            });
        }

        // Check for hard errors
        let (errors, warnings): (Vec<_>, Vec<_>) = warnings
            .into_iter()
            .partition(|w| w.severity == WarningSeverity::Error);

        if !errors.is_empty() {
            let field = errors
                .iter()
                .map(|w| w.field.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let reason = errors
                .iter()
                .map(|w| w.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(HearthError::ConfigValidation { field, reason });
        }

        Ok(warnings)
    }
}
