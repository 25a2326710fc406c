use std::path::{Path, PathBuf};

use hearth_core::{HearthError, Result};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info, warn};

/// The full fact mapping. Insertion order is preserved so the document on
/// disk reads in the order facts were first remembered.
pub type Facts = serde_json::Map<String, Value>;

/// How the store came up when it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No backing file yet; the store starts empty.
    Fresh,
    /// The backing file was parsed successfully.
    Loaded { facts: usize },
    /// The backing file exists but could not be parsed. The store starts
    /// empty and the next write replaces the file.
    Recovered { reason: String },
}

/// Key/value fact store mirrored to a single JSON document.
pub struct MemoryStore {
    path: PathBuf,
    facts: Mutex<Facts>,
    outcome: LoadOutcome,
}

impl MemoryStore {
    /// Open the store at `path`, loading whatever is already there.
    ///
    /// A missing file gives an empty store and a corrupt one gives an empty
    /// store plus a warning. Any other read failure is returned as an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        info!(?path, "opening memory store");

        let (facts, outcome) = match std::fs::read_to_string(&path) {
            Ok(raw) => match parse_document(&raw) {
                Ok(facts) => {
                    let count = facts.len();
                    if count > 0 {
                        info!(count, "loaded facts from disk");
                    }
                    (facts, LoadOutcome::Loaded { facts: count })
                }
                Err(reason) => {
                    warn!(?path, %reason, "memory store is corrupt, starting empty; the next write replaces it");
                    (Facts::new(), LoadOutcome::Recovered { reason })
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "no memory store yet, starting empty");
                (Facts::new(), LoadOutcome::Fresh)
            }
            Err(e) => {
                return Err(HearthError::Memory(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            facts: Mutex::new(facts),
            outcome,
        })
    }

    /// Insert or overwrite a fact, then rewrite the whole document.
    ///
    /// The in-memory value is kept even when the write fails.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let mut facts = self.facts.lock();
        facts.insert(key.clone(), value.into());
        debug!(%key, total = facts.len(), "fact stored");
        self.persist(&facts)
    }

    /// Look up a single fact.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.facts.lock().get(key).cloned()
    }

    /// A copy of every fact.
    pub fn snapshot(&self) -> Facts {
        self.facts.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.facts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.lock().is_empty()
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What happened when the store was opened.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    fn persist(&self, facts: &Facts) -> Result<()> {
        let body = serde_json::to_vec_pretty(facts)?;
        hearth_core::fs::write_atomic(&self.path, &body).map_err(|source| {
            warn!(path = ?self.path, error = %source, "failed to persist memory store");
            HearthError::MemoryWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}

fn parse_document(raw: &str) -> std::result::Result<Facts, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(facts)) => Ok(facts),
        Ok(other) => Err(format!("expected a JSON object, found {}", kind_of(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
