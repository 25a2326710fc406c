use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schema::HearthConfig;

/// Loads the Hearth configuration from disk.
pub struct ConfigLoader {
    config: HearthConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > HEARTH_CONFIG env > ./hearth.toml > ~/.hearth/hearth.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("HEARTH_CONFIG") {
            return PathBuf::from(p);
        }
        let local = PathBuf::from("hearth.toml");
        if local.exists() {
            return local;
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hearth")
            .join("hearth.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> hearth_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            HearthConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_overrides(config, |name| std::env::var(name).ok());

        // Validate config — log warnings, fail on errors
        for w in config.validate()? {
            warn!("{}", w);
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Parse a `hearth.toml` document.
    pub fn parse(raw: &str, origin: &Path) -> hearth_core::Result<HearthConfig> {
        toml::from_str::<HearthConfig>(raw).map_err(|e| {
            hearth_core::HearthError::Config(format!(
                "failed to parse {}: {}",
                origin.display(),
                e
            ))
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> HearthConfig {
        self.config.clone()
    }

    /// Path the config was resolved from (it may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply overrides (HEARTH_MEMORY_PATH, HEARTH_LOG_LEVEL) read through `lookup`.
    pub fn apply_overrides(
        mut config: HearthConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> HearthConfig {
        if let Some(v) = lookup("HEARTH_MEMORY_PATH") {
            config.memory.path = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEARTH_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
