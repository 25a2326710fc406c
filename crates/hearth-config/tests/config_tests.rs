#[cfg(test)]
mod tests {
    use hearth_config::ConfigLoader;
    use hearth_core::HearthError;
    use hearth_config::schema::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_memory_config_defaults() {
        let config = MemoryConfig::default();
        assert_eq!(config.path, PathBuf::from("memory_store.json"));
    }

    #[test]
    fn test_evaluation_config_defaults() {
        let config = EvaluationConfig::default();
        assert_eq!(
            config.scenarios_path,
            Path::new("evaluation").join("user_simulation_tests.json")
        );
        assert_eq!(
            config.results_path,
            Path::new("evaluation").join("eval_results.json")
        );
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_defaults_validate_cleanly() {
        let warnings = HearthConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    // ── TOML roundtrip tests ───────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = HearthConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: HearthConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.memory.path, config.memory.path);
        assert_eq!(restored.evaluation.results_path, config.evaluation.results_path);
        assert_eq!(restored.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[memory]
path = "/var/lib/hearth/facts.json"
"#;
        let config: HearthConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.memory.path, PathBuf::from("/var/lib/hearth/facts.json"));
        // Defaults should fill in
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(
            config.evaluation.scenarios_path,
            Path::new("evaluation").join("user_simulation_tests.json")
        );
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_empty_memory_path_is_error() {
        let mut config = HearthConfig::default();
        config.memory.path = PathBuf::new();
        match config.validate() {
            Err(HearthError::ConfigValidation { field, reason }) => {
                assert_eq!(field, "memory.path");
                assert_eq!(reason, "path is empty");
            }
            other => panic!("expected ConfigValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_results_overwriting_scenarios_is_error() {
        let mut config = HearthConfig::default();
        config.evaluation.results_path = config.evaluation.scenarios_path.clone();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            HearthError::ConfigValidation { ref field, .. } if field == "evaluation.results_path"
        ));
    }

    #[test]
    fn test_unknown_log_level_is_warning() {
        let mut config = HearthConfig::default();
        config.logging.level = "loud".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "logging.level");
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
        assert!(warnings[0].to_string().contains("loud"));
    }

    // ── Override tests ─────────────────────────────────────────

    #[test]
    fn test_overrides_replace_fields() {
        let config = ConfigLoader::apply_overrides(HearthConfig::default(), |name| match name {
            "HEARTH_MEMORY_PATH" => Some("/tmp/other.json".into()),
            "HEARTH_LOG_LEVEL" => Some("debug".into()),
            _ => None,
        });
        assert_eq!(config.memory.path, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_overrides_absent_keep_config() {
        let config = ConfigLoader::apply_overrides(HearthConfig::default(), |_| None);
        assert_eq!(config.memory.path, PathBuf::from("memory_store.json"));
        assert_eq!(config.logging.level, "warn");
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hearth.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[evaluation]
scenarios_path = "scripts/scenarios.json"
results_path = "out/results.json"

[logging]
format = "json"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.evaluation.scenarios_path, PathBuf::from("scripts/scenarios.json"));
        assert_eq!(config.evaluation.results_path, PathBuf::from("out/results.json"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(loader.path(), config_path.as_path());
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("absent.toml");
        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert_eq!(
            loader.get().evaluation.results_path,
            Path::new("evaluation").join("eval_results.json")
        );
    }

    #[test]
    fn test_config_loader_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hearth.toml");
        std::fs::write(&config_path, "[memory\npath = ").unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_config_loader_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hearth.toml");
        std::fs::write(
            &config_path,
            r#"
[evaluation]
scenarios_path = "same.json"
results_path = "same.json"
"#,
        )
        .unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(matches!(err, HearthError::ConfigValidation { .. }));
        assert!(err.to_string().contains("results would overwrite the scenario file"));
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = HearthConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: HearthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.memory.path, config.memory.path);
    }
}
