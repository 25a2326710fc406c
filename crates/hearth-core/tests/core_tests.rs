#[cfg(test)]
mod tests {
    use hearth_core::*;

    // ── Tool result tests ──────────────────────────────────────

    #[test]
    fn test_light_result_serializes_flat() {
        let result = ToolResult::ok(
            ToolAction::TurnOnLight {
                room: "kitchen".into(),
            },
            "Light turned on in kitchen.",
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "ok",
                "action": "turn_on_light",
                "room": "kitchen",
                "message": "Light turned on in kitchen.",
            })
        );
    }

    #[test]
    fn test_light_result_field_order() {
        let result = ToolResult::ok(
            ToolAction::TurnOnLight {
                room: "bedroom".into(),
            },
            "Light turned on in bedroom.",
        );
        let json = serde_json::to_string(&result).unwrap();
        let status = json.find("\"status\"").unwrap();
        let action = json.find("\"action\"").unwrap();
        let message = json.find("\"message\"").unwrap();
        assert!(status < action);
        assert!(action < message);
    }

    #[test]
    fn test_schedule_result_deserialize() {
        let json = r#"{
            "status": "ok",
            "action": "get_schedule",
            "date": "2025-12-02",
            "events": ["10:00 Doctor"],
            "message": "1 event(s) on 2025-12-02."
        }"#;
        let result: ToolResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status, ToolStatus::Ok);
        match result.action {
            ToolAction::GetSchedule { date, events } => {
                assert_eq!(date, "2025-12-02");
                assert_eq!(events, vec!["10:00 Doctor".to_string()]);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_temperature_result_has_temp_field() {
        let result = ToolResult::ok(ToolAction::SetTemperature { temp: 21 }, "Temperature set to 21°C.");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["action"], "set_temperature");
        assert_eq!(value["temp"], 21);
    }

    // ── Agent response tests ───────────────────────────────────

    #[test]
    fn test_response_without_meta_omits_field() {
        let resp = AgentResponse::text("hello");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_response_with_meta() {
        let meta = ToolResult::ok(ToolAction::SetTemperature { temp: 5 }, "Temperature set to 5°C.");
        let resp = AgentResponse::with_meta("Temperature set to 5°C.", meta.clone());
        assert_eq!(resp.meta, Some(meta));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["meta"]["temp"], 5);
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = HearthError::Memory("store is unreadable".into());
        assert!(err.to_string().contains("store is unreadable"));
    }

    #[test]
    fn test_error_tool_execution() {
        let err = HearthError::ToolExecution {
            tool: "set_temperature".into(),
            reason: "missing 'temp'".into(),
        };
        let s = err.to_string();
        assert!(s.contains("set_temperature"));
        assert!(s.contains("missing 'temp'"));
    }

    #[test]
    fn test_error_memory_write_names_path() {
        let err = HearthError::MemoryWrite {
            path: "/readonly/memory_store.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let s = err.to_string();
        assert!(s.contains("/readonly/memory_store.json"));
        assert!(s.contains("denied"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HearthError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    // ── Atomic write tests ─────────────────────────────────────

    #[test]
    fn test_write_atomic_creates_parent_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        fs::write_atomic(&path, b"{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.path().join("nested").join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write_atomic(&path, b"first, much longer content").unwrap();
        fs::write_atomic(&path, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
