use crate::error::RiskError;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 1;
const SETTINGS_DIR: &str = ".riskgalaxy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOrder {
    Provider,
    Score,
}

#[derive(Debug, Clone)]
pub struct EffectiveSettings {
    pub signals_file: Option<PathBuf>,
    pub trend_seed: Option<u64>,
    pub log_level: log::LevelFilter,
    pub output_order: OutputOrder,
}

pub fn load_effective_settings(workspace_path: &Path) -> Result<EffectiveSettings, RiskError> {
    let settings = load_settings_from_disk(workspace_path)?;

    let signals_file = settings
        .get("signalsFile")
        .and_then(Value::as_str)
        .map(|raw| {
            let path = PathBuf::from(raw);
            if path.is_absolute() {
                path
            } else {
                workspace_path.join(path)
            }
        });

    let log_level = settings
        .get("logLevel")
        .and_then(Value::as_str)
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    let output_order = match settings.get("outputOrder").and_then(Value::as_str) {
        Some("score") => OutputOrder::Score,
        _ => OutputOrder::Provider,
    };

    Ok(EffectiveSettings {
        signals_file,
        trend_seed: settings.get("trendSeed").and_then(Value::as_u64),
        log_level,
        output_order,
    })
}

pub fn load_settings_from_disk(workspace_path: &Path) -> Result<Value, RiskError> {
    let path = settings_path(workspace_path);
    ensure_settings_dir(workspace_path)?;

    let original = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| RiskError::Settings(format!("Failed to read settings.json: {e}")))?;
        serde_json::from_str::<Value>(&raw).unwrap_or_else(|_| json!({}))
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        write_settings_file(&path, &migrated)?;
    }

    Ok(migrated)
}

pub fn save_settings_to_disk(workspace_path: &Path, settings: Value) -> Result<Value, RiskError> {
    let path = settings_path(workspace_path);
    ensure_settings_dir(workspace_path)?;

    let mut merged = load_settings_from_disk(workspace_path).unwrap_or_else(|_| default_settings());
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(workspace_path: &Path) -> PathBuf {
    workspace_path.join(SETTINGS_DIR).join("settings.json")
}

fn ensure_settings_dir(workspace_path: &Path) -> Result<(), RiskError> {
    fs::create_dir_all(workspace_path.join(SETTINGS_DIR))
        .map_err(|e| RiskError::Settings(format!("Failed to create {SETTINGS_DIR} directory: {e}")))
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<(), RiskError> {
    let raw = serde_json::to_string_pretty(settings)
        .map_err(|e| RiskError::Settings(format!("Failed to serialize settings: {e}")))?;
    fs::write(path, raw).map_err(|e| RiskError::Settings(format!("Failed to write settings.json: {e}")))
}

fn migrate_settings(input: Value) -> Value {
    let defaults = default_settings();
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &defaults);
    sanitize_settings(&mut out);
    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "signalsFile": null,
        "trendSeed": null,
        "logLevel": "info",
        "outputOrder": "provider"
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    sanitize_enum(obj, "logLevel", &["error", "warn", "info", "debug", "trace"], "info");
    sanitize_enum(obj, "outputOrder", &["provider", "score"], "provider");

    // Null means "unset" for both optional keys.
    if !obj.get("trendSeed").is_some_and(Value::is_u64) {
        obj.insert("trendSeed".to_string(), Value::Null);
    }
    let signals_file_ok = obj
        .get("signalsFile")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !signals_file_ok {
        obj.insert("signalsFile".to_string(), Value::Null);
    }
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_defaults_and_stamps_schema_version() {
        let migrated = migrate_settings(json!({ "outputOrder": "score" }));

        assert_eq!(migrated["outputOrder"], json!("score"));
        assert_eq!(migrated["logLevel"], json!("info"));
        assert_eq!(migrated["trendSeed"], Value::Null);
        assert_eq!(migrated["schema_version"], json!(SETTINGS_SCHEMA_VERSION));
    }

    #[test]
    fn sanitizes_bad_values() {
        let migrated = migrate_settings(json!({
            "logLevel": "verbose",
            "outputOrder": 3,
            "trendSeed": -4,
            "signalsFile": "   "
        }));

        assert_eq!(migrated["logLevel"], json!("info"));
        assert_eq!(migrated["outputOrder"], json!("provider"));
        assert_eq!(migrated["trendSeed"], Value::Null);
        assert_eq!(migrated["signalsFile"], Value::Null);
    }

    #[test]
    fn non_object_input_is_replaced_by_defaults() {
        assert_eq!(migrate_settings(json!([1, 2, 3])), default_settings());
    }

    #[test]
    fn merges_partial_settings_without_losing_existing_values() {
        let mut existing = default_settings();
        merge_settings(&mut existing, &json!({ "trendSeed": 42 }));
        let migrated = migrate_settings(existing);

        assert_eq!(migrated["trendSeed"], json!(42));
        assert_eq!(migrated["outputOrder"], json!("provider"));
    }

    #[test]
    fn effective_settings_resolve_relative_signal_file() {
        let dir = tempfile::tempdir().unwrap();
        save_settings_to_disk(
            dir.path(),
            json!({ "signalsFile": "data/signals.json", "logLevel": "debug", "trendSeed": 9 }),
        )
        .unwrap();

        let effective = load_effective_settings(dir.path()).unwrap();
        assert_eq!(effective.signals_file, Some(dir.path().join("data/signals.json")));
        assert_eq!(effective.log_level, log::LevelFilter::Debug);
        assert_eq!(effective.trend_seed, Some(9));
        assert_eq!(effective.output_order, OutputOrder::Provider);
    }

    #[test]
    fn first_load_writes_defaults_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        load_settings_from_disk(dir.path()).unwrap();

        let raw = fs::read_to_string(settings_path(dir.path())).unwrap();
        let on_disk: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, default_settings());
    }
}
