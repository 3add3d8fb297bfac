//! Configuration file migrations.
//! Configs written by older releases miss keys added later
//! (`default_event` arrived in 0.3.0, `placeholder` in 0.3.2); this module
//! patches the YAML in place without touching values the user already set.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const MANAGED_KEYS: [(&str, &str); 3] = [
    ("default_event", ""),
    ("separator_char", "-"),
    ("placeholder", "--"),
];

fn load_yaml(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
}

/// Keys the current release expects but the file does not carry.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let doc = load_yaml(path)?;
    let Value::Mapping(map) = doc else {
        return Err(AppError::Config("config root is not a mapping".into()));
    };

    Ok(MANAGED_KEYS
        .iter()
        .filter(|(key, _)| !map.contains_key(&Value::String((*key).to_string())))
        .map(|(key, _)| *key)
        .collect())
}

/// Add every missing key with its default value.
/// Returns true if the file was rewritten.
pub fn ensure_config_fields(path: &Path) -> AppResult<bool> {
    let doc = load_yaml(path)?;
    let Value::Mapping(mut map) = doc else {
        return Err(AppError::Config("config root is not a mapping".into()));
    };

    let mut changed = false;
    for (key, default) in MANAGED_KEYS {
        let key = Value::String(key.to_string());
        if !map.contains_key(&key) {
            map.insert(key, Value::String(default.to_string()));
            changed = true;
        }
    }

    if changed {
        let yaml =
            serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(changed)
}
