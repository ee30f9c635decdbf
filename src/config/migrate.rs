//! Configuration file upgrades: detect keys added in newer releases and
//! fill them with their defaults, leaving existing values untouched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn defaults_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// Recursively copy keys from `defaults` missing in `target`.
/// Returns dotted names of the keys that were added.
fn merge_missing(target: &mut Mapping, defaults: &Mapping, prefix: &str, added: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default_val.clone());
                added.push(name);
            }
            Some(Value::Mapping(sub)) => {
                if let Value::Mapping(sub_defaults) = default_val {
                    merge_missing(sub, sub_defaults, &name, added);
                }
            }
            Some(_) => {}
        }
    }
}

/// Keys a newer release expects but `path` does not define.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut missing = Vec::new();
    merge_missing(&mut current, &defaults_mapping()?, "", &mut missing);
    Ok(missing)
}

/// Add any missing keys to `path` with default values.
/// Returns the keys that were added (empty → file left unchanged).
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();
    merge_missing(&mut current, &defaults_mapping()?, "", &mut added);

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }

    Ok(added)
}
