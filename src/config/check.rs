//! Detect (and optionally fill in) keys missing from an existing config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Walk `defaults` and report every key absent from `current`, as dotted paths.
/// Missing keys are copied from `defaults` into `current`.
fn fill_missing(current: &mut Mapping, defaults: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_value) in defaults {
        let name = key.as_str().unwrap_or_default();
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match current.get_mut(key) {
            None => {
                out.push(dotted);
                current.insert(key.clone(), default_value.clone());
            }
            Some(Value::Mapping(inner)) => {
                if let Value::Mapping(inner_defaults) = default_value {
                    fill_missing(inner, inner_defaults, &dotted, out);
                }
            }
            Some(_) => {}
        }
    }
}

/// Compare the YAML content against the default configuration.
/// Returns the missing keys and the completed YAML document.
pub fn check_content(content: &str) -> AppResult<(Vec<String>, Value)> {
    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
    };

    let defaults =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;

    let mut missing = Vec::new();
    if let (Some(map), Value::Mapping(default_map)) = (yaml.as_mapping_mut(), &defaults) {
        fill_missing(map, default_map, "", &mut missing);
    } else {
        return Err(AppError::Config(
            "configuration root must be a mapping".to_string(),
        ));
    }

    Ok((missing, yaml))
}

/// Check the file at `path`; when `fix` is set, write the completed document back.
pub fn check_file(path: &Path, fix: bool) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (missing, completed) = check_content(&content)?;

    if fix && !missing.is_empty() {
        let serialized =
            serde_yaml::to_string(&completed).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(missing)
}
