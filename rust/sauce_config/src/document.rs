//! Loading and attribute extraction for the configuration document.

use std::path::Path;

use serde_json::{Map, Value};

use crate::SauceConfigError;

/// Returns the file name of `path` for use in error messages.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads `path` and parses it as a top-level JSON object.
pub(crate) fn load_document(path: &Path) -> Result<Map<String, Value>, SauceConfigError> {
    let file = display_name(path);
    let content = std::fs::read_to_string(path).map_err(|source| SauceConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|source| SauceConfigError::ParseConfig { file: file.clone(), source })?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(SauceConfigError::NotAnObject { file }),
    }
}

/// Returns the value of `key` in `object`.
///
/// A key is valid only if it is present, not `null`, a JSON string, and not
/// blank. Any violation is reported against `key` and `file`.
pub(crate) fn attribute_value(
    object: &Map<String, Value>,
    key: &str,
    file: &str,
) -> Result<String, SauceConfigError> {
    if let Some(Value::String(value)) = object.get(key) {
        if !value.trim().is_empty() {
            return Ok(value.clone());
        }
    }
    Err(SauceConfigError::InvalidAttribute {
        key: key.to_string(),
        file: file.to_string(),
    })
}
