//! Project-level configuration support
//!
//! Loads per-project configuration from the repository root.
//!
//! # Lookup Order
//!
//! 1. `vue-doctor.config.json`
//! 2. `vue-doctor.config.js` (recognised, never executed)
//! 3. `vue-doctor.config.mjs` (recognised, never executed)
//! 4. `.vue-doctor.json`
//! 5. the `"vue-doctor"` field of `package.json`
//!
//! # Configuration Format
//!
//! ```json
//! {
//!   "ignore": {
//!     "rules": ["vue/no-v-html", "no-console"],
//!     "files": ["src/legacy/"]
//!   }
//! }
//! ```
//!
//! The object is otherwise passed through untouched; callers decide what
//! keys mean.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Candidate config files, highest priority first
pub const CONFIG_FILENAMES: &[&str] = &[
    "vue-doctor.config.json",
    "vue-doctor.config.js",
    "vue-doctor.config.mjs",
    ".vue-doctor.json",
];

/// Manifest consulted when no dedicated config file exists
pub const MANIFEST_FILENAME: &str = "package.json";

/// Namespaced manifest field holding the config
pub const MANIFEST_FIELD: &str = "vue-doctor";

/// Errors that can occur while loading project configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest {}: expected a JSON object", .path.display())]
    InvalidManifest { path: PathBuf },
}

/// Project configuration as found on disk.
///
/// The shape is caller-defined, so this is a thin wrapper over the parsed
/// JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VueDoctorConfig(Value);

impl VueDoctorConfig {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Rule ids listed under `ignore.rules`
    pub fn ignored_rules(&self) -> Vec<&str> {
        self.ignore_list("rules")
    }

    /// Path entries listed under `ignore.files`
    pub fn ignored_files(&self) -> Vec<&str> {
        self.ignore_list("files")
    }

    fn ignore_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get("ignore")
            .and_then(|ignore| ignore.get(key))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for VueDoctorConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Load project configuration from `root`.
///
/// Returns `Ok(None)` when nothing is configured. Malformed JSON in any file
/// we try is an error, as is a `package.json` that is not an object; there
/// is no fallback past a broken file.
pub fn load_config(root: &Path) -> Result<Option<VueDoctorConfig>, ConfigError> {
    for filename in CONFIG_FILENAMES {
        let config_path = root.join(filename);
        if !config_path.exists() {
            continue;
        }
        if !filename.ends_with(".json") {
            debug!(
                "Skipping {}: only JSON config files are supported",
                config_path.display()
            );
            continue;
        }
        let value = read_json(&config_path)?;
        debug!("Loaded project config from {}", config_path.display());
        return Ok(Some(VueDoctorConfig(value)));
    }

    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        let manifest = read_json(&manifest_path)?;
        if !manifest.is_object() {
            return Err(ConfigError::InvalidManifest {
                path: manifest_path,
            });
        }
        if let Some(section) = manifest.get(MANIFEST_FIELD).filter(|v| is_truthy(v)) {
            debug!(
                "Loaded project config from \"{}\" in {}",
                MANIFEST_FIELD,
                manifest_path.display()
            );
            return Ok(Some(VueDoctorConfig(section.clone())));
        }
    }

    debug!("No project config found in {}", root.display());
    Ok(None)
}

fn read_json(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A manifest field counts as present only if it is truthy:
/// `null`, `false`, `0` and `""` are treated as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests;
