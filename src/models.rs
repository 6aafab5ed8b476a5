//! Core data models for vue-doctor
//!
//! Diagnostics are produced by upstream lint passes and handed to us as JSON.
//! We never validate their shape beyond what scoring needs: anything we do
//! not recognise is carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity of a diagnostic
///
/// Upstream tools only emit `error` and `warning`, but any other string is
/// accepted and kept verbatim so it can be weighted with the default penalty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum Severity {
    Error,
    Warning,
    Other(String),
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Other(String::new())
    }
}

impl Severity {
    /// Lowercase wire name
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            other => Severity::Other(other.to_string()),
        }
    }
}

// Non-string severities (numbers, null, objects) fall back to `Other` so a
// malformed record still gets scored instead of failing the whole list.
impl From<Value> for Severity {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Severity::from(s.as_str()),
            Value::Null => Severity::default(),
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(default)]
    pub severity: Severity,
    /// Explicit penalty override; takes precedence over the severity weight
    #[serde(
        default,
        deserialize_with = "lenient_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Everything else the producer attached
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// A weight that is not a number is treated as absent rather than rejected.
fn lenient_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_f64))
}

impl Diagnostic {
    /// Build a bare diagnostic with only a severity set
    pub fn with_severity(severity: impl Into<Severity>) -> Self {
        Self {
            severity: severity.into(),
            ..Default::default()
        }
    }

    /// `plugin/rule` when both are known, otherwise just the rule
    pub fn rule_id(&self) -> Option<String> {
        match (&self.plugin, &self.rule) {
            (Some(plugin), Some(rule)) => Some(format!("{plugin}/{rule}")),
            (None, Some(rule)) => Some(rule.clone()),
            _ => None,
        }
    }
}

impl From<&str> for Diagnostic {
    fn from(severity: &str) -> Self {
        Diagnostic::with_severity(severity)
    }
}
