//! Typed access to untyped tool arguments.
//!
//! Tool calls arrive with a JSON object of arguments. Handlers pull each
//! declared parameter out through [`Arguments`], which either yields a typed
//! value or an [`ArgumentError`] that the handler reports back to the client.

use rmcp::model::JsonObject;
use serde_json::Value;
use thiserror::Error;

/// Validation failure for a single named argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("required argument \"{name}\" not found")]
    Missing { name: String },

    #[error("argument \"{name}\" is not a {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
}

impl ArgumentError {
    fn missing(name: &str) -> Self {
        Self::Missing {
            name: name.to_string(),
        }
    }

    fn mismatch(name: &str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected,
        }
    }
}

/// Arguments of one tool call.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    inner: JsonObject,
}

impl Arguments {
    pub fn new(inner: JsonObject) -> Self {
        Self { inner }
    }

    /// Build from an optional JSON value; anything but an object is empty.
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self::new(map),
            _ => Self::default(),
        }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        // JSON null counts as absent.
        self.inner.get(name).filter(|v| !v.is_null())
    }

    /// A required string argument.
    pub fn require_string(&self, name: &str) -> Result<String, ArgumentError> {
        match self.get(name) {
            None => Err(ArgumentError::missing(name)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ArgumentError::mismatch(name, "string")),
        }
    }

    /// A required numeric argument.
    ///
    /// JSON numbers are taken as-is; strings are accepted when they parse as
    /// a finite `f64`.
    pub fn require_number(&self, name: &str) -> Result<f64, ArgumentError> {
        let parsed = match self.get(name) {
            None => return Err(ArgumentError::missing(name)),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        parsed
            .filter(|n| n.is_finite())
            .ok_or_else(|| ArgumentError::mismatch(name, "number"))
    }
}

impl From<JsonObject> for Arguments {
    fn from(inner: JsonObject) -> Self {
        Self::new(inner)
    }
}
