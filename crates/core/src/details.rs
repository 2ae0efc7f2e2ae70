use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single argument rejection reported by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputError {
    /// Dotted path of the offending argument, when the registry reports one.
    #[serde(default)]
    pub path: Option<String>,
    /// Human-readable rejection message.
    pub message: String,
    /// Stable error name, e.g. `Conflict` or `InvalidEmail`.
    pub name: String,
    /// Arbitrary structured context attached by the registry.
    #[serde(default)]
    pub context: Option<Value>,
}

impl InputError {
    /// Creates an input error without context.
    #[must_use]
    pub fn new(path: Option<&str>, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.map(str::to_owned),
            message: message.into(),
            name: name.into(),
            context: None,
        }
    }
}

impl Display for InputError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.path.as_deref() {
            Some(path) => write!(formatter, "{path}: {} ({})", self.message, self.name),
            None => write!(formatter, "{} ({})", self.message, self.name),
        }
    }
}

/// Failure of an otherwise valid registry operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationError {
    /// Human-readable failure message.
    pub message: String,
    /// Stable error name.
    pub name: String,
    /// Arbitrary structured context attached by the registry.
    #[serde(default)]
    pub context: Option<Value>,
}

impl OperationError {
    /// Creates an operation error without context.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: name.into(),
            context: None,
        }
    }
}

impl Display for OperationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.message, self.name)
    }
}

pub(crate) fn join_input_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
