//! Validation results.
//!
//! A validation never panics and never returns `Err`: it returns a
//! [`ValidationResult`], whose serialized form follows the Standard Schema
//! result convention so other tooling can consume it directly:
//!
//! - success: `{"value": <input>}`
//! - failure: `{"issues": [{"message": "..."}]}`

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::types::SchemaKind;
use crate::value::{JsType, Value};

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable error message
    pub message: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create a kind mismatch issue.
    pub fn mismatch(expected: SchemaKind, actual: JsType) -> Self {
        Self::new(format!("Expected {} but got {}", expected, actual))
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of [`Schema::validate`](crate::Schema::validate).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationResult {
    /// The input matched; it is handed back unchanged.
    Success { value: Value },
    /// The input did not match.
    Failure { issues: Vec<Issue> },
}

impl ValidationResult {
    /// Create a successful result
    pub fn success(value: Value) -> Self {
        Self::Success { value }
    }

    /// Create a failed result from a list of issues
    pub fn failure(issues: Vec<Issue>) -> Self {
        Self::Failure { issues }
    }

    /// Compare the runtime category of `input` with `kind`.
    ///
    /// This is the whole validation algorithm shared by every schema node.
    pub fn check_kind(kind: SchemaKind, input: Value) -> Self {
        let actual = input.type_of();
        if kind.matches(actual) {
            trace!(kind = %kind, "Validation passed");
            Self::success(input)
        } else {
            debug!(expected = %kind, actual = %actual, "Validation failed");
            Self::failure(vec![Issue::mismatch(kind, actual)])
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The validated value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The issues (empty on success).
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { issues } => issues,
        }
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<Value, ValidationError> {
        match self {
            Self::Success { value } => Ok(value),
            Self::Failure { issues } => Err(ValidationError { issues }),
        }
    }
}

/// Error form of a failed [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

fn join_messages(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
