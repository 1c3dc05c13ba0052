//! Structured error types shared across the topology crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TopoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (node ids, line numbers, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for topology generation, measurement and optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TopoError {
    /// Rejected before any work: impossible node count / degree combinations.
    #[error("invalid parameters: {0}")]
    InvalidParameters(ErrorInfo),
    /// A loaded edge list violates simplicity or references unknown nodes.
    #[error("malformed input: {0}")]
    MalformedInput(ErrorInfo),
    /// A proposed double-edge swap would break simplicity; the graph is untouched.
    #[error("swap rejected: {0}")]
    SwapRejected(ErrorInfo),
    /// The bounded swap retry loop found no admissible edge pair.
    #[error("no valid swap found: {0}")]
    NoValidSwapFound(ErrorInfo),
    /// The external partitioner failed or produced unparsable output.
    #[error("partitioner error: {0}")]
    Partitioner(ErrorInfo),
    /// Filesystem failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Serialization and configuration parsing errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TopoError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TopoError::InvalidParameters(info)
            | TopoError::MalformedInput(info)
            | TopoError::SwapRejected(info)
            | TopoError::NoValidSwapFound(info)
            | TopoError::Partitioner(info)
            | TopoError::Io(info)
            | TopoError::Serde(info) => info,
        }
    }

    /// Shorthand for an [`TopoError::InvalidParameters`] error.
    pub fn invalid(code: &str, message: impl Into<String>) -> Self {
        TopoError::InvalidParameters(ErrorInfo::new(code, message))
    }

    /// Wraps an I/O failure, recording the offending path.
    pub fn io(code: &str, err: impl ToString, path: impl Display) -> Self {
        TopoError::Io(ErrorInfo::new(code, err.to_string()).with_context("path", path))
    }

    /// Returns true when the error is recoverable by drawing another swap.
    pub fn is_swap_rejection(&self) -> bool {
        matches!(self, TopoError::SwapRejected(_))
    }
}
