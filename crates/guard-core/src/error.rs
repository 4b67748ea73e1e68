//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used by codecs and the adapter. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Codecs report *why* an input failed as a [`ValidationError`]: one or
//!   more [`Violation`]s, each located by a JSON Pointer into the input.
//! - The adapter reports *that* an input failed as a [`DecodeError`], whose
//!   message names the offending input and the codec.
//! - Validated newtype constructors fail with [`RefinementError`].

use std::fmt;

use thiserror::Error;

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the input. Empty for the root.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// Violation located at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Violation of the input as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Why an input was rejected by a codec.
///
/// Always holds at least one violation; constructors enforce that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build an error from collected violations.
    ///
    /// Returns `None` when `violations` is empty, since an input with no
    /// violations is not a failure.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// A single root-level violation.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::root(message)],
        }
    }

    /// A single violation at `path`.
    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(path, message)],
        }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations (never the case once built).
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<RefinementError> for ValidationError {
    fn from(err: RefinementError) -> Self {
        Self::root(err.to_string())
    }
}

/// Error returned by the function produced by [`crate::adapter::decode`].
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The codec rejected the input.
    #[error("{input} is not a valid {codec}")]
    Invalid {
        /// The input, serialized as compact JSON.
        input: String,
        /// The codec's declared name.
        codec: String,
        /// The codec's account of what was wrong.
        #[source]
        source: ValidationError,
    },

    /// The rejected input could not itself be serialized for the message.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl DecodeError {
    /// The codec's violations, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            Self::Serialization(_) => None,
        }
    }
}

/// A validated newtype constructor rejected its value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is not a valid {type_name}: {reason}")]
pub struct RefinementError {
    /// Name of the newtype being constructed.
    pub type_name: &'static str,
    /// Display form of the rejected value.
    pub value: String,
    /// Which predicate failed.
    pub reason: &'static str,
}
