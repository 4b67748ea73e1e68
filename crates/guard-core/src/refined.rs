//! # Validated Newtypes
//!
//! Single-field newtypes whose only constructor enforces a predicate.
//! They stand in for branded types: a `Positive` cannot exist unless its
//! value passed the positivity check, so functions taking `Positive` never
//! re-check it.
//!
//! ## Validation
//!
//! - [`Positive`]: finite `f64` strictly greater than zero.
//! - [`NonEmptyString`]: at least one non-whitespace character.
//! - [`Email`]: `local@domain.tld` shape; one `@`, a dotted domain.
//!
//! `Serialize` writes the inner value unchanged. `Deserialize` reads the
//! inner value and routes it through `new()`, so [`crate::JsonCodec`] over
//! any of these types rejects invalid input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RefinementError;

/// Implements `Deserialize` for a newtype by deserializing the inner type
/// and passing it through `new()`, so invalid values are rejected at
/// deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident, $inner:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <$inner>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Numeric
// ---------------------------------------------------------------------------

/// A finite number strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Positive(f64);

impl_validating_deserialize!(Positive, f64);

impl Positive {
    /// Create a positive number, rejecting zero, negatives, NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] naming the failed predicate.
    pub fn new(value: f64) -> Result<Self, RefinementError> {
        let reason = if !value.is_finite() {
            "must be finite"
        } else if value <= 0.0 {
            "must be greater than zero"
        } else {
            return Ok(Self(value));
        };
        Err(RefinementError {
            type_name: "Positive",
            value: value.to_string(),
            reason,
        })
    }

    /// The inner value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// String-based
// ---------------------------------------------------------------------------

/// A string with at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NonEmptyString(String);

impl_validating_deserialize!(NonEmptyString, String);

impl NonEmptyString {
    /// Create a non-empty string. The value is stored as given, not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] if `value` is empty or all whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, RefinementError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(RefinementError {
                type_name: "NonEmptyString",
                value: format!("{s:?}"),
                reason: "must contain a non-whitespace character",
            });
        }
        Ok(Self(s))
    }

    /// Access the string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An e-mail address of the form `local@domain.tld`.
///
/// # Validation
///
/// - Exactly one `@`
/// - Local part non-empty, no whitespace
/// - Domain contains a `.` that is neither its first nor its last character
///
/// This is a shape check, not RFC 5322 parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl_validating_deserialize!(Email, String);

impl Email {
    /// Create an e-mail address, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] naming the failed rule.
    pub fn new(value: impl Into<String>) -> Result<Self, RefinementError> {
        let s = value.into();
        match Self::check(&s) {
            Ok(()) => Ok(Self(s)),
            Err(reason) => Err(RefinementError {
                type_name: "Email",
                value: format!("{s:?}"),
                reason,
            }),
        }
    }

    fn check(s: &str) -> Result<(), &'static str> {
        if s.chars().any(char::is_whitespace) {
            return Err("must not contain whitespace");
        }
        let (local, domain) = match s.split_once('@') {
            Some(parts) => parts,
            None => return Err("must contain '@'"),
        };
        if domain.contains('@') {
            return Err("must contain exactly one '@'");
        }
        if local.is_empty() {
            return Err("local part must not be empty");
        }
        let dot_inside = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
        if !dot_inside {
            return Err("domain must contain an inner '.'");
        }
        Ok(())
    }

    /// Access the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, d)| d)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_accepts_and_rejects() {
        assert_eq!(Positive::new(4.0).unwrap().get(), 4.0);
        assert_eq!(Positive::new(f64::MIN_POSITIVE).unwrap().get(), f64::MIN_POSITIVE);

        let err = Positive::new(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "-1 is not a valid Positive: must be greater than zero");
        assert!(Positive::new(0.0).is_err());
        assert!(Positive::new(-0.0).is_err());
        assert_eq!(Positive::new(f64::NAN).unwrap_err().reason, "must be finite");
        assert!(Positive::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_positive_serde() {
        let p: Positive = serde_json::from_str("4").unwrap();
        assert_eq!(p.get(), 4.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), "4.0");
        assert!(serde_json::from_str::<Positive>("-1").is_err());
        assert!(serde_json::from_str::<Positive>("\"4\"").is_err());
    }

    #[test]
    fn test_non_empty_string() {
        let s = NonEmptyString::new("  John ").unwrap();
        assert_eq!(s.as_str(), "  John ");
        assert_eq!(s.to_string(), "  John ");
        assert!(NonEmptyString::new("").is_err());
        assert!(NonEmptyString::new(" \t\n").is_err());
        assert!(serde_json::from_str::<NonEmptyString>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<NonEmptyString>("\"x\"").unwrap().into_inner(),
            "x"
        );
    }

    #[test]
    fn test_email_valid() {
        for ok in ["john@example.com", "a.b+c@sub.example.org", "x@y.io"] {
            let email = Email::new(ok).unwrap_or_else(|e| panic!("{ok}: {e}"));
            assert_eq!(email.as_str(), ok);
        }
        assert_eq!(Email::new("john@example.com").unwrap().domain(), "example.com");
    }

    #[test]
    fn test_email_invalid() {
        for bad in [
            "",
            "john",
            "@example.com",
            "john@",
            "john@example",
            "john@.com",
            "john@example.",
            "a@b@c.com",
            "john doe@example.com",
        ] {
            assert!(Email::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_email_deserialize_routes_through_new() {
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
        let e: Email = serde_json::from_str("\"j@x.io\"").unwrap();
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"j@x.io\"");
    }
}
