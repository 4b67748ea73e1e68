//! # Codec Capability
//!
//! A [`Codec`] knows how to validate raw input into a typed value and how
//! to serialize that value back to its encoded representation. Codecs are
//! built once and treated as immutable, shareable values.
//!
//! The adapter in [`crate::adapter`] only ever calls [`Codec::validate`],
//! [`Codec::encode`] and [`Codec::name`]; it never constructs or mutates a
//! codec.

use std::sync::Arc;

use crate::error::ValidationError;

/// Validate `Input` into `Decoded`, and encode `Decoded` into `Encoded`.
///
/// # Associated types
///
/// | Type | Role |
/// |------|------|
/// | `Decoded` | the validated, strongly-typed value |
/// | `Encoded` | the serialized representation produced by `encode` |
/// | `Input` | the raw input accepted by `validate` |
///
/// `Input` may be unsized, so a codec can accept `str` or `[u8]` directly.
pub trait Codec {
    /// The validated output type.
    type Decoded;
    /// The encoded representation.
    type Encoded;
    /// The raw input accepted by [`Codec::validate`].
    type Input: ?Sized;

    /// Human-readable name, used in decode failure messages.
    fn name(&self) -> &str;

    /// Check `input` and produce the decoded value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing every violation found.
    fn validate(&self, input: &Self::Input) -> Result<Self::Decoded, ValidationError>;

    /// Encode an already-valid value. Assumed total.
    fn encode(&self, value: &Self::Decoded) -> Self::Encoded;
}

impl<C: Codec + ?Sized> Codec for &C {
    type Decoded = C::Decoded;
    type Encoded = C::Encoded;
    type Input = C::Input;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, input: &Self::Input) -> Result<Self::Decoded, ValidationError> {
        (**self).validate(input)
    }

    fn encode(&self, value: &Self::Decoded) -> Self::Encoded {
        (**self).encode(value)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    type Decoded = C::Decoded;
    type Encoded = C::Encoded;
    type Input = C::Input;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, input: &Self::Input) -> Result<Self::Decoded, ValidationError> {
        (**self).validate(input)
    }

    fn encode(&self, value: &Self::Decoded) -> Self::Encoded {
        (**self).encode(value)
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    type Decoded = C::Decoded;
    type Encoded = C::Encoded;
    type Input = C::Input;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, input: &Self::Input) -> Result<Self::Decoded, ValidationError> {
        (**self).validate(input)
    }

    fn encode(&self, value: &Self::Decoded) -> Self::Encoded {
        (**self).encode(value)
    }
}
