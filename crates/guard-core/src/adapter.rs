//! # Decode/Encode Adapter
//!
//! Bridges a [`Codec`]'s `Result`-typed validation to a decode function for
//! straight-line application code, with a matching encode pass-through.
//!
//! ## Failure Contract
//!
//! A rejected input yields [`DecodeError::Invalid`], whose message is exactly
//!
//! ```text
//! <input serialized as compact JSON> is not a valid <codec name>
//! ```
//!
//! No partial value is ever returned. If the input cannot itself be
//! serialized, the `serde_json` error is returned unchanged as
//! [`DecodeError::Serialization`].
//!
//! ## Rendering the Input
//!
//! The rendering matches `JSON.stringify`: object keys stay in input order
//! (`serde_json` is built with `preserve_order`), and floats with no
//! fractional part inside the exactly-representable integer range print
//! without a trailing `.0` (`42.0` renders as `42`).
//!
//! Both adapters are pure: no I/O, no logging, no retries, no state kept
//! between calls. They are safe to call from many threads at once whenever
//! the codec is `Sync`.

use serde::Serialize;

use crate::codec::Codec;
use crate::error::DecodeError;

/// Build a decode function for `codec`.
///
/// The codec is moved into the returned closure; pass `&codec` or an
/// `Arc` to keep using it elsewhere.
///
/// ```
/// use guard_core::{decode, JsonCodec, Positive};
/// use serde_json::json;
///
/// let positive = JsonCodec::<Positive>::new("Positive");
/// let parse = decode(&positive);
/// assert_eq!(parse(&json!(4)).unwrap().get(), 4.0);
/// assert_eq!(parse(&json!(-1)).unwrap_err().to_string(), "-1 is not a valid Positive");
/// ```
pub fn decode<C>(codec: C) -> impl Fn(&C::Input) -> Result<C::Decoded, DecodeError>
where
    C: Codec,
    C::Input: Serialize,
{
    move |input: &C::Input| decode_value(&codec, input)
}

/// Build an encode function for `codec`. Pure delegation to [`Codec::encode`].
pub fn encode<C>(codec: C) -> impl Fn(&C::Decoded) -> C::Encoded
where
    C: Codec,
{
    move |value: &C::Decoded| codec.encode(value)
}

/// Decode a single input with `codec`. Equivalent to `decode(codec)(input)`.
///
/// # Errors
///
/// [`DecodeError::Invalid`] if the codec rejects `input`;
/// [`DecodeError::Serialization`] if the rejected input cannot be
/// serialized for the failure message.
pub fn decode_value<C>(codec: &C, input: &C::Input) -> Result<C::Decoded, DecodeError>
where
    C: Codec + ?Sized,
    C::Input: Serialize,
{
    match codec.validate(input) {
        Ok(value) => Ok(value),
        Err(source) => Err(DecodeError::Invalid {
            input: render_input(input)?,
            codec: codec.name().to_string(),
            source,
        }),
    }
}

/// Largest integer every `f64` below it represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Compact JSON for a rejected input.
fn render_input<T: Serialize + ?Sized>(input: &T) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(input)?;
    normalize_integral_floats(&mut value);
    serde_json::to_string(&value)
}

fn normalize_integral_floats(value: &mut serde_json::Value) {
    use serde_json::Value;

    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
                    *n = serde_json::Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_integral_floats),
        Value::Object(map) => map.values_mut().for_each(normalize_integral_floats),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

/// Encode a single value with `codec`. Equivalent to `encode(codec)(value)`.
pub fn encode_value<C>(codec: &C, value: &C::Decoded) -> C::Encoded
where
    C: Codec + ?Sized,
{
    codec.encode(value)
}
