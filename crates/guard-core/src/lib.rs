//! # guard-core — Codecs and the Decode/Encode Adapter
//!
//! This crate holds the one piece of codec-guard every other crate builds
//! on: the [`Codec`] capability and the adapter that turns a codec's
//! `Result`-typed validation into a straight-line decode call.
//!
//! ## Key Design Principles
//!
//! 1. **Parse, don't validate.** A [`Codec`] turns untyped input into a
//!    strongly-typed value. Once decoded, the value carries its guarantees
//!    in its type; nothing downstream re-checks it.
//!
//! 2. **One failure message.** Every decode failure produced by
//!    [`adapter::decode`] renders as
//!    `<serialized input> is not a valid <codec name>`. Callers and tests can
//!    rely on that exact text.
//!
//! 3. **Validated newtypes instead of brands.** [`Positive`],
//!    [`NonEmptyString`] and [`Email`] have private fields and a validating
//!    `new()`; deserialization routes through the same constructor.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `guard-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The adapter performs no I/O and no logging.

pub mod adapter;
pub mod codec;
pub mod error;
pub mod json;
pub mod refined;

// Re-export primary types for ergonomic imports.
pub use adapter::{decode, decode_value, encode, encode_value};
pub use codec::Codec;
pub use error::{DecodeError, RefinementError, ValidationError, Violation};
pub use json::JsonCodec;
pub use refined::{Email, NonEmptyString, Positive};
