//! # guard-schema — JSON Schema Codecs
//!
//! Turns JSON Schema documents into [`guard_core::Codec`]s, so that
//! schema-described data goes through the same decode/encode adapter as
//! serde-described data.
//!
//! ## Registry (`registry`)
//!
//! [`SchemaRegistry::load`] reads every `*.schema.json` file in a directory
//! and indexes it by filename. Cross-schema `$ref`s resolve against the
//! loaded set; nothing is fetched over the network.
//!
//! ## Codec (`codec`)
//!
//! [`SchemaCodec`] is a compiled Draft 2020-12 validator. It accepts and
//! yields `serde_json::Value`; a rejected value reports every violation
//! with its instance path.
//!
//! ## Documents (`document`)
//!
//! [`load_document`] reads `.json`, `.yaml` and `.yml` files into a JSON
//! value ready for decoding.
//!
//! ## Crate Policy
//!
//! - Depends only on `guard-core` internally.
//! - Schemas are compiled once and shared; `SchemaCodec` is `Send + Sync`.

pub mod codec;
pub mod document;
pub mod error;
pub mod registry;

pub use codec::SchemaCodec;
pub use document::{load_document, yaml_to_json_value};
pub use error::SchemaError;
pub use registry::SchemaRegistry;
