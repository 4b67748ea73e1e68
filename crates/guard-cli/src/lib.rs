//! # guard-cli — codec-guard Command-Line Interface
//!
//! A clap-based front end over `guard-schema`: decode documents against a
//! directory of JSON schemas and list what is registered.
//!
//! ## Subcommands
//!
//! - `decode` — decode JSON/YAML documents with a named schema
//! - `schemas` — list the schemas found in a directory
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from the handlers.
//! - Handlers write to a caller-supplied `Write`, so tests capture output.
//! - Decoding goes through `guard_core::decode`; failure text is the
//!   adapter's message, unchanged.

pub mod decode;
pub mod schemas;
