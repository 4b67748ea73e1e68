//! Errors raised while loading schemas, compiling codecs and reading documents.
//!
//! Validation failures are not here: a rejected value is a
//! [`guard_core::ValidationError`] from [`guard_core::Codec::validate`].

use thiserror::Error;

/// Error loading or compiling a schema, or loading a document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A schema file or directory could not be read or parsed.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoad {
        /// Schema filename or directory.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// No schema with this name is registered.
    #[error("schema '{schema_name}' not found in {location}")]
    UnknownSchema {
        /// Requested schema filename.
        schema_name: String,
        /// Where the registry was loaded from.
        location: String,
    },

    /// The schema itself is invalid and could not be compiled.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    Compile {
        /// Schema filename or identifier.
        schema_name: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// The document file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },
}
