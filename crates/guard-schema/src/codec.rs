//! # Schema Codec
//!
//! A compiled JSON Schema (Draft 2020-12) exposed as a [`Codec`] over
//! `serde_json::Value`. Decoding returns the input unchanged once it
//! conforms; encoding is the identity.
//!
//! ## Reference Resolution
//!
//! Cross-schema `$ref`s are answered by [`LocalRetriever`] from the schemas
//! it was given. Unknown URIs, including draft metaschemas, resolve to the
//! permissive schema `{}` so compilation never reaches the network.

use std::collections::HashMap;
use std::fmt;

use guard_core::{Codec, ValidationError, Violation};
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::error::SchemaError;

/// Resolves `$ref` URIs from schemas held in memory.
#[derive(Debug, Default, Clone)]
pub(crate) struct LocalRetriever {
    /// Map from URI (or bare filename) to schema value.
    pub(crate) schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        // Relative refs arrive resolved against the referring schema's base
        // URI; fall back to the last path segment.
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        tracing::debug!(uri = uri_str, "unresolved $ref, using permissive schema");
        Ok(serde_json::json!({}))
    }
}

/// A compiled JSON Schema usable with [`guard_core::decode`].
pub struct SchemaCodec {
    name: String,
    validator: Validator,
}

impl SchemaCodec {
    /// Compile a standalone schema.
    ///
    /// `$ref`s to other documents resolve to the permissive schema; use
    /// [`crate::SchemaRegistry::codec`] when schemas reference each other.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if `schema` is not a valid schema.
    pub fn from_value(name: impl Into<String>, schema: &Value) -> Result<Self, SchemaError> {
        Self::compile(name.into(), schema, LocalRetriever::default())
    }

    pub(crate) fn compile(
        name: String,
        schema: &Value,
        retriever: LocalRetriever,
    ) -> Result<Self, SchemaError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.with_retriever(retriever);

        let validator = opts.build(schema).map_err(|e| SchemaError::Compile {
            schema_name: name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { name, validator })
    }

    /// True if `instance` conforms, without collecting violations.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}

impl fmt::Debug for SchemaCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCodec").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Codec for SchemaCodec {
    type Decoded = Value;
    type Encoded = Value;
    type Input = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(input)
            .map(|e| Violation::new(e.instance_path.to_string(), e.to_string()))
            .collect();

        match ValidationError::from_violations(violations) {
            None => Ok(input.clone()),
            Some(err) => Err(err),
        }
    }

    fn encode(&self, value: &Value) -> Value {
        value.clone()
    }
}
