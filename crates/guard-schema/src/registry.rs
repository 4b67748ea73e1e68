//! # Schema Registry
//!
//! Loads JSON Schema files from a directory and compiles them into
//! [`SchemaCodec`]s with cross-schema `$ref` resolution.
//!
//! ## Schema Resolution
//!
//! Every schema is registered under its bare filename and, when present,
//! its own `$id`. A `$ref` such as `address.schema.json` or
//! `https://schemas.codec-guard.dev/address.schema.json` resolves to the
//! loaded `address.schema.json`. Internal `#/$defs/...` refs are resolved
//! by the jsonschema crate natively.
//!
//! ## Codec Names
//!
//! A compiled codec is named after the schema's `title` when it has one,
//! otherwise after the filename without `.schema.json`. That name is what
//! decode failures print: `... is not a valid Person`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::codec::{LocalRetriever, SchemaCodec};
use crate::error::SchemaError;

const SCHEMA_SUFFIX: &str = ".schema.json";

/// A set of named JSON schemas.
///
/// ## Thread Safety
///
/// The registry is immutable after loading and `Send + Sync`. Codecs it
/// compiles are independent of it and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Directory the schemas were loaded from, if any.
    schema_dir: Option<PathBuf>,
    /// Map from schema filename (e.g., "person.schema.json") to parsed JSON value.
    schemas: HashMap<String, Value>,
}

impl SchemaRegistry {
    /// An empty registry; add schemas with [`SchemaRegistry::insert`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.schema.json` file in `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoad`] if the directory cannot be read, or
    /// if any schema file cannot be read or is not valid JSON. A file error
    /// names the file.
    pub fn load(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = HashMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| SchemaError::SchemaLoad {
            schema_name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| SchemaError::SchemaLoad {
                    schema_name: schema_dir.display().to_string(),
                    reason: format!("cannot read directory entry: {e}"),
                })?
                .path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(SCHEMA_SUFFIX) {
                continue;
            }
            let content =
                std::fs::read_to_string(&path).map_err(|e| SchemaError::SchemaLoad {
                    schema_name: name.to_string(),
                    reason: format!("cannot read file: {e}"),
                })?;
            let value: Value =
                serde_json::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
                    schema_name: name.to_string(),
                    reason: format!("invalid JSON: {e}"),
                })?;
            tracing::debug!(schema = name, "loaded schema");
            schemas.insert(name.to_string(), value);
        }

        tracing::info!(
            dir = %schema_dir.display(),
            count = schemas.len(),
            "schema registry loaded"
        );

        Ok(Self {
            schema_dir: Some(schema_dir),
            schemas,
        })
    }

    /// Register a schema under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, schema: Value) {
        self.schemas.insert(name.into(), schema);
    }

    /// Returns the schema directory path, if loaded from disk.
    pub fn schema_dir(&self) -> Option<&Path> {
        self.schema_dir.as_deref()
    }

    /// Returns the number of loaded schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Returns the names of all loaded schemas, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Look up a loaded schema by filename.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Compile the schema registered as `schema_name` into a codec.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownSchema`] if no such schema is registered,
    /// or [`SchemaError::Compile`] if it does not compile.
    pub fn codec(&self, schema_name: &str) -> Result<SchemaCodec, SchemaError> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| SchemaError::UnknownSchema {
                schema_name: schema_name.to_string(),
                location: self.location(),
            })?;

        SchemaCodec::compile(codec_name(schema_name, schema), schema, self.retriever())
    }

    /// Build a retriever that knows every registered schema by filename and `$id`.
    fn retriever(&self) -> LocalRetriever {
        let mut schemas_by_uri = HashMap::new();
        for (filename, value) in &self.schemas {
            if let Some(id) = value.get("$id").and_then(Value::as_str) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
            schemas_by_uri.insert(filename.clone(), value.clone());
        }
        LocalRetriever { schemas_by_uri }
    }

    fn location(&self) -> String {
        match &self.schema_dir {
            Some(dir) => dir.display().to_string(),
            None => "in-memory registry".to_string(),
        }
    }
}

/// The schema's `title`, or its filename without the schema suffix.
fn codec_name(filename: &str, schema: &Value) -> String {
    match schema.get("title").and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => filename
            .strip_suffix(SCHEMA_SUFFIX)
            .or_else(|| filename.strip_suffix(".json"))
            .unwrap_or(filename)
            .to_string(),
    }
}
