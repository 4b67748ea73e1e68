//! # Decode Subcommand
//!
//! Decodes one or more documents against a schema from a schema directory.
//! Valid documents are printed as JSON; invalid ones print the decode
//! failure message followed by one violation per line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use guard_core::{decode, DecodeError};
use guard_schema::{load_document, SchemaRegistry};

/// How decoded documents are rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented JSON.
    #[default]
    Pretty,
    /// One compact JSON line per document.
    Json,
}

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Directory containing `*.schema.json` files.
    #[arg(long, default_value = "schemas")]
    pub schemas: PathBuf,

    /// Schema filename to decode against (e.g. `person.schema.json`).
    #[arg(long)]
    pub schema: String,

    /// Output rendering for decoded documents.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// JSON or YAML documents to decode.
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
}

/// Run the decode subcommand. Returns `true` if every document decoded.
///
/// # Errors
///
/// Fails if the schema directory, the schema or a document cannot be
/// loaded, or output cannot be written. A document that loads but does
/// not decode is reported to `out` and is not an error.
pub fn run(args: &DecodeArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let registry = SchemaRegistry::load(&args.schemas)
        .with_context(|| format!("loading schemas from {}", args.schemas.display()))?;
    let codec = registry
        .codec(&args.schema)
        .with_context(|| format!("compiling {}", args.schema))?;
    let parse = decode(&codec);

    let mut all_valid = true;
    for path in &args.documents {
        let document = load_document(path)?;
        match parse(&document) {
            Ok(value) => {
                tracing::debug!(document = %path.display(), "decoded");
                let rendered = match args.format {
                    OutputFormat::Pretty => serde_json::to_string_pretty(&value)?,
                    OutputFormat::Json => serde_json::to_string(&value)?,
                };
                writeln!(out, "{rendered}")?;
            }
            Err(err @ DecodeError::Invalid { .. }) => {
                all_valid = false;
                tracing::warn!(document = %path.display(), "rejected");
                writeln!(out, "{}: {err}", path.display())?;
                if let Some(violations) = err.validation() {
                    writeln!(out, "{violations}")?;
                }
            }
            Err(err) => return Err(err).with_context(|| format!("decoding {}", path.display())),
        }
    }
    Ok(all_valid)
}
