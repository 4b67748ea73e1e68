//! # Schemas Subcommand
//!
//! Lists the schemas in a directory with the codec name each compiles to.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use guard_core::Codec;
use guard_schema::SchemaRegistry;

/// Arguments for the schemas subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Directory containing `*.schema.json` files.
    #[arg(long, default_value = "schemas")]
    pub schemas: PathBuf,
}

/// Print one `<filename>\t<codec name>` line per schema, sorted by filename.
/// Schemas that fail to compile are listed with the compile error instead.
pub fn run(args: &SchemasArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = SchemaRegistry::load(&args.schemas)
        .with_context(|| format!("loading schemas from {}", args.schemas.display()))?;

    for name in registry.schema_names() {
        match registry.codec(name) {
            Ok(codec) => writeln!(out, "{name}\t{}", codec.name())?,
            Err(e) => writeln!(out, "{name}\terror: {e}")?,
        }
    }
    Ok(())
}
