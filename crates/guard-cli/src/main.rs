//! # guard CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// codec-guard CLI — decode documents against JSON schemas.
#[derive(Parser, Debug)]
#[command(name = "guard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode JSON/YAML documents against a schema.
    Decode(guard_cli::decode::DecodeArgs),
    /// List registered schemas.
    Schemas(guard_cli::schemas::SchemasArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Decode(args) => {
            if guard_cli::decode::run(&args, &mut stdout)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Schemas(args) => {
            guard_cli::schemas::run(&args, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
