//! Handler tests for the `decode` and `schemas` subcommands, run against
//! the repository's `schemas/` and `fixtures/` directories.

use std::path::PathBuf;

use clap::Parser;
use guard_cli::decode::{self, DecodeArgs, OutputFormat};
use guard_cli::schemas::{self, SchemasArgs};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn decode_args(schema: &str, documents: &[&str], format: OutputFormat) -> DecodeArgs {
    DecodeArgs {
        schemas: repo_root().join("schemas"),
        schema: schema.to_string(),
        format,
        documents: documents
            .iter()
            .map(|d| repo_root().join("fixtures").join(d))
            .collect(),
    }
}

fn run_decode(args: &DecodeArgs) -> (bool, String) {
    let mut out = Vec::new();
    let ok = decode::run(args, &mut out).expect("decode handler failed");
    (ok, String::from_utf8(out).unwrap())
}

#[derive(Parser, Debug)]
struct DecodeCommand {
    #[command(flatten)]
    args: DecodeArgs,
}

#[test]
fn test_decode_valid_document_compact() {
    let args = decode_args("person.schema.json", &["person.valid.json"], OutputFormat::Json);
    let (ok, output) = run_decode(&args);
    assert!(ok);
    assert_eq!(output.lines().count(), 1);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({"name": "John", "age": 42}));
}

#[test]
fn test_decode_valid_document_pretty() {
    let args = decode_args("person.schema.json", &["person.valid.json"], OutputFormat::Pretty);
    let (ok, output) = run_decode(&args);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["name"], "John");
    assert!(output.contains('\n'));
}

#[test]
fn test_decode_invalid_document_reports_message() {
    let args = decode_args(
        "person.schema.json",
        &["person.valid.json", "person.missing-age.json"],
        OutputFormat::Json,
    );
    let (ok, output) = run_decode(&args);
    assert!(!ok);
    assert!(
        output.contains(r#"{"name":"John"} is not a valid Person"#),
        "got: {output}"
    );
    assert!(output.contains("(root):"), "got: {output}");
    assert!(output.contains("age"), "got: {output}");
}

#[test]
fn test_decode_yaml_document() {
    let args = decode_args("customer.schema.json", &["customer.valid.yaml"], OutputFormat::Json);
    let (ok, output) = run_decode(&args);
    assert!(ok, "got: {output}");
    assert!(output.contains("\"city\":\"London\""));
}

#[test]
fn test_decode_unknown_schema_is_an_error() {
    let args = decode_args("missing.schema.json", &["person.valid.json"], OutputFormat::Json);
    let mut out = Vec::new();
    let err = decode::run(&args, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("missing.schema.json"));
}

#[test]
fn test_decode_missing_document_is_an_error() {
    let args = decode_args("person.schema.json", &["nope.json"], OutputFormat::Json);
    let mut out = Vec::new();
    assert!(decode::run(&args, &mut out).is_err());
}

#[test]
fn test_schemas_lists_codec_names() {
    let args = SchemasArgs {
        schemas: repo_root().join("schemas"),
    };
    let mut out = Vec::new();
    schemas::run(&args, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines.contains(&"person.schema.json\tPerson"), "got: {output}");
    assert!(lines.contains(&"address.schema.json\taddress"), "got: {output}");
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn test_decode_argument_parsing() {
    let cmd = DecodeCommand::try_parse_from([
        "decode",
        "--schema",
        "person.schema.json",
        "--format",
        "json",
        "a.json",
        "b.yaml",
    ])
    .unwrap();
    assert_eq!(cmd.args.schemas, PathBuf::from("schemas"));
    assert_eq!(cmd.args.format, OutputFormat::Json);
    assert_eq!(cmd.args.documents.len(), 2);

    let defaults =
        DecodeCommand::try_parse_from(["decode", "--schema", "x.schema.json", "a.json"]).unwrap();
    assert_eq!(defaults.args.format, OutputFormat::Pretty);

    assert!(DecodeCommand::try_parse_from(["decode", "--schema", "x.schema.json"]).is_err());
    assert!(DecodeCommand::try_parse_from(["decode", "a.json"]).is_err());
}
