//! Tests for command-line argument parsing

use clap::Parser;
use mdindex::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_parse_chunk_with_flags() {
    let cli = Cli::try_parse_from([
        "mdindex",
        "chunk",
        "wellness",
        "--output",
        "records.json",
        "--key-words",
        "20",
        "--skip-empty",
        "--minify",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Chunk(args) => {
            assert_eq!(args.document.as_deref(), Some("wellness"));
            assert_eq!(args.output, Some(PathBuf::from("records.json")));
            assert_eq!(args.key_words, Some(20));
            assert!(args.skip_empty);
            assert!(args.minify);
            assert!(!args.all);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_format_after_subcommand() {
    let cli = Cli::try_parse_from(["mdindex", "upload", "--format", "json", "-i", "out.json"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Upload(args) => assert_eq!(args.input, Some(PathBuf::from("out.json"))),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_run_all() {
    let cli = Cli::try_parse_from(["mdindex", "run", "--all", "-v"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Run(args) => assert!(args.chunk.all),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_all_conflicts_with_document() {
    assert!(Cli::try_parse_from(["mdindex", "chunk", "wellness", "--all"]).is_err());
}

#[test]
fn test_parse_show_config() {
    let cli = Cli::try_parse_from(["mdindex", "show-config", "--all"]).unwrap();
    assert!(matches!(cli.command, Commands::ShowConfig(ref args) if args.all));
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
