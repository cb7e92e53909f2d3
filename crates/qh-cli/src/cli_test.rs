//! Tests for CLI argument parsing.

use crate::cli::{Cli, Commands, StatusOutput};
use clap::Parser;

#[test]
fn parses_migrate() {
    let cli = Cli::try_parse_from(["qh", "migrate"]).unwrap();
    assert!(matches!(cli.command, Commands::Migrate));
}

#[test]
fn parses_rollback_with_unit_name() {
    let cli = Cli::try_parse_from(["qh", "rollback", "player-identities"]).unwrap();
    match cli.command {
        Commands::Rollback(args) => assert_eq!(args.unit, "player-identities"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rollback_requires_a_unit_name() {
    assert!(Cli::try_parse_from(["qh", "rollback"]).is_err());
}

#[test]
fn status_defaults_to_table_output() {
    let cli = Cli::try_parse_from(["qh", "status"]).unwrap();
    match cli.command {
        Commands::Status(args) => assert_eq!(args.output, StatusOutput::Table),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn status_accepts_json_output() {
    let cli = Cli::try_parse_from(["qh", "status", "--output", "json"]).unwrap();
    match cli.command {
        Commands::Status(args) => assert_eq!(args.output, StatusOutput::Json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_target_flag_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["qh", "migrate", "--target", ":memory:"]).unwrap();
    assert_eq!(cli.global.target.as_deref(), Some(":memory:"));
}
