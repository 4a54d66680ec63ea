//! Integration tests for CLI argument handling and the prompt binary
//!
//! Tests flag validation and drives the prompt through stdin.

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute pokedex")
}

/// Helper to run the CLI feeding `input` on stdin
fn run_cli_with_input(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokedex");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(stdout.contains("--base-url"), "Help should mention --base-url");
    assert!(stdout.contains("--cache-interval-secs"));
}

#[test]
fn test_zero_timeout_prints_error_and_exits() {
    let output = run_cli(&["--timeout-secs", "0"]);
    assert!(!output.status.success(), "Expected zero timeout to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("timeout-secs"),
        "Should print error message about the timeout: {}",
        stderr
    );
}

#[test]
fn test_invalid_base_url_prints_error_and_exits() {
    let output = run_cli(&["--base-url", "ftp://example.com"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid base URL"), "{}", stderr);
}

#[test]
fn test_non_numeric_interval_is_rejected_by_parser() {
    let output = run_cli(&["--cache-interval-secs", "soon"]);
    assert!(!output.status.success());
}

#[test]
fn test_prompt_runs_help_then_exits() {
    let output = run_cli_with_input(&[], "HELP\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex > "));
    assert!(stdout.contains("Welcome to the Pokedex!"));
    assert!(stdout.contains("explore <area>"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_prompt_reports_errors_without_network() {
    // Nothing listens on the discard port; none of these commands should reach it anyway
    let output = run_cli_with_input(
        &["--base-url", "http://127.0.0.1:9/api/v2"],
        "mapb\nexplore\nfly\n",
    );
    assert!(output.status.success(), "End of input should exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no previous page of location areas"));
    assert!(stdout.contains("'explore' needs a location area name"));
    assert!(stdout.contains("Invalid command 'fly'"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use pokedex::cli::{Cli, StartupConfig};
    use std::time::Duration;

    #[test]
    fn test_cli_no_args_uses_pokeapi() {
        let cli = Cli::parse_from(["pokedex"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.client.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, Duration::from_secs(300));
    }

    #[test]
    fn test_cli_base_url_override() {
        let cli = Cli::parse_from(["pokedex", "--base-url", "http://localhost:3000/api/v2"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.client.base_url, "http://localhost:3000/api/v2");
    }

    #[test]
    fn test_cli_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["pokedex", "--plan"]).is_err());
    }
}
