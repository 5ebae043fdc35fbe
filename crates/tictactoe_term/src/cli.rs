//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal, two players taking turns at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (glyphs, help banner, log filter)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Echo a JSON snapshot of the game after every command
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.log_filter.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--log-filter",
            "debug",
            "--json",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert!(cli.json);
    }
}
