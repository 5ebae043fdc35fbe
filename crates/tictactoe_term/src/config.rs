//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Cell, Coordinate, Player};
use tracing::{debug, info, instrument};

/// How each cell is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for X marks.
    x: String,
    /// Glyph for O marks.
    o: String,
    /// Glyph for empty cells; `None` shows the cell number (1-9).
    empty: Option<String>,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
            empty: None,
        }
    }
}

impl Glyphs {
    /// Returns the glyph for a player's mark.
    pub fn mark(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Returns the glyph for `cell` at `coord`.
    pub fn render(&self, coord: Coordinate, cell: Cell) -> String {
        match cell.mark() {
            Some(player) => self.mark(player).to_string(),
            None => match &self.empty {
                Some(glyph) => glyph.clone(),
                None => (coord.index() + 1).to_string(),
            },
        }
    }
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Cell glyphs.
    glyphs: Glyphs,

    /// Print the command summary when the game starts.
    show_help: bool,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            show_help: true,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl TermConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.glyphs.x == config.glyphs.o {
            return Err(ConfigError::new(format!(
                "X and O glyphs must differ (both are {:?})",
                config.glyphs.x
            )));
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TermConfig::from_toml_str("").expect("valid config");
        assert_eq!(config, TermConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_help());
    }

    #[test]
    fn test_partial_glyphs() {
        let config = TermConfig::from_toml_str(
            r#"
            show_help = false

            [glyphs]
            x = "✕"
            empty = "."
            "#,
        )
        .expect("valid config");

        assert!(!*config.show_help());
        assert_eq!(config.glyphs().x(), "✕");
        assert_eq!(config.glyphs().o(), "O");
        assert_eq!(config.glyphs().empty().as_deref(), Some("."));
    }

    #[test]
    fn test_identical_glyphs_rejected() {
        let err = TermConfig::from_toml_str("[glyphs]\nx = \"#\"\no = \"#\"\n")
            .expect_err("glyphs collide");
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = TermConfig::from_toml_str("show_help = maybe").expect_err("bad toml");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = TermConfig::from_file("/definitely/not/here.toml").expect_err("missing file");
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_render_numbers_empty_cells() {
        let glyphs = Glyphs::default();
        let corner = Coordinate::new(2, 2).expect("in range");
        assert_eq!(glyphs.render(corner, Cell::Empty), "9");
        assert_eq!(glyphs.render(corner, Cell::O), "O");
    }
}
