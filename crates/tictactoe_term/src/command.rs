//! Parsing of player input lines.

use std::str::FromStr;
use tictactoe_core::{Coordinate, SIZE};
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark. Range checking is left to the engine.
    Place {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Redraw the board.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// Keywords accepted in place of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "reset", serialize = "r", serialize = "new")]
    Reset,
    #[strum(serialize = "show", serialize = "s", serialize = "board")]
    Show,
    #[strum(serialize = "help", serialize = "h", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

impl From<Keyword> for Command {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Reset => Command::Reset,
            Keyword::Show => Command::Show,
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
        }
    }
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Nothing entered")]
    Empty,

    /// Cell numbers run from 1 to 9.
    #[display("Cell number {} is not between 1 and 9", _0)]
    CellNumber(usize),

    /// Neither a move nor a known keyword.
    #[display("Unrecognized input {:?} (type 'help' for commands)", _0)]
    Unrecognized(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    /// Accepts `row col`, a cell number `1`-`9`, a cell label such as
    /// `top-left`, or a keyword.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let parts: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Ok(Command::Place { row, col });
        }

        if let Ok(number) = input.parse::<usize>() {
            if number == 0 {
                return Err(CommandError::CellNumber(number));
            }
            let index = number - 1;
            return Ok(Command::Place {
                row: index / SIZE,
                col: index % SIZE,
            });
        }

        if let Ok(keyword) = input.parse::<Keyword>() {
            return Ok(keyword.into());
        }

        Coordinate::from_label(input)
            .map(|coord| Command::Place {
                row: coord.row(),
                col: coord.col(),
            })
            .ok_or_else(|| CommandError::Unrecognized(input.to_string()))
    }
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   place a mark, rows and columns count from 0 (e.g. `0 2`)
  1-9           place a mark by cell number, left to right, top to bottom
  <label>       place a mark by name (e.g. `center`, `top-left`)
  reset         start a new game
  show          redraw the board
  help          show this summary
  quit          leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, CommandError> {
        s.parse()
    }

    #[test]
    fn test_row_col() {
        assert_eq!(parse("0 2"), Ok(Command::Place { row: 0, col: 2 }));
        assert_eq!(parse(" 2, 1 "), Ok(Command::Place { row: 2, col: 1 }));
    }

    #[test]
    fn test_out_of_range_row_col_passes_through() {
        assert_eq!(parse("3 7"), Ok(Command::Place { row: 3, col: 7 }));
    }

    #[test]
    fn test_cell_number() {
        assert_eq!(parse("1"), Ok(Command::Place { row: 0, col: 0 }));
        assert_eq!(parse("5"), Ok(Command::Place { row: 1, col: 1 }));
        assert_eq!(parse("9"), Ok(Command::Place { row: 2, col: 2 }));
        assert_eq!(parse("0"), Err(CommandError::CellNumber(0)));
        assert_eq!(parse("10"), Ok(Command::Place { row: 3, col: 0 }));
    }

    #[test]
    fn test_labels() {
        assert_eq!(parse("Center"), Ok(Command::Place { row: 1, col: 1 }));
        assert_eq!(parse("bottom left"), Ok(Command::Place { row: 2, col: 0 }));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse("reset"), Ok(Command::Reset));
        assert_eq!(parse("R"), Ok(Command::Reset));
        assert_eq!(parse("show"), Ok(Command::Show));
        assert_eq!(parse("?"), Ok(Command::Help));
        assert_eq!(parse("Quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(
            parse("sideways"),
            Err(CommandError::Unrecognized("sideways".to_string()))
        );
        assert!(parse("1 2 3").is_err());
    }
}
