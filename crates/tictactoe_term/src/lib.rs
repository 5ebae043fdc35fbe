//! Terminal front end for the tic-tac-toe engine.
//!
//! Reads one command per line, forwards moves and resets to
//! [`tictactoe_core::GameEngine`], and renders the returned snapshot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod session;
mod view;

pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, Glyphs, TermConfig};
pub use session::{Flow, Session, run};
pub use view::{banner, render, render_board, status};
