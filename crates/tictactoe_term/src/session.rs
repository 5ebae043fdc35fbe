//! The read-eval-render loop that drives one engine from text input.

use crate::command::{Command, CommandError, HELP};
use crate::config::TermConfig;
use crate::view;
use std::io::{BufRead, Write};
use tictactoe_core::{EngineError, GameEngine};
use tracing::{debug, info, instrument};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Outcome of one input line, before it is written out.
#[derive(Debug)]
enum Reply {
    Board,
    Text(&'static str),
    Rejected(String),
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        Reply::Rejected(err.to_string())
    }
}

impl From<EngineError> for Reply {
    fn from(err: EngineError) -> Self {
        Reply::Rejected(format!("Move rejected: {}", err))
    }
}

/// A single game table: one engine, one output stream.
pub struct Session<W: Write> {
    engine: GameEngine,
    config: TermConfig,
    json: bool,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session with a fresh engine.
    pub fn new(config: TermConfig, json: bool, out: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            json,
            out,
        }
    }

    /// Returns the engine driven by this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Prints the opening board (and the help text if configured).
    pub fn start(&mut self) -> std::io::Result<()> {
        if *self.config.show_help() {
            writeln!(self.out, "{}\n", HELP)?;
        }
        self.write_board()
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let reply = match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(Flow::Quit),
            Ok(Command::Place { row, col }) => self.place(row, col),
            Ok(Command::Reset) => {
                self.engine.reset();
                Reply::Board
            }
            Ok(Command::Show) => Reply::Board,
            Ok(Command::Help) => Reply::Text(HELP),
            // Blank lines are ignored
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(err) => Reply::from(err),
        };

        match reply {
            Reply::Board => self.write_board()?,
            Reply::Text(text) => writeln!(self.out, "{}", text)?,
            Reply::Rejected(message) => {
                debug!(%message, "Input rejected");
                writeln!(self.out, "{}", message)?;
            }
        }

        if self.json {
            let snapshot = self.engine.current_state();
            let json = serde_json::to_string(&snapshot).map_err(std::io::Error::other)?;
            writeln!(self.out, "{}", json)?;
        }
        Ok(Flow::Continue)
    }

    fn place(&mut self, row: usize, col: usize) -> Reply {
        match self.engine.apply_move(row, col) {
            Ok(state) => {
                debug!(row, col, ?state, "Move applied");
                Reply::Board
            }
            Err(err) => err.into(),
        }
    }

    fn write_board(&mut self) -> std::io::Result<()> {
        let snapshot = self.engine.current_state();
        writeln!(self.out, "{}\n", view::render(&snapshot, self.config.glyphs()))
    }
}

/// Runs a session until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and handled like any
/// other unrecognized input; only I/O failures end the loop early.
#[instrument(skip_all, fields(json = json))]
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: W,
    config: TermConfig,
    json: bool,
) -> std::io::Result<W> {
    let mut session = Session::new(config, json, out);
    session.start()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if session.handle_line(line.trim_end_matches(['\r', '\n']))? == Flow::Quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(session.into_output())
}
