//! Text rendering of engine snapshots.

use crate::config::Glyphs;
use tictactoe_core::{Coordinate, SIZE, Snapshot};

/// Draws the board with the configured glyphs.
pub fn render_board(snapshot: &Snapshot, glyphs: &Glyphs) -> String {
    let mut rows = Vec::with_capacity(SIZE);
    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .filter_map(|col| Coordinate::new(row, col).ok())
            .map(|coord| format!(" {} ", glyphs.render(coord, snapshot.cell(coord))))
            .collect();
        rows.push(cells.join("|"));
    }
    let width = rows.first().map(|r| r.chars().count()).unwrap_or_default();
    let separator = "-".repeat(width);
    rows.join(&format!("\n{}\n", separator))
}

/// End-of-game banner, or `None` while play continues.
pub fn banner(snapshot: &Snapshot, glyphs: &Glyphs) -> Option<String> {
    if !snapshot.is_over() {
        return None;
    }
    Some(match snapshot.state().winner() {
        Some(player) => {
            let line = snapshot
                .winning_line()
                .map(|line| format!(" ({})", line))
                .unwrap_or_default();
            format!("{} wins{}", glyphs.mark(player), line)
        }
        None => "It's draw".to_string(),
    })
}

/// Status line shown under the board.
pub fn status(snapshot: &Snapshot, glyphs: &Glyphs) -> String {
    if let Some(banner) = banner(snapshot, glyphs) {
        return format!("{}. Type 'reset' to play again.", banner);
    }
    let glyph = snapshot
        .current_player()
        .map(|player| glyphs.mark(player))
        .unwrap_or_default();
    format!("{} to move.", glyph)
}

/// Board followed by the status line.
pub fn render(snapshot: &Snapshot, glyphs: &Glyphs) -> String {
    format!(
        "{}\n\n{}",
        render_board(snapshot, glyphs),
        status(snapshot, glyphs)
    )
}
