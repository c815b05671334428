//! Text rendering of the board.

use std::collections::HashMap;

use draughts_engine::Board;

/// Escape sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Draws the board as a grid, top row first.
///
/// Every cell is followed by `|`; light squares are blank. Cells listed in
/// `markers` show the marker instead of their contents.
pub fn render(board: &Board, markers: &HashMap<usize, String>) -> String {
    let factor = board.factor();
    let lines = board.lines();
    let cells = board.view(markers);
    let mut out = String::new();

    for row in (1..=lines).rev() {
        out.push_str(&format!("{}|", row));
        if row % 2 == 0 {
            out.push_str(" |");
        }
        for column in 0..factor {
            let index = (lines - row) * factor + column;
            out.push_str(&cells[index]);
            out.push('|');
            if column != factor - 1 {
                out.push_str(" |");
            }
        }
        if row % 2 == 1 {
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(" |");
    for letter in (b'A'..).take(lines) {
        out.push(letter as char);
        out.push('|');
    }
    out
}
