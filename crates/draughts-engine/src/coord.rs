//! Text coordinates for playable squares.
//!
//! Two notations are accepted, both exactly two characters long:
//! - numeric: the 1-based square index, `"01"` to `"32"` on an 8x8 board
//! - algebraic: a column letter (case-insensitive) and a row digit, rows
//!   counted from the bottom of the board, e.g. `"C3"`

use crate::BoardError;

/// Parses a coordinate into a square index for a board of `factor`.
pub fn parse_coord(coord: &str, factor: usize) -> Result<usize, BoardError> {
    let lines = factor * 2;
    let size = factor * lines;

    let chars: Vec<char> = coord.chars().collect();
    if chars.len() != 2 {
        return Err(BoardError::coordinate("coordinate's length is not 2"));
    }
    let (first, second) = (chars[0], chars[1]);

    if first.is_ascii_digit() && second.is_ascii_digit() {
        let number = (first as usize - '0' as usize) * 10 + (second as usize - '0' as usize);
        return match number.checked_sub(1) {
            Some(index) if index < size => Ok(index),
            _ => Err(BoardError::coordinate(format!(
                "square number {} is out of range 1 to {}",
                number, size
            ))),
        };
    }

    let place = match first {
        'A'..='Z' => first as usize - 'A' as usize,
        'a'..='z' => first as usize - 'a' as usize,
        _ => lines,
    };
    if place >= lines {
        return Err(BoardError::coordinate(format!(
            "coordinate's first symbol '{}' is out of range",
            first
        )));
    }

    let digit = second.to_digit(10).ok_or_else(|| {
        BoardError::coordinate(format!(
            "coordinate's second symbol '{}' is not a number",
            second
        ))
    })? as usize;
    if digit == 0 || digit > lines {
        return Err(BoardError::coordinate(format!(
            "row {} is out of range 1 to {}",
            digit, lines
        )));
    }

    // Rows are numbered from the bottom, lines from the top.
    let line = lines - digit;
    if line % 2 == place % 2 {
        return Err(BoardError::coordinate(format!(
            "{} is not a playable square",
            coord
        )));
    }

    Ok(line * factor + place / 2)
}

/// Returns the algebraic coordinate (upper-case letter, row) of a square.
pub fn coord_name(index: usize, factor: usize) -> Option<String> {
    let lines = factor * 2;
    if factor == 0 || index >= factor * lines {
        return None;
    }
    let line = index / factor;
    let column = index % factor;
    let place = if line % 2 == 0 {
        column * 2 + 1
    } else {
        column * 2
    };
    let letter = (b'A' + place as u8) as char;
    Some(format!("{}{}", letter, lines - line))
}
