//! Interactive play loop.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use draughts_engine::{Board, Move};
use tracing::debug;

use crate::render::{render, CLEAR_SCREEN};

/// Reads coordinates, shows legal destinations, and applies the chosen move.
///
/// A two-character coordinate selects a piece; a four-character entry such as
/// `C3D4` applies a plain move directly. `quit`, `exit`, or end of input ends
/// the session.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W, clear: bool) -> Self {
        Session {
            board,
            input,
            output,
            clear,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.draw(&HashMap::new())?;
        while let Some(entry) = self.prompt("move> ")? {
            match entry.chars().count() {
                4 => self.play_simple(&entry)?,
                _ => self.select(&entry)?,
            }
        }
        Ok(())
    }

    fn play_simple(&mut self, entry: &str) -> io::Result<()> {
        match self.board.apply_simple(entry) {
            Ok(m) => {
                debug!(mv = %m, "played simple move");
                self.draw(&HashMap::new())
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn select(&mut self, entry: &str) -> io::Result<()> {
        let from = match self.board.coord_convert(entry) {
            Ok(index) => index,
            Err(e) => return writeln!(self.output, "{}", e),
        };
        let moves = self.board.generate_moves(from);
        if moves.is_empty() {
            return writeln!(self.output, "no legal moves from {}", entry);
        }

        let markers = moves.iter().map(|m| (m.to(), ".".to_string())).collect();
        self.draw(&markers)?;
        for m in &moves {
            let line = self.describe(m);
            writeln!(self.output, "  {}", line)?;
        }

        let Some(chosen) = self.choose(&moves)? else {
            return self.draw(&HashMap::new());
        };
        match self.board.apply(&chosen) {
            Ok(()) => {
                debug!(mv = %chosen, "played move");
                self.draw(&HashMap::new())
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    /// Asks for a destination until a legal one is given. An empty line
    /// cancels the selection.
    fn choose(&mut self, moves: &[Move]) -> io::Result<Option<Move>> {
        loop {
            let Some(entry) = self.prompt("to> ")? else {
                return Ok(None);
            };
            if entry.is_empty() {
                return Ok(None);
            }
            let to = match self.board.coord_convert(&entry) {
                Ok(index) => index,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let candidates: Vec<&Move> = moves.iter().filter(|m| m.to() == to).collect();
            match candidates.as_slice() {
                [] => writeln!(self.output, "{} is not a legal destination", entry)?,
                [only] => return Ok(Some((*only).clone())),
                several => {
                    if let Some(m) = self.pick_chain(several)? {
                        return Ok(Some(m));
                    }
                }
            }
        }
    }

    /// Different capture chains can end on the same square.
    fn pick_chain(&mut self, chains: &[&Move]) -> io::Result<Option<Move>> {
        for (i, m) in chains.iter().enumerate() {
            let line = self.describe(m);
            writeln!(self.output, "  {}) {}", i + 1, line)?;
        }
        let Some(entry) = self.prompt("chain> ")? else {
            return Ok(None);
        };
        match entry.parse::<usize>() {
            Ok(n) if (1..=chains.len()).contains(&n) => Ok(Some(chains[n - 1].clone())),
            _ => {
                writeln!(self.output, "expected a number from 1 to {}", chains.len())?;
                Ok(None)
            }
        }
    }

    fn describe(&self, m: &Move) -> String {
        let name = |i: usize| self.board.index_to_coord(i).unwrap_or_else(|| i.to_string());
        let mut text = format!("{} {} {}", m, name(m.from()), name(m.to()));
        if m.is_capture() {
            let captured: Vec<String> = m.captured().iter().map(|&i| name(i)).collect();
            text.push_str(&format!(" takes {}", captured.join(" ")));
        }
        if m.is_promotion() {
            text.push_str(" crowns");
        }
        text
    }

    /// Returns the next trimmed line, or `None` at end of input or on `quit`.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        Ok(Some(entry.to_string()))
    }

    fn draw(&mut self, markers: &HashMap<usize, String>) -> io::Result<()> {
        if self.clear {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.output, "{}", render(&self.board, markers))
    }
}
