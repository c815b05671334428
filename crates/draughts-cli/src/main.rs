//! Draughts in the terminal.
//!
//! Draws the board, reads coordinates from stdin, and plays the chosen moves.
//! Diagnostics go to stderr so they never land inside the board drawing.

mod config;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::SetupFile;
use draughts_engine::Board;
use session::Session;

/// Play draughts in the terminal.
#[derive(Parser)]
#[command(name = "draughts")]
#[command(about = "Play draughts in the terminal")]
struct Args {
    /// Half the side length of the board; 4 is the classic 8x8 board
    #[arg(long)]
    factor: Option<usize>,

    /// TOML file with a custom starting position
    #[arg(long)]
    setup: Option<PathBuf>,

    /// Do not clear the screen before drawing the board
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Args::parse();

    let board = build_board(&args)?;
    tracing::info!(
        factor = board.factor(),
        squares = board.size(),
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(board, stdin.lock(), stdout.lock(), !args.no_clear).run()?;
    Ok(())
}

fn build_board(args: &Args) -> anyhow::Result<Board> {
    let Some(path) = &args.setup else {
        let factor = args.factor.unwrap_or(Board::DEFAULT_FACTOR);
        return Ok(Board::new(factor)?);
    };

    let file = SetupFile::load(path)?;
    let factor = args
        .factor
        .or(file.factor)
        .unwrap_or(Board::DEFAULT_FACTOR);
    if args.factor.is_some() && file.factor.is_some() && args.factor != file.factor {
        tracing::warn!(?path, "--factor overrides the factor in the setup file");
    }
    let setup = file
        .to_setup(factor)
        .with_context(|| format!("invalid setup in {:?}", path))?;
    tracing::info!(?path, "loaded setup");
    Ok(Board::with_setup(factor, &setup)?)
}
