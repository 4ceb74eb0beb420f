use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use minimax_chess::board::{Board, Color, SearchConfig, DEFAULT_SEARCH_DEPTH};
use minimax_chess::game::{Game, GameConfig};

/// Play chess against a fixed-depth minimax search.
#[derive(Parser, Debug)]
#[command(name = "minimax_chess", version, about)]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Side you play
    #[arg(short, long, value_enum, default_value_t = Side::White)]
    color: Side,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long)]
    no_pruning: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.fen {
        Some(fen) => Board::try_from_fen(fen).with_context(|| format!("invalid --fen '{fen}'"))?,
        None => Board::new(),
    };
    let config = GameConfig {
        search: SearchConfig {
            depth: args.depth,
            pruning: !args.no_pruning,
        },
        human: args.color.into(),
    };

    let mut game = Game::from_board(board, config);
    game.play(io::stdin().lock(), io::stdout().lock())
        .context("game I/O failed")?;
    Ok(())
}
