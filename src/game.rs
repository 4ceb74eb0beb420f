//! Interactive human-versus-computer game loop.
//!
//! The loop is written against `BufRead`/`Write` so it can be driven by
//! stdin/stdout or by scripted input in tests.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{info, warn};

use crate::board::{search, Board, Color, GameStatus, Move, MoveParseError, SearchConfig};

const SEPARATOR_WIDTH: usize = 25;

/// Who plays what, and how hard the computer thinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub search: SearchConfig,
    /// Side played by the human; the computer takes the other
    pub human: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            human: Color::White,
        }
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// The human typed `quit` or input ran out
    Quit,
    /// The search returned no move in a live position
    Aborted,
}

pub struct Game {
    board: Board,
    config: GameConfig,
    history: Vec<Move>,
}

impl Game {
    /// New game from the standard start position
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::new(), config)
    }

    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            config,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play until the game ends or the human quits.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<GameOutcome> {
        let human = self.config.human;
        let computer = human.opponent();
        let separator = "-".repeat(SEPARATOR_WIDTH);

        writeln!(output, "Chess game started!")?;
        writeln!(
            output,
            "You are playing as {human} against a level {} bot.",
            self.config.search.depth
        )?;
        writeln!(output, "Type 'quit' to exit the game.")?;
        writeln!(output, "{separator}")?;
        info!(
            "game started: human {human}, depth {}, pruning {}, position {}",
            self.config.search.depth,
            self.config.search.pruning,
            self.board.to_fen()
        );

        let mut stopped = None;
        while !self.board.is_game_over() {
            writeln!(output, "\n{}", self.board)?;

            if self.board.side_to_move() == human {
                writeln!(output, "Your turn ({human}):")?;
                let Some(mv) = self.read_human_move(&mut input, &mut output)? else {
                    stopped = Some(GameOutcome::Quit);
                    break;
                };
                self.play_move(mv);
            } else {
                writeln!(output, "Computer's turn ({computer})...")?;
                let start = Instant::now();
                let result = search(&mut self.board, &self.config.search);
                let elapsed = start.elapsed().as_secs_f64();

                if let Some(mv) = result.best_move {
                    self.play_move(mv);
                    writeln!(output, "Computer played: {mv} (took {elapsed:.2} seconds)")?;
                } else {
                    warn!("search returned no move in {}", self.board.to_fen());
                    writeln!(
                        output,
                        "The AI could not find a move. This shouldn't happen."
                    )?;
                    stopped = Some(GameOutcome::Aborted);
                    break;
                }
            }
        }

        writeln!(output, "\n{}", self.board)?;
        writeln!(output, "{separator}")?;

        let status = self.board.status();
        match status {
            GameStatus::Checkmate { winner } => writeln!(output, "Checkmate! {winner} wins!")?,
            GameStatus::Stalemate => writeln!(output, "Stalemate! Game is a draw.")?,
            GameStatus::InsufficientMaterial | GameStatus::Ongoing => {
                writeln!(output, "Game over.")?;
            }
        }

        let outcome = stopped.unwrap_or(match status {
            GameStatus::Checkmate { winner } => GameOutcome::Checkmate { winner },
            GameStatus::Stalemate => GameOutcome::Stalemate,
            GameStatus::InsufficientMaterial => GameOutcome::InsufficientMaterial,
            GameStatus::Ongoing => GameOutcome::Aborted,
        });
        info!(
            "game finished after {} moves: {outcome:?}",
            self.history.len()
        );
        Ok(outcome)
    }

    fn play_move(&mut self, mv: Move) {
        let token = self.board.apply(mv);
        self.history.push(token.mv());
    }

    /// Prompt until a legal move is entered. None on `quit` or end of input.
    fn read_human_move(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<Option<Move>> {
        loop {
            write!(output, "Enter your move (e.g., e2e4): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let text = line.trim().to_lowercase();
            if text == "quit" {
                return Ok(None);
            }

            match self.board.parse_move(&text) {
                Ok(mv) => return Ok(Some(mv)),
                Err(MoveParseError::MalformedNotation { .. }) => {
                    writeln!(output, "Invalid move format. Please use UCI (e.g., a1h8).")?;
                }
                Err(MoveParseError::IllegalMove { .. }) => {
                    writeln!(output, "Invalid move. Please try again.")?;
                }
            }
        }
    }
}
