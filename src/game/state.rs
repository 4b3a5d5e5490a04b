use std::time::{Duration, Instant};

use super::{Board, Player};
use crate::ai::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Playing,
    Finished,
}

/// One entry of the move history. `at` is the offset from game start, so a
/// record stays meaningful after the game object outlives its wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    pub at: Duration,
}

/// The full game state machine: Waiting until `start`, Playing while moves
/// are accepted, Finished exactly once on a win or a draw.
///
/// Invalid requests never fail loudly; `place` and `undo` return `false` and
/// leave the state untouched, `ai_move` returns `None`. Every failure is a
/// value the caller can branch on.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
    outcome: Option<GameOutcome>,
    history: Vec<MoveRecord>,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameState {
    /// Create a fresh game in the Waiting state.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            status: Status::Waiting,
            outcome: None,
            history: Vec::new(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Discard everything and begin a new game in the Playing state.
    pub fn start(&mut self) {
        *self = GameState::new();
        self.status = Status::Playing;
        self.started_at = Some(Instant::now());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Game outcome, set iff the status is Finished.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.status == Status::Finished
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of pieces on the board; always equals the history length.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Time since the game started, frozen at the moment it finished.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(start) => self.ended_at.unwrap_or_else(Instant::now) - start,
            None => Duration::ZERO,
        }
    }

    /// Drop the current player's piece in `col`. Returns `false` without
    /// mutating anything if the game is not in progress, the column is out of
    /// range, or the column is full.
    pub fn place(&mut self, col: usize) -> bool {
        if self.status != Status::Playing {
            return false;
        }

        let row = match self.board.drop_piece(col, self.current_player.to_cell()) {
            Ok(row) => row,
            Err(_) => return false,
        };

        self.history.push(MoveRecord {
            row,
            col,
            player: self.current_player,
            at: self.elapsed(),
        });

        // Classify in fixed order: win by the mover, then draw, then play on.
        if self.board.check_win(row, col) {
            self.status = Status::Finished;
            self.outcome = Some(GameOutcome::Winner(self.current_player));
            self.ended_at = Some(Instant::now());
        } else if self.board.is_full() {
            self.status = Status::Finished;
            self.outcome = Some(GameOutcome::Draw);
            self.ended_at = Some(Instant::now());
        } else {
            self.current_player = self.current_player.other();
        }

        true
    }

    /// Take back the last move. Returns `false` when the history is empty or
    /// the game is not in progress; once a game has finished its moves stay
    /// on the board.
    pub fn undo(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let record = match self.history.pop() {
            Some(record) => record,
            None => return false,
        };

        self.board.clear(record.row, record.col);
        self.current_player = record.player;
        true
    }

    /// Ask `strategy` for Yellow's next column. Returns `None`, leaving the
    /// state untouched, when the game is not in progress or it is not
    /// Yellow's turn. Strategies search on this board in place and restore
    /// it before returning.
    pub fn ai_move(&mut self, strategy: &mut dyn Strategy) -> Option<usize> {
        if self.status != Status::Playing || self.current_player != Player::Yellow {
            return None;
        }
        strategy.select_column(&mut self.board, Player::Yellow)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
