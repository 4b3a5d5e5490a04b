//! Core Connect Four game logic: board representation, player types, and the
//! game state machine with move history, undo, and timing.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveRecord, Status};
