//! AI move selection: the [`Strategy`] trait and the three difficulty tiers
//! (random, one-ply heuristic, depth-4 minimax with alpha-beta pruning).

mod heuristic;
mod minimax;
mod random;
mod strategy;

pub use heuristic::HeuristicStrategy;
pub use minimax::{evaluate, MinimaxStrategy};
pub use random::RandomStrategy;
pub use strategy::{strategy_for, Difficulty, Strategy};
