use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Player};

use super::Strategy;

/// Easy tier: selects uniformly at random from the available columns.
///
/// The generator is owned by the strategy rather than pulled from a global,
/// so seeded instances replay identically under test.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic instance for reproducible behavior.
    pub fn from_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_column(&mut self, board: &mut Board, _player: Player) -> Option<usize> {
        let available = board.available_columns();
        if available.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..available.len());
        Some(available[idx])
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    #[test]
    fn test_selects_available_column() {
        let mut strategy = RandomStrategy::from_seed(42);
        let mut board = Board::new();

        for _ in 0..100 {
            let col = strategy.select_column(&mut board, Player::Yellow).unwrap();
            assert!(col < 7);
            assert!(!board.is_column_full(col));
        }
    }

    #[test]
    fn test_never_picks_full_column() {
        let mut strategy = RandomStrategy::from_seed(7);
        let mut board = Board::new();
        // Leave only columns 2 and 5 open.
        for col in [0, 1, 3, 4, 6] {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }

        for _ in 0..50 {
            let col = strategy.select_column(&mut board, Player::Yellow).unwrap();
            assert!(col == 2 || col == 5);
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut strategy = RandomStrategy::from_seed(7);
        let mut board = Board::new();
        for col in 0..7 {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert_eq!(strategy.select_column(&mut board, Player::Yellow), None);
    }

    #[test]
    fn test_seeded_runs_replay() {
        let mut a = RandomStrategy::from_seed(123);
        let mut b = RandomStrategy::from_seed(123);
        let mut board = Board::new();

        for _ in 0..20 {
            assert_eq!(
                a.select_column(&mut board, Player::Yellow),
                b.select_column(&mut board, Player::Yellow)
            );
        }
    }
}
