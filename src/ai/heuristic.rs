use crate::game::{Board, Player, COLS};

use super::Strategy;

/// Center-out preference used when no tactical move exists.
const CENTER_ORDER: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Medium tier: one-ply lookahead.
///
/// Three passes, each completing before the next starts: take any immediate
/// win, block any immediate opponent win, otherwise the first open column in
/// center-out order.
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// First column where placing `player`'s piece wins on the spot.
    fn winning_column(board: &mut Board, player: Player) -> Option<usize> {
        let cell = player.to_cell();
        (0..COLS).find(|&col| {
            board
                .probe(col, cell, |b, row| b.check_win(row, col))
                .unwrap_or(false)
        })
    }
}

impl Strategy for HeuristicStrategy {
    fn select_column(&mut self, board: &mut Board, player: Player) -> Option<usize> {
        if let Some(col) = Self::winning_column(board, player) {
            return Some(col);
        }
        if let Some(col) = Self::winning_column(board, player.other()) {
            return Some(col);
        }
        CENTER_ORDER
            .iter()
            .copied()
            .find(|&col| !board.is_column_full(col))
    }

    fn name(&self) -> &'static str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    #[test]
    fn test_prefers_center_on_empty_board() {
        let mut board = Board::new();
        let col = HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(col, Some(3));
    }

    #[test]
    fn test_center_fallback_order() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(3, Cell::Red).unwrap();
        }
        let col = HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(col, Some(2));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        // Yellow threatens vertically in column 5.
        for _ in 0..3 {
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        let col = HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(col, Some(5));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut board = Board::new();
        // Red has 0,1,2 on the bottom row; only column 3 stops the win.
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let col = HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(col, Some(3));
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = Board::new();
        // Red threatens at column 3, Yellow can win at column 4.
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(4, Cell::Yellow).unwrap();
        }
        let col = HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(col, Some(4));
    }

    #[test]
    fn test_board_untouched_after_selection() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let before = board;
        HeuristicStrategy.select_column(&mut board, Player::Yellow);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert_eq!(
            HeuristicStrategy.select_column(&mut board, Player::Yellow),
            None
        );
    }
}
