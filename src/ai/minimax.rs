use crate::game::{Board, Cell, Player, COLS, ROWS};

use super::Strategy;

/// Score for a connected four, decisive over anything the evaluator can sum.
const WIN_SCORE: i32 = 1_000_000;

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Hard tier: fixed-depth minimax with alpha-beta pruning over the shared
/// board, maximizing for Yellow. Moves are explored through [`Board::probe`],
/// so the board is restored no matter how a branch exits.
pub struct MinimaxStrategy {
    depth: u32,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        MinimaxStrategy { depth: 4 }
    }

    /// Depth-limited variant, mostly for tests and benchmarking.
    pub fn with_depth(depth: u32) -> Self {
        MinimaxStrategy { depth }
    }

    /// Returns the best score for the side to move and the lowest-index
    /// column achieving it. `maximizing` means Yellow is to move.
    fn minimax(
        &self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        if depth == 0 {
            return (evaluate(board), None);
        }

        let available = board.available_columns();
        if available.is_empty() {
            return (0, None);
        }

        let mover = if maximizing { Cell::Yellow } else { Cell::Red };

        // A move that wins on the spot ends the search at this node; no
        // deeper line can beat a connected four for the mover.
        for &col in &available {
            let wins = board
                .probe(col, mover, |b, row| b.check_win(row, col))
                .unwrap_or(false);
            if wins {
                let score = if maximizing { WIN_SCORE } else { -WIN_SCORE };
                return (score, Some(col));
            }
        }

        let mut best_column = available[0];

        if maximizing {
            let mut best = i32::MIN;
            for &col in &available {
                let (score, _) = board
                    .probe(col, Cell::Yellow, |b, _| {
                        self.minimax(b, depth - 1, alpha, beta, false)
                    })
                    .unwrap();
                // Strict improvement keeps the lowest-index column on ties.
                if score > best {
                    best = score;
                    best_column = col;
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, Some(best_column))
        } else {
            let mut best = i32::MAX;
            for &col in &available {
                let (score, _) = board
                    .probe(col, Cell::Red, |b, _| {
                        self.minimax(b, depth - 1, alpha, beta, true)
                    })
                    .unwrap();
                if score < best {
                    best = score;
                    best_column = col;
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, Some(best_column))
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_column(&mut self, board: &mut Board, _player: Player) -> Option<usize> {
        if board.is_full() {
            return None;
        }
        let (_, column) = self.minimax(board, self.depth, i32::MIN, i32::MAX, true);
        column
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}

/// Static evaluation from Yellow's perspective: the sum over every length-4
/// window on the board of a per-window score.
///
/// Windows are anchored at every cell and extend along each of the four
/// directions; cells that fall off the grid belong to none of the three
/// counts, so edge-touching windows are still visited but rarely reach the
/// score table. That under-weights edge patterns relative to interior ones
/// and is kept as-is; changing it changes playing strength.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for row in 0..ROWS as i32 {
        for col in 0..COLS as i32 {
            for (dr, dc) in DIRECTIONS {
                let mut yellow = 0;
                let mut red = 0;
                let mut empty = 0;
                for i in 0..4 {
                    let r = row + dr * i;
                    let c = col + dc * i;
                    if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                        continue;
                    }
                    match board.get(r as usize, c as usize) {
                        Cell::Yellow => yellow += 1,
                        Cell::Red => red += 1,
                        Cell::Empty => empty += 1,
                    }
                }
                score += score_window(yellow, red, empty);
            }
        }
    }

    score
}

fn score_window(yellow: u32, red: u32, empty: u32) -> i32 {
    match (yellow, empty) {
        (4, 0) => return WIN_SCORE,
        (3, 1) => return 1_000,
        (2, 2) => return 100,
        (1, 3) => return 10,
        _ => {}
    }
    match (red, empty) {
        (4, 0) => -WIN_SCORE,
        (3, 1) => -1_000,
        (2, 2) => -100,
        (1, 3) => -10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_evaluates_to_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_evaluation_sign_follows_yellow() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(evaluate(&board) > 0);

        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        assert!(evaluate(&board) < 0);
    }

    #[test]
    fn test_interior_outweighs_edge() {
        // Off-board cells keep edge windows out of the score table, so the
        // same piece is worth less in a corner column.
        let mut center = Board::new();
        center.drop_piece(3, Cell::Yellow).unwrap();
        let mut corner = Board::new();
        corner.drop_piece(0, Cell::Yellow).unwrap();
        assert!(evaluate(&center) > evaluate(&corner));
    }

    #[test]
    fn test_three_with_open_end_scores_heavily() {
        let mut board = Board::new();
        for col in 2..5 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(evaluate(&board) >= 1_000);
    }

    #[test]
    fn test_selects_legal_column() {
        let mut strategy = MinimaxStrategy::new();
        let mut board = Board::new();
        let col = strategy.select_column(&mut board, Player::Yellow).unwrap();
        assert!(col < COLS);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut strategy = MinimaxStrategy::new();
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let cell = if (row + col) % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board.drop_piece(col, cell).unwrap();
            }
        }
        assert_eq!(strategy.select_column(&mut board, Player::Yellow), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut strategy = MinimaxStrategy::new();
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        assert_eq!(strategy.select_column(&mut board, Player::Yellow), Some(5));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let mut strategy = MinimaxStrategy::new();
        let mut board = Board::new();
        // Red on 0,1,2 at the bottom; Yellow's two replies sit in column 6.
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.drop_piece(6, Cell::Yellow).unwrap();
        board.drop_piece(6, Cell::Yellow).unwrap();
        assert_eq!(strategy.select_column(&mut board, Player::Yellow), Some(3));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut strategy = MinimaxStrategy::new();
        let mut board = Board::new();
        // Red threatens column 3; Yellow can finish a vertical four in 4.
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(4, Cell::Yellow).unwrap();
        }
        assert_eq!(strategy.select_column(&mut board, Player::Yellow), Some(4));
    }

    #[test]
    fn test_deterministic_for_same_position() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        let mut strategy = MinimaxStrategy::new();
        let first = strategy.select_column(&mut board, Player::Yellow);
        for _ in 0..5 {
            assert_eq!(strategy.select_column(&mut board, Player::Yellow), first);
        }
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        let before = board;

        MinimaxStrategy::new().select_column(&mut board, Player::Yellow);
        assert_eq!(board, before);
    }

    #[test]
    fn test_beats_random_over_many_games() {
        use crate::ai::RandomStrategy;
        use crate::game::{GameOutcome, GameState};

        let mut yellow_wins = 0;
        for seed in 0..20 {
            let mut random = RandomStrategy::from_seed(seed);
            let mut minimax = MinimaxStrategy::new();
            let mut state = GameState::new();
            state.start();

            while !state.is_terminal() {
                let col = match state.current_player() {
                    Player::Red => random
                        .select_column(&mut state.board().clone(), Player::Red)
                        .unwrap(),
                    Player::Yellow => state.ai_move(&mut minimax).unwrap(),
                };
                assert!(state.place(col));
            }
            if state.outcome() == Some(GameOutcome::Winner(Player::Yellow)) {
                yellow_wins += 1;
            }
        }
        assert!(
            yellow_wins >= 17,
            "depth-4 search should dominate random play, won {yellow_wins}/20"
        );
    }
}
