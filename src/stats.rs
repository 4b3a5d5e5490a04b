use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::{GameOutcome, Player};

/// Cumulative statistics, persisted as `stats.json`.
///
/// The streak counters track the human side: a Red win extends the streak,
/// a Yellow (AI) win resets it, a draw leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stats {
    pub games_played: u64,
    pub player1_wins: u64,
    pub player2_wins: u64,
    pub total_moves: u64,
    pub win_streak: u64,
    pub longest_streak: u64,
    /// Fastest completed game, in seconds.
    pub best_time: Option<f64>,
}

impl Stats {
    /// Apply the deltas for one finished game. Called exactly once per game,
    /// at the moment it finishes.
    pub fn record_game(&mut self, outcome: GameOutcome, move_count: usize, duration: Duration) {
        self.games_played += 1;
        self.total_moves += move_count as u64;

        match outcome {
            GameOutcome::Winner(Player::Red) => {
                self.player1_wins += 1;
                self.win_streak += 1;
                self.longest_streak = self.longest_streak.max(self.win_streak);
            }
            GameOutcome::Winner(Player::Yellow) => {
                self.player2_wins += 1;
                self.win_streak = 0;
            }
            GameOutcome::Draw => {}
        }

        let seconds = duration.as_secs_f64();
        if self.best_time.map_or(true, |best| seconds < best) {
            self.best_time = Some(seconds);
        }
    }
}

/// Format a duration in seconds as MM:SS.
pub fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
