use serde::{Deserialize, Serialize};

use crate::game::{Board, Player};

use super::{HeuristicStrategy, MinimaxStrategy, RandomStrategy};

/// AI difficulty tier, selectable in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycle Easy -> Medium -> Hard -> Easy.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Interface for all move-selection policies.
///
/// A strategy may search on the board in place through [`Board::probe`], but
/// must leave it exactly as it found it. `None` means no column can accept a
/// piece.
pub trait Strategy {
    fn select_column(&mut self, board: &mut Board, player: Player) -> Option<usize>;

    /// Display name for logging and the UI.
    fn name(&self) -> &'static str;
}

/// Build the strategy for a difficulty tier.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::new()),
        Difficulty::Medium => Box::new(HeuristicStrategy),
        Difficulty::Hard => Box::new(MinimaxStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let back: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Difficulty::Medium);
    }

    #[test]
    fn test_factory_names() {
        assert_eq!(strategy_for(Difficulty::Easy).name(), "Random");
        assert_eq!(strategy_for(Difficulty::Medium).name(), "Heuristic");
        assert_eq!(strategy_for(Difficulty::Hard).name(), "Minimax");
    }
}
