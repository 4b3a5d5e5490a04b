use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;

/// Player-vs-player or player-vs-AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Pvp,
    Pve,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Pve => "Player vs AI",
        }
    }

    pub fn toggle(self) -> GameMode {
        match self {
            GameMode::Pvp => GameMode::Pve,
            GameMode::Pve => GameMode::Pvp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// User-facing options, loadable from `settings.toml`. The game engine only
/// reads `ai_difficulty`; the remaining fields pass through to the front end
/// unvalidated.
///
/// Every field has a default, so a partial or missing file still produces a
/// playable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game_mode: GameMode,
    pub ai_difficulty: Difficulty,
    pub sound_enabled: bool,
    pub animations_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            game_mode: GameMode::Pve,
            ai_difficulty: Difficulty::Medium,
            sound_enabled: true,
            animations_enabled: true,
            theme: Theme::Dark,
        }
    }
}
