use serde::{Deserialize, Serialize};

use super::Mode;

/// Persistent game state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// The bonus (five token) ruleset is active.
    pub is_bonus_mode: bool,
    /// Running score in normal mode.
    pub normal_score: u32,
    /// Running score in bonus mode.
    pub bonus_score: u32,
}

impl GameState {
    pub fn mode(&self) -> Mode {
        Mode::from_bonus_flag(self.is_bonus_mode)
    }

    /// The score of the active mode.
    pub fn current_score(&self) -> u32 {
        match self.mode() {
            Mode::Normal => self.normal_score,
            Mode::Bonus => self.bonus_score,
        }
    }

    /// Mutable access to the score of the active mode.
    pub fn current_score_mut(&mut self) -> &mut u32 {
        match self.mode() {
            Mode::Normal => &mut self.normal_score,
            Mode::Bonus => &mut self.bonus_score,
        }
    }

    /// Return the state with the given mode active. Scores are left alone.
    pub fn switch_mode(self, mode: Mode) -> Self {
        GameState {
            is_bonus_mode: mode.is_bonus(),
            ..self
        }
    }
}
