use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::game::{GameError, Intent, Mode, ModeAssets, RoundResult, Token};

pub mod direct;
pub mod terminal;

/// Defines a game driver: something that feeds player intents to a game and
/// presents the results.
pub trait Driver {
    /// Play until the player quits or the intents run out.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Accepts rendering commands from the game.
pub trait Presenter {
    /// The active mode changed (or is being shown for the first time).
    fn render_mode_change(&mut self, mode: Mode);

    /// The score of the active mode.
    fn render_score(&mut self, score: u32);

    /// The board is unlocked and these tokens can be picked.
    fn render_board(&mut self, tokens: &[Token]);

    /// The rules of a mode, and the tokens in play under it.
    fn render_rules(&mut self, assets: &ModeAssets, tokens: &[Token]);

    /// Present a single reveal step.
    fn render_step(&mut self, step: RevealStep, result: &RoundResult);

    /// Present a resolved round, one reveal step at a time. The new score is shown
    /// once the house's token is unmasked, before the result.
    fn render_resolution(&mut self, result: &RoundResult, score: u32) {
        let mut completed = None;
        for step in RevealStep::iter() {
            debug_assert_eq!(step.guard(), completed);
            if step == RevealStep::Result {
                self.render_score(score);
            }
            self.render_step(step, result);
            completed = Some(step);
        }
    }
}

/// The steps of revealing a round, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum RevealStep {
    /// Show which token the player picked.
    PlayerChoice,
    /// Show that the house has picked, without saying what.
    MaskedHouseChoice,
    /// Unmask the house's token.
    HouseChoice,
    /// Show who won.
    Result,
}

impl RevealStep {
    /// The step that must have been presented before this one.
    pub fn guard(&self) -> Option<RevealStep> {
        match self {
            RevealStep::PlayerChoice => None,
            RevealStep::MaskedHouseChoice => Some(RevealStep::PlayerChoice),
            RevealStep::HouseChoice => Some(RevealStep::MaskedHouseChoice),
            RevealStep::Result => Some(RevealStep::HouseChoice),
        }
    }
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
}

impl FromStr for Command {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "mode" | "toggle" => Command::Intent(Intent::ToggleMode),
            "again" | "play again" => Command::Intent(Intent::PlayAgain),
            "rules" | "?" => Command::Intent(Intent::ShowRules),
            "quit" | "exit" => Command::Quit,
            other => match serde_plain::from_str::<Token>(other) {
                Ok(token) => Command::Intent(Intent::ChooseToken(token)),
                Err(_) => return Err(DriverError::UnknownCommand(s.trim().to_owned())),
            },
        };
        Ok(command)
    }
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("game rejected intent")]
    Game(#[from] GameError),
    #[error("terminal i/o error")]
    Io(#[from] std::io::Error),
}
