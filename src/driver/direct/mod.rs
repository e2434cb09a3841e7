use log::{info, warn};
use std::{collections::VecDeque, fmt};

use super::{Command, Driver, DriverError, Presenter, RevealStep};
use crate::game::{Game, Mode, ModeAssets, RoundResult, Token};

/// A render command as received by the `Recorder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Mode(Mode),
    Score(u32),
    Board(Vec<Token>),
    Rules(ModeAssets),
    Step(RevealStep, RoundResult),
}

impl fmt::Display for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Render::Mode(mode) => write!(f, "mode: {:?}", mode),
            Render::Score(score) => write!(f, "score: {}", score),
            Render::Board(tokens) => {
                let names = tokens.iter().map(Token::name).collect::<Vec<_>>();
                write!(f, "board: {}", names.join(", "))
            }
            Render::Rules(assets) => write!(f, "rules: {}", assets.rules_alt),
            Render::Step(RevealStep::PlayerChoice, result) => {
                write!(f, "player: {}", result.player_token)
            }
            Render::Step(RevealStep::MaskedHouseChoice, _) => write!(f, "house: ..."),
            Render::Step(RevealStep::HouseChoice, result) => {
                write!(f, "house: {}", result.house_token)
            }
            Render::Step(RevealStep::Result, result) => {
                write!(f, "result: {} ({} wins)", result.result_text(), result.winner())
            }
        }
    }
}

/// A presenter that keeps every render command it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub renders: Vec<Render>,
}

impl Recorder {
    /// The most recently rendered score.
    #[cfg(test)]
    pub fn last_score(&self) -> Option<u32> {
        self.renders.iter().rev().find_map(|render| match render {
            Render::Score(score) => Some(*score),
            _ => None,
        })
    }

    /// Every round result that reached the final reveal step.
    pub fn results(&self) -> Vec<RoundResult> {
        self.renders
            .iter()
            .filter_map(|render| match render {
                Render::Step(RevealStep::Result, result) => Some(*result),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn render_mode_change(&mut self, mode: Mode) {
        self.renders.push(Render::Mode(mode));
    }

    fn render_score(&mut self, score: u32) {
        self.renders.push(Render::Score(score));
    }

    fn render_board(&mut self, tokens: &[Token]) {
        self.renders.push(Render::Board(tokens.to_vec()));
    }

    fn render_rules(&mut self, assets: &ModeAssets, _tokens: &[Token]) {
        self.renders.push(Render::Rules(assets.clone()));
    }

    fn render_step(&mut self, step: RevealStep, result: &RoundResult) {
        self.renders.push(Render::Step(step, *result));
    }
}

/// A driver which plays a fixed script of commands straight into a `Game`.
pub struct DirectDriver {
    /// The game being played.
    pub game: Game,
    /// Commands still to be played.
    script: VecDeque<Command>,
    /// Everything the game rendered.
    pub recorder: Recorder,
    /// Stop with an error on the first rejected intent, rather than skipping it.
    pub strict: bool,
}

impl DirectDriver {
    pub fn new(game: Game, script: impl IntoIterator<Item = Command>) -> Self {
        DirectDriver {
            game,
            script: script.into_iter().collect(),
            recorder: Recorder::default(),
            strict: false,
        }
    }

    /// Parse a script of whitespace separated commands.
    pub fn from_words<'a>(
        game: Game,
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, DriverError> {
        let script = words
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Command>, _>>()?;
        Ok(DirectDriver::new(game, script))
    }
}

impl Driver for DirectDriver {
    fn play(&mut self) -> Result<(), DriverError> {
        self.game.start(&mut self.recorder);
        while let Some(command) = self.script.pop_front() {
            let intent = match command {
                Command::Intent(intent) => intent,
                Command::Quit => break,
            };
            if let Err(e) = self.game.handle(intent, &mut self.recorder) {
                if self.strict {
                    return Err(e.into());
                }
                warn!("Skipping {:?}: {}", intent, e);
            }
        }
        info!(
            "Script complete after {} rounds, score {} in {:?} mode",
            self.recorder.results().len(),
            self.game.state().current_score(),
            self.game.mode()
        );
        Ok(())
    }
}
