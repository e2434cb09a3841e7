use log::{debug, info, warn};
use rand::{thread_rng, RngCore};
use thiserror::Error;

pub use mode::{Mode, ModeAssets};
pub use resolver::{calculate_score, resolve_round, RoundResult};
pub use state::GameState;
pub use token::Token;

use crate::{driver::Presenter, store::ScoreStore};

mod mode;
mod resolver;
mod state;
#[cfg(test)]
mod tests;
mod token;

/// Where the game is in the round cycle. Intents are only accepted in some phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the player to pick a token or switch modes.
    #[default]
    Idle,
    /// A round is being resolved and revealed. A presenter that presents the reveal
    /// synchronously never sees the game in this phase; it only shows up when the
    /// reveal suspends and intents arrive meanwhile.
    Resolving,
    /// The result is shown, waiting for the player to play again.
    Revealed,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ChooseToken(Token),
    ToggleMode,
    PlayAgain,
    ShowRules,
}

/// Reasons an intent is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot {action} while the game is {phase:?}")]
    Locked { action: &'static str, phase: Phase },
    #[error("{0} is not in play in {1:?} mode")]
    InactiveToken(Token, Mode),
}

/// The game controller. Owns the state and keeps the store in sync with it.
pub struct Game {
    state: GameState,
    phase: Phase,
    store: Box<dyn ScoreStore>,
    rng: Box<dyn RngCore>,
}

impl Game {
    /// Load the game from the given store, using the thread-local RNG.
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Game::with_rng(store, Box::new(thread_rng()))
    }

    /// Load the game from the given store. Missing state falls back to the default,
    /// which isn't written until the first change.
    pub fn with_rng(store: Box<dyn ScoreStore>, rng: Box<dyn RngCore>) -> Self {
        let state = store.load().unwrap_or_else(|| {
            info!("No saved game found, starting fresh");
            GameState::default()
        });
        debug!("Loaded {:?}", state);
        Game {
            state,
            phase: Phase::Idle,
            store,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    /// Render the initial board.
    pub fn start(&self, presenter: &mut impl Presenter) {
        presenter.render_mode_change(self.mode());
        presenter.render_score(self.state.current_score());
        presenter.render_board(&self.mode().active_tokens());
    }

    /// Dispatch a player intent.
    pub fn handle(
        &mut self,
        intent: Intent,
        presenter: &mut impl Presenter,
    ) -> Result<(), GameError> {
        match intent {
            Intent::ChooseToken(token) => self.choose_token(token, presenter).map(|_| ()),
            Intent::ToggleMode => self.toggle_mode(presenter),
            Intent::PlayAgain => self.play_again(presenter),
            Intent::ShowRules => {
                presenter.render_rules(self.mode().assets(), &self.mode().active_tokens());
                Ok(())
            }
        }
    }

    /// Play a round with the given player token.
    pub fn choose_token(
        &mut self,
        token: Token,
        presenter: &mut impl Presenter,
    ) -> Result<RoundResult, GameError> {
        self.ensure_phase(Phase::Idle, "choose a token")?;
        let mode = self.mode();
        let active_tokens = mode.active_tokens();
        if !active_tokens.contains(&token) {
            return Err(GameError::InactiveToken(token, mode));
        }
        let result = resolve_round(self.rng.as_mut(), token, &active_tokens)
            .ok_or(GameError::InactiveToken(token, mode))?;

        self.phase = Phase::Resolving;
        let score = self.state.current_score_mut();
        *score = calculate_score(*score, result.score_delta());
        self.persist();

        presenter.render_resolution(&result, self.state.current_score());
        self.phase = Phase::Revealed;
        Ok(result)
    }

    /// Switch between normal and bonus mode.
    pub fn toggle_mode(&mut self, presenter: &mut impl Presenter) -> Result<(), GameError> {
        self.ensure_phase(Phase::Idle, "switch modes")?;
        let mode = self.mode().toggled();
        self.state = self.state.switch_mode(mode);
        info!("Switched to {:?} mode", mode);
        self.persist();

        presenter.render_mode_change(mode);
        presenter.render_score(self.state.current_score());
        presenter.render_board(&mode.active_tokens());
        Ok(())
    }

    /// Acknowledge the result and unlock the board.
    pub fn play_again(&mut self, presenter: &mut impl Presenter) -> Result<(), GameError> {
        self.ensure_phase(Phase::Revealed, "play again")?;
        self.phase = Phase::Idle;
        presenter.render_board(&self.mode().active_tokens());
        Ok(())
    }

    fn ensure_phase(&self, phase: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::Locked {
                action,
                phase: self.phase,
            })
        }
    }

    /// Best effort: a failed write leaves the session running from memory.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!("Failed to save game state, continuing in memory: {}", e);
        }
    }
}
