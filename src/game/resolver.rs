use log::debug;
use rand::{seq::SliceRandom, Rng};

use super::Token;

/// The outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub player_token: Token,
    pub house_token: Token,
    pub player_wins: bool,
}

impl RoundResult {
    /// The token that won the round.
    pub fn winner(&self) -> Token {
        if self.player_wins {
            self.player_token
        } else {
            self.house_token
        }
    }

    /// Score change for the player.
    pub fn score_delta(&self) -> i32 {
        if self.player_wins {
            1
        } else {
            -1
        }
    }

    pub fn result_text(&self) -> &'static str {
        if self.player_wins {
            "You win"
        } else {
            "You lose"
        }
    }
}

/// Flip a fair coin for whether the player wins. Independent of the chosen token.
pub fn decide_outcome<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Pick a house token uniformly from `active_tokens` which is consistent with the
/// already decided outcome: one the player beats if they win, otherwise one that
/// beats the player.
///
/// Returns `None` only if no active token qualifies, which cannot happen when
/// `player_token` is itself in `active_tokens`.
pub fn select_house_token<R: Rng + ?Sized>(
    rng: &mut R,
    player_token: Token,
    active_tokens: &[Token],
    player_wins: bool,
) -> Option<Token> {
    let candidates = active_tokens
        .iter()
        .copied()
        .filter(|&token| {
            if player_wins {
                player_token.defeats(token)
            } else {
                token.defeats(player_token)
            }
        })
        .collect::<Vec<_>>();
    candidates.choose(rng).copied()
}

/// Decide the outcome and pick the house token. Leaves game state alone.
pub fn resolve_round<R: Rng + ?Sized>(
    rng: &mut R,
    player_token: Token,
    active_tokens: &[Token],
) -> Option<RoundResult> {
    let player_wins = decide_outcome(rng);
    let house_token = select_house_token(rng, player_token, active_tokens, player_wins)?;
    debug!(
        "Resolved round: player {} vs house {}, player wins: {}",
        player_token, house_token, player_wins
    );
    Some(RoundResult {
        player_token,
        house_token,
        player_wins,
    })
}

/// Apply a score change, never dropping below zero.
pub fn calculate_score(current_score: u32, delta: i32) -> u32 {
    current_score.saturating_add_signed(delta)
}
