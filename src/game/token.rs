use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

use super::Mode;

/// A playable choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Rock,
    Paper,
    Scissors,
    /// Only available in bonus mode.
    Lizard,
    /// Only available in bonus mode.
    Spock,
}

impl Token {
    /// The token's type identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Rock => "rock",
            Token::Paper => "paper",
            Token::Scissors => "scissors",
            Token::Lizard => "lizard",
            Token::Spock => "spock",
        }
    }

    /// Whether the token only exists in the bonus ruleset.
    pub fn is_bonus(&self) -> bool {
        matches!(self, Token::Lizard | Token::Spock)
    }

    /// The tokens this token defeats in the full five-token ruleset.
    pub fn beats(&self) -> [Token; 2] {
        match self {
            Token::Rock => [Token::Lizard, Token::Scissors],
            Token::Paper => [Token::Rock, Token::Spock],
            Token::Scissors => [Token::Lizard, Token::Paper],
            Token::Lizard => [Token::Paper, Token::Spock],
            Token::Spock => [Token::Rock, Token::Scissors],
        }
    }

    /// Whether this token defeats `other`.
    pub fn defeats(&self, other: Token) -> bool {
        self.beats().contains(&other)
    }

    /// The tokens eligible for play in the given mode, in table order.
    pub fn active(mode: Mode) -> Vec<Token> {
        Token::iter()
            .filter(|token| mode.is_bonus() || !token.is_bonus())
            .collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
