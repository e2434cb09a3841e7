use super::Token;

/// Which ruleset is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rock, paper, scissors.
    #[default]
    Normal,
    /// Rock, paper, scissors, lizard, Spock.
    Bonus,
}

/// Images and alt text shown for a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeAssets {
    pub logo_path: &'static str,
    pub logo_alt: &'static str,
    pub rules_path: &'static str,
    pub rules_alt: &'static str,
}

const NORMAL_ASSETS: ModeAssets = ModeAssets {
    logo_path: "images/logo.svg",
    logo_alt: "Rock, Scissors, Paper Logo",
    rules_path: "images/rules.svg",
    rules_alt: "Rules for Playing Rock, Scissors, Paper",
};

const BONUS_ASSETS: ModeAssets = ModeAssets {
    logo_path: "images/bonus/logo.svg",
    logo_alt: "Rock, Scissors, Paper, Lizard, Spock Logo",
    rules_path: "images/bonus/rules.svg",
    rules_alt: "Rules for Playing Rock, Scissors, Paper, Lizard, Spock",
};

impl Mode {
    pub fn from_bonus_flag(is_bonus: bool) -> Self {
        if is_bonus {
            Mode::Bonus
        } else {
            Mode::Normal
        }
    }

    pub fn is_bonus(&self) -> bool {
        *self == Mode::Bonus
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            Mode::Normal => Mode::Bonus,
            Mode::Bonus => Mode::Normal,
        }
    }

    pub fn assets(&self) -> &'static ModeAssets {
        match self {
            Mode::Normal => &NORMAL_ASSETS,
            Mode::Bonus => &BONUS_ASSETS,
        }
    }

    /// Tokens eligible for play in this mode.
    pub fn active_tokens(&self) -> Vec<Token> {
        Token::active(*self)
    }
}
