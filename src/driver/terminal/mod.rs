use log::{debug, warn};
use std::{
    fmt,
    io::{self, BufRead, Write},
    time::Duration,
};

use super::{Command, Driver, DriverError, Presenter, RevealStep};
use crate::game::{Game, Mode, ModeAssets, Phase, RoundResult, Token};

/// Pause before presenting the given reveal step.
fn reveal_delay(step: RevealStep) -> Duration {
    match step {
        RevealStep::PlayerChoice => Duration::from_millis(600),
        RevealStep::MaskedHouseChoice => Duration::from_millis(1500),
        RevealStep::HouseChoice => Duration::from_millis(1500),
        RevealStep::Result => Duration::from_millis(1000),
    }
}

/// Presents the game as lines of text.
pub struct Screen<W> {
    out: W,
    /// Skip the reveal delays.
    fast: bool,
    /// The first write failure, picked up by the driver after each command.
    error: Option<io::Error>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, fast: bool) -> Self {
        Screen {
            out,
            fast,
            error: None,
        }
    }

    fn line(&mut self, args: fmt::Arguments) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush())
        {
            self.error = Some(e);
        }
    }

    fn take_error(&mut self) -> Result<(), DriverError> {
        match self.error.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for Screen<W> {
    fn render_mode_change(&mut self, mode: Mode) {
        let assets = mode.assets();
        self.line(format_args!("== {} == [{}]", assets.logo_alt, assets.logo_path));
    }

    fn render_score(&mut self, score: u32) {
        self.line(format_args!("Score: {}", score));
    }

    fn render_board(&mut self, tokens: &[Token]) {
        let names = tokens.iter().map(Token::name).collect::<Vec<_>>();
        self.line(format_args!(
            "Pick one of: {} (or: mode, rules, quit)",
            names.join(", ")
        ));
    }

    fn render_rules(&mut self, assets: &ModeAssets, tokens: &[Token]) {
        self.line(format_args!("{} [{}]", assets.rules_alt, assets.rules_path));
        for token in tokens {
            let beaten = token
                .beats()
                .into_iter()
                .filter(|beaten| tokens.contains(beaten))
                .map(|beaten| beaten.name())
                .collect::<Vec<_>>();
            self.line(format_args!("  {} beats {}", token, beaten.join(" and ")));
        }
    }

    fn render_step(&mut self, step: RevealStep, result: &RoundResult) {
        if !self.fast {
            std::thread::sleep(reveal_delay(step));
        }
        match step {
            RevealStep::PlayerChoice => {
                self.line(format_args!("You picked {}", result.player_token))
            }
            RevealStep::MaskedHouseChoice => self.line(format_args!("The house picked ...")),
            RevealStep::HouseChoice => {
                self.line(format_args!("The house picked {}", result.house_token))
            }
            RevealStep::Result => self.line(format_args!(
                "{}! {} wins. Type \"again\" to play again.",
                result.result_text(),
                result.winner()
            )),
        }
    }
}

/// A driver which reads commands line by line and prints the game as text.
pub struct TerminalDriver<R, W> {
    game: Game,
    input: R,
    screen: Screen<W>,
}

impl TerminalDriver<io::StdinLock<'static>, io::Stdout> {
    /// Play on stdin/stdout.
    pub fn new(game: Game, fast: bool) -> Self {
        TerminalDriver::with_io(game, io::stdin().lock(), io::stdout(), fast)
    }
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    pub fn with_io(game: Game, input: R, out: W, fast: bool) -> Self {
        TerminalDriver {
            game,
            input,
            screen: Screen::new(out, fast),
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.screen.into_inner()
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    fn play(&mut self) -> Result<(), DriverError> {
        self.game.start(&mut self.screen);
        self.screen.take_error()?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                debug!("End of input");
                break;
            }
            // Undecodable bytes become replacement characters and fail to parse
            // as a command like any other typo.
            let line = String::from_utf8_lossy(&raw);
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Intent(intent)) => {
                    if let Err(e) = self.game.handle(intent, &mut self.screen) {
                        warn!("Rejected {:?}: {}", intent, e);
                        self.screen.line(format_args!("Can't do that now: {}", e));
                        if self.game.phase() == Phase::Revealed {
                            self.screen
                                .line(format_args!("Type \"again\" to play again first."));
                        }
                    }
                }
                Err(e) => self.screen.line(format_args!("{}", e)),
            }
            self.screen.take_error()?;
        }
        Ok(())
    }
}
