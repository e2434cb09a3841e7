use anyhow::Context;
use driver::Driver;
use log::{error, info};

use config::Config;
use driver::{direct::DirectDriver, terminal::TerminalDriver};
use game::Game;
use store::{FileStore, MemoryStore, ScoreStore};

mod config;
mod driver;
mod game;
mod store;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let config = Config::from_env();
    let store: Box<dyn ScoreStore> = match &config.data_file {
        Some(path) => {
            let store = FileStore::new(path);
            info!("Keeping scores in {}", store.path().display());
            Box::new(store)
        }
        None => {
            info!("Keeping scores in memory only");
            Box::new(MemoryStore::default())
        }
    };
    let game = Game::new(store);

    // Any arguments are played as a script instead of reading the terminal
    let script = std::env::args().skip(1).collect::<Vec<_>>();
    let result = if script.is_empty() {
        TerminalDriver::new(game, config.fast_reveal).play()
    } else {
        let mut driver = DirectDriver::from_words(game, script.iter().map(String::as_str))
            .context("failed to parse script")?;
        driver.play().map(|()| {
            for render in &driver.recorder.renders {
                println!("{}", render);
            }
            println!(
                "Score: {} ({:?} mode)",
                driver.game.state().current_score(),
                driver.game.mode()
            )
        })
    };

    if let Err(e) = result {
        error!("An error occurred: {:?}", e);
        return Err(e).context("game aborted");
    }
    info!("Thanks for playing!");
    Ok(())
}
