use cli::FlashqCli;
use console::{ConsoleError, StdConsole};
use game::Game;
use log::info;
use thiserror::Error;

mod cli;
pub mod codec;
pub mod console;
pub mod game;
pub mod hardest;
pub mod quiz;
mod random;
mod stats;
pub mod store;

pub use hardest::HardestCards;
pub use quiz::{Quiz, RoundCount, Verdict};
pub use stats::Stats;
pub use store::{CardError, CardSet, CardStore};

pub fn run() -> Result<(), FlashqError> {
    let cli = FlashqCli::parse_legacy(std::env::args_os());
    info!("Starting with import {:?}, export {:?}", cli.import, cli.export);

    let mut game =
        Game::new(StdConsole::stdio(), rand::thread_rng()).export_on_exit(cli.export);

    if let Some(path) = cli.import {
        game.import(path)?;
    }

    game.run()?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum FlashqError {
    #[error("Console: {0}")]
    Console(#[from] ConsoleError),
}
