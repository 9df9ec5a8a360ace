/*
 * Copyright (C) 2024 Clownvin <123clownvin@gmail.com>
 *
 * This file is part of Flashq.
 *
 * Flashq is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Flashq is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Flashq.  If not, see <http://www.gnu.org/licenses/>.
 */

use std::{fmt::Display, path::PathBuf, str::FromStr};

use log::{debug, error};
use rand::Rng;

use crate::{
    codec,
    console::{ConsoleError, LineIo, Transcript},
    hardest::HardestCards,
    quiz::{Quiz, QuizError, RoundCount},
    store::CardSet,
};

const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl FromStr for Action {
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "import" => Ok(Self::Import),
            "export" => Ok(Self::Export),
            "ask" => Ok(Self::Ask),
            "exit" => Ok(Self::Exit),
            "log" => Ok(Self::Log),
            "hardest card" => Ok(Self::HardestCard),
            "reset stats" => Ok(Self::ResetStats),
            _ => Err(format!("Action not recognized: {s}")),
        }
    }

    type Err = String;
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Import => "import",
            Action::Export => "export",
            Action::Ask => "ask",
            Action::Exit => "exit",
            Action::Log => "log",
            Action::HardestCard => "hardest card",
            Action::ResetStats => "reset stats",
        })
    }
}

///One interactive session: the live card set, the console it talks through,
///and where to export on the way out.
pub struct Game<C, R> {
    console: Transcript<C>,
    set: CardSet,
    rng: R,
    export_on_exit: Option<PathBuf>,
}

impl<C: LineIo, R: Rng> Game<C, R> {
    pub fn new(console: C, rng: R) -> Self {
        Self {
            console: Transcript::new(console),
            set: CardSet::new(),
            rng,
            export_on_exit: None,
        }
    }

    pub fn export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    pub fn set(&self) -> &CardSet {
        &self.set
    }

    pub fn transcript(&self) -> &Transcript<C> {
        &self.console
    }

    ///Reads actions until `exit` or the input runs dry.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.console.write_line(ACTION_PROMPT)?;
            let input = match self.console.read_line() {
                Ok(input) => input,
                Err(ConsoleError::Eof) => return self.exit(),
                Err(err) => return Err(err),
            };

            let Ok(action) = input.parse::<Action>() else {
                debug!("Ignoring unknown action \"{input}\"");
                continue;
            };

            match self.perform(action) {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(ConsoleError::Eof) => return self.exit(),
                Err(err) => return Err(err),
            }
        }
    }

    ///Returns whether the session should keep going.
    pub fn perform(&mut self, action: Action) -> Result<bool, ConsoleError> {
        debug!("Performing {action}");
        match action {
            Action::Add => self.add()?,
            Action::Remove => self.remove()?,
            Action::Import => {
                let path = self.ask_file_name()?;
                self.import(path)?
            }
            Action::Export => {
                let path = self.ask_file_name()?;
                self.export(path)?
            }
            Action::Ask => self.ask()?,
            Action::Log => self.save_log()?,
            Action::HardestCard => {
                let report = HardestCards::compute(&self.set);
                self.console.write_line(&report.to_string())?
            }
            Action::ResetStats => {
                self.set.reset_stats();
                self.console.write_line("Card statistics have been reset.")?
            }
            Action::Exit => {
                self.exit()?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn import(&mut self, path: impl Into<PathBuf>) -> Result<(), ConsoleError> {
        match codec::load(path, &mut self.set) {
            Ok(count) => self
                .console
                .write_line(&format!("{count} cards have been loaded.")),
            Err(err) => {
                error!("Import from {} failed: {err:?}", err.path().display());
                self.console.write_line(&err.to_string())
            }
        }
    }

    pub fn export(&mut self, path: impl Into<PathBuf>) -> Result<(), ConsoleError> {
        match codec::save(path, &self.set) {
            Ok(count) => self
                .console
                .write_line(&format!("{count} cards have been saved.")),
            Err(err) => {
                error!("Export to {} failed: {err:?}", err.path().display());
                self.console.write_line(&err.to_string())
            }
        }
    }

    fn add(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line("The card:")?;
        let term = self.console.read_line()?;
        if self.set.cards().contains_term(&term) {
            return self
                .console
                .write_line(&format!("The card \"{term}\" already exists."));
        }

        self.console.write_line("The definition of the card:")?;
        let definition = self.console.read_line()?;
        match self.set.add(&term, &definition) {
            Ok(()) => self.console.write_line(&format!(
                "The pair (\"{term}\":\"{definition}\") has been added."
            )),
            Err(err) => self.console.write_line(&err.to_string()),
        }
    }

    fn remove(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line("The card:")?;
        let term = self.console.read_line()?;
        match self.set.remove(&term) {
            Ok(()) => self.console.write_line("The card has been removed."),
            Err(err) => self.console.write_line(&err.to_string()),
        }
    }

    fn ask(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line("How many times to ask?")?;
        let input = self.console.read_line()?;

        let result = input.parse::<RoundCount>().and_then(|rounds| {
            Quiz::new(&mut self.set, &mut self.rng).run(rounds, &mut self.console)
        });

        match result {
            Ok(rounds) => {
                debug!(
                    "Session over, {} of {} correct",
                    rounds.iter().filter(|round| round.verdict.is_correct()).count(),
                    rounds.len()
                );
                Ok(())
            }
            Err(QuizError::Console(err)) => Err(err),
            Err(err) => self.console.write_line(&err.to_string()),
        }
    }

    fn save_log(&mut self) -> Result<(), ConsoleError> {
        let path = self.ask_file_name()?;
        // The confirmation is part of the transcript but not of the saved file.
        match self.console.save(&path) {
            Ok(()) => self.console.write_line("The log has been saved."),
            Err(err) => {
                error!("Saving log to {path} failed: {err}");
                self.console.write_line("File not found.")
            }
        }
    }

    fn exit(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line("Bye Bye!")?;
        if let Some(path) = self.export_on_exit.clone() {
            self.export(path)?;
        }
        Ok(())
    }

    fn ask_file_name(&mut self) -> Result<String, ConsoleError> {
        self.console.write_line("File name:")?;
        self.console.read_line()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::TempDir;

    use crate::{codec, console::tests::Scripted, store::CardSet};

    use super::{Action, Game, ACTION_PROMPT};

    fn game<'a>(input: impl IntoIterator<Item = &'a str>) -> Game<Scripted, StdRng> {
        Game::new(Scripted::new(input), StdRng::seed_from_u64(9))
    }

    fn output(game: &Game<Scripted, StdRng>) -> Vec<&str> {
        game.transcript()
            .lines()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn parse_actions() {
        assert_eq!("hardest card".parse::<Action>(), Ok(Action::HardestCard));
        assert_eq!("reset stats".parse::<Action>(), Ok(Action::ResetStats));
        assert!("Add".parse::<Action>().is_err());
        assert!("hardest".parse::<Action>().is_err());
        for action in [Action::Add, Action::Log, Action::ResetStats] {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn add_then_exit() {
        let mut game = game(["add", "hello", "world", "exit"]);
        game.run().expect("Unable to run game");

        assert_eq!(
            output(&game),
            vec![
                ACTION_PROMPT,
                "add",
                "The card:",
                "hello",
                "The definition of the card:",
                "world",
                "The pair (\"hello\":\"world\") has been added.",
                ACTION_PROMPT,
                "exit",
                "Bye Bye!",
            ]
        );
        assert_eq!(game.set().cards().get("hello"), Some("world"));
    }

    #[test]
    fn duplicate_term_skips_definition_prompt() {
        let mut game = game(["add", "a", "b", "add", "a", "exit"]);
        game.run().expect("Unable to run game");

        let lines = output(&game);
        assert!(lines.contains(&"The card \"a\" already exists."));
        assert_eq!(
            lines
                .iter()
                .filter(|line| **line == "The definition of the card:")
                .count(),
            1
        );
    }

    #[test]
    fn duplicate_definition_rejected() {
        let mut game = game(["add", "a", "b", "add", "c", "b", "exit"]);
        game.run().expect("Unable to run game");

        assert!(output(&game).contains(&"The definition \"b\" already exists."));
        assert_eq!(game.set().len(), 1);
    }

    #[test]
    fn remove_messages() {
        let mut game = game(["add", "a", "b", "remove", "x", "remove", "a", "exit"]);
        game.run().expect("Unable to run game");

        let lines = output(&game);
        assert!(lines.contains(&"Can't remove \"x\": there is no such card."));
        assert!(lines.contains(&"The card has been removed."));
        assert!(game.set().is_empty());
    }

    #[test]
    fn ask_without_cards() {
        let mut game = game(["ask", "2", "exit"]);
        game.run().expect("Unable to run game");
        assert!(output(&game).contains(&"There are no cards to ask about."));
    }

    #[test]
    fn ask_invalid_count() {
        let mut game = game(["add", "a", "b", "ask", "lots", "exit"]);
        game.run().expect("Unable to run game");

        let lines = output(&game);
        assert!(lines.contains(&"\"lots\" is not a valid number of rounds."));
        assert!(!lines.iter().any(|line| line.starts_with("Print the definition")));
    }

    #[test]
    fn ask_and_hardest_card() {
        let mut game = game([
            "add", "a", "b", "ask", "2", "wrong", "also wrong", "hardest card", "reset stats",
            "hardest card", "exit",
        ]);
        game.run().expect("Unable to run game");

        let lines = output(&game);
        assert!(lines.contains(&"The hardest card is \"a\". You have 2 errors answering it."));
        assert!(lines.contains(&"Card statistics have been reset."));
        assert_eq!(lines.iter().rev().nth(3), Some(&"There are no cards with errors."));
    }

    #[test]
    fn import_export_and_exit_export() {
        let dir = TempDir::new().expect("Unable to create temp dir");
        let source = dir.path().join("source.json");
        let on_exit = dir.path().join("exit.json");

        let mut seeded = CardSet::new();
        seeded.upsert("hello", "world", 3);
        seeded.upsert("hi", "earth", 0);
        codec::save(&source, &seeded).expect("Unable to seed cards");

        let source_str = source.to_str().expect("Temp path is not UTF-8");
        let mut game = game(["import", source_str, "remove", "hi", "exit"])
            .export_on_exit(Some(on_exit.clone()));
        game.run().expect("Unable to run game");

        let lines = output(&game);
        assert!(lines.contains(&"2 cards have been loaded."));
        assert_eq!(lines.last(), Some(&"1 cards have been saved."));

        let mut exported = CardSet::new();
        codec::load(&on_exit, &mut exported).expect("Unable to load exit export");
        assert_eq!(exported.cards().terms(), ["hello"]);
        assert_eq!(exported.mistakes("hello"), Some(3));
    }

    #[test]
    fn import_missing_file() {
        let dir = TempDir::new().expect("Unable to create temp dir");
        let missing = dir.path().join("missing.json");
        let mut game = game(["import", missing.to_str().expect("Temp path is not UTF-8"), "exit"]);
        game.run().expect("Unable to run game");
        assert!(output(&game).contains(&"File not found."));
    }

    #[test]
    fn log_saves_transcript() {
        let dir = TempDir::new().expect("Unable to create temp dir");
        let log = dir.path().join("log.txt");
        let log_str = log.to_str().expect("Temp path is not UTF-8");

        let mut game = game(["add", "a", "b", "log", log_str, "exit"]);
        game.run().expect("Unable to run game");

        let saved = std::fs::read_to_string(&log).expect("Unable to read log");
        assert!(saved.starts_with(ACTION_PROMPT));
        assert!(saved.ends_with(&format!("File name:\n{log_str}\n")));
        assert!(output(&game).contains(&"The log has been saved."));
    }

    #[test]
    fn unknown_actions_are_ignored() {
        let mut game = game(["dance", "exit"]);
        game.run().expect("Unable to run game");
        assert_eq!(
            output(&game),
            vec![ACTION_PROMPT, "dance", ACTION_PROMPT, "exit", "Bye Bye!"]
        );
    }

    #[test]
    fn end_of_input_exits() {
        let dir = TempDir::new().expect("Unable to create temp dir");
        let on_exit = dir.path().join("exit.json");

        let mut game = game(["add", "a"]).export_on_exit(Some(on_exit.clone()));
        game.run().expect("End of input should exit cleanly");

        assert_eq!(output(&game).last(), Some(&"0 cards have been saved."));
        assert!(on_exit.exists());
    }
}
