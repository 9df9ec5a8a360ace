use std::{fmt::Display, str::FromStr};

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    console::{ConsoleError, LineIo},
    random::GetRandom,
    store::{CardError, CardSet},
};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("\"{0}\" is not a valid number of rounds.")]
    InvalidCount(String),
    #[error("There are no cards to ask about.")]
    NoCards,
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

///How many rounds to ask. Parsed from whatever the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundCount(pub usize);

impl FromStr for RoundCount {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|_| QuizError::InvalidCount(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    ///Wrong for the asked card, but the right definition of `owner`.
    CrossMatch { expected: String, owner: String },
    Wrong { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct!"),
            Self::CrossMatch { expected, owner } => f.write_fmt(format_args!(
                "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{owner}\"."
            )),
            Self::Wrong { expected } => {
                f.write_fmt(format_args!("Wrong. The right answer is \"{expected}\"."))
            }
        }
    }
}

///One asked term and how the answer was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub term: String,
    pub answer: String,
    pub verdict: Verdict,
}

pub struct Quiz<'a, R: Rng + ?Sized> {
    set: &'a mut CardSet,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Quiz<'a, R> {
    pub fn new(set: &'a mut CardSet, rng: &'a mut R) -> Self {
        Self { set, rng }
    }

    ///Picks any card, with replacement.
    pub fn draw(&mut self) -> Result<String, QuizError> {
        self.set
            .cards()
            .terms()
            .get_random(self.rng)
            .cloned()
            .ok_or(QuizError::NoCards)
    }

    ///Judges `answer` for `term` and records a mistake when it's wrong.
    pub fn answer(&mut self, term: &str, answer: &str) -> Result<Verdict, QuizError> {
        let verdict = classify(self.set, term, answer)?;
        if !verdict.is_correct() {
            let mistakes = self.set.record_mistake(term)?;
            debug!("\"{term}\" answered wrong, now at {mistakes} mistakes");
        }
        Ok(verdict)
    }

    ///Asks `rounds` questions over `console`, one after the other.
    pub fn run(
        &mut self,
        rounds: RoundCount,
        console: &mut impl LineIo,
    ) -> Result<Vec<Round>, QuizError> {
        let RoundCount(rounds) = rounds;
        if rounds > 0 && self.set.is_empty() {
            return Err(QuizError::NoCards);
        }

        let mut results = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            let term = self.draw()?;
            console.write_line(&format!("Print the definition of \"{term}\":"))?;
            let answer = console.read_line()?;
            let verdict = self.answer(&term, &answer)?;
            console.write_line(&verdict.to_string())?;
            results.push(Round {
                term,
                answer,
                verdict,
            });
        }

        Ok(results)
    }
}

///Exact match first, then a match against some other card's definition.
pub fn classify(set: &CardSet, term: &str, answer: &str) -> Result<Verdict, CardError> {
    let cards = set.cards();
    let expected = cards
        .get(term)
        .ok_or_else(|| CardError::NotFound(term.to_owned()))?;

    Ok(if answer == expected {
        Verdict::Correct
    } else if let Some(owner) = cards.find_term_by_definition(answer) {
        Verdict::CrossMatch {
            expected: expected.to_owned(),
            owner: owner.to_owned(),
        }
    } else {
        Verdict::Wrong {
            expected: expected.to_owned(),
        }
    })
}
