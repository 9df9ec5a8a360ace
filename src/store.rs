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

use hashbrown::HashMap;
use log::{debug, warn};
use thiserror::Error;

use crate::stats::Stats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),
    #[error("Can't remove \"{0}\": there is no such card.")]
    NotFound(String),
}

///Term to definition mapping. Both sides are unique, so the reverse index
///always points back at exactly one term.
#[derive(Debug, Default, Clone)]
pub struct CardStore {
    order: Vec<String>,
    definitions: HashMap<String, String>,
    terms_by_definition: HashMap<String, String>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), CardError> {
        if self.contains_term(term) {
            return Err(CardError::DuplicateTerm(term.to_owned()));
        }
        if self.contains_definition(definition) {
            return Err(CardError::DuplicateDefinition(definition.to_owned()));
        }

        self.insert(term, definition);
        Ok(())
    }

    pub fn remove(&mut self, term: &str) -> Result<String, CardError> {
        let definition = self
            .definitions
            .remove(term)
            .ok_or_else(|| CardError::NotFound(term.to_owned()))?;
        self.terms_by_definition.remove(&definition);
        self.order.retain(|t| t != term);
        Ok(definition)
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    pub fn find_term_by_definition(&self, definition: &str) -> Option<&str> {
        self.terms_by_definition.get(definition).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.terms_by_definition.contains_key(definition)
    }

    ///Terms in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|term| {
            self.definitions
                .get(term)
                .map(|definition| (term.as_str(), definition.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, term: &str, definition: &str) {
        self.order.push(term.to_owned());
        self.definitions
            .insert(term.to_owned(), definition.to_owned());
        self.terms_by_definition
            .insert(definition.to_owned(), term.to_owned());
    }

    ///Points `term` at a new definition in place, keeping its position.
    fn redefine(&mut self, term: &str, definition: &str) {
        if let Some(old) = self
            .definitions
            .insert(term.to_owned(), definition.to_owned())
        {
            self.terms_by_definition.remove(&old);
        }
        self.terms_by_definition
            .insert(definition.to_owned(), term.to_owned());
    }
}

///The one live collection of cards and their mistake counts. Every mutation
///that touches both sides goes through here so stats never outlive a card.
#[derive(Debug, Default, Clone)]
pub struct CardSet {
    cards: CardStore,
    stats: Stats,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), CardError> {
        self.cards.add(term, definition)?;
        self.stats.track(term);
        debug!("Added card \"{term}\"");
        Ok(())
    }

    pub fn remove(&mut self, term: &str) -> Result<(), CardError> {
        self.cards.remove(term)?;
        self.stats.forget(term);
        debug!("Removed card \"{term}\"");
        Ok(())
    }

    ///Inserts or replaces a card and overwrites its mistake count. A different
    ///card already holding `definition` is evicted first.
    pub fn upsert(&mut self, term: &str, definition: &str, mistakes: u32) {
        if let Some(owner) = self.cards.find_term_by_definition(definition) {
            if owner != term {
                let owner = owner.to_owned();
                warn!("Definition \"{definition}\" moved from \"{owner}\" to \"{term}\", dropping \"{owner}\"");
                if let Err(err) = self.remove(&owner) {
                    warn!("Unable to drop \"{owner}\": {err}");
                }
            }
        }

        if self.cards.contains_term(term) {
            self.cards.redefine(term, definition);
        } else {
            self.cards.insert(term, definition);
        }
        self.stats.set(term, mistakes);
    }

    ///Counts a wrong answer against `term`. Terms without a card are rejected.
    pub fn record_mistake(&mut self, term: &str) -> Result<u32, CardError> {
        if !self.cards.contains_term(term) {
            return Err(CardError::NotFound(term.to_owned()));
        }
        Ok(self.stats.increment(term))
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn mistakes(&self, term: &str) -> Option<u32> {
        self.stats
            .contains(term)
            .then(|| self.stats.get(term))
    }

    ///`(term, mistakes)` in card order.
    pub fn mistake_entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.stats.entries(self.cards.terms())
    }

    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
