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

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::CardSet;

///One exported card. A file holds a JSON array of these, in card order.
///
///Example:
///```
///# use flashq::codec::CardRecord;
///let json = r#"[
///  {"term": "hello", "definition": "world", "mistakes": 2},
///  {"term": "hi", "definition": "earth", "mistakes": 0}
///]"#;
///assert!(serde_json::from_str::<Vec<CardRecord>>(json)
///  .is_ok_and(|records| records.len() == 2 && records[0].mistakes == 2));
///```
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("File not found.")]
    FileNotFound(PathBuf, #[source] std::io::Error),
    #[error("File is not a valid card export.")]
    Decode(PathBuf, #[source] serde_json::Error),
    #[error("File not found.")]
    Io(PathBuf, #[source] std::io::Error),
}

impl CodecError {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound(path, _) | Self::Decode(path, _) | Self::Io(path, _) => path,
        }
    }
}

pub fn records(set: &CardSet) -> Vec<CardRecord> {
    set.cards()
        .iter()
        .map(|(term, definition)| CardRecord {
            term: term.to_owned(),
            definition: definition.to_owned(),
            mistakes: set.stats().get(term),
        })
        .collect()
}

///Writes every card to `path`, replacing whatever was there. Returns how many
///cards were written.
pub fn save(path: impl Into<PathBuf>, set: &CardSet) -> Result<usize, CodecError> {
    let path = path.into();
    let records = records(set);

    let json = serde_json::to_string(&records)
        .map_err(|err| CodecError::Io(path.clone(), std::io::Error::from(err)))?;
    fs::write(&path, json).map_err(|err| CodecError::Io(path.clone(), err))?;

    info!("Saved {} cards to {}", records.len(), path.display());
    Ok(records.len())
}

pub fn decode(path: impl Into<PathBuf>) -> Result<Vec<CardRecord>, CodecError> {
    let path = path.into();
    let json =
        fs::read_to_string(&path).map_err(|err| CodecError::FileNotFound(path.clone(), err))?;
    serde_json::from_str(&json).map_err(|err| CodecError::Decode(path, err))
}

///Merges the cards stored at `path` into `set`. The whole file is decoded
///before anything is applied; imported counts replace existing ones.
pub fn load(path: impl Into<PathBuf>, set: &mut CardSet) -> Result<usize, CodecError> {
    let path = path.into();
    let records = decode(&path)?;

    for record in records.iter() {
        set.upsert(&record.term, &record.definition, record.mistakes);
    }

    info!("Loaded {} cards from {}", records.len(), path.display());
    Ok(records.len())
}
