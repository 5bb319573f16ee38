//! Making an odd roster even before two-player teams are formed

use crate::bracket::{Name, RandomSource, Record};
use crate::error::AppError;
use tracing::info;

/// How to even out an odd roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddCountChoice {
    /// Add one more player
    Add,
    /// Drop a player chosen at random
    Remove,
}

impl OddCountChoice {
    /// Parses a user answer, ignoring case and surrounding whitespace
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "add" => Some(OddCountChoice::Add),
            "remove" => Some(OddCountChoice::Remove),
            _ => None,
        }
    }
}

/// Appends a player with no restrictions.
///
/// # Errors
/// * `AppError::Config` - the name is blank
/// * `AppError::DuplicateName` - the name is already on the roster
pub fn add_player(records: &mut Vec<Record>, raw_name: &str) -> Result<Name, AppError> {
    let name = Name::new(raw_name);
    if name.is_empty() {
        return Err(AppError::config_error("The new player's name cannot be empty"));
    }
    if records.iter().any(|record| record.name == name) {
        return Err(AppError::duplicate_name(name.as_str()));
    }

    info!("Adding player: {name}");
    records.push(Record::new(name.clone()));
    Ok(name)
}

/// Removes one record chosen uniformly at random and returns it
pub fn remove_random_player<R: RandomSource>(
    records: &mut Vec<Record>,
    rng: &mut R,
) -> Option<Record> {
    if records.is_empty() {
        return None;
    }
    let removed = records.remove(rng.pick_index(records.len()));
    info!("Removing player: {}", removed.name);
    Some(removed)
}
