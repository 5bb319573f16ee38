use super::models::{Bracket, Name, Record, Team, TeamSize};
use super::pairing::PairingEngine;
use super::pool::Pool;
use super::random::RandomSource;
use super::restrictions::RestrictionMap;
use super::scheduler::schedule_matchups;
use crate::constants::{MAX_PAIRING_RETRIES, MIN_PLAYERS};
use crate::error::AppError;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Knobs for a single bracket run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSettings {
    pub team_size: TeamSize,
    pub max_pairing_retries: u32,
}

impl Default for BracketSettings {
    fn default() -> Self {
        BracketSettings {
            team_size: TeamSize::Pair,
            max_pairing_retries: MAX_PAIRING_RETRIES,
        }
    }
}

/// Rejects rosters that are too small to form a bracket.
pub fn ensure_minimum_players(count: usize) -> Result<(), AppError> {
    if count < MIN_PLAYERS {
        return Err(AppError::insufficient_players(count, MIN_PLAYERS));
    }
    Ok(())
}

/// Validated roster ready to produce one bracket.
///
/// `generate` consumes the generator; build a new one for another bracket.
#[derive(Debug, Clone)]
pub struct BracketGenerator {
    names: Vec<Name>,
    restrictions: RestrictionMap,
    settings: BracketSettings,
}

impl BracketGenerator {
    /// Validates the roster and builds the restriction map.
    ///
    /// # Errors
    /// * `AppError::InsufficientPlayers` - fewer than four records
    /// * `AppError::DuplicateName` - the same player listed twice
    /// * `AppError::OddPlayerCount` - odd roster when building two-player teams
    pub fn new(records: Vec<Record>, settings: BracketSettings) -> Result<Self, AppError> {
        ensure_minimum_players(records.len())?;

        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(&record.name) {
                return Err(AppError::duplicate_name(record.name.as_str()));
            }
        }

        if settings.team_size == TeamSize::Pair && records.len() % 2 != 0 {
            return Err(AppError::odd_player_count(
                records.iter().map(|r| r.name.as_str()),
            ));
        }

        let restrictions = RestrictionMap::from_records(&records);
        for name in restrictions.dangling(&seen) {
            warn!("Restriction references '{name}', who is not on the roster");
        }
        if settings.team_size == TeamSize::Solo && !restrictions.is_empty() {
            warn!("Ignoring pairing restrictions for one-player teams");
        }

        let names = records.into_iter().map(|record| record.name).collect();
        Ok(BracketGenerator {
            names,
            restrictions,
            settings,
        })
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn restrictions(&self) -> &RestrictionMap {
        &self.restrictions
    }

    pub fn settings(&self) -> BracketSettings {
        self.settings
    }

    /// Forms teams and schedules them into first-round matchups.
    pub fn generate<R: RandomSource>(self, rng: &mut R) -> Result<Bracket, AppError> {
        info!(
            "Generating bracket for {} players, {} per team",
            self.names.len(),
            self.settings.team_size.players()
        );

        let teams = match self.settings.team_size {
            TeamSize::Pair => {
                let pool = Pool::build(&self.names, &self.restrictions, rng);
                PairingEngine::new(&self.restrictions)
                    .with_max_retries(self.settings.max_pairing_retries)
                    .pair(pool, rng)?
            }
            TeamSize::Solo => {
                let mut names = self.names;
                rng.shuffle(&mut names);
                names.into_iter().map(Team::solo).collect()
            }
        };

        let matchups = schedule_matchups(teams, rng)?;
        Ok(Bracket {
            players_per_team: self.settings.team_size,
            matchups,
        })
    }
}

/// Validates `records` and generates one bracket from them.
pub fn generate_bracket<R: RandomSource>(
    records: Vec<Record>,
    settings: BracketSettings,
    rng: &mut R,
) -> Result<Bracket, AppError> {
    BracketGenerator::new(records, settings)?.generate(rng)
}
