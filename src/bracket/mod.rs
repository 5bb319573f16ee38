//! Team formation and first-round scheduling
//!
//! The pipeline runs in one direction: roster records feed a
//! [`RestrictionMap`] and a shuffled [`Pool`], the [`PairingEngine`] drains the
//! pool into teams, and [`schedule_matchups`] groups the teams into games and
//! byes.

pub mod generator;
pub mod models;
pub mod pairing;
pub mod pool;
pub mod random;
pub mod restrictions;
pub mod scheduler;

pub use generator::{BracketGenerator, BracketSettings, ensure_minimum_players, generate_bracket};
pub use models::{Bracket, Matchup, Name, Record, Team, TeamSize};
pub use pairing::PairingEngine;
pub use pool::Pool;
pub use random::RandomSource;
pub use restrictions::RestrictionMap;
pub use scheduler::{chunk, schedule_matchups};
