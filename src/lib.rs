//! Randomized team and first-round matchup generator
//!
//! This library turns a roster of names into random two-player (or
//! one-player) teams while honoring "cannot be teamed with" restrictions,
//! then pairs the teams into first-round games with a bye for an odd team.
//!
//! # Examples
//!
//! ```rust
//! use bracket_planner::bracket::{BracketSettings, generate_bracket};
//! use bracket_planner::roster::parse_roster;
//! use bracket_planner::presenter::BracketPage;
//! use bracket_planner::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let records = parse_roster("alice !!bob\nbob\ncarol\ndave\n")?;
//!     let mut rng = rand::rng();
//!
//!     match generate_bracket(records, BracketSettings::default(), &mut rng) {
//!         Ok(bracket) => BracketPage::new(&bracket, false).render(&mut std::io::stdout())?,
//!         // The greedy pairing can dead-end; running again usually succeeds
//!         Err(e) if e.is_restart_recommended() => eprintln!("{e}"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod bracket;
pub mod config;
pub mod constants;
pub mod error;
pub mod presenter;
pub mod roster;

// Re-export commonly used types for convenience
pub use bracket::{
    Bracket, BracketGenerator, BracketSettings, Matchup, Name, Record, Team, TeamSize,
    generate_bracket,
};
pub use config::Config;
pub use error::AppError;
pub use presenter::BracketPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
