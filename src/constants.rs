//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and strings used by the
//! bracket generator, the roster parser and the presenter.

/// Fewest names a roster may contain before any bracket work begins
pub const MIN_PLAYERS: usize = 4;

/// Rejected partner draws tolerated across one whole pairing run
pub const MAX_PAIRING_RETRIES: u32 = 10;

/// Default number of players per team
pub const DEFAULT_PLAYERS_PER_TEAM: u8 = 2;

/// Number of teams meeting in one scheduled game
pub const TEAMS_PER_MATCHUP: usize = 2;

/// Roster file format
pub mod roster {
    /// Marker introducing a name the primary player must not be teamed with
    pub const RESTRICTION_MARKER: &str = "!!";

    /// Lines starting with this prefix are ignored
    pub const COMMENT_PREFIX: char = '#';
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const LOG_FILE: &str = "BRACKET_PLANNER_LOG_FILE";
    pub const MAX_RETRIES: &str = "BRACKET_PLANNER_MAX_RETRIES";
    pub const PLAYERS_PER_TEAM: &str = "BRACKET_PLANNER_PLAYERS_PER_TEAM";
}

/// Console output
pub mod display {
    /// Width of the horizontal rules around the banner
    pub const RULE_WIDTH: usize = 100;

    /// Banner title
    pub const BANNER_TITLE: &str = "MATCHES";

    /// Separator between the members of a two-player team
    pub const TEAM_MEMBER_SEPARATOR: &str = " & ";

    /// Default log file name
    pub const LOG_FILE_NAME: &str = "bracket_planner.log";
}
