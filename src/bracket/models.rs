use crate::constants::display::TEAM_MEMBER_SEPARATOR;
use crate::error::AppError;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// A player identity.
///
/// Names are trimmed on construction and compared exactly as trimmed, so
/// `" alice "` and `"alice"` are the same player while `"Alice"` is not.
/// Capitalization is a display concern, see [`Name::display_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Name(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Capitalizes every whitespace separated token: first letter upper case,
    /// the rest lower case. Runs of whitespace collapse to a single space.
    pub fn display_name(&self) -> String {
        self.0
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(raw: &str) -> Self {
        Name::new(raw)
    }
}

impl From<String> for Name {
    fn from(raw: String) -> Self {
        Name::new(raw)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One roster line: a player plus the players they must not be teamed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub restricted: Vec<Name>,
}

impl Record {
    pub fn new(name: impl Into<Name>) -> Self {
        Record {
            name: name.into(),
            restricted: Vec::new(),
        }
    }

    pub fn with_restrictions<I, N>(name: impl Into<Name>, restricted: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        Record {
            name: name.into(),
            restricted: restricted.into_iter().map(Into::into).collect(),
        }
    }
}

/// Number of players that make up a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamSize {
    Solo,
    #[default]
    Pair,
}

impl TeamSize {
    pub fn from_players(players: u8) -> Result<Self, AppError> {
        match players {
            1 => Ok(TeamSize::Solo),
            2 => Ok(TeamSize::Pair),
            other => Err(AppError::config_error(format!(
                "players per team must be 1 or 2, got {other}"
            ))),
        }
    }

    pub fn players(self) -> u8 {
        match self {
            TeamSize::Solo => 1,
            TeamSize::Pair => 2,
        }
    }
}

impl Serialize for TeamSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.players())
    }
}

/// A finished team of one or two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Team {
    Solo(Name),
    Pair(Name, Name),
}

impl Team {
    pub fn solo(player: Name) -> Self {
        Team::Solo(player)
    }

    pub fn pair(first: Name, second: Name) -> Self {
        debug_assert_ne!(first, second, "a team cannot hold the same player twice");
        Team::Pair(first, second)
    }

    pub fn members(&self) -> impl Iterator<Item = &Name> {
        let (first, second) = match self {
            Team::Solo(only) => (only, None),
            Team::Pair(first, second) => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn len(&self) -> usize {
        match self {
            Team::Solo(_) => 1,
            Team::Pair(..) => 2,
        }
    }

    /// Teams are never empty; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.members().any(|member| member == name)
    }

    /// Capitalized member names joined with ` & `
    pub fn display_label(&self) -> String {
        self.members()
            .map(Name::display_name)
            .collect::<Vec<_>>()
            .join(TEAM_MEMBER_SEPARATOR)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Solo(only) => write!(f, "{only}"),
            Team::Pair(first, second) => write!(f, "{first}{TEAM_MEMBER_SEPARATOR}{second}"),
        }
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self.members() {
            seq.serialize_element(member)?;
        }
        seq.end()
    }
}

/// A first-round slot: two teams playing each other, or one team with a bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matchup {
    Game { home: Team, away: Team },
    Bye { team: Team },
}

impl Matchup {
    pub fn teams(&self) -> Vec<&Team> {
        match self {
            Matchup::Game { home, away } => vec![home, away],
            Matchup::Bye { team } => vec![team],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matchup::Game { .. } => 2,
            Matchup::Bye { .. } => 1,
        }
    }

    /// Matchups are never empty; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Matchup::Bye { .. })
    }
}

impl TryFrom<Vec<Team>> for Matchup {
    type Error = AppError;

    fn try_from(group: Vec<Team>) -> Result<Self, Self::Error> {
        let size = group.len();
        let mut teams = group.into_iter();
        match (teams.next(), teams.next(), teams.next()) {
            (Some(team), None, None) => Ok(Matchup::Bye { team }),
            (Some(home), Some(away), None) => Ok(Matchup::Game { home, away }),
            _ => Err(AppError::malformed_sequence(size)),
        }
    }
}

/// The generated first round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub players_per_team: TeamSize,
    pub matchups: Vec<Matchup>,
}

impl Bracket {
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.matchups.iter().flat_map(Matchup::teams)
    }

    pub fn team_count(&self) -> usize {
        self.matchups.iter().map(Matchup::len).sum()
    }

    pub fn bye_count(&self) -> usize {
        self.matchups.iter().filter(|m| m.is_bye()).count()
    }
}
