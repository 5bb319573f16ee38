use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Input validation errors
    #[error("There must be at least {minimum} players input! Found {count}.")]
    InsufficientPlayers { count: usize, minimum: usize },

    #[error(
        "Can't make teams of two with an odd number of players!\n\nI count {count} players, currently. They are:\n{players}"
    )]
    OddPlayerCount { count: usize, players: String },

    #[error("Line {line} has no player name before the restriction marker")]
    EmptyName { line: usize },

    #[error("Player '{name}' is listed more than once")]
    DuplicateName { name: String },

    // Core algorithm errors
    #[error(
        "No feasible pairing found after {retries} rejected partners. Please restart with a different roster or restrictions."
    )]
    PairingInfeasible { retries: u32 },

    #[error("Malformed matchup: expected 1 or 2 teams, got {size}")]
    MalformedSequence { size: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an insufficient players error
    pub fn insufficient_players(count: usize, minimum: usize) -> Self {
        Self::InsufficientPlayers { count, minimum }
    }

    /// Create an odd player count error listing the players one per line, numbered from 1
    pub fn odd_player_count<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = players
            .into_iter()
            .enumerate()
            .map(|(idx, name)| format!("{}. {}", idx + 1, name.as_ref()))
            .collect();
        Self::OddPlayerCount {
            count: lines.len(),
            players: lines.join("\n"),
        }
    }

    /// Create an empty name error for a 1-based line number
    pub fn empty_name(line: usize) -> Self {
        Self::EmptyName { line }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a pairing infeasible error
    pub fn pairing_infeasible(retries: u32) -> Self {
        Self::PairingInfeasible { retries }
    }

    /// Create a malformed sequence error
    pub fn malformed_sequence(size: usize) -> Self {
        Self::MalformedSequence { size }
    }

    /// Check if the user should simply run again with different input.
    ///
    /// Only pairing failures qualify: the restriction graph itself blocked the
    /// heuristic, so retrying automatically with the same input is pointless.
    pub fn is_restart_recommended(&self) -> bool {
        matches!(self, AppError::PairingInfeasible { .. })
    }

    /// Check if error was caused by the roster contents rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InsufficientPlayers { .. }
                | AppError::OddPlayerCount { .. }
                | AppError::EmptyName { .. }
                | AppError::DuplicateName { .. }
        )
    }
}
