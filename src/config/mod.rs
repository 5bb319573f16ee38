use crate::bracket::{BracketSettings, TeamSize};
use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Players per team when `--players-per-team` is not given. Either 1 or 2.
    #[serde(default = "default_players_per_team")]
    pub players_per_team: u8,
    /// Name used when an odd roster is evened out by adding a player.
    /// When unset the user is asked for a name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_name: Option<String>,
    /// Rejected partner draws tolerated across one pairing run.
    #[serde(default = "default_max_pairing_retries")]
    pub max_pairing_retries: u32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Whether matchups are printed with colors.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_players_per_team() -> u8 {
    constants::DEFAULT_PLAYERS_PER_TEAM
}

fn default_max_pairing_retries() -> u32 {
    constants::MAX_PAIRING_RETRIES
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            players_per_team: default_players_per_team(),
            placeholder_name: None,
            max_pairing_retries: default_max_pairing_retries(),
            log_file_path: None,
            color: default_color(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file means all defaults.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `BRACKET_PLANNER_LOG_FILE` - Override log file path
    /// - `BRACKET_PLANNER_MAX_RETRIES` - Override the pairing retry budget
    /// - `BRACKET_PLANNER_PLAYERS_PER_TEAM` - Override players per team
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Unreadable or invalid config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(retries) = lookup(env_vars::MAX_RETRIES).and_then(|s| s.parse::<u32>().ok()) {
            self.max_pairing_retries = retries;
        }

        if let Some(players) =
            lookup(env_vars::PLAYERS_PER_TEAM).and_then(|s| s.parse::<u8>().ok())
        {
            self.players_per_team = players;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Bracket settings, with `players_per_team` overriding the configured value
    pub fn bracket_settings(&self, players_per_team: Option<u8>) -> Result<BracketSettings, AppError> {
        Ok(BracketSettings {
            team_size: TeamSize::from_players(players_per_team.unwrap_or(self.players_per_team))?,
            max_pairing_retries: self.max_pairing_retries,
        })
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Settings come from defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Players Per Team:");
        println!("{}", config.players_per_team);
        println!("────────────────────────────────────");
        println!("Placeholder Name:");
        println!(
            "{}",
            config.placeholder_name.as_deref().unwrap_or("(Ask when needed)")
        );
        println!("────────────────────────────────────");
        println!("Max Pairing Retries:");
        println!("{}", config.max_pairing_retries);
        println!("────────────────────────────────────");
        println!("Colors:");
        println!("{}", if config.color { "on" } else { "off" });
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::display::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads the configuration stored at `path` as written, without env
    /// overrides or validation. A missing file means all defaults.
    ///
    /// Use this before editing and saving the file, so values that only came
    /// from the environment are never written back.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
