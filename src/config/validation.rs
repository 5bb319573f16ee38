use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Players per team must be 1 or 2
/// - The pairing retry budget must be at least 1
/// - If a placeholder name is provided, it cannot be blank
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if !matches!(config.players_per_team, 1 | 2) {
        return Err(AppError::config_error(format!(
            "players_per_team must be 1 or 2, got {}",
            config.players_per_team
        )));
    }

    if config.max_pairing_retries == 0 {
        return Err(AppError::config_error(
            "max_pairing_retries must be at least 1",
        ));
    }

    if let Some(placeholder) = &config.placeholder_name
        && placeholder.trim().is_empty()
    {
        return Err(AppError::config_error("Placeholder name cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
