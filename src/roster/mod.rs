//! Roster file loading
//!
//! A roster holds one player per line. Names that player must not be teamed
//! with follow on the same line, each introduced by `!!`:
//!
//! ```text
//! alice smith !!bob !!carol
//! bob
//! # comments and blank lines are skipped
//! dave
//! ```

use crate::bracket::{Name, Record};
use crate::constants::roster::{COMMENT_PREFIX, RESTRICTION_MARKER};
use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tracing::info;

pub mod odd_count;
pub mod user_prompts;

pub use odd_count::{OddCountChoice, add_player, remove_random_player};

/// Parses one roster line. `line_number` is 1-based and only used in errors.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Record>, AppError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let mut parts = line.split(RESTRICTION_MARKER);
    let name = Name::new(parts.next().unwrap_or_default());
    if name.is_empty() {
        return Err(AppError::empty_name(line_number));
    }

    let restricted = parts.map(Name::new).filter(|other| !other.is_empty()).collect();
    Ok(Some(Record { name, restricted }))
}

/// Parses a whole roster, skipping blank lines and comments
pub fn parse_roster(content: &str) -> Result<Vec<Record>, AppError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1).transpose())
        .collect()
}

/// Reads and parses the roster file at `path`
pub async fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Record>, AppError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).await?;
    let records = parse_roster(&content)?;
    info!("Loaded {} players from {}", records.len(), path.display());
    Ok(records)
}
