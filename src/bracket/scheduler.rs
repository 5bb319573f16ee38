use super::models::{Matchup, Team};
use super::random::RandomSource;
use crate::constants::TEAMS_PER_MATCHUP;
use crate::error::AppError;
use std::num::NonZeroUsize;
use tracing::info;

const MATCHUP_GROUP: NonZeroUsize = match NonZeroUsize::new(TEAMS_PER_MATCHUP) {
    Some(size) => size,
    None => panic!("TEAMS_PER_MATCHUP must be non-zero"),
};

/// Splits `items` into consecutive groups of `size`, keeping their order.
/// Only the last group may be shorter.
///
/// ```
/// use bracket_planner::bracket::chunk;
/// use std::num::NonZeroUsize;
///
/// let groups = chunk(vec![1, 2, 3, 4, 5], NonZeroUsize::new(2).unwrap());
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<T>(items: Vec<T>, size: NonZeroUsize) -> Vec<Vec<T>> {
    let mut groups = Vec::with_capacity(items.len().div_ceil(size.get()));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        groups.push(items.by_ref().take(size.get()).collect());
    }
    groups
}

/// Shuffles the teams and pairs neighbours into games. With an odd number
/// of teams the last one gets a bye.
pub fn schedule_matchups<R: RandomSource>(
    mut teams: Vec<Team>,
    rng: &mut R,
) -> Result<Vec<Matchup>, AppError> {
    rng.shuffle(&mut teams);

    let matchups = chunk(teams, MATCHUP_GROUP)
        .into_iter()
        .map(Matchup::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Scheduled {} matchups ({} byes)",
        matchups.len(),
        matchups.iter().filter(|m| m.is_bye()).count()
    );
    Ok(matchups)
}
