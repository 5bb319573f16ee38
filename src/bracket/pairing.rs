use super::models::Team;
use super::pool::Pool;
use super::random::RandomSource;
use super::restrictions::RestrictionMap;
use crate::constants::MAX_PAIRING_RETRIES;
use crate::error::AppError;
use tracing::{debug, info};

/// Greedy randomized pairing of a pool into two-player teams.
///
/// The last pool member is the focal player; partners are drawn uniformly
/// from the rest until one is allowed. Every rejected draw counts against a
/// single retry budget shared by the whole run, and exhausting it aborts with
/// [`AppError::PairingInfeasible`]. There is no backtracking: a focal player
/// whose only remaining candidates are all restricted always exhausts the
/// budget.
#[derive(Debug, Clone)]
pub struct PairingEngine<'a> {
    restrictions: &'a RestrictionMap,
    max_retries: u32,
}

impl<'a> PairingEngine<'a> {
    pub fn new(restrictions: &'a RestrictionMap) -> Self {
        PairingEngine {
            restrictions,
            max_retries: MAX_PAIRING_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Consumes the pool and returns the teams in the order they were formed.
    ///
    /// The pool must hold an even number of names; odd pools are rejected
    /// up front with [`AppError::OddPlayerCount`].
    pub fn pair<R: RandomSource>(&self, mut pool: Pool, rng: &mut R) -> Result<Vec<Team>, AppError> {
        if pool.len() % 2 != 0 {
            return Err(AppError::odd_player_count(pool.names()));
        }

        let mut teams = Vec::with_capacity(pool.len() / 2);
        let mut retries: u32 = 0;

        while let Some(focal) = pool.pop_last() {
            // The pool was even, so at least one candidate remains
            let index = loop {
                let index = rng.pick_index(pool.len());
                let candidate = &pool.names()[index];

                if !self.restrictions.is_forbidden(&focal, candidate) {
                    break index;
                }

                retries += 1;
                debug!(
                    "Rejected '{}' as partner for '{}' ({}/{} retries used)",
                    candidate, focal, retries, self.max_retries
                );
                if retries > self.max_retries {
                    info!(
                        "Giving up pairing with {} players left unpaired",
                        pool.len() + 1
                    );
                    return Err(AppError::pairing_infeasible(retries));
                }
            };

            let partner = pool.take(index);
            teams.push(Team::pair(focal, partner));
        }

        info!("Formed {} teams using {} retries", teams.len(), retries);
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::models::{Name, Record};
    use crate::bracket::random::testing::ScriptedRandom;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeSet;

    fn names(raw: &[&str]) -> Vec<Name> {
        raw.iter().map(|n| Name::new(n)).collect()
    }

    fn assert_covers_exactly(teams: &[Team], roster: &[Name]) {
        let mut members: Vec<&Name> = teams.iter().flat_map(Team::members).collect();
        members.sort();
        let mut expected: Vec<&Name> = roster.iter().collect();
        expected.sort();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_four_unrestricted_players_make_two_teams() {
        let roster = names(&["Alice", "Bob", "Carol", "Dave"]);
        let restrictions = RestrictionMap::new();

        for seed in 0..100 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pool = Pool::build(&roster, &restrictions, &mut rng);
            let teams = PairingEngine::new(&restrictions).pair(pool, &mut rng).unwrap();

            assert_eq!(teams.len(), 2);
            assert!(teams.iter().all(|t| t.len() == 2));
            assert_covers_exactly(&teams, &roster);
        }
    }

    #[test]
    fn test_unrestricted_pairing_covers_everyone_once() {
        for size in (4..=40).step_by(2) {
            let raw: Vec<String> = (0..size).map(|i| format!("player {i}")).collect();
            let roster: Vec<Name> = raw.iter().map(Name::new).collect();
            let restrictions = RestrictionMap::new();
            let mut rng = SmallRng::seed_from_u64(size as u64);

            let pool = Pool::build(&roster, &restrictions, &mut rng);
            let teams = PairingEngine::new(&restrictions).pair(pool, &mut rng).unwrap();

            assert_eq!(teams.len(), size / 2);
            for team in &teams {
                let members: BTreeSet<&Name> = team.members().collect();
                assert_eq!(members.len(), 2, "team {team} repeats a player");
            }
            assert_covers_exactly(&teams, &roster);
        }
    }

    #[test]
    fn test_restricted_pair_is_never_formed() {
        let records = vec![
            Record::with_restrictions("Alice", ["Bob"]),
            Record::new("Bob"),
            Record::new("Carol"),
            Record::new("Dave"),
        ];
        let roster: Vec<Name> = records.iter().map(|r| r.name.clone()).collect();
        let restrictions = RestrictionMap::from_records(&records);
        let alice = Name::new("Alice");
        let bob = Name::new("Bob");

        let mut successes = 0;
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pool = Pool::build(&roster, &restrictions, &mut rng);
            let Ok(teams) = PairingEngine::new(&restrictions).pair(pool, &mut rng) else {
                continue;
            };
            successes += 1;
            assert!(
                !teams.iter().any(|t| t.contains(&alice) && t.contains(&bob)),
                "seed {seed} teamed Alice with Bob"
            );
            assert_covers_exactly(&teams, &roster);
        }
        assert!(successes > 100, "only {successes} of 200 runs succeeded");
    }

    #[test]
    fn test_sparse_restrictions_are_respected() {
        let raw: Vec<String> = (0..16).map(|i| format!("p{i}")).collect();
        let records: Vec<Record> = raw
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i % 4 == 0 {
                    Record::with_restrictions(name.as_str(), [format!("p{}", i + 1)])
                } else {
                    Record::new(name.as_str())
                }
            })
            .collect();
        let roster: Vec<Name> = records.iter().map(|r| r.name.clone()).collect();
        let restrictions = RestrictionMap::from_records(&records);

        for seed in 0..100 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pool = Pool::build(&roster, &restrictions, &mut rng);
            if let Ok(teams) = PairingEngine::new(&restrictions).pair(pool, &mut rng) {
                for team in &teams {
                    let members: Vec<&Name> = team.members().collect();
                    assert!(!restrictions.is_forbidden(members[0], members[1]));
                    assert!(!restrictions.is_forbidden(members[1], members[0]));
                }
                assert_covers_exactly(&teams, &roster);
            }
        }
    }

    #[test]
    fn test_player_restricted_against_everyone_is_infeasible() {
        let records = vec![
            Record::with_restrictions("A", ["B", "C", "D"]),
            Record::new("B"),
            Record::new("C"),
            Record::new("D"),
        ];
        let roster: Vec<Name> = records.iter().map(|r| r.name.clone()).collect();
        let restrictions = RestrictionMap::from_records(&records);

        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pool = Pool::build(&roster, &restrictions, &mut rng);
            let result = PairingEngine::new(&restrictions).pair(pool, &mut rng);
            assert!(
                matches!(result, Err(AppError::PairingInfeasible { retries: 11 })),
                "seed {seed}: {result:?}"
            );
        }
    }

    #[test]
    fn test_scripted_draws_form_expected_teams() {
        let restrictions = RestrictionMap::from_records(&[Record::with_restrictions("q", ["x", "y"])]);
        let pool = Pool::from_ordered(names(&["x", "y", "p", "q"]));
        // q rejects x and y three times each, then takes p; y then takes x
        let mut rng = ScriptedRandom::new([0, 1, 0, 1, 0, 1, 2, 0]);

        let teams = PairingEngine::new(&restrictions).pair(pool, &mut rng).unwrap();

        assert_eq!(
            teams,
            vec![
                Team::pair(Name::new("q"), Name::new("p")),
                Team::pair(Name::new("y"), Name::new("x")),
            ]
        );
    }

    #[test]
    fn test_retry_budget_is_shared_across_focal_players() {
        let restrictions = RestrictionMap::from_records(&[
            Record::with_restrictions("f", ["a", "b"]),
            Record::with_restrictions("e", ["a", "b"]),
        ]);
        let roster = names(&["a", "b", "c", "d", "e", "f"]);
        // f burns 6 retries before taking c, e then burns 5 more
        let script = [0, 1, 0, 1, 0, 1, 2, 0, 1, 0, 1, 0, 2, 0];

        let mut rng = ScriptedRandom::new(script);
        let result = PairingEngine::new(&restrictions).pair(Pool::from_ordered(roster.clone()), &mut rng);
        assert!(matches!(result, Err(AppError::PairingInfeasible { retries: 11 })));

        // The same draws succeed once the shared budget is large enough
        let mut rng = ScriptedRandom::new(script);
        let teams = PairingEngine::new(&restrictions)
            .with_max_retries(20)
            .pair(Pool::from_ordered(roster.clone()), &mut rng)
            .unwrap();
        assert_eq!(teams.len(), 3);
        assert_covers_exactly(&teams, &roster);
    }

    #[test]
    fn test_odd_pool_is_rejected() {
        let restrictions = RestrictionMap::new();
        let pool = Pool::from_ordered(names(&["a", "b", "c"]));
        let mut rng = SmallRng::seed_from_u64(0);

        let result = PairingEngine::new(&restrictions).pair(pool, &mut rng);
        assert!(matches!(result, Err(AppError::OddPlayerCount { count: 3, .. })));
    }

    #[test]
    fn test_last_two_players_restricted_is_infeasible() {
        let restrictions = RestrictionMap::from_records(&[Record::with_restrictions("x", ["y"])]);
        let pool = Pool::from_ordered(names(&["x", "y"]));
        let mut rng = SmallRng::seed_from_u64(0);

        let result = PairingEngine::new(&restrictions).pair(pool, &mut rng);
        assert!(matches!(result, Err(AppError::PairingInfeasible { retries: 11 })));
    }

    #[test]
    fn test_empty_pool_yields_no_teams() {
        let restrictions = RestrictionMap::new();
        let mut rng = SmallRng::seed_from_u64(0);
        let teams = PairingEngine::new(&restrictions)
            .pair(Pool::default(), &mut rng)
            .unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_default_retry_budget() {
        let restrictions = RestrictionMap::new();
        assert_eq!(PairingEngine::new(&restrictions).max_retries(), MAX_PAIRING_RETRIES);
        assert_eq!(
            PairingEngine::new(&restrictions).with_max_retries(3).max_retries(),
            3
        );
    }
}
