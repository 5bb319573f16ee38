use super::models::{Name, Record};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Symmetric "cannot be teamed with" relation between players.
///
/// Every insertion records both directions, so `is_forbidden(a, b)` always
/// equals `is_forbidden(b, a)` no matter how the roster declared it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionMap {
    forbidden: BTreeMap<Name, BTreeSet<Name>>,
}

impl RestrictionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from roster records, closing every declaration under
    /// symmetry. Repeated declarations collapse; self-restrictions are skipped.
    pub fn from_records(records: &[Record]) -> Self {
        let mut map = Self::new();
        for record in records {
            for other in &record.restricted {
                if record.name == *other {
                    warn!("Ignoring restriction of '{}' against themselves", record.name);
                    continue;
                }
                map.forbid(&record.name, other);
            }
        }
        map
    }

    /// Records that `a` and `b` must not share a team.
    ///
    /// Returns false when nothing was inserted: the pair was already known,
    /// or `a` and `b` are the same player.
    pub fn forbid(&mut self, a: &Name, b: &Name) -> bool {
        if a == b || a.is_empty() || b.is_empty() {
            return false;
        }
        let forward = self
            .forbidden
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        let backward = self
            .forbidden
            .entry(b.clone())
            .or_default()
            .insert(a.clone());
        forward || backward
    }

    pub fn is_forbidden(&self, a: &Name, b: &Name) -> bool {
        self.forbidden
            .get(a)
            .is_some_and(|partners| partners.contains(b))
    }

    /// Players `name` must not be teamed with; empty when unrestricted.
    pub fn restrictions_for<'a>(&'a self, name: &Name) -> impl Iterator<Item = &'a Name> + use<'a> {
        self.forbidden.get(name).into_iter().flatten()
    }

    pub fn is_restricted(&self, name: &Name) -> bool {
        self.forbidden
            .get(name)
            .is_some_and(|partners| !partners.is_empty())
    }

    /// Number of players carrying at least one restriction
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }

    /// Restricted names that do not appear in `roster`, in sorted order.
    ///
    /// Such names never enter the pool, so their restrictions cannot affect
    /// pairing; callers log them as likely typos.
    pub fn dangling<'a>(&'a self, roster: &BTreeSet<&Name>) -> Vec<&'a Name> {
        self.forbidden
            .keys()
            .filter(|name| !roster.contains(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> Name {
        Name::new(raw)
    }

    #[test]
    fn test_one_directional_declaration_is_symmetric() {
        let records = vec![
            Record::with_restrictions("Alice", ["Bob"]),
            Record::new("Bob"),
            Record::new("Carol"),
            Record::new("Dave"),
        ];
        let map = RestrictionMap::from_records(&records);

        assert!(map.is_forbidden(&name("Alice"), &name("Bob")));
        assert!(map.is_forbidden(&name("Bob"), &name("Alice")));
        assert!(!map.is_forbidden(&name("Alice"), &name("Carol")));
        assert!(map.is_restricted(&name("Bob")));
        assert!(!map.is_restricted(&name("Carol")));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_duplicate_declarations_are_idempotent() {
        let records = vec![
            Record::with_restrictions("Alice", ["Bob", "Bob"]),
            Record::with_restrictions("Bob", ["Alice"]),
        ];
        let map = RestrictionMap::from_records(&records);

        assert_eq!(map.restrictions_for(&name("Alice")).count(), 1);
        assert_eq!(map.restrictions_for(&name("Bob")).count(), 1);
    }

    #[test]
    fn test_forbid_reports_new_insertions() {
        let mut map = RestrictionMap::new();
        assert!(map.forbid(&name("a"), &name("b")));
        assert!(!map.forbid(&name("b"), &name("a")));
        assert!(!map.forbid(&name("a"), &name("a")));
        assert!(!map.forbid(&name("a"), &name("")));
    }

    #[test]
    fn test_self_restriction_is_ignored() {
        let records = vec![Record::with_restrictions("Alice", ["Alice"])];
        let map = RestrictionMap::from_records(&records);
        assert!(map.is_empty());
        assert!(!map.is_restricted(&name("Alice")));
    }

    #[test]
    fn test_restrictions_for_unknown_name_is_empty() {
        let map = RestrictionMap::new();
        assert_eq!(map.restrictions_for(&name("nobody")).count(), 0);
    }

    #[test]
    fn test_multiple_restrictions_accumulate() {
        let records = vec![
            Record::with_restrictions("Alice", ["Bob", "Carol"]),
            Record::with_restrictions("Dave", ["Alice"]),
        ];
        let map = RestrictionMap::from_records(&records);

        let alice: Vec<&str> = map
            .restrictions_for(&name("Alice"))
            .map(Name::as_str)
            .collect();
        assert_eq!(alice, vec!["Bob", "Carol", "Dave"]);
        assert!(map.is_forbidden(&name("Carol"), &name("Alice")));
        assert!(!map.is_forbidden(&name("Carol"), &name("Bob")));
    }

    #[test]
    fn test_dangling_references_are_reported() {
        let records = vec![
            Record::with_restrictions("Alice", ["Zed"]),
            Record::new("Bob"),
        ];
        let map = RestrictionMap::from_records(&records);
        let alice = name("Alice");
        let bob = name("Bob");
        let roster: BTreeSet<&Name> = [&alice, &bob].into_iter().collect();

        let dangling: Vec<&str> = map.dangling(&roster).into_iter().map(Name::as_str).collect();
        assert_eq!(dangling, vec!["Zed"]);
    }
}
