use super::models::Name;
use super::random::RandomSource;
use super::restrictions::RestrictionMap;

/// Players not yet placed on a team.
///
/// The pool only ever shrinks. Restricted players sit in the front block and
/// unrestricted players behind them. Pairing takes each focal player from the
/// back and draws partners from anywhere in the pool, so unrestricted players
/// are focal first and restricted players are focal last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pool {
    names: Vec<Name>,
}

impl Pool {
    /// Shuffles restricted and unrestricted players separately and places the
    /// restricted ones first.
    pub fn build<R: RandomSource>(
        names: &[Name],
        restrictions: &RestrictionMap,
        rng: &mut R,
    ) -> Self {
        let (mut restricted, mut unrestricted): (Vec<Name>, Vec<Name>) = names
            .iter()
            .cloned()
            .partition(|name| restrictions.is_restricted(name));

        rng.shuffle(&mut restricted);
        rng.shuffle(&mut unrestricted);

        restricted.append(&mut unrestricted);
        Pool { names: restricted }
    }

    /// Wraps names in the given order without shuffling
    pub fn from_ordered(names: Vec<Name>) -> Self {
        Pool { names }
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Name> {
        self.names.get(index)
    }

    pub fn pop_last(&mut self) -> Option<Name> {
        self.names.pop()
    }

    /// Removes and returns the name at `index`, keeping the order of the rest.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn take(&mut self, index: usize) -> Name {
        self.names.remove(index)
    }
}
