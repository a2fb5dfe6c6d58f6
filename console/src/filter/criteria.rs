//! [`Criteria`] definitions.

use std::collections::BTreeMap;

use super::{Criterion, Filterable, Key, ParseError};

/// Set of active [`Criterion`]s, each bound to a distinct [`Key`].
///
/// Inactive [`Criterion`]s are never stored, so an empty [`Criteria`] matches
/// everything.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Criteria<K> {
    /// Active [`Criterion`]s by their [`Key`]s.
    active: BTreeMap<K, Criterion>,
}

impl<K> Default for Criteria<K> {
    fn default() -> Self {
        Self {
            active: BTreeMap::new(),
        }
    }
}

impl<K: Key> Criteria<K> {
    /// Creates a new empty [`Criteria`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provided [`Criterion`] for the `key` and returns this
    /// [`Criteria`].
    #[must_use]
    pub fn with(mut self, key: K, criterion: Criterion) -> Self {
        _ = self.set(key, criterion);
        self
    }

    /// Sets the provided [`Criterion`] for the `key`, replacing the previous
    /// one.
    ///
    /// An inactive [`Criterion`] clears the `key` instead.
    ///
    /// Returns whether this [`Criteria`] changed.
    pub fn set(&mut self, key: K, criterion: Criterion) -> bool {
        if !criterion.is_active() {
            return self.active.remove(&key).is_some();
        }
        self.active.insert(key, criterion.clone()) != Some(criterion)
    }

    /// Parses and sets a [`Criterion`] addressed by the string name of its
    /// [`Key`], using the [`Key`]'s default [`Kind`].
    ///
    /// Returns whether this [`Criteria`] changed.
    ///
    /// # Errors
    ///
    /// If the `key` is unknown or the `input` is malformed.
    ///
    /// [`Kind`]: super::Kind
    pub fn set_str(&mut self, key: &str, input: &str) -> Result<bool, ParseError> {
        let key = key
            .parse::<K>()
            .map_err(|_| ParseError::UnknownKey(key.to_owned()))?;
        let criterion = Criterion::parse(key.kind(), input)?;
        Ok(self.set(key, criterion))
    }

    /// Removes the [`Criterion`] of the provided `key`, if any.
    pub fn remove(&mut self, key: K) -> Option<Criterion> {
        self.active.remove(&key)
    }

    /// Removes all the [`Criterion`]s.
    ///
    /// Returns whether this [`Criteria`] changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.active.is_empty();
        self.active.clear();
        changed
    }

    /// Returns the [`Criterion`] of the provided `key`, if any.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&Criterion> {
        self.active.get(&key)
    }

    /// Indicates whether this [`Criteria`] has no active [`Criterion`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterates over the active [`Criterion`]s in [`Key`] order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &Criterion)> + '_ {
        self.active.iter().map(|(k, c)| (*k, c))
    }

    /// Merges the `other` [`Criteria`] into this one.
    ///
    /// [`Criterion`]s of the `other` win on conflicting [`Key`]s.
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.active.extend(other.active);
        self
    }

    /// Checks whether the provided entity satisfies every active
    /// [`Criterion`].
    #[must_use]
    pub fn matches<E>(&self, entity: &E) -> bool
    where
        E: Filterable<Key = K>,
    {
        self.active
            .iter()
            .all(|(key, criterion)| criterion.matches(&entity.field(*key)))
    }
}
