//! [`List`] view definitions.

use tokio::sync::watch;

use crate::{
    domain::Stateful,
    filter::{self, Criteria, Criterion, Filterable, ParseError},
};

/// List view of fetched entities narrowed by filter [`Criteria`].
///
/// Visible entities are always the raw ones matching the active [`Criteria`],
/// in their original order. They are recomputed on every change of either.
#[derive(Debug)]
pub struct List<E: Filterable> {
    /// Entities as fetched from the remote API.
    raw: Vec<E>,

    /// Active filter [`Criteria`].
    criteria: Criteria<E::Key>,

    /// Positions of the visible entities in the `raw` ones.
    visible: Vec<usize>,

    /// Indicator whether the entities are being fetched.
    loading: bool,

    /// Revision of this [`List`], bumped on every change.
    revision: watch::Sender<u64>,
}

impl<E: Filterable> Default for List<E> {
    fn default() -> Self {
        Self {
            raw: Vec::new(),
            criteria: Criteria::default(),
            visible: Vec::new(),
            loading: false,
            revision: watch::Sender::new(0),
        }
    }
}

impl<E: Filterable> List<E> {
    /// Creates a new empty [`List`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all the fetched entities, regardless of the filter.
    #[must_use]
    pub fn raw(&self) -> &[E] {
        &self.raw
    }

    /// Returns the active filter [`Criteria`].
    #[must_use]
    pub fn criteria(&self) -> &Criteria<E::Key> {
        &self.criteria
    }

    /// Iterates over the visible entities in their original order.
    pub fn visible(&self) -> impl Iterator<Item = &E> + '_ {
        self.visible.iter().filter_map(|&i| self.raw.get(i))
    }

    /// Returns the number of the visible entities.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Indicates whether the entities are being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sets the loading indicator of this [`List`].
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.notify();
        }
    }

    /// Replaces all the entities with the freshly fetched ones, keeping the
    /// active filter [`Criteria`].
    pub fn replace(&mut self, entities: Vec<E>) {
        self.raw = entities;
        self.loading = false;
        self.recompute();
    }

    /// Appends a newly created entity.
    pub fn push(&mut self, entity: E) {
        self.raw.push(entity);
        self.recompute();
    }

    /// Sets the filter [`Criterion`] of the provided `key`.
    ///
    /// Returns whether the [`Criteria`] changed.
    pub fn set_filter(&mut self, key: E::Key, criterion: Criterion) -> bool {
        let changed = self.criteria.set(key, criterion);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Parses and sets the filter [`Criterion`] addressed by the name of its
    /// key.
    ///
    /// Returns whether the [`Criteria`] changed.
    ///
    /// # Errors
    ///
    /// If the `key` is unknown or the `value` is malformed.
    pub fn set_filter_str(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<bool, ParseError> {
        let changed = self.criteria.set_str(key, value)?;
        if changed {
            self.recompute();
        }
        Ok(changed)
    }

    /// Clears the filter [`Criterion`] of the provided `key`.
    ///
    /// Returns whether the [`Criteria`] changed.
    pub fn clear_filter(&mut self, key: E::Key) -> bool {
        let changed = self.criteria.remove(key).is_some();
        if changed {
            self.recompute();
        }
        changed
    }

    /// Clears all the filter [`Criteria`], so every entity becomes visible.
    ///
    /// Returns whether the [`Criteria`] changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.criteria.clear();
        if changed {
            self.recompute();
        }
        changed
    }

    /// Applies the provided `patch` to the first entity matching the
    /// `predicate`, leaving the order and other entities untouched.
    ///
    /// Returns whether any entity was patched.
    pub fn patch_where(
        &mut self,
        predicate: impl Fn(&E) -> bool,
        patch: impl FnOnce(&mut E),
    ) -> bool {
        let Some(entity) = self.raw.iter_mut().find(|e| predicate(e)) else {
            return false;
        };
        patch(entity);
        self.recompute();
        true
    }

    /// Removes the first entity matching the `predicate`, leaving the order of
    /// others untouched.
    ///
    /// Returns the removed entity, if any.
    pub fn remove_where(
        &mut self,
        predicate: impl Fn(&E) -> bool,
    ) -> Option<E> {
        let pos = self.raw.iter().position(predicate)?;
        let removed = self.raw.remove(pos);
        self.recompute();
        Some(removed)
    }

    /// Returns distinct values of the field designated by the provided `key`
    /// among all the fetched entities, in order of their first appearance.
    #[must_use]
    pub fn distinct(&self, key: E::Key) -> Vec<String> {
        filter::distinct(&self.raw, key)
    }

    /// Subscribes to the revisions of this [`List`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Returns the current revision of this [`List`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Recomputes the visible entities and notifies subscribers.
    fn recompute(&mut self) {
        self.visible = filter::positions(&self.raw, &self.criteria);
        self.notify();
    }

    /// Bumps the revision of this [`List`].
    fn notify(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

impl<E: Filterable + Stateful> List<E> {
    /// Sets the status of the entity with the provided ID.
    ///
    /// Returns whether such an entity is present.
    pub fn patch_status(&mut self, id: E::Id, status: E::Status) -> bool {
        self.patch_where(|e| e.id() == id, |e| *e.status_mut() = status)
    }

    /// Returns the entity with the provided ID, if present.
    #[must_use]
    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.raw.iter().find(|e| e.id() == id)
    }
}
