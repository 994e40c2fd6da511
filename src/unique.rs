//! Unique representation: memo tables of shared instances keyed by normalized arguments.
//!
//! A [`UniqueCache`] only holds [`Weak`] references, so an instance lives exactly as long as
//! some caller owns an [`Rc`] to it. Asking for the same key while the instance is alive returns
//! the *identical* instance (`Rc::ptr_eq`), which is what lets equality of parents and categories
//! be decided by identity.
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use tracing::trace;

pub struct UniqueCache<K, V> {
    entries: RefCell<HashMap<K, Weak<V>>>,
}

impl<K: Eq + Hash + Clone, V> UniqueCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// The live instance for `key`, if any.
    pub fn get(&self, key: &K) -> Option<Rc<V>> {
        self.entries.borrow().get(key).and_then(Weak::upgrade)
    }

    /// Return the live instance for `key`, or build one with `make` and remember it.
    ///
    /// `make` may itself use this cache: no borrow is held while it runs.
    pub fn get_or_insert_with(&self, key: K, make: impl FnOnce() -> V) -> Rc<V> {
        match self.try_get_or_insert_with(key, || Ok::<V, std::convert::Infallible>(make())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible version of [`UniqueCache::get_or_insert_with`]. Nothing is cached on error.
    pub fn try_get_or_insert_with<E>(
        &self,
        key: K,
        make: impl FnOnce() -> Result<V, E>,
    ) -> Result<Rc<V>, E> {
        if let Some(value) = self.get(&key) {
            trace!("unique cache hit");
            return Ok(value);
        }

        let value = make()?;

        let mut entries = self.entries.borrow_mut();
        // a recursive call of `make` may have built the same instance already
        if let Some(existing) = entries.get(&key).and_then(Weak::upgrade) {
            return Ok(existing);
        }
        entries.retain(|_, weak| weak.strong_count() > 0);
        let value = Rc::new(value);
        entries.insert(key, Rc::downgrade(&value));
        Ok(value)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the entries of instances which no longer have an owner.
    pub fn purge(&self) {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|_, weak| weak.strong_count() > 0);
        trace!(evicted = before - entries.len(), "unique cache purged");
    }
}

impl<K: Eq + Hash + Clone, V> Default for UniqueCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
