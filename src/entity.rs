//! Normalized entity collections.
//!
//! Records are stored once, keyed by id. Reads in list form go through the
//! collection's sort comparer, so every caller sees the same order.

use std::cmp::Ordering;
use std::collections::HashMap;

/// A record with a numeric identity.
pub trait Entity: Clone {
    fn id(&self) -> u64;
}

/// Ordering used by [`EntityCollection::all`] and [`EntityCollection::ids`].
pub type SortComparer<T> = fn(&T, &T) -> Ordering;

/// Records keyed by id, with a fixed sort order for list reads.
#[derive(Debug, Clone)]
pub struct EntityCollection<T: Entity> {
    entities: HashMap<u64, T>,
    comparer: SortComparer<T>,
}

impl<T: Entity> EntityCollection<T> {
    pub fn new(comparer: SortComparer<T>) -> Self {
        Self {
            entities: HashMap::new(),
            comparer,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.entities.get_mut(&id)
    }

    /// Insert or replace by id.
    pub fn upsert_one(&mut self, entity: T) {
        self.entities.insert(entity.id(), entity);
    }

    /// Insert or replace every record, in order. Later duplicates win.
    pub fn upsert_many<I: IntoIterator<Item = T>>(&mut self, entities: I) {
        for entity in entities {
            self.upsert_one(entity);
        }
    }

    /// Drop everything and load `entities` instead.
    pub fn set_all<I: IntoIterator<Item = T>>(&mut self, entities: I) {
        self.entities.clear();
        self.upsert_many(entities);
    }

    pub fn remove_one(&mut self, id: u64) -> Option<T> {
        self.entities.remove(&id)
    }

    /// All records in comparer order.
    pub fn all(&self) -> Vec<&T> {
        let mut all: Vec<&T> = self.entities.values().collect();
        all.sort_by(|a, b| (self.comparer)(*a, *b));
        all
    }

    /// All ids in comparer order.
    pub fn ids(&self) -> Vec<u64> {
        self.all().into_iter().map(Entity::id).collect()
    }
}

// The comparer is a plain fn pointer; two collections are equal when they hold
// the same records.
impl<T: Entity + PartialEq> PartialEq for EntityCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entities == other.entities
    }
}
