use super::{Result, ZoneError};
use crate::model::ResourceRecordSet;
use crate::ordering::CanonicalKey;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::ops::Bound;
use std::sync::Arc;
use tracing::{debug, warn};

/// The record sets of one zone, ordered and de-duplicated by canonical key
#[derive(Debug, Default)]
pub struct RecordSetCollection {
    sets: RwLock<BTreeMap<CanonicalKey, ResourceRecordSet>>,
}

impl RecordSetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record set; returns false if one with the same rendering is present
    pub fn insert(&self, rrset: ResourceRecordSet) -> bool {
        let key = CanonicalKey::from(&rrset);
        let mut sets = self.sets.write();

        if sets.contains_key(&key) {
            debug!("Record set already present: {}", key);
            return false;
        }

        debug!("Inserting record set: {}", key);
        sets.insert(key, rrset);
        true
    }

    pub fn contains(&self, rrset: &ResourceRecordSet) -> bool {
        self.sets.read().contains_key(&CanonicalKey::from(rrset))
    }

    pub fn len(&self) -> usize {
        self.sets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }

    /// Iterate in canonical order
    ///
    /// The lock is taken per step, never held between calls to `next`, so
    /// inserting while iterating neither blocks nor corrupts the walk.
    pub fn iter(&self) -> RecordSets<'_> {
        RecordSets {
            collection: self,
            cursor: None,
            done: false,
        }
    }
}

/// Cursor over a [`RecordSetCollection`]; ends for good once exhausted
pub struct RecordSets<'a> {
    collection: &'a RecordSetCollection,
    cursor: Option<CanonicalKey>,
    done: bool,
}

impl Iterator for RecordSets<'_> {
    type Item = ResourceRecordSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let sets = self.collection.sets.read();
        let next = match &self.cursor {
            None => sets.iter().next(),
            Some(last) => sets
                .range((Bound::Excluded(last), Bound::Unbounded))
                .next(),
        };

        let Some((key, rrset)) = next else {
            self.done = true;
            return None;
        };

        self.cursor = Some(key.clone());
        Some(rrset.clone())
    }
}

impl FusedIterator for RecordSets<'_> {}

/// Store mapping zone names to their record sets
///
/// A name is present if and only if its zone was published. Every published
/// collection is complete at the moment it becomes visible.
#[derive(Debug, Default)]
pub struct ZoneStore {
    zones: RwLock<BTreeMap<String, Arc<RecordSetCollection>>>,
}

impl ZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a zone under `name` unless the name is already taken
    ///
    /// Check and insert happen under one write lock, so at most one of several
    /// concurrent publishers of the same name succeeds.
    pub fn publish(&self, name: &str, collection: RecordSetCollection) -> Result<()> {
        let mut zones = self.zones.write();

        if zones.contains_key(name) {
            warn!("Refusing to publish existing zone: {}", name);
            return Err(ZoneError::AlreadyExists(name.to_string()));
        }

        zones.insert(name.to_string(), Arc::new(collection));
        debug!("Published zone: {}", name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<RecordSetCollection>> {
        self.zones.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.zones.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.read().is_empty()
    }

    /// All zone names in order
    pub fn names(&self) -> Vec<String> {
        self.zones.read().keys().cloned().collect()
    }

    /// Walk zones in name order
    ///
    /// Weakly consistent: zones published after the walk passes their
    /// position are not seen, zones published ahead of it are.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            store: self,
            cursor: None,
            done: false,
        }
    }
}

/// Cursor over a [`ZoneStore`]; ends for good once exhausted
pub struct Entries<'a> {
    store: &'a ZoneStore,
    cursor: Option<String>,
    done: bool,
}

impl Iterator for Entries<'_> {
    type Item = (String, Arc<RecordSetCollection>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let zones = self.store.zones.read();
        let next = match &self.cursor {
            None => zones.iter().next(),
            Some(last) => zones
                .range::<str, _>((Bound::Excluded(last.as_str()), Bound::Unbounded))
                .next(),
        };

        let Some((name, collection)) = next else {
            self.done = true;
            return None;
        };

        self.cursor = Some(name.clone());
        Some((name.clone(), Arc::clone(collection)))
    }
}

impl FusedIterator for Entries<'_> {}
