//! Canonical ordering and identity of record sets
//!
//! A record set's identity inside a zone is its rendered form
//! (`<name> <type> <ttl> [<rdata>, ...]`). Two sets that render identically
//! are the same set for storage purposes, and stored sets iterate in the
//! lexicographic order of their rendering, independent of insertion order.
//!
//! This is weaker than structural equality: the same records listed in a
//! different order render differently and are kept as distinct sets.

use crate::model::ResourceRecordSet;
use std::cmp::Ordering;
use std::fmt;

/// Storage key of a record set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ResourceRecordSet> for CanonicalKey {
    fn from(rrset: &ResourceRecordSet) -> Self {
        Self(rrset.to_string())
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn canonical_key(rrset: &ResourceRecordSet) -> CanonicalKey {
    CanonicalKey::from(rrset)
}

/// Total order over record sets by canonical key
pub fn compare(a: &ResourceRecordSet, b: &ResourceRecordSet) -> Ordering {
    canonical_key(a).cmp(&canonical_key(b))
}
