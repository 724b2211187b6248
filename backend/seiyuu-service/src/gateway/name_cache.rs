//! Voice-actor display names keyed by AniList staff id
//!
//! Append-only for the lifetime of the process: the first name stored for an id
//! wins and nothing is ever evicted. Shared across concurrent requests.

use crate::metrics::gateway::NAME_CACHE_EVENTS;
use crate::models::SeiyuuId;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};

/// Name stored for staff ids AniList does not know
pub const UNKNOWN_SEIYUU: &str = "Unknown Seiyuu";

/// Resolved names for a set of ids; ids without an entry are unresolved
pub type NameSnapshot = HashMap<SeiyuuId, String>;

#[derive(Debug, Default)]
pub struct SeiyuuNameCache {
    names: DashMap<SeiyuuId, String>,
}

impl SeiyuuNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SeiyuuId) -> Option<String> {
        let found = self.names.get(&id).map(|entry| entry.value().clone());
        let event = if found.is_some() { "hit" } else { "miss" };
        NAME_CACHE_EVENTS.with_label_values(&[event]).inc();
        found
    }

    pub fn contains(&self, id: SeiyuuId) -> bool {
        self.names.contains_key(&id)
    }

    /// Store a name unless one is already cached for `id`.
    pub fn insert(&self, id: SeiyuuId, name: impl Into<String>) {
        self.names.entry(id).or_insert_with(|| name.into());
    }

    /// Distinct ids with no cached name, in first-seen order
    pub fn missing<I>(&self, ids: I) -> Vec<SeiyuuId>
    where
        I: IntoIterator<Item = SeiyuuId>,
    {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter(|id| !self.contains(*id))
            .collect()
    }

    pub fn snapshot<I>(&self, ids: I) -> NameSnapshot
    where
        I: IntoIterator<Item = SeiyuuId>,
    {
        ids.into_iter()
            .filter_map(|id| self.get(id).map(|name| (id, name)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
