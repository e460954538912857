//! Sorted-array index over [`Entry`] values.
//!
//! Entries live in one `Vec`, ordered by fingerprint at all times. Inserts
//! binary-search for their slot and shift the tail by one; there is never a
//! full re-sort. Lookups hash the query once and binary-search over `u32`
//! fingerprints, so no string is compared while narrowing the range.

use std::fmt;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::hash::{fingerprint, Fingerprint};
use crate::{CollisionPolicy, Config};

#[derive(Clone)]
pub struct SortedIndex {
    entries: Vec<Entry>,
    /// Inserted keys that share a fingerprint with a different, older key.
    collisions: usize,
    config: Config,
}

impl SortedIndex {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config {
            initial_capacity: capacity,
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            collisions: 0,
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of inserts whose key collided with a different key already in
    /// the index.
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// All entries, ascending by fingerprint.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| w[0].fingerprint() <= w[1].fingerprint())
    }

    /// Estimated heap footprint in bytes: the backing array plus key buffers.
    pub fn memory_usage(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<Entry>()
            + self.entries.iter().map(Entry::heap_bytes).sum::<usize>()
    }

    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }
}

impl SortedIndex {
    /// Hash `key` and insert it with `payload` at its sorted position.
    ///
    /// A key whose fingerprint is already present is placed after every
    /// entry carrying that fingerprint, so equal-fingerprint runs stay in
    /// insertion order.
    pub fn insert(&mut self, key: impl Into<String>, payload: u32) {
        self.insert_entry(Entry::new(key, payload));
    }

    pub fn insert_entry(&mut self, entry: Entry) {
        let idx = self.insertion_point(entry.fingerprint(), &mut 0);

        let run_len = self.entries[..idx]
            .iter()
            .rev()
            .take_while(|e| e.fingerprint() == entry.fingerprint())
            .count();
        if run_len > 0 {
            let run = &self.entries[idx - run_len..idx];
            if run.iter().any(|e| e.key() == entry.key()) {
                trace!(
                    key = entry.key(),
                    fingerprint = entry.fingerprint(),
                    "duplicate key inserted; earlier payload stays visible"
                );
            } else {
                self.collisions += 1;
                debug!(
                    key = entry.key(),
                    other = run[0].key(),
                    fingerprint = entry.fingerprint(),
                    collisions = self.collisions,
                    "fingerprint collision"
                );
            }
        }

        self.entries.insert(idx, entry);
    }

    /// Payload stored for `key`, if any.
    pub fn find(&self, key: &str) -> Option<u32> {
        self.get_entry(key).map(Entry::payload)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    pub fn get_entry(&self, key: &str) -> Option<&Entry> {
        self.search(key, &mut 0)
    }

    /// Index right after the last entry whose fingerprint is `<= target`.
    ///
    /// `probes` counts fingerprint comparisons.
    fn insertion_point(&self, target: Fingerprint, probes: &mut usize) -> usize {
        let Some(last) = self.entries.last() else {
            return 0;
        };
        *probes += 1;
        if last.fingerprint() <= target {
            return self.entries.len();
        }
        self.entries.partition_point(|e| {
            *probes += 1;
            e.fingerprint() <= target
        })
    }

    /// Binary search by fingerprint, then resolve the equal-fingerprint run
    /// according to the collision policy.
    ///
    /// `probes` counts fingerprint comparisons.
    pub(crate) fn search(&self, key: &str, probes: &mut usize) -> Option<&Entry> {
        let target = fingerprint(key);
        let first = self.entries.first()?;
        let last = self.entries.last()?;

        *probes += 2;
        if target < first.fingerprint() || target > last.fingerprint() {
            return None;
        }

        let start = self.entries.partition_point(|e| {
            *probes += 1;
            e.fingerprint() < target
        });
        let mut run = self.entries[start..].iter().take_while(|e| {
            *probes += 1;
            e.fingerprint() == target
        });

        match self.config.collision_policy {
            CollisionPolicy::VerifyKey => run.find(|e| e.key() == key),
            CollisionPolicy::TrustFingerprint => run.next(),
        }
    }
}

impl Default for SortedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> Extend<(K, u32)> for SortedIndex {
    fn extend<I: IntoIterator<Item = (K, u32)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for SortedIndex {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a SortedIndex {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for SortedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (e.key(), e.payload())))
            .finish()
    }
}
