//! Lookup contract shared by the index and the reference containers it is
//! checked against.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::warn;

use crate::error::{Error, Result};
use crate::index::SortedIndex;

/// Anything that can answer "which payload is stored under this key".
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<u32>;
}

impl Lookup for SortedIndex {
    #[inline]
    fn lookup(&self, key: &str) -> Option<u32> {
        self.find(key)
    }
}

impl Lookup for BTreeMap<String, u32> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<u32> {
        self.get(key).copied()
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, u32, S> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<u32> {
        self.get(key).copied()
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    #[inline]
    fn lookup(&self, key: &str) -> Option<u32> {
        (**self).lookup(key)
    }
}

/// Build the tree-map reference from `(key, payload)` records.
///
/// The first payload seen for a key wins, matching what
/// [`SortedIndex::find`] returns for repeated keys.
pub fn build_reference<K, I>(records: I) -> BTreeMap<String, u32>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, u32)>,
{
    let mut map = BTreeMap::new();
    for (key, payload) in records {
        map.entry(key.into()).or_insert(payload);
    }
    map
}

/// Look every key up in both containers and compare.
///
/// Returns the number of keys checked. On disagreement, every mismatch is
/// logged and the first one is returned as [`Error::Mismatch`].
pub fn verify<'k, C, O, I>(candidate: &C, oracle: &O, keys: I) -> Result<usize>
where
    C: Lookup + ?Sized,
    O: Lookup + ?Sized,
    I: IntoIterator<Item = &'k str>,
{
    let mut checked = 0;
    let mut first: Option<(String, Option<u32>, Option<u32>)> = None;
    let mut mismatches = 0;

    for key in keys {
        checked += 1;
        let expected = oracle.lookup(key);
        let actual = candidate.lookup(key);
        if expected == actual {
            continue;
        }
        mismatches += 1;
        warn!(key, ?expected, ?actual, "lookup mismatch");
        if first.is_none() {
            first = Some((key.to_owned(), expected, actual));
        }
    }

    match first {
        None => Ok(checked),
        Some((key, expected, actual)) => Err(Error::Mismatch {
            key,
            expected,
            actual,
            mismatches,
        }),
    }
}
