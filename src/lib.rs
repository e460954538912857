//! # fingerprint-index
//!
//! A string-keyed index stored as a sorted array of 32-bit FNV-1a
//! fingerprints, built as a faster stand-in for `BTreeMap<String, u32>` on
//! read-mostly directories of short keys.
//!
//! - Keys are hashed once on insert; the fingerprint orders the array.
//! - Inserts binary-search for their slot and shift the tail; no re-sorts.
//! - Lookups hash the query and binary-search integers, comparing the stored
//!   key only once a fingerprint matches (see [`CollisionPolicy`]).
//!
//! ## Example
//!
//! ```rust
//! use fingerprint_index::SortedIndex;
//!
//! let mut index = SortedIndex::new();
//! index.insert("b", 2);
//! index.insert("a", 1);
//! index.insert("c", 3);
//!
//! assert_eq!(index.find("a"), Some(1));
//! assert_eq!(index.find("b"), Some(2));
//! assert_eq!(index.find("z"), None);
//! assert!(index.is_sorted());
//! ```

#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod hash;
pub mod index;
pub mod oracle;
pub mod workload;

pub use entry::Entry;
pub use error::{Error, Result};
pub use hash::{fnv1a_32, Fingerprint, FnvBuildHasher, FnvHasher};
pub use index::SortedIndex;
pub use oracle::{build_reference, verify, Lookup};
pub use workload::{Workload, WorkloadConfig, MAX_KEY_LEN};

/// What `find` does once it reaches entries whose fingerprint matches the
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Return the first entry in the matching run whose stored key equals the
    /// query. Two keys sharing a fingerprint are both retrievable.
    #[default]
    VerifyKey,
    /// Return the first entry in the matching run without looking at keys.
    /// A colliding query silently gets the other key's payload.
    TrustFingerprint,
}

/// Configuration for a [`SortedIndex`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Entries to reserve up front.
    pub initial_capacity: usize,
    pub collision_policy: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            collision_policy: CollisionPolicy::VerifyKey,
        }
    }
}


#[cfg(test)]
mod proptests;
