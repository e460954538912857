use std::cmp::Ordering;

use crate::hash::{fingerprint, Fingerprint};

/// A key, its payload, and the key's fingerprint.
///
/// The fingerprint is computed once in [`Entry::new`] and cannot change
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    payload: u32,
    fingerprint: Fingerprint,
}

impl Entry {
    pub fn new(key: impl Into<String>, payload: u32) -> Self {
        let key = key.into();
        let fingerprint = fingerprint(&key);
        Self {
            key,
            payload,
            fingerprint,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn payload(&self) -> u32 {
        self.payload
    }

    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Ordering used by the index. Keys are never compared.
    #[inline]
    pub fn cmp_fingerprint(&self, other: &Self) -> Ordering {
        self.fingerprint.cmp(&other.fingerprint)
    }

    /// Heap bytes owned by this entry.
    pub(crate) fn heap_bytes(&self) -> usize {
        self.key.capacity()
    }

    pub fn into_parts(self) -> (String, u32) {
        (self.key, self.payload)
    }
}
