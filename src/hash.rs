//! FNV-1a, 32-bit.
//!
//! The fingerprint used everywhere in this crate. Single pass, no tables, and
//! bit-for-bit compatible with the published FNV-1a test vectors
//! (<http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a>).

use std::hash::{BuildHasherDefault, Hasher};

/// Fingerprint of a key.
pub type Fingerprint = u32;

/// Initial accumulator value. Also the fingerprint of the empty key.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `bytes` with FNV-1a.
///
/// Multiplication wraps at 32 bits, as the algorithm requires.
pub const fn fnv1a_32(bytes: &[u8]) -> Fingerprint {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

#[inline]
pub fn fingerprint(key: &str) -> Fingerprint {
    fnv1a_32(key.as_bytes())
}

/// Streaming FNV-1a state, usable as a `HashMap` hasher.
///
/// `finish` returns the 32-bit state zero-extended, so a key written in one
/// `write` call finishes to `fnv1a_32(key) as u64`.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher(u32);

impl Default for FnvHasher {
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut hash = self.0;
        for &b in bytes {
            hash ^= b as u32;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        self.0 = hash;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0 as u64
    }
}

pub type FnvBuildHasher = BuildHasherDefault<FnvHasher>;
