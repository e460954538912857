//! Seeded synthetic directory: random names mapped to random phone-style
//! numbers.
//!
//! Names are drawn uniformly in length from `0..=max_key_len` over a
//! contiguous byte alphabet (by default the 57 bytes starting at `'A'`), and
//! payloads are `number_digits` random decimal digits read as an integer. The
//! same config always yields the same records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Longest key the generator will produce.
pub const MAX_KEY_LEN: usize = 63;

/// Most decimal digits that always fit in a `u32`.
const MAX_NUMBER_DIGITS: usize = 9;

#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of records to generate.
    pub count: usize,
    pub seed: u64,
    /// Longest generated name, at most [`MAX_KEY_LEN`].
    pub max_key_len: usize,
    /// Digits per payload, 1 to 9.
    pub number_digits: usize,
    /// First byte of the name alphabet.
    pub alphabet_start: u8,
    /// Size of the name alphabet.
    pub alphabet_len: u8,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            seed: 12_777_519,
            max_key_len: 62,
            number_digits: 7,
            alphabet_start: b'A',
            alphabet_len: 57,
        }
    }
}

impl WorkloadConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidWorkload { reason });

        if self.max_key_len > MAX_KEY_LEN {
            return invalid(format!(
                "max_key_len {} exceeds {MAX_KEY_LEN}",
                self.max_key_len
            ));
        }
        if self.number_digits == 0 || self.number_digits > MAX_NUMBER_DIGITS {
            return invalid(format!(
                "number_digits must be in 1..={MAX_NUMBER_DIGITS}, got {}",
                self.number_digits
            ));
        }
        if self.alphabet_len == 0 {
            return invalid("alphabet is empty".to_string());
        }
        let end = self.alphabet_start as u32 + self.alphabet_len as u32;
        if self.alphabet_start < b' ' || end > 0x7f {
            return invalid(format!(
                "alphabet {:#04x}..{:#04x} leaves printable ASCII",
                self.alphabet_start, end
            ));
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Workload> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity(self.count);
        let mut name = Vec::with_capacity(self.max_key_len);

        for _ in 0..self.count {
            let mut number = 0u32;
            for _ in 0..self.number_digits {
                number = number * 10 + rng.gen_range(0..10u32);
            }

            name.clear();
            let len = rng.gen_range(0..=self.max_key_len);
            for _ in 0..len {
                name.push(self.alphabet_start + rng.gen_range(0..self.alphabet_len));
            }
            // Alphabet is validated to be ASCII.
            let key = name.iter().map(|&b| b as char).collect::<String>();

            records.push((key, number));
        }

        Ok(Workload { records })
    }
}

/// Generated `(name, number)` records, in generation order.
#[derive(Debug, Clone)]
pub struct Workload {
    records: Vec<(String, u32)>,
}

impl Workload {
    pub fn records(&self) -> &[(String, u32)] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|(k, _)| k.as_str())
    }

    /// `count` generated names picked at random (with repetition).
    pub fn probes(&self, seed: u64, count: usize) -> Vec<&str> {
        if self.records.is_empty() {
            return Vec::new();
        }
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| self.records[rng.gen_range(0..self.records.len())].0.as_str())
            .collect()
    }
}
