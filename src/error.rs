use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid workload configuration: {reason}")]
    InvalidWorkload { reason: String },

    #[error(
        "lookup mismatch for key {key:?}: oracle returned {expected:?}, index returned {actual:?} \
         ({mismatches} mismatching keys in total)"
    )]
    Mismatch {
        key: String,
        expected: Option<u32>,
        actual: Option<u32>,
        mismatches: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
