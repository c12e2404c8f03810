use thiserror::Error;

/// Parameter validation failures reported at filter construction.
/// No partial filter is ever returned.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("false positive rate must be within (0, 1), got {0}")]
    FalsePositiveRateOutOfRange(f64),

    #[error("expected number of items must be greater than 0")]
    ZeroItemsCount,
}

pub type Result<T> = std::result::Result<T, Error>;
