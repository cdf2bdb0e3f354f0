/// Errors returned when splitting a secret or recovering it from shares.
///
/// None of these describe transient conditions, so callers should not retry
/// the failed operation with the same inputs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The threshold is below 2 or above the total number of shares.
    #[error("invalid threshold: min must be >= 2 and <= total (min = {min}, total = {total})")]
    InvalidThreshold { min: usize, total: usize },

    #[error("at most 254 shares are supported, {total} requested")]
    TooManyShares { total: usize },

    #[error("no shares provided")]
    NoShares,

    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },

    /// The shares do not all carry `y` values of the same length.
    #[error("all shares must have the same length (expected {expected}, got {actual})")]
    MalformedShares { expected: usize, actual: usize },

    #[error("two shares have the same x coordinate {x}")]
    DuplicateShareX { x: u8 },

    /// A share can only be evaluated at `x` in `1..=254`.
    #[error("share x coordinate {x} is outside 1..=254")]
    InvalidShareX { x: u8 },

    #[error("division by zero in GF(256)")]
    DivisionByZero,

    #[error("random source failure: {0}")]
    RandomSourceFailure(rand::Error),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
