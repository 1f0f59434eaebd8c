//! Errors returned while decoding shares and reconstructing secrets.
use num_bigint::BigInt;
use thiserror::Error;

/// Errors returned by shamir_reconstruct
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// returned if a radix lies outside the supported range
    #[error("invalid base {base}: supported bases are 2 to 36")]
    InvalidBase {
        /// The rejected base, as it was supplied
        base: String,
    },
    /// returned if a character is not a digit of the given base
    #[error("invalid digit {ch:?} at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character
        ch: char,
        /// Zero-based character offset into the trimmed value
        position: usize,
        /// The base the value was decoded in
        base: u32,
    },
    /// returned if a share value contains no digits
    #[error("empty value")]
    EmptyValue,
    /// returned if a share could not be decoded; wraps the decode error with the share index
    #[error("share {index}: {source}")]
    ShareDecode {
        /// Index of the offending share
        index: u64,
        /// The underlying decode failure
        #[source]
        source: Box<ReconstructError>,
    },
    /// returned if fewer than k points are supplied for interpolation
    #[error("insufficient points: need {needed}, got {got}")]
    InsufficientPoints {
        /// Threshold k
        needed: usize,
        /// Number of points supplied
        got: usize,
    },
    /// returned if two selected points share an x-coordinate
    #[error("duplicate x-coordinate {x}")]
    DuplicateXCoordinate {
        /// The repeated x-coordinate
        x: BigInt,
    },
    /// returned if the threshold is zero or exceeds the number of shares
    #[error("invalid threshold: n = {n}, k = {k}")]
    InvalidThreshold {
        /// Total number of shares declared
        n: usize,
        /// Required threshold
        k: usize,
    },
    /// returned by exact interpolation when the value at zero is not an integer
    #[error("points do not lie on an integer-coefficient polynomial")]
    NonIntegralSecret,
    /// returned if reading or writing a file fails
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// returned if a document is not valid JSON or has the wrong shape
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReconstructError>;

impl ReconstructError {
    /// Attach the index of the share whose value failed to decode.
    pub fn for_share(self, index: u64) -> Self {
        ReconstructError::ShareDecode {
            index,
            source: Box::new(self),
        }
    }
}
