use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// The reconstructed constant term of the sharing polynomial.
pub type Secret = BigInt;

/// One encoded share as it arrives from the input layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub index: u64, // 1-based, becomes the x-coordinate
    pub base: u32,
    pub value: String,
}

impl Share {
    pub fn new(index: u64, base: u32, value: impl Into<String>) -> Self {
        Share { index, base, value: value.into() }
    }
}

/// A decoded share: a point (x, y) on the polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point { x: x.into(), y: y.into() }
    }
}

/// `{ n, k }`: shares available and shares required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    pub n: usize,
    pub k: usize,
}

impl Threshold {
    /// Degree of the sharing polynomial, k - 1.
    pub fn degree(&self) -> usize {
        self.k.saturating_sub(1)
    }
}

/// A named set of shares with its threshold, ready for reconstruction.
#[derive(Clone, Debug)]
pub struct TestCase {
    pub name: String,
    pub threshold: Threshold,
    pub shares: Vec<Share>,
}
