use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::base::decode;
use crate::errors::Result;
use crate::shamir::{interpolate_at_zero, interpolate_at_zero_exact};
use crate::types::{Point, Secret, Share, TestCase, Threshold};

/// How the Lagrange terms are divided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Division {
    /// Each term divided on its own, truncating toward zero.
    #[default]
    TermWise,
    /// All terms summed as one fraction; non-integral results are errors.
    Exact,
}

impl Division {
    pub fn name(&self) -> &'static str {
        match self {
            Division::TermWise => "term-wise",
            Division::Exact => "exact",
        }
    }

    pub fn interpolate(&self, points: &[Point], k: usize) -> Result<Secret> {
        match self {
            Division::TermWise => interpolate_at_zero(points, k),
            Division::Exact => interpolate_at_zero_exact(points, k),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "term-wise" | "termwise" => Ok(Division::TermWise),
            "exact" => Ok(Division::Exact),
            other => Err(format!("unknown division strategy {other:?} (expected term-wise or exact)")),
        }
    }
}

/// Result of reconstructing one test case.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub name: String,
    pub threshold: Threshold,
    pub shares: Vec<Share>,
    pub points: Vec<Point>,
    pub secret: Secret,
}

/// Decode every share into a point, in input order.
pub fn decode_shares(shares: &[Share]) -> Result<Vec<Point>> {
    shares
        .iter()
        .map(|s| {
            let y = decode(&s.value, s.base).map_err(|e| e.for_share(s.index))?;
            debug!(index = s.index, base = s.base, value = %s.value, y = %y, "decoded share");
            Ok(Point { x: BigInt::from(s.index), y: BigInt::from(y) })
        })
        .collect()
}

/// Decode `shares` and interpolate the first `k` of them at zero.
pub fn reconstruct_secret(shares: &[Share], k: usize, division: Division) -> Result<Secret> {
    let points = decode_shares(shares)?;
    division.interpolate(&points, k)
}

pub fn reconstruct_case(case: &TestCase, division: Division) -> Result<Outcome> {
    let span = info_span!("reconstruct", case = %case.name, n = case.threshold.n, k = case.threshold.k);
    let _enter = span.enter();

    let points = decode_shares(&case.shares)?;
    let secret = division.interpolate(&points, case.threshold.k)?;
    info!(%division, shares = points.len(), secret = %secret, "secret reconstructed");

    Ok(Outcome {
        name: case.name.clone(),
        threshold: case.threshold,
        shares: case.shares.clone(),
        points,
        secret,
    })
}

/// Reconstruct independent cases in parallel; results keep input order.
pub fn reconstruct_all(cases: &[TestCase], division: Division) -> Vec<Result<Outcome>> {
    cases.par_iter().map(|case| reconstruct_case(case, division)).collect()
}

impl Outcome {
    pub fn degree(&self) -> usize {
        self.threshold.degree()
    }
}
