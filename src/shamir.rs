use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::{ReconstructError, Result};
use crate::types::{Point, Secret};

/// Integer polynomial represented by coefficients [c0, c1, ..., cd]
#[derive(Clone, Debug)]
pub struct Poly {
    pub coeffs: Vec<BigInt>,
}

impl Poly {
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        Poly { coeffs }
    }

    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Points (x, P(x)) for each x in `xs`.
    pub fn points_at(&self, xs: impl IntoIterator<Item = i64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| {
                let x = BigInt::from(x);
                let y = self.eval(&x);
                Point { x, y }
            })
            .collect()
    }
}

/// First `k` points, checked for count and pairwise-distinct x.
fn select(points: &[Point], k: usize) -> Result<&[Point]> {
    if k == 0 {
        return Err(ReconstructError::InvalidThreshold { n: points.len(), k });
    }
    if points.len() < k {
        return Err(ReconstructError::InsufficientPoints { needed: k, got: points.len() });
    }
    let selected = &points[..k];
    let mut seen = HashSet::with_capacity(k);
    for p in selected {
        if !seen.insert(&p.x) {
            return Err(ReconstructError::DuplicateXCoordinate { x: p.x.clone() });
        }
    }
    Ok(selected)
}

/// Lagrange basis L_i(0) = Π_{j≠i} (-x_j) / Π_{j≠i} (x_i - x_j),
/// returned unreduced as (numerator, denominator).
pub fn lagrange_basis_at_zero(i: usize, points: &[Point]) -> (BigInt, BigInt) {
    let x_i = &points[i].x;
    let mut num = BigInt::one();
    let mut den = BigInt::one();
    for (j, p) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        num *= -&p.x;
        den *= x_i - &p.x;
    }
    (num, den)
}

/// P(0) from the first `k` points, dividing each term `y_i * num_i / den_i`
/// separately with truncation toward zero before summing.
///
/// Exact whenever every term divides evenly, which holds for x = 1..=k (the
/// basis values are then signed binomial coefficients). For other index sets
/// a term may truncate and the sum comes out wrong without an error; use
/// [`interpolate_at_zero_exact`] when that matters.
pub fn interpolate_at_zero(points: &[Point], k: usize) -> Result<Secret> {
    let points = select(points, k)?;
    let mut secret = BigInt::zero();
    for (i, p) in points.iter().enumerate() {
        let (num, den) = lagrange_basis_at_zero(i, points);
        secret += (&p.y * num) / den;
    }
    Ok(secret)
}

/// P(0) from the first `k` points, summed as one reduced fraction.
///
/// Fails with `NonIntegralSecret` if the value at zero is not an integer.
pub fn interpolate_at_zero_exact(points: &[Point], k: usize) -> Result<Secret> {
    let points = select(points, k)?;
    let mut acc_num = BigInt::zero();
    let mut acc_den = BigInt::one();
    for (i, p) in points.iter().enumerate() {
        let (num, den) = lagrange_basis_at_zero(i, points);
        acc_num = &acc_num * &den + &p.y * num * &acc_den;
        acc_den *= den;

        let g = acc_num.gcd(&acc_den);
        if !g.is_one() {
            acc_num /= &g;
            acc_den /= &g;
        }
    }
    if acc_den.is_negative() {
        acc_num = -acc_num;
        acc_den = -acc_den;
    }

    let (q, r) = acc_num.div_rem(&acc_den);
    if r.is_zero() {
        Ok(q)
    } else {
        Err(ReconstructError::NonIntegralSecret)
    }
}
