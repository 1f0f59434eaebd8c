use std::path::PathBuf;

use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;
use rand::Rng;

use shamir_reconstruct::input::load_case;
use shamir_reconstruct::reconstruct::{reconstruct_all, reconstruct_case};
use shamir_reconstruct::report::results_document;
use shamir_reconstruct::shamir::Poly;
use shamir_reconstruct::{
    decode, encode, interpolate_at_zero, interpolate_at_zero_exact, reconstruct_secret, Division,
    ReconstructError, Share,
};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_biguint(rng: &mut impl Rng, bytes: usize) -> BigUint {
    let mut buf = vec![0u8; bytes];
    rng.fill(&mut buf[..]);
    BigUint::from_bytes_be(&buf)
}

#[test]
fn reference_document_one() {
    init_logging();
    let case = load_case("TEST CASE 1", demo("testcase1.json")).unwrap();
    let outcome = reconstruct_case(&case, Division::TermWise).unwrap();
    // (1,4), (2,7), (3,12) lie on x^2 + 3
    assert_eq!(outcome.secret, BigInt::from(3));
    assert_eq!(outcome.points.len(), 3);
    assert_eq!(reconstruct_case(&case, Division::Exact).unwrap().secret, BigInt::from(3));
}

#[test]
fn reference_document_two() {
    init_logging();
    let case = load_case("TEST CASE 2", demo("testcase2.json")).unwrap();
    assert_eq!((case.threshold.n, case.threshold.k, case.shares.len()), (10, 7, 10));

    let expected: BigInt = "1311980006747330270561238979466276913679114544760406483819600".parse().unwrap();
    for division in [Division::TermWise, Division::Exact] {
        assert_eq!(reconstruct_case(&case, division).unwrap().secret, expected);
    }

    // any 7 consecutive shares lie on the same polynomial
    let tail = &case.shares[3..];
    assert_eq!(reconstruct_secret(tail, 7, Division::Exact).unwrap(), expected);
}

#[test]
fn batch_over_documents() {
    init_logging();
    let cases = vec![
        load_case("TEST CASE 1", demo("testcase1.json")).unwrap(),
        load_case("TEST CASE 2", demo("testcase2.json")).unwrap(),
    ];
    let results = reconstruct_all(&cases, Division::TermWise);
    let doc = results_document(&results).unwrap();
    assert_eq!(doc["testCase1"]["secret"], "3");
    assert_eq!(doc["testCase1"]["k"], 3);
    assert_eq!(doc["testCase2"]["n"], 10);
}

#[test]
fn large_random_polynomials() {
    init_logging();
    let mut rng = rand::rng();
    for k in 1..=12 {
        let coeffs: Vec<BigInt> = (0..k).map(|_| BigInt::from(random_biguint(&mut rng, 48))).collect();
        let poly = Poly::new(coeffs.clone());

        // non-negative coefficients keep every share value non-negative
        let shares: Vec<Share> = poly
            .points_at(1..=k as i64)
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let base = rng.random_range(2..=36u32);
                let y = p.y.to_biguint().unwrap();
                Share::new(i as u64 + 1, base, encode(&y, base).unwrap())
            })
            .collect();

        for division in [Division::TermWise, Division::Exact] {
            assert_eq!(reconstruct_secret(&shares, k, division).unwrap(), coeffs[0]);
        }
    }
}

#[test]
fn inconsistent_share_surfaces_index() {
    let shares = vec![Share::new(1, 10, "5"), Share::new(2, 10, "9"), Share::new(3, 2, "12")];
    let err = reconstruct_secret(&shares, 3, Division::TermWise).unwrap_err();
    assert!(matches!(err, ReconstructError::ShareDecode { index: 3, .. }));
    assert_eq!(err.to_string(), "share 3: invalid digit '2' at position 1 for base 2");
}

fn poly_with_indices() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::btree_set(-60i64..60, 1..8).prop_flat_map(|xs| {
        let k = xs.len();
        (
            prop::collection::vec(-1_000_000i64..1_000_000, k),
            Just(xs.into_iter().collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn decode_inverts_encode(bytes in prop::collection::vec(any::<u8>(), 0..64), base in 2u32..=36) {
        let n = BigUint::from_bytes_be(&bytes);
        let text = encode(&n, base).unwrap();
        prop_assert_eq!(decode(&text, base).unwrap(), n.clone());
        prop_assert_eq!(decode(&text.to_uppercase(), base).unwrap(), n);
    }

    #[test]
    fn consecutive_indices_any_order(
        coeffs in prop::collection::vec(any::<i64>(), 1..9),
        seed in any::<u64>(),
    ) {
        let k = coeffs.len();
        let poly = Poly::new(coeffs.iter().map(|&c| BigInt::from(c)).collect());
        let mut points = poly.points_at(1..=k as i64);
        let shift = (seed % k as u64) as usize;
        points.rotate_left(shift);
        if seed % 2 == 0 {
            points.reverse();
        }
        let expected = BigInt::from(coeffs[0]);
        prop_assert_eq!(interpolate_at_zero(&points, k).unwrap(), expected.clone());
        prop_assert_eq!(interpolate_at_zero_exact(&points, k).unwrap(), expected);
    }

    #[test]
    fn exact_recovers_constant_for_any_indices((coeffs, xs) in poly_with_indices()) {
        let poly = Poly::new(coeffs.iter().map(|&c| BigInt::from(c)).collect());
        let points = poly.points_at(xs.iter().copied());
        prop_assert_eq!(interpolate_at_zero_exact(&points, coeffs.len()).unwrap(), BigInt::from(coeffs[0]));
    }

    #[test]
    fn duplicate_x_always_rejected((coeffs, xs) in poly_with_indices(), dup in any::<prop::sample::Index>()) {
        prop_assume!(!xs.is_empty());
        let poly = Poly::new(coeffs.iter().map(|&c| BigInt::from(c)).collect());
        let mut points = poly.points_at(xs.iter().copied());
        let repeated = points[dup.index(points.len())].clone();
        points.push(repeated);
        let k = points.len();
        let is_dup = |r: shamir_reconstruct::Result<BigInt>| matches!(r, Err(ReconstructError::DuplicateXCoordinate { .. }));
        prop_assert!(is_dup(interpolate_at_zero(&points, k)));
        prop_assert!(is_dup(interpolate_at_zero_exact(&points, k)));
    }
}
