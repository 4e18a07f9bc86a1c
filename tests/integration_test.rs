//! Integration Test Suite
//!
//! Exercises the public API end to end: comparator semantics, vector
//! construction and access, algebra, homogeneous conversions, error
//! classification and failure atomicity.

use numprim::{is_close, is_close_with, ErrorKind, NumprimError, Tolerance, Vector};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::thread;

const PROPTEST_CASES: u32 = 50;

fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector::from_slice(&[x, y, z]).expect("non-empty")
}

fn hash_of(v: &Vector) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// COMPARATOR
// ============================================================================

#[test]
fn integration_is_close_documented_cases() {
    assert!(is_close_with(1000.0, 1000.000001, 1e-8, 0.0).unwrap());
    assert!(!is_close_with(1000.0, 1000.000001, 1e-10, 0.0).unwrap());
    assert!(!is_close(0.0, 1e-8));
    assert!(is_close_with(0.0, 1e-8, 0.0, 1e-6).unwrap());
    assert!(is_close(f64::INFINITY, f64::INFINITY));
    assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY));
    for x in [0.0, 1.0, f64::NAN, f64::INFINITY] {
        assert!(!is_close(f64::NAN, x));
    }
}

#[test]
fn integration_is_close_rejects_negative_tolerances() {
    for (a, b) in [(1.0, 1.0), (0.0, 5.0), (f64::NAN, f64::NAN)] {
        assert_eq!(
            is_close_with(a, b, -1.0, 0.0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            is_close_with(a, b, 0.0, -1.0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// Every finite value is close to itself
    #[test]
    fn integration_is_close_reflexive(a in (prop::num::f64::NORMAL | prop::num::f64::ZERO)) {
        prop_assert!(is_close(a, a));
    }
}

// ============================================================================
// VECTOR ALGEBRA
// ============================================================================

#[test]
fn integration_vector_algebra() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(4.0, 5.0, 6.0);

    assert_eq!(a.add(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
    assert_eq!(a.scale(2.0).to_vec(), vec![2.0, 4.0, 6.0]);
    assert_eq!(a.dot(&b).unwrap(), 32.0);
    assert_eq!(a.norm(), 14.0_f64.sqrt());

    let n = vec3(3.0, 0.0, 4.0).normalize().unwrap();
    assert!((n.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn integration_vector_errors_are_classified() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = Vector::from_slice(&[1.0, 2.0]).unwrap();

    assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.dot(&b).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        Vector::zeros(2).unwrap().normalize().unwrap_err().kind(),
        ErrorKind::Arithmetic
    );
    assert_eq!(
        vec3(1.0, 2.0, 0.0).from_homogeneous().unwrap_err().kind(),
        ErrorKind::Arithmetic
    );
    assert_eq!(
        Vector::from_slice(&[3.0])
            .unwrap()
            .from_homogeneous()
            .unwrap_err()
            .kind(),
        ErrorKind::IllegalState
    );
    assert_eq!(a.get(3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert!(matches!(
        Vector::zeros(0),
        Err(NumprimError::InvalidArgument(_))
    ));
}

#[test]
fn integration_failed_in_place_ops_do_not_mutate() {
    let mut a = vec3(1.0, 2.0, 3.0);
    let short = Vector::from_slice(&[10.0, 20.0]).unwrap();
    assert!(a.add_in_place(&short).is_err());
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(short.to_vec(), vec![10.0, 20.0]);

    let mut z = Vector::zeros(3).unwrap();
    assert!(z.normalize_in_place().is_err());
    assert_eq!(z.to_vec(), vec![0.0; 3]);

    let mut h = vec3(4.0, 8.0, 0.0);
    assert!(h.normalize_w_in_place().is_err());
    assert!(h.from_homogeneous_in_place().is_err());
    assert_eq!(h.to_vec(), vec![4.0, 8.0, 0.0]);
}

// ============================================================================
// HOMOGENEOUS COORDINATES
// ============================================================================

#[test]
fn integration_homogeneous_pipeline() {
    let p = vec3(2.0, 4.0, 8.0);
    let mut h = p.to_homogeneous();
    assert_eq!(h.len(), 4);

    // A projective scale leaves the represented point unchanged
    h.scale_in_place(2.0);
    assert_eq!(h.to_vec(), vec![4.0, 8.0, 16.0, 2.0]);
    assert_eq!(h.normalize_w().unwrap().to_vec(), vec![2.0, 4.0, 8.0, 1.0]);

    h.from_homogeneous_in_place().unwrap();
    assert_eq!(h, p);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn integration_homogeneous_round_trip(
        data in prop::collection::vec(-1000.0f64..1000.0, 1..32)
    ) {
        let v = Vector::from_slice(&data).unwrap();
        let back = v.to_homogeneous().from_homogeneous().unwrap();
        prop_assert_eq!(back.len(), v.len());
        prop_assert!(back.is_close_to(&v, &Tolerance::default()).unwrap());
    }
}

// ============================================================================
// VALUE SEMANTICS
// ============================================================================

#[test]
fn integration_equality_hash_and_aliasing() {
    let mut a = vec3(1.0, -0.0, 3.0);
    let b = vec3(1.0, 0.0, 3.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut seen = HashSet::new();
    seen.insert(hash_of(&a));
    assert!(seen.contains(&hash_of(&b)));

    a.set(0, 9.0).unwrap();
    assert_ne!(a, b);
    assert_eq!(b.to_vec(), vec![1.0, 0.0, 3.0]);
}

#[test]
fn integration_display_has_type_tag() {
    let s = vec3(1.0, 2.0, 3.0).to_string();
    assert!(s.starts_with("Vector["));
    assert!(s.ends_with(']'));
}

// ============================================================================
// RANDOM FACTORIES
// ============================================================================

#[test]
fn integration_random_factories_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let u = Vector::random_uniform(256).unwrap();
                let n = Vector::random_normal(256).unwrap();
                (u, n)
            })
        })
        .collect();

    for handle in handles {
        let (u, n) = handle.join().expect("worker panicked");
        assert_eq!(u.len(), 256);
        assert_eq!(n.len(), 256);
        // The closed range is a loose bound; sampling is half-open [0, 1)
        assert!(u.as_slice().iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert!(n.as_slice().iter().all(|x| x.is_finite()));
    }
}

#[test]
fn integration_random_factories_seeded() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = Vector::random_normal_with(&mut rng, 8).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let b = Vector::random_normal_with(&mut rng, 8).unwrap();
    assert_eq!(a, b);
}
