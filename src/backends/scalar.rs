//! Scalar (non-SIMD) backend implementation
//!
//! Left-to-right accumulation, so results are bit-reproducible across runs
//! and platforms.

use super::VectorBackend;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl VectorBackend for ScalarBackend {
    fn add_assign(a: &mut [f64], b: &[f64]) {
        debug_assert_eq!(a.len(), b.len());
        for (x, &y) in a.iter_mut().zip(b) {
            *x += y;
        }
    }

    fn scale(a: &mut [f64], s: f64) {
        for x in a.iter_mut() {
            *x *= s;
        }
    }

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let mut acc = 0.0;
        for (&x, &y) in a.iter().zip(b) {
            acc += x * y;
        }
        acc
    }

    fn sum_of_squares(a: &[f64]) -> f64 {
        let mut total = 0.0;
        for &x in a {
            total += x * x;
        }
        total
    }
}
