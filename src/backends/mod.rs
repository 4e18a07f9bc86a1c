//! Slice kernels behind the vector operations
//!
//! [`crate::Vector`] owns its buffer and validates every precondition; the
//! kernels here only see slices that are already known to be compatible.
//! Each in-place vector operation is exactly one kernel call, and each pure
//! operation is a clone followed by the in-place form.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation (plain loops)

pub mod scalar;

/// Backend trait defining the kernels used by [`crate::Vector`]
///
/// Callers must ensure that binary kernels receive slices of equal length;
/// implementations may assume it.
pub trait VectorBackend {
    /// Element-wise accumulate: a[i] += b[i]
    fn add_assign(a: &mut [f64], b: &[f64]);

    /// Scale in place: a[i] *= s
    fn scale(a: &mut [f64], s: f64);

    /// Dot product: sum(a[i] * b[i])
    fn dot(a: &[f64], b: &[f64]) -> f64;

    /// Sum of squares: sum(a[i] * a[i])
    fn sum_of_squares(a: &[f64]) -> f64;
}
