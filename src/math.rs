//! Scalar helpers: tolerance-based float comparison, clamping, angle conversion
//!
//! [`is_close`] follows the semantics of Python's `math.isclose`: two values are
//! close when
//!
//! ```text
//! |a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)
//! ```
//!
//! with NaN and infinities handled as terminal special cases.
//!
//! # Examples
//!
//! ```
//! use numprim::math::{is_close, is_close_with};
//!
//! assert!(is_close(1.0, 1.0 + 1e-12));
//! assert!(!is_close(0.0, 1e-8));
//! assert!(is_close_with(0.0, 1e-8, 0.0, 1e-6).unwrap());
//! ```

use crate::{NumprimError, Result};

/// Default relative tolerance used by [`is_close`]
pub const REL_TOL: f64 = 1e-9;

/// Default absolute tolerance used by [`is_close`]
pub const ABS_TOL: f64 = 0.0;

/// Compare two values with the default tolerances [`REL_TOL`] and [`ABS_TOL`]
///
/// The defaults are valid, so this never fails.
///
/// # Examples
///
/// ```
/// use numprim::math::is_close;
///
/// assert!(is_close(-0.0, 0.0));
/// assert!(is_close(f64::INFINITY, f64::INFINITY));
/// assert!(!is_close(f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64) -> bool {
    close_unchecked(a, b, REL_TOL, ABS_TOL)
}

/// Compare two values with explicit relative and absolute tolerances
///
/// # Errors
///
/// Returns [`NumprimError::InvalidArgument`] if `rel_tol` or `abs_tol` is
/// negative. Validation happens before any comparison.
///
/// # Examples
///
/// ```
/// use numprim::math::is_close_with;
///
/// assert!(is_close_with(1000.0, 1000.000001, 1e-8, 0.0).unwrap());
/// assert!(!is_close_with(1000.0, 1000.000001, 1e-10, 0.0).unwrap());
/// assert!(is_close_with(1.0, 1.0, -1.0, 0.0).is_err());
/// ```
pub fn is_close_with(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> Result<bool> {
    check_tolerances(rel_tol, abs_tol)?;
    Ok(close_unchecked(a, b, rel_tol, abs_tol))
}

/// Reject negative (or NaN) tolerance parameters
pub(crate) fn check_tolerances(rel_tol: f64, abs_tol: f64) -> Result<()> {
    // `!(x >= 0.0)` also rejects NaN
    if !(rel_tol >= 0.0) || !(abs_tol >= 0.0) {
        return Err(NumprimError::InvalidArgument(format!(
            "relTol and absTol must be non-negative, got rel_tol={rel_tol}, abs_tol={abs_tol}"
        )));
    }
    Ok(())
}

/// Closeness test on already-validated tolerances. Step order matters.
pub(crate) fn close_unchecked(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    // Covers +inf == +inf and -0.0 == 0.0
    if a == b {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    // Unequal infinities, or one infinite and one finite
    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    diff <= (rel_tol * max_abs).max(abs_tol)
}

/// Bound `v` to the interval `[min, max]`
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the lower bound
/// wins. A NaN `v` stays NaN.
///
/// # Examples
///
/// ```
/// use numprim::math::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// ```
#[must_use]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() {
        return v;
    }
    let upper = if v > max { max } else { v };
    if upper < min {
        min
    } else {
        upper
    }
}

/// Convert an angle from degrees to radians
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert an angle from radians to degrees
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
