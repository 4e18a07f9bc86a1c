//! Reusable tolerance configuration
//!
//! [`Tolerance`] bundles a validated `(rel_tol, abs_tol)` pair so that call
//! sites comparing many values do not re-validate (or re-spell) the same
//! parameters every time.
//!
//! # Examples
//!
//! ```
//! use numprim::Tolerance;
//!
//! // Library defaults: rel_tol = 1e-9, abs_tol = 0.0
//! let default = Tolerance::default();
//! assert!(default.is_close(1.0, 1.0 + 1e-12));
//!
//! // Builder style with validation
//! let near_zero = Tolerance::default().with_abs_tol(1e-6).unwrap();
//! assert!(near_zero.is_close(0.0, 1e-8));
//!
//! // Negative tolerances are rejected up front
//! assert!(Tolerance::new(-1.0, 0.0).is_err());
//! ```

use crate::math::{check_tolerances, close_unchecked, ABS_TOL, REL_TOL};
use crate::Result;

/// Validated relative/absolute tolerance pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    rel_tol: f64,
    abs_tol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: REL_TOL,
            abs_tol: ABS_TOL,
        }
    }
}

impl Tolerance {
    /// Create a tolerance pair
    ///
    /// # Errors
    ///
    /// Returns [`crate::NumprimError::InvalidArgument`] if either value is
    /// negative or NaN.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self> {
        check_tolerances(rel_tol, abs_tol)?;
        Ok(Self { rel_tol, abs_tol })
    }

    /// Exact comparison: only equal values (including equal infinities) are close
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            rel_tol: 0.0,
            abs_tol: 0.0,
        }
    }

    /// Relaxed comparison for results of long accumulation chains
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 1e-12,
        }
    }

    /// Replace the relative tolerance
    ///
    /// # Errors
    ///
    /// Returns [`crate::NumprimError::InvalidArgument`] if `rel_tol` is
    /// negative or NaN.
    pub fn with_rel_tol(self, rel_tol: f64) -> Result<Self> {
        Self::new(rel_tol, self.abs_tol)
    }

    /// Replace the absolute tolerance
    ///
    /// # Errors
    ///
    /// Returns [`crate::NumprimError::InvalidArgument`] if `abs_tol` is
    /// negative or NaN.
    pub fn with_abs_tol(self, abs_tol: f64) -> Result<Self> {
        Self::new(self.rel_tol, abs_tol)
    }

    /// Relative tolerance
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Absolute tolerance
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Compare two values under this tolerance
    ///
    /// Same semantics as [`crate::math::is_close_with`]; infallible because
    /// the parameters were validated at construction.
    #[must_use]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        close_unchecked(a, b, self.rel_tol, self.abs_tol)
    }
}
