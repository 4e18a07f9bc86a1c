//! numprim: Small Numerical Primitives
//!
//! **numprim** provides two independent building blocks for numeric code:
//!
//! 1. **Tolerance-based comparison** - [`math::is_close`] with relative/absolute
//!    tolerance semantics (the `math.isclose` definition), plus a reusable
//!    [`Tolerance`] configuration value
//! 2. **Dynamic vectors** - [`Vector`], an owned, non-empty `f64` vector with
//!    linear-algebra operations and homogeneous-coordinate conversions
//!
//! # Design Principles
//!
//! - **Pure/in-place pairs**: every transforming operation has an `*_in_place`
//!   form that mutates, and a pure form that clones then delegates
//! - **Failure atomicity**: in-place operations validate before mutating
//! - **No hidden shared state**: random factories use the calling thread's
//!   generator, or one passed explicitly
//! - **Errors are values**: every precondition failure is a [`NumprimError`]
//!
//! # Quick Start
//!
//! ```rust
//! use numprim::{math, Vector};
//!
//! let p = Vector::from_slice(&[2.0, 4.0, 8.0]).unwrap();
//! let ph = p.to_homogeneous();
//! assert_eq!(ph.to_vec(), vec![2.0, 4.0, 8.0, 1.0]);
//!
//! let n = Vector::from_slice(&[3.0, 0.0, 4.0]).unwrap().normalize().unwrap();
//! assert!(math::is_close(n.norm(), 1.0));
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` spans for the O(n) vector operations

pub mod backends;
pub mod error;
pub mod math;
pub mod tolerance;
pub mod vector;

pub use error::{ErrorKind, NumprimError, Result};
pub use math::{is_close, is_close_with, ABS_TOL, REL_TOL};
pub use tolerance::Tolerance;
pub use vector::Vector;
