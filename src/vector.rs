//! Dynamically-sized `f64` vector with homogeneous-coordinate support
//!
//! Every algebraic operation comes in two forms: an in-place form
//! (`*_in_place`) that mutates the receiver, and a pure form that clones the
//! receiver, runs the in-place form on the clone and returns it. The
//! algorithm lives only in the in-place form.
//!
//! In-place operations check all preconditions before touching any
//! component, so a returned error means the vector is unchanged.
//!
//! Homogeneous operations interpret the last component as `w`. Nothing about
//! this is stored on the vector; it is purely a call-site convention.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use rand_distr::StandardNormal;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::backends::scalar::ScalarBackend;
use crate::backends::VectorBackend;
use crate::{NumprimError, Result, Tolerance};

/// Owned, non-empty vector of `f64` components
///
/// # Examples
///
/// ```
/// use numprim::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
///
/// assert_eq!(a.add(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert_eq!(a.norm(), 14.0_f64.sqrt());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

fn check_size(n: usize) -> Result<()> {
    if n == 0 {
        return Err(NumprimError::InvalidArgument(format!(
            "Vector size must be positive, got {n}"
        )));
    }
    Ok(())
}

impl Vector {
    /// Create a zero-filled vector of length `n`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let v = Vector::zeros(3).unwrap();
    /// assert_eq!(v.to_vec(), vec![0.0, 0.0, 0.0]);
    /// assert!(Vector::zeros(0).is_err());
    /// ```
    pub fn zeros(n: usize) -> Result<Self> {
        Self::filled(n, 0.0)
    }

    /// Create a vector by copying `coords`
    ///
    /// The vector owns its own buffer; later changes to the caller's slice
    /// (or to the vector) are not shared.
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `coords` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert!(Vector::from_slice(&[]).is_err());
    /// ```
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        if coords.is_empty() {
            return Err(NumprimError::InvalidArgument(
                "Vector requires at least one component".to_string(),
            ));
        }
        Ok(Self {
            data: coords.to_vec(),
        })
    }

    /// Create a vector of length `n` with every component equal to `value`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    pub fn filled(n: usize, value: f64) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            data: vec![value; n],
        })
    }

    /// Create a vector of `n` samples from the uniform distribution on `[0, 1)`
    ///
    /// Draws from the calling thread's generator ([`rand::thread_rng`]).
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    pub fn random_uniform(n: usize) -> Result<Self> {
        Self::random_uniform_with(&mut rand::thread_rng(), n)
    }

    /// Create a vector of `n` uniform `[0, 1)` samples drawn from `rng`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Vector::random_uniform_with(&mut StdRng::seed_from_u64(7), 4).unwrap();
    /// let b = Vector::random_uniform_with(&mut StdRng::seed_from_u64(7), 4).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random_uniform_with<R: Rng>(rng: &mut R, n: usize) -> Result<Self> {
        check_size(n)?;
        let data = (0..n).map(|_| rng.gen::<f64>()).collect();
        Ok(Self { data })
    }

    /// Create a vector of `n` samples from the standard normal distribution
    ///
    /// Draws from the calling thread's generator ([`rand::thread_rng`]).
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    pub fn random_normal(n: usize) -> Result<Self> {
        Self::random_normal_with(&mut rand::thread_rng(), n)
    }

    /// Create a vector of `n` standard normal samples drawn from `rng`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::InvalidArgument`] if `n == 0`.
    pub fn random_normal_with<R: Rng>(rng: &mut R, n: usize) -> Result<Self> {
        check_size(n)?;
        let data = (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
        Ok(Self { data })
    }

    /// Number of components (always at least 1)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Component at `index`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Overwrite the component at `index`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Read-only view of the components
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of the components
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0]).unwrap();
    /// let mut out = v.to_vec();
    /// out[0] = 99.0;
    /// assert_eq!(v.get(0).unwrap(), 1.0);
    /// ```
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(NumprimError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    fn check_same_len(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(NumprimError::SizeMismatch {
                op,
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        Ok(())
    }

    /// Last component, interpreted as `w`
    fn w(&self) -> Result<f64> {
        self.data.last().copied().ok_or_else(|| {
            NumprimError::IllegalState(
                "Vector has no components to interpret as homogeneous".to_string(),
            )
        })
    }

    // ------------------------------------------------------------------
    // Linear algebra
    // ------------------------------------------------------------------

    /// Component-wise sum, returned as a new vector
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::SizeMismatch`] if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.add_in_place(other)?;
        Ok(out)
    }

    /// Component-wise sum, accumulated into `self`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::SizeMismatch`] if the lengths differ; `self`
    /// is left untouched.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(len = self.len())))]
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_len(other, "add")?;
        ScalarBackend::add_assign(&mut self.data, &other.data);
        Ok(())
    }

    /// Multiply every component by `s`, returning a new vector
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        let mut out = self.clone();
        out.scale_in_place(s);
        out
    }

    /// Multiply every component by `s`
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn scale_in_place(&mut self, s: f64) {
        ScalarBackend::scale(&mut self.data, s);
    }

    /// Dot product
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::SizeMismatch`] if the lengths differ.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(len = self.len())))]
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_same_len(other, "dot")?;
        Ok(ScalarBackend::dot(&self.data, &other.data))
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        ScalarBackend::sum_of_squares(&self.data).sqrt()
    }

    /// Unit vector in the same direction, returned as a new vector
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::DivisionByZero`] if the norm is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let v = Vector::from_slice(&[3.0, 0.0, 4.0]).unwrap();
    /// assert!((v.normalize().unwrap().norm() - 1.0).abs() < 1e-12);
    ///
    /// let zero = Vector::zeros(2).unwrap();
    /// assert!(zero.normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize_in_place()?;
        Ok(out)
    }

    /// Scale `self` to unit norm
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::DivisionByZero`] if the norm is exactly zero;
    /// `self` is left untouched.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn normalize_in_place(&mut self) -> Result<()> {
        let n = self.norm();
        if n == 0.0 {
            return Err(NumprimError::DivisionByZero(
                "Cannot normalize zero-length vector".to_string(),
            ));
        }
        self.scale_in_place(1.0 / n);
        Ok(())
    }

    /// Component-wise closeness under `tolerance`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::SizeMismatch`] if the lengths differ.
    pub fn is_close_to(&self, other: &Self, tolerance: &Tolerance) -> Result<bool> {
        self.check_same_len(other, "is_close_to")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| tolerance.is_close(a, b)))
    }

    // ------------------------------------------------------------------
    // Homogeneous coordinates
    // ------------------------------------------------------------------

    /// Append `w = 1.0`, returning a new vector
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let p = Vector::from_slice(&[2.0, 4.0, 8.0]).unwrap();
    /// assert_eq!(p.to_homogeneous().to_vec(), vec![2.0, 4.0, 8.0, 1.0]);
    /// ```
    #[must_use]
    pub fn to_homogeneous(&self) -> Self {
        let mut out = self.clone();
        out.to_homogeneous_in_place();
        out
    }

    /// Append `w = 1.0`; length grows by one
    pub fn to_homogeneous_in_place(&mut self) {
        self.data.push(1.0);
    }

    /// Divide by `w` and drop it, returning a new vector
    ///
    /// # Errors
    ///
    /// See [`Vector::from_homogeneous_in_place`].
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let ph = Vector::from_slice(&[2.0, 4.0, 8.0, 2.0]).unwrap();
    /// assert_eq!(ph.from_homogeneous().unwrap().to_vec(), vec![1.0, 2.0, 4.0]);
    /// ```
    pub fn from_homogeneous(&self) -> Result<Self> {
        let mut out = self.clone();
        out.from_homogeneous_in_place()?;
        Ok(out)
    }

    /// Divide every other component by `w` and drop `w`; length shrinks by one
    ///
    /// # Errors
    ///
    /// - [`NumprimError::IllegalState`] if `len() == 1` (nothing would remain)
    /// - [`NumprimError::DivisionByZero`] if `w == 0.0`
    ///
    /// `self` is left untouched on error.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn from_homogeneous_in_place(&mut self) -> Result<()> {
        let w = self.w()?;
        let n = self.data.len();
        if n == 1 {
            return Err(NumprimError::IllegalState(
                "Cannot drop w from a 1D vector [w]".to_string(),
            ));
        }
        if w == 0.0 {
            return Err(NumprimError::DivisionByZero(
                "Cannot convert from homogeneous: w == 0".to_string(),
            ));
        }
        ScalarBackend::scale(&mut self.data[..n - 1], 1.0 / w);
        self.data.truncate(n - 1);
        Ok(())
    }

    /// Divide by `w` and reset `w` to 1, returning a new vector
    ///
    /// # Errors
    ///
    /// See [`Vector::normalize_w_in_place`].
    ///
    /// # Examples
    ///
    /// ```
    /// use numprim::Vector;
    ///
    /// let ph = Vector::from_slice(&[2.0, 4.0, 8.0, 2.0]).unwrap();
    /// assert_eq!(ph.normalize_w().unwrap().to_vec(), vec![1.0, 2.0, 4.0, 1.0]);
    /// ```
    pub fn normalize_w(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize_w_in_place()?;
        Ok(out)
    }

    /// Divide every other component by `w` and set `w` to exactly `1.0`
    ///
    /// # Errors
    ///
    /// Returns [`NumprimError::DivisionByZero`] if `w == 0.0`; `self` is left
    /// untouched.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn normalize_w_in_place(&mut self) -> Result<()> {
        let w = self.w()?;
        if w == 0.0 {
            return Err(NumprimError::DivisionByZero(
                "Cannot normalize by w: w == 0".to_string(),
            ));
        }
        let n = self.data.len();
        ScalarBackend::scale(&mut self.data[..n - 1], 1.0 / w);
        self.data[n - 1] = 1.0;
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = NumprimError;

    /// Take ownership of `data` without copying
    fn try_from(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(NumprimError::InvalidArgument(
                "Vector requires at least one component".to_string(),
            ));
        }
        Ok(Self { data })
    }
}

// Consistent with the derived IEEE-754 `PartialEq`: +0.0 == -0.0, so both
// hash as +0.0.
impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
        for &x in &self.data {
            let bits = if x == 0.0 { 0u64 } else { x.to_bits() };
            bits.hash(state);
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:?}")?;
        }
        write!(f, "]")
    }
}
