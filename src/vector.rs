//! Fixed-length `f64` vector with bounds-checked access

use std::fmt;

use crate::{Result, VectorError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Element count above which `Display` collapses the middle of the vector
const PREVIEW_LIMIT: usize = 7;

/// How many elements to show on each side of the ellipsis
const PREVIEW_EDGE: usize = 3;

/// Chunk size for the parallel elementwise path
#[cfg(feature = "parallel")]
const PAR_CHUNK: usize = 4096;

/// Fixed-length ordered sequence of `f64` values
///
/// The length is set at construction and never changes; operations that
/// would change it (`add`, `mul_scalar`, ...) return a new `Vector` instead.
/// The buffer is owned and non-aliased; `clone()` is the explicit copy
/// operation, and the only in-place mutation is through [`Vector::set`].
///
/// # Examples
///
/// ```
/// use centella::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0]);
/// let b = Vector::from_slice(&[-3.0, 4.0]);
/// let sum = a.add(&b).unwrap();
///
/// assert_eq!(sum.as_slice(), &[-2.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a zero-initialized vector of the requested length
    ///
    /// The length is taken as a signed integer so that a negative request is
    /// rejected rather than silently wrapped. A caller that ignores the
    /// error can still recover a usable empty vector through
    /// `unwrap_or_default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let v = Vector::with_len(3).unwrap();
    /// assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    ///
    /// assert!(Vector::with_len(-1).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidLength`] if `n` is negative.
    pub fn with_len(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(VectorError::InvalidLength(n));
        }
        Ok(Self {
            data: vec![0.0; n as usize],
        })
    }

    /// Create a vector from a slice
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Get underlying data as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the element at index `i`
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v.get(1).unwrap(), 2.0);
    /// assert!(v.get(2).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `i >= len`.
    pub fn get(&self, i: usize) -> Result<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index: i,
                len: self.data.len(),
            })
    }

    /// Overwrite the element at index `i`, returning the value written
    ///
    /// This is the only in-place mutation the type offers. On failure the
    /// vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let mut v = Vector::with_len(2).unwrap();
    /// assert_eq!(v.set(0, 5.0).unwrap(), 5.0);
    /// assert_eq!(v.get(0).unwrap(), 5.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `i >= len`.
    pub fn set(&mut self, i: usize, value: f64) -> Result<f64> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(i)
            .ok_or(VectorError::IndexOutOfRange { index: i, len })?;
        *slot = value;
        Ok(value)
    }

    /// Apply a binary operation elementwise after the length check
    ///
    /// All elementwise binary operations funnel through here so the
    /// validate-then-iterate logic exists exactly once.
    fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.data.len() != other.data.len() {
            return Err(VectorError::LengthMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self { data })
    }

    /// Apply a unary operation to every element
    fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: self.data.iter().map(|&a| op(a)).collect(),
        }
    }

    /// Elementwise addition
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0]);
    /// let b = Vector::from_slice(&[-3.0, 4.0]);
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[-2.0, 6.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(len = self.data.len())))]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise subtraction
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise multiplication
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Parallel elementwise addition
    ///
    /// Identical results to [`Vector::add`]. The index range is partitioned
    /// into disjoint contiguous chunks; each chunk writes only its own slice
    /// of the pre-allocated output, so no synchronization is needed beyond
    /// the implicit join.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    #[cfg(feature = "parallel")]
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(len = self.data.len())))]
    pub fn par_add(&self, other: &Self) -> Result<Self> {
        use rayon::prelude::*;

        if self.data.len() != other.data.len() {
            return Err(VectorError::LengthMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }

        let mut out = vec![0.0; self.data.len()];
        out.par_chunks_mut(PAR_CHUNK)
            .zip(self.data.par_chunks(PAR_CHUNK))
            .zip(other.data.par_chunks(PAR_CHUNK))
            .for_each(|((dst, a), b)| {
                for i in 0..dst.len() {
                    dst[i] = a[i] + b[i];
                }
            });

        Ok(Self { data: out })
    }

    /// Add a scalar to every element
    ///
    /// Scalar broadcasts never fail; NaN and infinities propagate per
    /// IEEE 754.
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v.add_scalar(2.0).as_slice(), &[3.0, 4.0]);
    /// ```
    pub fn add_scalar(&self, x: f64) -> Self {
        self.map(|a| a + x)
    }

    /// Subtract a scalar from every element
    pub fn sub_scalar(&self, x: f64) -> Self {
        self.map(|a| a - x)
    }

    /// Multiply every element by a scalar
    pub fn mul_scalar(&self, x: f64) -> Self {
        self.map(|a| a * x)
    }

    /// Minimum element
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] if the vector has no elements.
    pub fn min(&self) -> Result<f64> {
        let first = *self.data.first().ok_or(VectorError::EmptyVector)?;
        Ok(self.data[1..].iter().fold(first, |m, &x| m.min(x)))
    }

    /// Maximum element
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] if the vector has no elements.
    pub fn max(&self) -> Result<f64> {
        let first = *self.data.first().ok_or(VectorError::EmptyVector)?;
        Ok(self.data[1..].iter().fold(first, |m, &x| m.max(x)))
    }

    /// Arithmetic mean of the elements
    ///
    /// # Examples
    ///
    /// ```
    /// use centella::Vector;
    ///
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.mean().unwrap(), 3.5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] if the vector has no elements.
    pub fn mean(&self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        Ok(self.data.iter().sum::<f64>() / self.data.len() as f64)
    }

    /// Population variance (divides by `n`, not `n - 1`)
    ///
    /// Two-pass formulation: the mean first, then the average squared
    /// deviation from it. Adequate for this scope; not Welford.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] if the vector has no elements.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.data.len())))]
    pub fn variance(&self) -> Result<f64> {
        let mean = self.mean()?;
        let sum_sq: f64 = self
            .data
            .iter()
            .map(|&x| {
                let d = x - mean;
                d * d
            })
            .sum();
        Ok(sum_sq / self.data.len() as f64)
    }

    /// Population standard deviation
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] if the vector has no elements.
    pub fn std_dev(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

/// Bounded-width preview: every element to 3 decimal places, and for more
/// than [`PREVIEW_LIMIT`] elements only the first and last
/// [`PREVIEW_EDGE`] with an ellipsis between. Lossy by design; this is a
/// debugging aid, not a serialization.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(items: &[f64]) -> String {
            items
                .iter()
                .map(|x| format!("{:.3}", x))
                .collect::<Vec<_>>()
                .join(", ")
        }

        let n = self.data.len();
        if n > PREVIEW_LIMIT {
            write!(
                f,
                "[{} ... {}]",
                join(&self.data[..PREVIEW_EDGE]),
                join(&self.data[n - PREVIEW_EDGE..])
            )
        } else {
            write!(f, "[{}]", join(&self.data))
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Property test: Addition is commutative (a + b == b + a)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_add_commutative(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100),
            b in prop::collection::vec(-1000.0f64..1000.0, 1..100)
        ) {
            let len = a.len().min(b.len());
            let va = Vector::from_slice(&a[..len]);
            let vb = Vector::from_slice(&b[..len]);

            let result1 = va.add(&vb).unwrap();
            let result2 = vb.add(&va).unwrap();

            prop_assert_eq!(result1.as_slice(), result2.as_slice());
        }
    }

    // Property test: Multiplication is commutative
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_mul_commutative(
            a in prop::collection::vec(-100.0f64..100.0, 1..100),
            b in prop::collection::vec(-100.0f64..100.0, 1..100)
        ) {
            let len = a.len().min(b.len());
            let va = Vector::from_slice(&a[..len]);
            let vb = Vector::from_slice(&b[..len]);

            let result1 = va.mul(&vb).unwrap();
            let result2 = vb.mul(&va).unwrap();

            prop_assert_eq!(result1.as_slice(), result2.as_slice());
        }
    }

    // Property test: Subtraction equals addition of the negation
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_sub_is_add_of_negation(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100),
            b in prop::collection::vec(-1000.0f64..1000.0, 1..100)
        ) {
            let len = a.len().min(b.len());
            let va = Vector::from_slice(&a[..len]);
            let vb = Vector::from_slice(&b[..len]);

            let direct = va.sub(&vb).unwrap();
            let via_negation = va.add(&vb.mul_scalar(-1.0)).unwrap();

            prop_assert_eq!(direct.as_slice(), via_negation.as_slice());
        }
    }

    // Property test: Identity element for addition (a + 0 == a)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_add_identity(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100)
        ) {
            let va = Vector::from_slice(&a);
            let zero = Vector::with_len(a.len() as i64).unwrap();

            let result = va.add(&zero).unwrap();

            prop_assert_eq!(result.as_slice(), va.as_slice());
        }
    }

    // Property test: Scalar broadcasts match the per-element definition
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_scalar_ops_pointwise(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100),
            x in -1000.0f64..1000.0
        ) {
            let va = Vector::from_slice(&a);

            let added = va.add_scalar(x);
            let subbed = va.sub_scalar(x);
            let mulled = va.mul_scalar(x);

            for i in 0..a.len() {
                prop_assert_eq!(added.get(i).unwrap(), a[i] + x);
                prop_assert_eq!(subbed.get(i).unwrap(), a[i] - x);
                prop_assert_eq!(mulled.get(i).unwrap(), a[i] * x);
            }
        }
    }

    // Property test: Set-then-get roundtrip at every valid index
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_set_get_roundtrip(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100),
            value in -1000.0f64..1000.0
        ) {
            let mut v = Vector::from_slice(&a);
            for i in 0..a.len() {
                prop_assert_eq!(v.set(i, value).unwrap(), value);
                prop_assert_eq!(v.get(i).unwrap(), value);
            }
        }
    }

    // Property test: Statistics are ordered and bounded
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_stats_bounds(
            a in prop::collection::vec(-1000.0f64..1000.0, 1..100)
        ) {
            let v = Vector::from_slice(&a);

            let min = v.min().unwrap();
            let max = v.max().unwrap();
            let mean = v.mean().unwrap();
            let variance = v.variance().unwrap();
            let std = v.std_dev().unwrap();

            // Tolerance covers summation rounding in mean().
            prop_assert!(min - 1e-9 <= mean && mean <= max + 1e-9);
            prop_assert!(variance >= 0.0);
            prop_assert!((std * std - variance).abs() < 1e-6 * variance.max(1.0));

            // min/max are actual elements
            prop_assert!(a.contains(&min));
            prop_assert!(a.contains(&max));
        }
    }
}
