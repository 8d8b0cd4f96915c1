//! Centella: fixed-length numeric vector primitives
//!
//! **Centella** (Spanish: "flash of lightning") provides a small fixed-length
//! `f64` vector with:
//!
//! 1. **Bounds-checked access** - indexed `get`/`set` that report the
//!    offending index and length instead of panicking
//! 2. **Elementwise arithmetic** - `add`/`sub`/`mul` over equal-length
//!    vectors, with an optional rayon-backed parallel add
//! 3. **Scalar broadcasts** - `add_scalar`/`sub_scalar`/`mul_scalar`
//! 4. **Descriptive statistics** - min, max, mean, population variance,
//!    standard deviation
//! 5. **Bounded preview rendering** - `Display` truncates long vectors
//!
//! # Design Principles
//!
//! - **Pure operations**: everything except `set` returns a new value;
//!   a `Vector` is an owned, non-aliased buffer
//! - **Errors, not panics**: every precondition violation surfaces as a
//!   [`VectorError`] to the immediate caller
//! - **Zero unsafe**: no SIMD, no raw pointers; the optional `parallel`
//!   feature relies on disjoint chunk writes only
//!
//! # Quick Start
//!
//! ```rust
//! use centella::Vector;
//!
//! let a = Vector::from_slice(&[1.0, 2.0]);
//! let b = Vector::from_slice(&[-3.0, 4.0]);
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.as_slice(), &[-2.0, 6.0]);
//! assert_eq!(sum.to_string(), "[-2.000, 6.000]");
//! ```

pub mod error;
pub mod vector;

pub use error::{Result, VectorError};
pub use vector::Vector;
