//! Error Types for hepkit
//!
//! ## Design
//!
//! Errors are small, `Copy` and carry no heap data, so they can be returned
//! from arithmetic helpers without allocation and compared in tests.
//!
//! ## Error Categories
//!
//! ### Numeric Domain
//! - `DivisionByZero`: a relative error, normalization or checked division was
//!   asked of a zero central value or a zero divisor
//! - `NegativeError`: a strict constructor received a negative magnitude
//! - `InvalidValue`: NaN or infinity where a finite number is required
//!
//! ### Collections
//! - `IndexOutOfBounds`: a splice range does not fit the list
//! - `TraversalOverflow`: an ancestry search exceeded its bounded work queue
//!
//! ## Handling
//!
//! ```rust
//! use hepkit_core::{HepkitError, Measurement};
//!
//! let yield_estimate = Measurement::new(0.0, 1.0, 1.0);
//! match yield_estimate.rel_upper_error() {
//!     Ok(rel) => println!("relative error {rel}"),
//!     Err(HepkitError::DivisionByZero { operation }) => {
//!         println!("{operation} undefined for a zero central value");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for fallible hepkit operations
pub type HepkitResult<T> = Result<T, HepkitError>;

/// Errors returned by hepkit operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HepkitError {
    /// Division by a zero central value or zero scalar
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// Name of the operation that needed the division
        operation: &'static str,
    },

    /// Negative uncertainty magnitude passed to a strict constructor
    #[error("Uncertainty magnitude {value} is negative")]
    NegativeError {
        /// The offending magnitude
        value: f64,
    },

    /// Value is NaN or infinite
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Index range does not fit in the list
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// First index past the valid range that was requested
        index: usize,
        /// Length of the list
        len: usize,
    },

    /// Breadth-first search queue or visited set is full
    #[error("Traversal exceeded capacity of {capacity} nodes")]
    TraversalOverflow {
        /// Fixed capacity of the traversal buffers
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for HepkitError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DivisionByZero { operation } =>
                defmt::write!(fmt, "Division by zero in {}", operation),
            Self::NegativeError { value } =>
                defmt::write!(fmt, "Negative magnitude {}", value),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::IndexOutOfBounds { index, len } =>
                defmt::write!(fmt, "Index {} out of bounds for {}", index, len),
            Self::TraversalOverflow { capacity } =>
                defmt::write!(fmt, "Traversal exceeded {} nodes", capacity),
        }
    }
}
