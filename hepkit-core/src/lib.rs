//! Core helpers for hepkit
//!
//! Measured quantities with asymmetric uncertainties, plus the small
//! utilities an analysis job keeps reaching for.
//!
//! - [`Measurement`]: central value with independent upper/lower errors and
//!   arithmetic that propagates them in quadrature
//! - [`math`]: integer powers, mantissa/exponent decomposition
//! - [`time`]: clocks, stopwatch, elapsed-time formatting
//! - [`splice`]: in-place block relocation in ordered lists
//! - [`ancestry`]: breadth-first search over Monte-Carlo decay trees
//!
//! Works without `std` (disable default features); no operation allocates.
//!
//! ```rust
//! use hepkit_core::Measurement;
//!
//! let luminosity = Measurement::new(139.0, 2.4, 2.4);
//! let cross_section = Measurement::new(0.82, 0.05, 0.07);
//! let expected = cross_section * luminosity;
//!
//! assert!((expected.central() - 113.98).abs() < 1e-9);
//! assert!(expected.abs_lower_error() > expected.abs_upper_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod ancestry;
pub mod constants;
pub mod errors;
pub mod math;
pub mod measurement;
pub mod splice;
pub mod time;

// Public API
pub use errors::{HepkitError, HepkitResult};
pub use measurement::Measurement;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
