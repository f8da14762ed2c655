//! Constants for hepkit
//!
//! Numeric tolerances, traversal limits and time conversion factors live here
//! so no module carries magic numbers.
//!
//! ## Organization
//!
//! - **Numeric**: comparison tolerances and decomposition bases
//! - **Time**: unit conversions used by the elapsed-time helpers

/// Numeric tolerances and bounded-work limits.
pub mod numeric;

/// Time unit conversion factors.
pub mod time;

pub use numeric::{DEFAULT_EPSILON, DEFAULT_TRAVERSAL_CAPACITY, DECIMAL_BASE};

pub use time::{
    MS_PER_SECOND, SECONDS_PER_MINUTE, MINUTES_PER_HOUR,
    MS_PER_MINUTE, MS_PER_HOUR,
};
