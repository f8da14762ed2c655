//! Numeric Constants
//!
//! Tolerances for floating point comparison and capacities for the
//! fixed-size buffers used by graph traversal.

/// Default relative tolerance for [`crate::math::float_eq`].
///
/// Loose enough to absorb rounding in a chain of a few dozen propagation
/// steps, tight enough to distinguish physically different uncertainties.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Maximum number of nodes a single ancestry search may visit.
///
/// Generator-level event records rarely exceed a few hundred particles in the
/// ancestry chain of one candidate; 256 leaves headroom while keeping the
/// queue and visited set on the stack.
///
/// Must be a power of two (heapless index set requirement).
pub const DEFAULT_TRAVERSAL_CAPACITY: usize = 256;

/// Base used by the mantissa/exponent decomposition.
pub const DECIMAL_BASE: f64 = 10.0;
