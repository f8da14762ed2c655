//! Scalar Math Helpers
//!
//! Small stateless functions used alongside measurements: integer powers,
//! base-10 mantissa/exponent decomposition (for printing values in
//! scientific notation with a chosen number of digits) and tolerant float
//! comparison.
//!
//! All functions go through `libm` so they are available without `std`.

use crate::constants::{DECIMAL_BASE, DEFAULT_EPSILON};

/// Decades to pre-scale by before decomposing very small magnitudes
const TINY_DECADES: i32 = 300;

/// `base` raised to an integer power by repeated squaring.
///
/// Negative exponents return the reciprocal; `exp == 0` returns 1, including
/// for a zero base.
///
/// ```rust
/// use hepkit_core::math::int_power;
///
/// assert_eq!(int_power(2.0, 10), 1024.0);
/// assert_eq!(int_power(2.0, -2), 0.25);
/// ```
pub fn int_power(base: f64, exp: i32) -> f64 {
    let mut remaining = exp.unsigned_abs();
    let mut factor = base;
    let mut result = 1.0;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        remaining >>= 1;
    }

    if exp < 0 {
        1.0 / result
    } else {
        result
    }
}

/// Split `x` into `(mantissa, exponent)` with `x = mantissa · 10^exponent`
/// and `1 <= |mantissa| < 10`.
///
/// Zero and non-finite input come back unchanged with exponent 0.
pub fn mantissa_exponent(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }

    let mut exponent = libm::floor(libm::log10(libm::fabs(x))) as i32;
    // 10^exponent underflows to zero below 1e-308; lift tiny inputs first
    let mut mantissa = if exponent < -TINY_DECADES {
        (x * int_power(DECIMAL_BASE, TINY_DECADES))
            / int_power(DECIMAL_BASE, exponent + TINY_DECADES)
    } else {
        x / int_power(DECIMAL_BASE, exponent)
    };

    // log10 rounding can land one decade off near exact powers of ten
    if libm::fabs(mantissa) >= DECIMAL_BASE {
        mantissa /= DECIMAL_BASE;
        exponent += 1;
    } else if libm::fabs(mantissa) < 1.0 {
        mantissa *= DECIMAL_BASE;
        exponent -= 1;
    }

    (mantissa, exponent)
}

/// Mantissa of [`mantissa_exponent`]
pub fn mantissa(x: f64) -> f64 {
    mantissa_exponent(x).0
}

/// Exponent of [`mantissa_exponent`]
pub fn exponent(x: f64) -> i32 {
    mantissa_exponent(x).1
}

/// Compare two floats with a tolerance that is absolute below 1 and relative
/// above it
pub fn float_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = libm::fmax(1.0, libm::fmax(libm::fabs(a), libm::fabs(b)));
    libm::fabs(a - b) <= epsilon * scale
}

/// [`float_eq`] with [`DEFAULT_EPSILON`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    float_eq(a, b, DEFAULT_EPSILON)
}
