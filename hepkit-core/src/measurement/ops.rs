//! Arithmetic with Error Propagation
//!
//! ## Rules
//!
//! Both operands uncertain (independent errors, combined in quadrature per side):
//!
//! ```text
//! A + B : c = a + b    up = √(Au² + Bu²)          down = √(Ad² + Bd²)
//! A - B : c = a - b    up = √(Au² + Bd²)          down = √(Ad² + Bu²)
//! A * B : c = a · b    up = |ab|·√(rAu² + rBu²)   down = |ab|·√(rAd² + rBd²)
//! ```
//!
//! Exact scalar `k` (no uncertainty of its own):
//!
//! ```text
//! A ± k, k + A : errors unchanged
//! k - A        : sides swap (negation)
//! A * k, k * A : errors scaled by |k|, sides swap when k < 0
//! A / k        : errors scaled by 1/|k|, sides swap when k < 0
//! k / A        : up = |k/a|·Au/|a|, down = |k/a|·Ad/|a|
//! ```
//!
//! The product is evaluated as `√((Au·b)² + (Bu·a)²)`, which equals the
//! relative form above but stays finite when one central value is zero.
//! Quadrature sums use `hypot` to avoid intermediate overflow.
//!
//! `A / B` between two uncertain values is not provided.
//!
//! Division by a zero scalar or a zero central value follows `f64` and yields
//! `inf`/`NaN`. Error fields are affected too: a zero magnitude scaled by an
//! infinite factor is `NaN` (`0 · inf`), so `1.0 / (0, 1, 0)` gives
//! `(inf, inf, NaN)`. [`Measurement::checked_div`] and [`Measurement::checked_rdiv`]
//! report [`HepkitError::DivisionByZero`] instead.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Measurement;
use crate::errors::{HepkitError, HepkitResult};

#[inline]
fn quadrature(a: f64, b: f64) -> f64 {
    libm::hypot(a, b)
}

impl Measurement {
    /// `self / divisor`, failing on a zero divisor
    pub fn checked_div(self, divisor: f64) -> HepkitResult<Self> {
        if divisor == 0.0 {
            return Err(HepkitError::DivisionByZero { operation: "checked_div" });
        }
        Ok(self / divisor)
    }

    /// `numerator / self`, failing on a zero central value
    pub fn checked_rdiv(self, numerator: f64) -> HepkitResult<Self> {
        if self.central == 0.0 {
            return Err(HepkitError::DivisionByZero { operation: "checked_rdiv" });
        }
        Ok(numerator / self)
    }

    /// Multiply by an exact factor, swapping sides for a negative factor
    fn scaled(self, factor: f64, central: f64) -> Self {
        let magnitude = libm::fabs(factor);
        if factor < 0.0 {
            Self::from_parts(central, self.error_down * magnitude, self.error_up * magnitude)
        } else {
            Self::from_parts(central, self.error_up * magnitude, self.error_down * magnitude)
        }
    }
}

// ===== MEASUREMENT ⊕ MEASUREMENT =====

impl Add for Measurement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(
            self.central + rhs.central,
            quadrature(self.error_up, rhs.error_up),
            quadrature(self.error_down, rhs.error_down),
        )
    }
}

impl Sub for Measurement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Measurement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.central * rhs.central,
            quadrature(self.error_up * rhs.central, rhs.error_up * self.central),
            quadrature(self.error_down * rhs.central, rhs.error_down * self.central),
        )
    }
}

impl Neg for Measurement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.central, self.error_down, self.error_up)
    }
}

// ===== MEASUREMENT ⊕ SCALAR =====

impl Add<f64> for Measurement {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::from_parts(self.central + rhs, self.error_up, self.error_down)
    }
}

impl Sub<f64> for Measurement {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::from_parts(self.central - rhs, self.error_up, self.error_down)
    }
}

impl Mul<f64> for Measurement {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs, self.central * rhs)
    }
}

impl Div<f64> for Measurement {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        let magnitude = libm::fabs(rhs);
        let central = self.central / rhs;
        if rhs < 0.0 {
            Self::from_parts(central, self.error_down / magnitude, self.error_up / magnitude)
        } else {
            Self::from_parts(central, self.error_up / magnitude, self.error_down / magnitude)
        }
    }
}

// ===== SCALAR ⊕ MEASUREMENT =====

impl Add<Measurement> for f64 {
    type Output = Measurement;

    fn add(self, rhs: Measurement) -> Measurement {
        rhs + self
    }
}

impl Sub<Measurement> for f64 {
    type Output = Measurement;

    fn sub(self, rhs: Measurement) -> Measurement {
        -rhs + self
    }
}

impl Mul<Measurement> for f64 {
    type Output = Measurement;

    fn mul(self, rhs: Measurement) -> Measurement {
        rhs * self
    }
}

impl Div<Measurement> for f64 {
    type Output = Measurement;

    fn div(self, rhs: Measurement) -> Measurement {
        let central = self / rhs.central;
        // |k/a| / |a|
        let scale = libm::fabs(central) / libm::fabs(rhs.central);
        Measurement::from_parts(central, rhs.error_up * scale, rhs.error_down * scale)
    }
}

// ===== COMPOUND ASSIGNMENT =====

macro_rules! impl_assign {
    ($trait:ident, $method:ident, $op:tt, $rhs:ty) => {
        impl $trait<$rhs> for Measurement {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, +, Measurement);
impl_assign!(SubAssign, sub_assign, -, Measurement);
impl_assign!(MulAssign, mul_assign, *, Measurement);
impl_assign!(AddAssign, add_assign, +, f64);
impl_assign!(SubAssign, sub_assign, -, f64);
impl_assign!(MulAssign, mul_assign, *, f64);
impl_assign!(DivAssign, div_assign, /, f64);

// ===== ACCUMULATION =====

impl Sum for Measurement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Measurement> for Measurement {
    fn sum<I: Iterator<Item = &'a Measurement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
