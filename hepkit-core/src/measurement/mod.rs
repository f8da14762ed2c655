//! Measured Quantities with Asymmetric Uncertainties
//!
//! ## Overview
//!
//! A [`Measurement`] is a best-estimate central value paired with independent
//! upward and downward uncertainty magnitudes, as quoted for yields,
//! efficiencies and cross sections: `12.3 +0.8 -0.5`.
//!
//! ## Invariants
//!
//! - `error_up >= 0` and `error_down >= 0` for every value produced by this
//!   crate, whether constructed directly or obtained through arithmetic
//! - The type is `Copy` and has no identity beyond its three fields
//!
//! ## Zero Central Value
//!
//! Relative errors and normalization divide by the central value. These
//! accessors return [`HepkitError::DivisionByZero`] when it is zero instead
//! of a misleading finite number. Arithmetic operators behave like `f64`
//! division (IEEE `inf`/`NaN`); use [`Measurement::checked_div`] and
//! [`Measurement::checked_rdiv`] for the fallible forms.
//!
//! ## Propagation Convention
//!
//! Errors of independent operands combine in quadrature, separately for the
//! upper and lower side. Correlations are not modelled. See [`ops`] for the
//! rules of each operator.
//!
//! ```rust
//! use hepkit_core::Measurement;
//!
//! let signal = Measurement::new(2.0, 0.3, 0.3);
//! let background = Measurement::new(3.0, 0.4, 0.4);
//! let total = signal + background;
//!
//! assert_eq!(total.central(), 5.0);
//! assert!((total.abs_upper_error() - 0.5).abs() < 1e-12);
//! ```

pub mod ops;

use core::fmt;

use crate::errors::{HepkitError, HepkitResult};

/// Central value with independent upper and lower uncertainties
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MeasurementRepr"))]
pub struct Measurement {
    central: f64,
    error_up: f64,
    error_down: f64,
}

impl Measurement {
    /// The zero measurement `(0, 0, 0)`
    pub const ZERO: Self = Self::from_parts(0.0, 0.0, 0.0);

    /// Create a measurement.
    ///
    /// Error magnitudes are stored as absolute values, so a negative
    /// magnitude is read as its size. Use [`Measurement::try_new`] to reject
    /// such input instead.
    pub fn new(central: f64, error_up: f64, error_down: f64) -> Self {
        if error_up < 0.0 || error_down < 0.0 {
            log_warn!(
                "Negative uncertainty magnitude (+{}, -{}) stored as absolute value",
                error_up, error_down
            );
        }

        Self::from_parts(central, libm::fabs(error_up), libm::fabs(error_down))
    }

    /// Create a measurement, rejecting non-finite input and negative magnitudes
    pub fn try_new(central: f64, error_up: f64, error_down: f64) -> HepkitResult<Self> {
        if !central.is_finite() || !error_up.is_finite() || !error_down.is_finite() {
            return Err(HepkitError::InvalidValue);
        }
        if error_up < 0.0 {
            return Err(HepkitError::NegativeError { value: error_up });
        }
        if error_down < 0.0 {
            return Err(HepkitError::NegativeError { value: error_down });
        }

        Ok(Self::from_parts(central, error_up, error_down))
    }

    /// Measurement with the same uncertainty on both sides
    pub fn symmetric(central: f64, error: f64) -> Self {
        Self::new(central, error, error)
    }

    /// Exactly known value
    pub const fn exact(central: f64) -> Self {
        Self::from_parts(central, 0.0, 0.0)
    }

    /// Poisson yield from an event count: `(n, √n, √n)`
    pub fn from_counts(count: u64) -> Self {
        let n = count as f64;
        let error = libm::sqrt(n);
        Self::from_parts(n, error, error)
    }

    /// Store fields as given. Callers guarantee non-negative magnitudes.
    pub(crate) const fn from_parts(central: f64, error_up: f64, error_down: f64) -> Self {
        Self { central, error_up, error_down }
    }

    /// Best-estimate value
    pub fn central(&self) -> f64 {
        self.central
    }

    /// Upward uncertainty magnitude
    pub fn abs_upper_error(&self) -> f64 {
        self.error_up
    }

    /// Downward uncertainty magnitude
    pub fn abs_lower_error(&self) -> f64 {
        self.error_down
    }

    /// Mean of the two error magnitudes
    pub fn abs_avg_error(&self) -> f64 {
        (self.error_up + self.error_down) / 2.0
    }

    /// `error_up / central`, signed like the central value
    pub fn rel_upper_error(&self) -> HepkitResult<f64> {
        self.relative(self.error_up, "rel_upper_error")
    }

    /// `error_down / central`, signed like the central value
    pub fn rel_lower_error(&self) -> HepkitResult<f64> {
        self.relative(self.error_down, "rel_lower_error")
    }

    /// Mean of the two relative errors
    pub fn rel_avg_error(&self) -> HepkitResult<f64> {
        let up = self.relative(self.error_up, "rel_avg_error")?;
        let down = self.relative(self.error_down, "rel_avg_error")?;
        Ok((up + down) / 2.0)
    }

    /// `central + error_up`
    pub fn upper_value(&self) -> f64 {
        self.central + self.error_up
    }

    /// `central - error_down`
    pub fn lower_value(&self) -> f64 {
        self.central - self.error_down
    }

    /// Rescale so the central value becomes 1.
    ///
    /// Each magnitude is divided by `|central|`, which keeps the relative
    /// uncertainty of each side on the same side even for a negative central
    /// value.
    ///
    /// ```rust
    /// use hepkit_core::Measurement;
    ///
    /// let efficiency = Measurement::new(0.5, 0.05, 0.1);
    /// let norm = efficiency.normalize().unwrap();
    /// assert_eq!(norm.central(), 1.0);
    /// assert!((norm.abs_upper_error() - 0.1).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> HepkitResult<Self> {
        if self.central == 0.0 {
            return Err(HepkitError::DivisionByZero { operation: "normalize" });
        }

        let scale = libm::fabs(self.central);
        Ok(Self::from_parts(
            self.central / self.central,
            self.error_up / scale,
            self.error_down / scale,
        ))
    }

    /// True when all three fields are finite
    pub fn is_finite(&self) -> bool {
        self.central.is_finite() && self.error_up.is_finite() && self.error_down.is_finite()
    }

    /// True when `value` lies within `[lower_value, upper_value]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_value() && value <= self.upper_value()
    }

    fn relative(&self, error: f64, operation: &'static str) -> HepkitResult<f64> {
        if self.central == 0.0 {
            return Err(HepkitError::DivisionByZero { operation });
        }
        Ok(error / self.central)
    }
}

impl From<Measurement> for f64 {
    fn from(measurement: Measurement) -> Self {
        measurement.central
    }
}

impl From<f64> for Measurement {
    fn from(central: f64) -> Self {
        Self::exact(central)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "{:.*} +{:.*} -{:.*}",
                p, self.central, p, self.error_up, p, self.error_down
            ),
            None => write!(f, "{} +{} -{}", self.central, self.error_up, self.error_down),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Measurement {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} +{} -{}", self.central, self.error_up, self.error_down)
    }
}

/// Wire form checked through [`Measurement::try_new`] on deserialization
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeasurementRepr {
    central: f64,
    error_up: f64,
    error_down: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<MeasurementRepr> for Measurement {
    type Error = HepkitError;

    fn try_from(repr: MeasurementRepr) -> Result<Self, Self::Error> {
        Self::try_new(repr.central, repr.error_up, repr.error_down)
    }
}
