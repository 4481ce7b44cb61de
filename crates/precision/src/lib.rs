//! Extended-range arithmetic for quantities that overflow `f64`.
//!
//! The rocket equation raises `e` to `Δv / v_e`; for chemical engines on
//! interplanetary trips that ratio easily passes the ~709 where `f64::exp`
//! saturates to infinity. [`Magnitude`] keeps such values as a decimal
//! mantissa and an integer exponent, evaluating exponentials in the log
//! domain so the raw power is never materialised.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest |x| for which `f64::exp(x)` is finite and normal.
const F64_EXP_LIMIT: f64 = 709.0;
/// Decimal exponents are kept well inside the range where `f64 -> i64` is exact.
const MAX_DECIMAL_EXPONENT: f64 = 1.0e15;
/// Addends further apart than this many decades vanish below f64 precision.
const ADD_CUTOFF_DECADES: i64 = 17;

/// Errors raised when constructing or deriving a [`Magnitude`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MagnitudeError {
    #[error("value must be finite, got {0}")]
    NonFinite(f64),
    #[error("value must be non-negative, got {0}")]
    Negative(f64),
    #[error("decimal exponent {0:e} exceeds the representable range")]
    ExponentOverflow(f64),
}

/// A non-negative real stored as `mantissa · 10^exponent`.
///
/// Invariant: `mantissa` is either exactly zero (with `exponent == 0`) or lies
/// in `[1, 10)`. Every constructor normalises, so two equal values always have
/// identical parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MagnitudeParts", into = "MagnitudeParts")]
pub struct Magnitude {
    mantissa: f64,
    exponent: i64,
}

/// Wire form of a [`Magnitude`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MagnitudeParts {
    mantissa: f64,
    exponent: i64,
}

impl Magnitude {
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        exponent: 0,
    };
    pub const ONE: Self = Self {
        mantissa: 1.0,
        exponent: 0,
    };

    /// Wrap a finite, non-negative `f64`.
    pub fn from_f64(value: f64) -> Result<Self, MagnitudeError> {
        check_non_negative(value)?;
        Ok(Self::normalized(value, 0))
    }

    /// Build from an arbitrary (finite, non-negative) mantissa and decimal exponent.
    ///
    /// The exponent is held to the same `±1e15` decades as [`Magnitude::pow10`].
    pub fn from_parts(mantissa: f64, exponent: i64) -> Result<Self, MagnitudeError> {
        check_non_negative(mantissa)?;
        if exponent.unsigned_abs() as f64 > MAX_DECIMAL_EXPONENT {
            return Err(MagnitudeError::ExponentOverflow(exponent as f64));
        }
        Ok(Self::normalized(mantissa, exponent))
    }

    /// `10^decimal_exponent` for a real-valued exponent.
    pub fn pow10(decimal_exponent: f64) -> Result<Self, MagnitudeError> {
        if !decimal_exponent.is_finite() {
            return Err(MagnitudeError::NonFinite(decimal_exponent));
        }
        if decimal_exponent.abs() > MAX_DECIMAL_EXPONENT {
            return Err(MagnitudeError::ExponentOverflow(decimal_exponent));
        }
        let whole = decimal_exponent.floor();
        let mantissa = 10f64.powf(decimal_exponent - whole);
        Ok(Self::normalized(mantissa, whole as i64))
    }

    /// `e^x`, switching to the log domain once `f64::exp` would overflow.
    pub fn exp(x: f64) -> Result<Self, MagnitudeError> {
        if !x.is_finite() {
            return Err(MagnitudeError::NonFinite(x));
        }
        if x.abs() <= F64_EXP_LIMIT {
            return Ok(Self::normalized(x.exp(), 0));
        }
        Self::pow10(x * std::f64::consts::LOG10_E)
    }

    /// `e^x − 1` for `x ≥ 0`.
    ///
    /// Small arguments go through `f64::exp_m1` to keep full precision near
    /// zero; past the `f64` range the `− 1` is far below the mantissa's
    /// resolution and is dropped.
    pub fn exp_m1(x: f64) -> Result<Self, MagnitudeError> {
        check_non_negative(x)?;
        if x <= F64_EXP_LIMIT {
            return Ok(Self::normalized(x.exp_m1(), 0));
        }
        Self::exp(x)
    }

    /// Multiply by a finite, non-negative scalar.
    pub fn scaled(self, factor: f64) -> Result<Self, MagnitudeError> {
        Ok(self * Self::from_f64(factor)?)
    }

    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Base-10 logarithm; `-inf` for zero.
    pub fn log10(&self) -> f64 {
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        self.mantissa.log10() + self.exponent as f64
    }

    /// Nearest `f64`, saturating to `inf` above `f64::MAX` and to `0` below
    /// the subnormal range.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() || self.exponent < -330 {
            return 0.0;
        }
        if self.exponent > 309 {
            return f64::INFINITY;
        }
        scale_pow10(self.mantissa, self.exponent)
    }

    /// Mantissa rounded to `digits` fraction digits, carrying into the exponent
    /// when rounding reaches 10 (9.996 at two digits becomes 1.00 · 10¹).
    pub fn rounded(&self, digits: usize) -> (f64, i64) {
        if self.is_zero() {
            return (0.0, 0);
        }
        let scale = 10f64.powi(digits.min(17) as i32);
        let mantissa = (self.mantissa * scale).round() / scale;
        if mantissa >= 10.0 {
            (mantissa / 10.0, self.exponent.saturating_add(1))
        } else {
            (mantissa, self.exponent)
        }
    }

    fn normalized(mantissa: f64, exponent: i64) -> Self {
        if mantissa == 0.0 {
            return Self::ZERO;
        }
        let shift = mantissa.log10().floor() as i64;
        let mut mantissa = scale_pow10(mantissa, -shift);
        let mut exponent = exponent.saturating_add(shift);
        // log10 can land one decade off right at a power of ten
        while mantissa >= 10.0 {
            mantissa /= 10.0;
            exponent = exponent.saturating_add(1);
        }
        while mantissa < 1.0 {
            mantissa *= 10.0;
            exponent = exponent.saturating_sub(1);
        }
        Self { mantissa, exponent }
    }
}

fn check_non_negative(value: f64) -> Result<(), MagnitudeError> {
    if !value.is_finite() {
        return Err(MagnitudeError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(MagnitudeError::Negative(value));
    }
    Ok(())
}

/// `value · 10^power` without overflowing the intermediate power of ten.
fn scale_pow10(mut value: f64, mut power: i64) -> f64 {
    while power > 300 {
        value *= 1e300;
        power -= 300;
    }
    while power < -300 {
        value /= 1e300;
        power += 300;
    }
    let factor = 10f64.powf(power.unsigned_abs() as f64);
    if power >= 0 {
        value * factor
    } else {
        value / factor
    }
}

impl TryFrom<f64> for Magnitude {
    type Error = MagnitudeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<MagnitudeParts> for Magnitude {
    type Error = MagnitudeError;

    fn try_from(parts: MagnitudeParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.mantissa, parts.exponent)
    }
}

impl From<Magnitude> for MagnitudeParts {
    fn from(value: Magnitude) -> Self {
        Self {
            mantissa: value.mantissa,
            exponent: value.exponent,
        }
    }
}

impl Mul for Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: Magnitude) -> Magnitude {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::ZERO;
        }
        // saturates instead of wrapping after long chains of products
        let exponent = self.exponent.saturating_add(rhs.exponent);
        Magnitude::normalized(self.mantissa * rhs.mantissa, exponent)
    }
}

impl Add for Magnitude {
    type Output = Magnitude;

    fn add(self, rhs: Magnitude) -> Magnitude {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        let (hi, lo) = if self >= rhs { (self, rhs) } else { (rhs, self) };
        let gap = hi.exponent.saturating_sub(lo.exponent);
        if gap > ADD_CUTOFF_DECADES {
            return hi;
        }
        Magnitude::normalized(hi.mantissa + scale_pow10(lo.mantissa, -gap), hi.exponent)
    }
}

impl Eq for Magnitude {}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .exponent
                .cmp(&other.exponent)
                .then_with(|| self.mantissa.total_cmp(&other.mantissa)),
        }
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::LowerExp for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => {
                let (mantissa, exponent) = self.rounded(digits);
                write!(f, "{mantissa:.digits$}e{exponent}")
            }
            None => write!(f, "{}e{}", self.mantissa, self.exponent),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(self, f)
    }
}
