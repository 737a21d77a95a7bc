//! A decimal number paired with the significant-digit count of its written
//! form.
//!
//! `Exponential` keeps the exact mantissa in a [`Decimal`] and tracks how
//! many digits of it are actually backed by the measurement. "1" and "1.0"
//! have equal magnitude but different precision, and they stay distinct
//! through arithmetic and formatting. Formatting always renders exactly
//! `precision` significant digits in plain fixed-point notation.

use crate::error::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Deepest fractional position `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// A precision-tracked decimal number.
///
/// # Examples
///
/// ```rust
/// use fhir_metrics::Exponential;
///
/// let a = Exponential::parse("1").unwrap();
/// let b = Exponential::parse("1.0").unwrap();
/// assert_eq!(a.precision(), 1);
/// assert_eq!(b.precision(), 2);
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exponential {
    mantissa: Decimal,
    precision: u32,
}

impl Exponential {
    /// Creates a value from an already-known mantissa and precision.
    pub fn new(mantissa: Decimal, precision: u32) -> Self {
        Self { mantissa, precision }
    }

    /// The value `1` carrying a single significant digit.
    pub fn one() -> Self {
        Self::new(Decimal::ONE, 1)
    }

    /// The value `0` carrying a single significant digit.
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, 1)
    }

    /// A scale accumulator seed: the value `1` carrying no digits of its
    /// own, so applying it leaves a value untouched.
    pub(crate) fn exact_one() -> Self {
        Self::new(Decimal::ONE, 0)
    }

    pub(crate) fn is_exact_one(&self) -> bool {
        self.precision == 0 && self.mantissa == Decimal::ONE
    }

    /// Parses a numeric literal, counting its significant digits.
    ///
    /// Leading zeros do not count, trailing zeros after the decimal point
    /// do, and a bare integer's digit count is its precision. An optional
    /// `e`/`E` power-of-ten suffix shifts the value without changing the
    /// digit count; an all-zero literal gets one digit per fractional
    /// place plus one.
    ///
    /// ```rust
    /// use fhir_metrics::Exponential;
    ///
    /// assert_eq!(Exponential::parse("0.025400").unwrap().precision(), 5);
    /// assert_eq!(Exponential::parse("1000").unwrap().precision(), 4);
    /// assert_eq!(Exponential::parse("2.54e-2").unwrap().precision(), 3);
    /// assert!(Exponential::parse("blub").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let err = || Error::InvalidNumber(text.to_string());
        let s = text.trim();
        let (num, exp) = match s.find(['e', 'E']) {
            Some(i) => (&s[..i], s[i + 1..].parse::<i32>().map_err(|_| err())?),
            None => (s, 0),
        };
        let negative = num.starts_with('-');
        let unsigned = num.strip_prefix(['+', '-']).unwrap_or(num);

        let mut integral: i128 = 0;
        let mut digits = 0u32;
        let mut fraction = 0u32;
        let mut significant = 0u32;
        let mut seen_point = false;
        let mut seen_nonzero = false;
        for c in unsigned.chars() {
            match c {
                '.' if !seen_point => seen_point = true,
                '0'..='9' => {
                    digits += 1;
                    if digits > MAX_SCALE {
                        return Err(err());
                    }
                    integral = integral * 10 + (c as u8 - b'0') as i128;
                    if seen_point {
                        fraction += 1;
                    }
                    if c != '0' {
                        seen_nonzero = true;
                    }
                    if seen_nonzero {
                        significant += 1;
                    }
                }
                _ => return Err(err()),
            }
        }
        if digits == 0 {
            return Err(err());
        }

        let mut mantissa = Decimal::from_i128_with_scale(integral, fraction);
        mantissa.set_sign_negative(negative);
        if exp != 0 {
            let shift = pow10(exp).ok_or_else(err)?;
            mantissa = mantissa.checked_mul(shift).ok_or_else(err)?;
        }
        let precision = if seen_nonzero { significant } else { fraction + 1 };
        Ok(Self { mantissa, precision })
    }

    /// The exact mantissa.
    pub fn mantissa(&self) -> Decimal {
        self.mantissa
    }

    /// Significant digits backed by the written form.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Multiplies two measured values. The result carries the digits of the
    /// exact product of two written literals, `p1 + p2 - 1`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let mantissa = self
            .mantissa
            .checked_mul(other.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(Self::new(mantissa, self.join_precision(other)))
    }

    /// Divides two measured values, with the same precision rule as
    /// [`Exponential::multiply`]. A non-terminating quotient keeps the
    /// first 28 digits, which is always beyond the tracked precision.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        if other.mantissa.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mantissa = self
            .mantissa
            .checked_div(other.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(Self::new(mantissa, self.join_precision(other)))
    }

    /// Adds two measured values. The result's least significant digit
    /// aligns with the coarser operand's least significant digit.
    ///
    /// ```rust
    /// use fhir_metrics::Exponential;
    ///
    /// let a = Exponential::parse("1.23").unwrap();
    /// let b = Exponential::parse("0.1").unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_string(), "1.3");
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        let sum = self
            .mantissa
            .checked_add(other.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(self.aligned(other, sum))
    }

    /// Subtracts two measured values, aligned like [`Exponential::add`].
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        let diff = self
            .mantissa
            .checked_sub(other.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(self.aligned(other, diff))
    }

    /// Orders two values, treating them as equal when their difference is
    /// below half a unit of the coarser operand's least significant digit.
    ///
    /// This relation is not transitive, so it is deliberately a method and
    /// not an `Ord` implementation.
    pub fn compare(&self, other: &Self) -> Ordering {
        let diff = match self.mantissa.checked_sub(other.mantissa) {
            Some(d) => d,
            None => return self.mantissa.cmp(&other.mantissa),
        };
        if diff.is_zero() {
            return Ordering::Equal;
        }
        let coarse = self.lsd_exponent().max(other.lsd_exponent()).clamp(-28, 28);
        if let Some(unit) = pow10(coarse) {
            if let Some(half) = unit.checked_mul(Decimal::new(5, 1)) {
                if diff.abs() < half {
                    return Ordering::Equal;
                }
            }
        }
        self.mantissa.cmp(&other.mantissa)
    }

    /// Applies a conversion factor, which is exact by definition: the
    /// mantissa is the exact product and the factor's own written digits
    /// extend the precision additively.
    pub(crate) fn scale_by(&self, factor: &Self) -> Result<Self> {
        if factor.is_exact_one() {
            return Ok(self.clone());
        }
        let mantissa = self
            .mantissa
            .checked_mul(factor.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(Self::new(mantissa, self.precision + factor.precision))
    }

    /// Inverse of [`Exponential::scale_by`], for negative unit exponents.
    pub(crate) fn scale_div(&self, factor: &Self) -> Result<Self> {
        if factor.is_exact_one() {
            return Ok(self.clone());
        }
        if factor.mantissa.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mantissa = self
            .mantissa
            .checked_div(factor.mantissa)
            .ok_or(Error::Overflow)?;
        Ok(Self::new(mantissa, self.precision + factor.precision))
    }

    /// Applies `factor` raised to `exp`, one step per power.
    pub(crate) fn scale_pow(&self, factor: &Self, exp: i32) -> Result<Self> {
        if factor.is_exact_one() || exp == 0 {
            return Ok(self.clone());
        }
        if exp.unsigned_abs() > 64 {
            return Err(Error::Overflow);
        }
        let mut out = self.clone();
        for _ in 0..exp.unsigned_abs() {
            out = if exp > 0 {
                out.scale_by(factor)?
            } else {
                out.scale_div(factor)?
            };
        }
        Ok(out)
    }

    /// Renders exactly `precision` significant digits, trailing zeros
    /// included, in plain fixed-point notation. When the rounded value has
    /// more integer digits than the precision, the integer digits print in
    /// full, so `1000` at precision 1 is still `1000`.
    ///
    /// ```rust
    /// use fhir_metrics::Exponential;
    /// use rust_decimal::Decimal;
    ///
    /// let e = Exponential::new(Decimal::new(254, 4), 5);
    /// assert_eq!(e.format(), "0.025400");
    /// ```
    pub fn format(&self) -> String {
        let p = self.precision.max(1);
        if self.mantissa.is_zero() {
            let frac = (p - 1).min(MAX_SCALE);
            if frac == 0 {
                return "0".to_string();
            }
            let mut zero = Decimal::ZERO;
            zero.rescale(frac);
            return zero.to_string();
        }
        let rounded = self
            .mantissa
            .round_sf_with_strategy(p, RoundingStrategy::MidpointAwayFromZero)
            .unwrap_or(self.mantissa);
        let lsd = msd_exponent(&rounded) - (p as i32 - 1);
        let mut out = rounded.normalize();
        if lsd >= 0 {
            out.rescale(0);
        } else {
            out.rescale(((-lsd) as u32).min(MAX_SCALE));
        }
        out.to_string()
    }

    /// Decimal position of the least significant tracked digit.
    fn lsd_exponent(&self) -> i32 {
        let msd = if self.mantissa.is_zero() {
            0
        } else {
            msd_exponent(&self.mantissa)
        };
        msd - (self.precision.max(1) as i32 - 1)
    }

    fn join_precision(&self, other: &Self) -> u32 {
        self.precision.max(1) + other.precision.max(1) - 1
    }

    fn aligned(&self, other: &Self, mantissa: Decimal) -> Self {
        let lsd = self.lsd_exponent().max(other.lsd_exponent());
        let precision = if mantissa.is_zero() {
            (1 - lsd).max(1) as u32
        } else {
            (msd_exponent(&mantissa) - lsd + 1).max(1) as u32
        };
        Self::new(mantissa, precision)
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Exponential {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Decimal position of the most significant digit, e.g. `-2` for `0.0254`
/// and `3` for `1000`. The value must be non-zero.
fn msd_exponent(d: &Decimal) -> i32 {
    let a = d.abs().normalize();
    if a >= Decimal::ONE {
        a.trunc().to_string().len() as i32 - 1
    } else {
        let s = a.to_string();
        let frac = match s.find('.') {
            Some(i) => &s[i + 1..],
            None => "",
        };
        let zeros = frac.chars().take_while(|c| *c == '0').count() as i32;
        -(zeros + 1)
    }
}

fn pow10(n: i32) -> Option<Decimal> {
    match n {
        0..=28 => Some(Decimal::from_i128_with_scale(10i128.pow(n as u32), 0)),
        -28..=-1 => Some(Decimal::from_i128_with_scale(1, (-n) as u32)),
        _ => None,
    }
}
