//! Dimension vectors.
//!
//! A [`Metric`] is the dimensional content of a unit: a set of axes, each a
//! unit symbol raised to a non-zero integer exponent. Axes are keyed by
//! symbol, so a symbol appears at most once, and iterate in a fixed
//! canonical order, so two metrics with the same content always render the
//! same string. The empty metric is dimensionless; it is a valid value, not
//! an error state.
//!
//! Axis symbols are whatever the caller wrote (`km`, `[in_i]`). A metric
//! produced by canonicalization contains base-unit symbols only.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Div, Mul};

/// One dimension component: a unit symbol raised to a non-zero exponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub symbol: String,
    pub exponent: i32,
}

/// An ordered set of [`Axis`], keyed by unit symbol.
///
/// # Examples
///
/// ```rust
/// use fhir_metrics::Metric;
///
/// let area = Metric::from_axis("m", 2);
/// let length = Metric::base("m");
/// assert_eq!(area.divide(&length), length);
/// assert_eq!(area.to_string(), "m2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metric {
    axes: BTreeMap<String, i32>,
}

impl Metric {
    /// The dimensionless metric.
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single symbol at exponent 1.
    pub fn base(symbol: &str) -> Self {
        Self::from_axis(symbol, 1)
    }

    /// A single symbol at an arbitrary exponent. Exponent 0 yields the
    /// dimensionless metric.
    pub fn from_axis(symbol: &str, exponent: i32) -> Self {
        let mut metric = Self::default();
        metric.insert(symbol, exponent);
        metric
    }

    pub fn is_dimensionless(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axes in canonical order.
    pub fn axes(&self) -> Vec<Axis> {
        self.axes
            .iter()
            .map(|(symbol, exponent)| Axis {
                symbol: symbol.clone(),
                exponent: *exponent,
            })
            .collect()
    }

    /// Unions the axis sets, summing exponents of shared symbols.
    pub fn multiply(&self, other: &Self) -> Self {
        self.compose(other, 1)
    }

    /// As [`Metric::multiply`], subtracting the right-hand exponents.
    pub fn divide(&self, other: &Self) -> Self {
        self.compose(other, -1)
    }

    /// Raises every axis to `n`. `n == 0` yields the dimensionless metric.
    pub fn powi(&self, n: i32) -> Self {
        let mut out = Self::default();
        for (symbol, exponent) in &self.axes {
            out.insert(symbol, exponent * n);
        }
        out
    }

    /// `symbol`, or `symbol` immediately followed by its exponent when the
    /// exponent is not 1, joined with `.`: `m2`, `g.m.s-2`. Empty for the
    /// dimensionless metric.
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        for (symbol, exponent) in &self.axes {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(symbol);
            if *exponent != 1 {
                out.push_str(&exponent.to_string());
            }
        }
        out
    }

    fn compose(&self, other: &Self, sign: i32) -> Self {
        let mut out = self.clone();
        for (symbol, exponent) in &other.axes {
            out.insert(symbol, exponent * sign);
        }
        out
    }

    fn insert(&mut self, symbol: &str, exponent: i32) {
        let entry = self.axes.entry(symbol.to_string()).or_insert(0);
        *entry += exponent;
        if *entry == 0 {
            self.axes.remove(symbol);
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl<'a, 'b> Mul<&'b Metric> for &'a Metric {
    type Output = Metric;

    fn mul(self, rhs: &'b Metric) -> Metric {
        self.multiply(rhs)
    }
}

impl<'a, 'b> Div<&'b Metric> for &'a Metric {
    type Output = Metric;

    fn div(self, rhs: &'b Metric) -> Metric {
        self.divide(rhs)
    }
}
