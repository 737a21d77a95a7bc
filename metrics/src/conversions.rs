//! Canonicalization and catalog-aware quantity arithmetic.
//!
//! Every operation first reduces its operands to canonical form: base axes
//! only, all derived-unit scale factors folded into the value, offsets
//! applied after scaling. Multiplication and division are always defined;
//! addition, subtraction, and comparison require identical canonical
//! metrics.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::quantity::Quantity;
use std::cmp::Ordering;

/// The conversion engine, borrowing one read-only [`Catalog`].
pub struct Conversions<'a> {
    catalog: &'a Catalog,
}

impl<'a> Conversions<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Reduces a quantity to base axes, folding every scale factor in the
    /// definition chain into the value. Idempotent: a canonical quantity
    /// comes back unchanged.
    ///
    /// ```rust
    /// use fhir_metrics::{Catalog, Conversions, Exponential, Quantity};
    ///
    /// let catalog = Catalog::shared();
    /// let conversions = Conversions::new(catalog);
    /// let q = Quantity::new(
    ///     Exponential::parse("1").unwrap(),
    ///     catalog.metric("km").unwrap(),
    /// );
    /// let canonical = conversions.canonical(&q).unwrap();
    /// assert_eq!(canonical.to_string(), "1000 m");
    /// ```
    pub fn canonical(&self, quantity: &Quantity) -> Result<Quantity> {
        let axes = quantity.metric().axes();
        // an offset scale only makes sense for a lone first-power axis
        let lone = axes.len() == 1 && axes[0].exponent == 1;
        let mut metric = Metric::dimensionless();
        let mut value = quantity.value().clone();
        for axis in &axes {
            let res = self.catalog.resolve(&axis.symbol)?;
            if let Some(offset) = &res.offset {
                if !lone {
                    return Err(Error::UnresolvableUnit(axis.symbol.clone()));
                }
                value = value.scale_by(&res.scale)?.add(offset)?;
            } else {
                value = value.scale_pow(&res.scale, axis.exponent)?;
            }
            metric = metric.multiply(&res.metric.powi(axis.exponent));
        }
        Ok(Quantity::new(value, metric))
    }

    /// Canonicalizes both operands and multiplies values and metrics.
    /// Always dimensionally defined.
    pub fn multiply(&self, q1: &Quantity, q2: &Quantity) -> Result<Quantity> {
        let a = self.canonical(q1)?;
        let b = self.canonical(q2)?;
        Ok(Quantity::new(
            a.value().multiply(b.value())?,
            a.metric().multiply(b.metric()),
        ))
    }

    /// Canonicalizes both operands and divides values and metrics. Fails
    /// when the divisor's canonical value is zero.
    pub fn divide(&self, q1: &Quantity, q2: &Quantity) -> Result<Quantity> {
        let a = self.canonical(q1)?;
        let b = self.canonical(q2)?;
        if b.value().is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Quantity::new(
            a.value().divide(b.value())?,
            a.metric().divide(b.metric()),
        ))
    }

    /// Adds two quantities of the same dimension, in canonical form.
    pub fn add(&self, q1: &Quantity, q2: &Quantity) -> Result<Quantity> {
        let (a, b) = self.aligned_pair(q1, q2)?;
        Ok(Quantity::new(a.value().add(b.value())?, a.metric().clone()))
    }

    /// Subtracts two quantities of the same dimension, in canonical form.
    pub fn subtract(&self, q1: &Quantity, q2: &Quantity) -> Result<Quantity> {
        let (a, b) = self.aligned_pair(q1, q2)?;
        Ok(Quantity::new(
            a.value().subtract(b.value())?,
            a.metric().clone(),
        ))
    }

    /// Orders two quantities of the same dimension, equal within half a
    /// unit of the coarser operand's least significant digit.
    pub fn compare(&self, q1: &Quantity, q2: &Quantity) -> Result<Ordering> {
        let (a, b) = self.aligned_pair(q1, q2)?;
        Ok(a.value().compare(b.value()))
    }

    /// Re-expresses a quantity in the target unit: canonical value divided
    /// by the target's per-unit scale, carrying the written target metric.
    ///
    /// ```rust
    /// use fhir_metrics::{Catalog, Conversions, Exponential, Quantity};
    ///
    /// let catalog = Catalog::shared();
    /// let conversions = Conversions::new(catalog);
    /// let q = Quantity::new(
    ///     Exponential::parse("2500").unwrap(),
    ///     catalog.metric("m").unwrap(),
    /// );
    /// let km = conversions.convert_to(&q, "km").unwrap();
    /// assert_eq!(km.to_string(), "2.500 km");
    /// ```
    pub fn convert_to(&self, quantity: &Quantity, target: &str) -> Result<Quantity> {
        let res = self.catalog.resolve(target)?;
        let written = self.catalog.metric(target)?;
        let canonical = self.canonical(quantity)?;
        if canonical.metric() != &res.metric {
            return Err(Self::dimension_mismatch(canonical.metric(), &res.metric));
        }
        let mut value = canonical.value().clone();
        if let Some(offset) = &res.offset {
            value = value.subtract(offset)?;
        }
        if !res.scale.is_exact_one() {
            value = value.divide(&res.scale)?;
        }
        Ok(Quantity::new(value, written))
    }

    fn aligned_pair(&self, q1: &Quantity, q2: &Quantity) -> Result<(Quantity, Quantity)> {
        let a = self.canonical(q1)?;
        let b = self.canonical(q2)?;
        if a.metric() != b.metric() {
            return Err(Self::dimension_mismatch(a.metric(), b.metric()));
        }
        Ok((a, b))
    }

    fn dimension_mismatch(left: &Metric, right: &Metric) -> Error {
        Error::IncompatibleDimensions {
            left: left.canonical_string(),
            right: right.canonical_string(),
        }
    }
}
