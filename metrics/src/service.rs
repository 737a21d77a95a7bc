//! Tuple-facing adapter over the conversion engine.
//!
//! Callers hand in (numeric literal, unit symbol, unit system) triples;
//! the service resolves symbols through the catalog, runs the requested
//! operation, and hands back a triple with the value formatted to its
//! tracked precision and the unit in canonical form. Each operation
//! returns a typed error on failure; collapsing that into a boolean or an
//! option is the caller's business.

use crate::catalog::Catalog;
use crate::conversions::Conversions;
use crate::error::{Error, Result};
use crate::exponential::Exponential;
use crate::metric::Metric;
use crate::quantity::Quantity;
use std::cmp::Ordering;

/// The unit system this engine understands. Quantities naming any other
/// system are rejected with [`Error::UnsupportedSystem`].
pub const UCUM_SYSTEM: &str = "http://unitsofmeasure.org";

/// Wire representation of a quantity. `unit: None` means dimensionless.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantityTuple {
    pub value: String,
    pub unit: Option<String>,
    pub system: String,
}

impl QuantityTuple {
    pub fn new(value: impl Into<String>, unit: Option<String>, system: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit,
            system: system.into(),
        }
    }

    /// A UCUM quantity; an empty unit string means dimensionless.
    pub fn ucum(value: &str, unit: &str) -> Self {
        let unit = if unit.is_empty() {
            None
        } else {
            Some(unit.to_string())
        };
        Self::new(value, unit, UCUM_SYSTEM)
    }
}

/// Quantity operations over string triples.
///
/// # Examples
///
/// ```rust
/// use fhir_metrics::{MetricService, QuantityTuple};
///
/// let service = MetricService::new();
/// let canonical = service
///     .canonicalize(&QuantityTuple::ucum("1", "km"))
///     .unwrap();
/// assert_eq!(canonical.value, "1000");
/// assert_eq!(canonical.unit.as_deref(), Some("m"));
/// ```
pub struct MetricService<'a> {
    catalog: &'a Catalog,
}

impl MetricService<'static> {
    /// A service over the shared UCUM catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::shared(),
        }
    }
}

impl Default for MetricService<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MetricService<'a> {
    /// A service over an explicit catalog, e.g. a minimal table in tests.
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn canonicalize(&self, quantity: &QuantityTuple) -> Result<QuantityTuple> {
        let q = self.to_quantity(quantity)?;
        Ok(Self::to_tuple(&self.conversions().canonical(&q)?))
    }

    pub fn multiply(&self, q1: &QuantityTuple, q2: &QuantityTuple) -> Result<QuantityTuple> {
        let (a, b) = (self.to_quantity(q1)?, self.to_quantity(q2)?);
        Ok(Self::to_tuple(&self.conversions().multiply(&a, &b)?))
    }

    pub fn divide(&self, q1: &QuantityTuple, q2: &QuantityTuple) -> Result<QuantityTuple> {
        let (a, b) = (self.to_quantity(q1)?, self.to_quantity(q2)?);
        Ok(Self::to_tuple(&self.conversions().divide(&a, &b)?))
    }

    pub fn add(&self, q1: &QuantityTuple, q2: &QuantityTuple) -> Result<QuantityTuple> {
        let (a, b) = (self.to_quantity(q1)?, self.to_quantity(q2)?);
        Ok(Self::to_tuple(&self.conversions().add(&a, &b)?))
    }

    pub fn subtract(&self, q1: &QuantityTuple, q2: &QuantityTuple) -> Result<QuantityTuple> {
        let (a, b) = (self.to_quantity(q1)?, self.to_quantity(q2)?);
        Ok(Self::to_tuple(&self.conversions().subtract(&a, &b)?))
    }

    pub fn compare(&self, q1: &QuantityTuple, q2: &QuantityTuple) -> Result<Ordering> {
        let (a, b) = (self.to_quantity(q1)?, self.to_quantity(q2)?);
        self.conversions().compare(&a, &b)
    }

    pub fn convert_to(&self, quantity: &QuantityTuple, target_unit: &str) -> Result<QuantityTuple> {
        let q = self.to_quantity(quantity)?;
        Ok(Self::to_tuple(
            &self.conversions().convert_to(&q, target_unit)?,
        ))
    }

    fn conversions(&self) -> Conversions<'_> {
        Conversions::new(self.catalog)
    }

    fn to_quantity(&self, tuple: &QuantityTuple) -> Result<Quantity> {
        if tuple.system != UCUM_SYSTEM {
            return Err(Error::UnsupportedSystem(tuple.system.clone()));
        }
        let metric = match tuple.unit.as_deref() {
            None | Some("") => Metric::dimensionless(),
            Some(symbol) => self.catalog.metric(symbol)?,
        };
        Ok(Quantity::new(Exponential::parse(&tuple.value)?, metric))
    }

    fn to_tuple(quantity: &Quantity) -> QuantityTuple {
        let unit = quantity.metric().canonical_string();
        QuantityTuple {
            value: quantity.value().format(),
            unit: if unit.is_empty() { None } else { Some(unit) },
            system: UCUM_SYSTEM.to_string(),
        }
    }
}
