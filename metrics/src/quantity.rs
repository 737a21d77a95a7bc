//! A measured value paired with its dimensions.

use crate::exponential::Exponential;
use crate::metric::Metric;
use std::fmt;

/// An immutable (value, metric) pair. All operations on quantities produce
/// new values; see [`crate::Conversions`] for the catalog-aware arithmetic.
///
/// # Examples
///
/// ```rust
/// use fhir_metrics::{Exponential, Metric, Quantity};
///
/// let q = Quantity::new(Exponential::parse("9.81").unwrap(), Metric::from_axis("m", 1));
/// assert_eq!(q.to_string(), "9.81 m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quantity {
    value: Exponential,
    metric: Metric,
}

impl Quantity {
    pub fn new(value: Exponential, metric: Metric) -> Self {
        Self { value, metric }
    }

    pub fn value(&self) -> &Exponential {
        &self.value
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn is_dimensionless(&self) -> bool {
        self.metric.is_dimensionless()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.metric.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.metric)
        }
    }
}
