//! UCUM quantity algebra: canonical units and precision-tracked decimal
//! arithmetic.
//!
//! A quantity is a decimal value plus a dimension vector. This crate
//! reduces arbitrary unit expressions (`km`, `[in_i]`, `m2`, `N`) to a
//! canonical base-axis form, converts between compatible units, and runs
//! multiplication, division, addition, subtraction, and tolerance-aware
//! comparison across them, carrying the significant digits of the written
//! measurement through every step.
//!
//! # What this crate solves
//!
//! - Symbol resolution against an immutable UCUM catalog: prefixes,
//!   trailing exponents, and definition chains down to base axes.
//! - Exact decimal arithmetic with measurement precision: "1.0" is not
//!   "1", and `1 [in_i]` canonicalizes to `0.025400 m`, five significant
//!   digits carried in from the conversion factors.
//! - A typed error for every failure mode; nothing here panics on bad
//!   input and nothing retries.
//!
//! # What this crate does not try to solve
//!
//! - The full UCUM expression grammar (`kg.m/s2` as a parsed string); a
//!   symbol is a literal catalog entry, optionally prefixed, optionally
//!   exponentiated.
//! - Unit systems other than UCUM, and localized number formatting.
//!
//! # Quick start
//!
//! ```rust
//! use fhir_metrics::{MetricService, QuantityTuple};
//!
//! let service = MetricService::new();
//!
//! let canonical = service
//!     .canonicalize(&QuantityTuple::ucum("-80", "cm"))
//!     .unwrap();
//! assert_eq!(canonical.value, "-0.800");
//! assert_eq!(canonical.unit.as_deref(), Some("m"));
//!
//! let area = service
//!     .multiply(&QuantityTuple::ucum("1", "[in_i]"), &QuantityTuple::ucum("1", "m"))
//!     .unwrap();
//! assert_eq!(area.value, "0.025400");
//! assert_eq!(area.unit.as_deref(), Some("m2"));
//! ```
//!
//! Lower-level access goes through [`Catalog`], [`Conversions`], and the
//! value types [`Exponential`], [`Metric`], and [`Quantity`].
//!
//! # Concurrency
//!
//! All types here are immutable values, and the catalog is built once and
//! only ever read, so everything is safe to share across threads without
//! locking.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod conversions;
pub mod error;
pub mod exponential;
pub mod metric;
pub mod quantity;
pub mod service;

#[cfg(test)]
mod conversions_tests;
#[cfg(test)]
mod metric_tests;

pub use catalog::{Catalog, Resolution};
pub use conversions::Conversions;
pub use error::{Error, Result};
pub use exponential::Exponential;
pub use metric::{Axis, Metric};
pub use quantity::Quantity;
pub use service::{MetricService, QuantityTuple, UCUM_SYSTEM};
