//! The unit catalog: an immutable lookup table from unit symbols to base
//! axes, scale factors, and offsets.
//!
//! The catalog is built once (either [`Catalog::ucum`] from the static
//! table, or entry by entry for a minimal test table) and only read
//! afterwards, so concurrent lookups need no locking. Definition chains
//! may reference other derived units; resolution follows the chain under a
//! fixed hop bound and reports a catalog data fault when the bound is hit.

mod ucum;

use crate::error::{Error, Result};
use crate::exponential::Exponential;
use crate::metric::Metric;
use log::debug;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Definition chains deeper than this never terminate in practice; the
/// longest real UCUM chain is four hops.
const MAX_CHAIN_DEPTH: usize = 16;

#[derive(Clone, Debug)]
enum UnitDef {
    Base,
    Derived {
        scale: Exponential,
        components: Vec<(String, i32)>,
        offset: Option<Exponential>,
    },
}

/// Outcome of resolving a symbol down to base axes: the base-axis metric,
/// the accumulated scale into base units, and the additive offset for
/// Celsius-style scales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub metric: Metric,
    pub scale: Exponential,
    pub offset: Option<Exponential>,
}

/// Symbol lookup table. See the module docs for the lifecycle.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    units: HashMap<String, UnitDef>,
    prefixes: Vec<(String, Exponential)>,
}

static SHARED: Lazy<Catalog> = Lazy::new(Catalog::ucum);

impl Catalog {
    /// An empty catalog. Populate it with [`Catalog::add_base`],
    /// [`Catalog::add_prefix`], and [`Catalog::add_derived`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide UCUM catalog, built on first use.
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    /// Builds the catalog from the static UCUM definition table.
    pub fn ucum() -> Self {
        let mut catalog = Self::new();
        for symbol in ucum::BASE_UNITS {
            catalog.add_base(symbol);
        }
        for (symbol, factor) in ucum::PREFIXES {
            catalog
                .add_prefix(symbol, factor)
                .expect("prefix table literal");
        }
        for (symbol, factor, components, offset) in ucum::DERIVED_UNITS {
            catalog
                .add_derived(symbol, factor, components, *offset)
                .expect("unit table entry");
        }
        debug!(
            "ucum catalog loaded: {} units, {} prefixes",
            catalog.units.len(),
            catalog.prefixes.len()
        );
        catalog
    }

    /// Registers a base unit. Base units are the axes every other unit
    /// reduces to.
    pub fn add_base(&mut self, symbol: &str) {
        self.units.insert(symbol.to_string(), UnitDef::Base);
    }

    /// Registers a metric prefix with its power-of-ten factor literal.
    pub fn add_prefix(&mut self, symbol: &str, factor: &str) -> Result<()> {
        let factor = Exponential::parse(factor)?;
        self.prefixes.push((symbol.to_string(), factor));
        // longest prefix must win the match in resolve()
        self.prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Ok(())
    }

    /// Registers a derived unit: a factor literal, a composition over other
    /// catalog symbols, and an optional additive offset. A factor written
    /// as `1` contributes no scaling and no digits.
    pub fn add_derived(
        &mut self,
        symbol: &str,
        factor: &str,
        components: &[(&str, i32)],
        offset: Option<&str>,
    ) -> Result<()> {
        let parsed = Exponential::parse(factor)?;
        let scale = if parsed.mantissa() == Decimal::ONE {
            Exponential::exact_one()
        } else {
            parsed
        };
        let offset = offset.map(Exponential::parse).transpose()?;
        self.units.insert(
            symbol.to_string(),
            UnitDef::Derived {
                scale,
                components: components
                    .iter()
                    .map(|(s, e)| (s.to_string(), *e))
                    .collect(),
                offset,
            },
        );
        Ok(())
    }

    /// Resolves a symbol to base axes. Tries a literal entry first, then a
    /// trailing integer exponent (`m2`, `s-1`), then a metric prefix on a
    /// literal entry. Prefixes never stack and never attach to offset
    /// units.
    pub fn resolve(&self, symbol: &str) -> Result<Resolution> {
        self.resolve_at(symbol, 0)
    }

    /// The written (non-canonical) metric for a symbol: `m2` becomes the
    /// axis `m` squared, a prefixed or bracketed symbol stays whole.
    /// Validates resolvability.
    pub fn metric(&self, symbol: &str) -> Result<Metric> {
        self.resolve(symbol)?;
        if self.units.contains_key(symbol) {
            return Ok(Metric::base(symbol));
        }
        if let Some((head, exponent)) = split_exponent(symbol) {
            if self.resolve(head).is_ok() {
                return Ok(Metric::from_axis(head, exponent));
            }
        }
        Ok(Metric::base(symbol))
    }

    fn resolve_at(&self, symbol: &str, depth: usize) -> Result<Resolution> {
        if depth > MAX_CHAIN_DEPTH {
            return Err(Error::UnresolvableUnit(symbol.to_string()));
        }
        if let Some(def) = self.units.get(symbol) {
            return self.expand(symbol, def, depth);
        }
        if let Some((head, exponent)) = split_exponent(symbol) {
            let base = self.resolve_at(head, depth + 1)?;
            if base.offset.is_some() && exponent != 1 {
                return Err(Error::UnresolvableUnit(symbol.to_string()));
            }
            return Ok(Resolution {
                metric: base.metric.powi(exponent),
                scale: Exponential::exact_one().scale_pow(&base.scale, exponent)?,
                offset: base.offset,
            });
        }
        for (prefix, factor) in &self.prefixes {
            let Some(rest) = symbol.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            if let Some(def) = self.units.get(rest) {
                let res = self.expand(rest, def, depth)?;
                if res.offset.is_some() {
                    continue;
                }
                return Ok(Resolution {
                    scale: res.scale.scale_by(factor)?,
                    ..res
                });
            }
        }
        debug!("symbol {symbol:?} did not resolve");
        Err(Error::UnknownUnit(symbol.to_string()))
    }

    fn expand(&self, symbol: &str, def: &UnitDef, depth: usize) -> Result<Resolution> {
        match def {
            UnitDef::Base => Ok(Resolution {
                metric: Metric::base(symbol),
                scale: Exponential::exact_one(),
                offset: None,
            }),
            UnitDef::Derived {
                scale,
                components,
                offset,
            } => {
                let mut metric = Metric::dimensionless();
                let mut acc = scale.clone();
                for (component, exponent) in components {
                    let part = self.resolve_at(component, depth + 1)?;
                    if part.offset.is_some() {
                        // offset units cannot appear inside a composition
                        return Err(Error::UnresolvableUnit(symbol.to_string()));
                    }
                    metric = metric.multiply(&part.metric.powi(*exponent));
                    acc = acc.scale_pow(&part.scale, *exponent)?;
                }
                Ok(Resolution {
                    metric,
                    scale: acc,
                    offset: offset.clone(),
                })
            }
        }
    }
}

/// Splits a trailing signed integer exponent off a symbol: `m2` into
/// `("m", 2)`, `s-1` into `("s", -1)`. Exponent 0 and magnitudes above 9
/// are rejected, as is a bare number.
fn split_exponent(symbol: &str) -> Option<(&str, i32)> {
    let bytes = symbol.as_bytes();
    let mut i = bytes.len();
    while i > 0 && bytes[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i == bytes.len() {
        return None;
    }
    let head_end = if i > 0 && (bytes[i - 1] == b'-' || bytes[i - 1] == b'+') {
        i - 1
    } else {
        i
    };
    if head_end == 0 {
        return None;
    }
    let exponent: i32 = symbol[head_end..].parse().ok()?;
    if exponent == 0 || exponent.abs() > 9 {
        return None;
    }
    Some((&symbol[..head_end], exponent))
}
