//! Static UCUM definition table.
//!
//! Factors are kept as the written literals from the UCUM specification so
//! their significant digits are known to the precision arithmetic. A factor
//! of `1` marks a pure composition with no scaling of its own.

/// Metric prefixes: symbol, power-of-ten factor.
pub(super) const PREFIXES: &[(&str, &str)] = &[
    ("Y", "1e24"),
    ("Z", "1e21"),
    ("E", "1e18"),
    ("P", "1e15"),
    ("T", "1e12"),
    ("G", "1e9"),
    ("M", "1e6"),
    ("k", "1e3"),
    ("h", "1e2"),
    ("da", "1e1"),
    ("d", "1e-1"),
    ("c", "1e-2"),
    ("m", "1e-3"),
    ("u", "1e-6"),
    ("n", "1e-9"),
    ("p", "1e-12"),
    ("f", "1e-15"),
    ("a", "1e-18"),
    ("z", "1e-21"),
    ("y", "1e-24"),
];

/// The seven UCUM base units: meter, second, gram, radian, kelvin,
/// coulomb, candela.
pub(super) const BASE_UNITS: &[&str] = &["m", "s", "g", "rad", "K", "C", "cd"];

/// Derived units: symbol, factor, composition over other catalog symbols,
/// optional additive offset.
#[allow(clippy::type_complexity)]
pub(super) const DERIVED_UNITS: &[(&str, &str, &[(&str, i32)], Option<&str>)] = &[
    // SI named units
    ("sr", "1", &[("rad", 2)], None),    // steradian
    ("Hz", "1", &[("s", -1)], None),     // hertz
    ("N", "1", &[("kg", 1), ("m", 1), ("s", -2)], None), // newton
    ("Pa", "1", &[("N", 1), ("m", -2)], None), // pascal
    ("J", "1", &[("N", 1), ("m", 1)], None), // joule
    ("W", "1", &[("J", 1), ("s", -1)], None), // watt
    ("A", "1", &[("C", 1), ("s", -1)], None), // ampere
    ("V", "1", &[("J", 1), ("C", -1)], None), // volt
    ("F", "1", &[("C", 1), ("V", -1)], None), // farad
    ("Ohm", "1", &[("V", 1), ("A", -1)], None), // ohm
    ("L", "1e-3", &[("m", 3)], None),    // liter
    ("t", "1e6", &[("g", 1)], None),     // tonne
    ("bar", "1e5", &[("Pa", 1)], None),
    // customary time
    ("min", "60", &[("s", 1)], None),
    ("h", "60", &[("min", 1)], None),
    ("d", "24", &[("h", 1)], None),
    ("wk", "7", &[("d", 1)], None),
    // dimensionless
    ("%", "1e-2", &[], None),            // percent
    ("mol", "6.0221367e23", &[], None),  // Avogadro count per UCUM
    // angle and astronomy
    ("deg", "1.745329252e-2", &[("rad", 1)], None), // degree of arc
    ("AU", "1.49597870691e11", &[("m", 1)], None),  // astronomical unit
    // international customary lengths
    ("[in_i]", "2.54", &[("cm", 1)], None),
    ("[ft_i]", "12", &[("[in_i]", 1)], None),
    ("[yd_i]", "3", &[("[ft_i]", 1)], None),
    ("[mi_i]", "5280", &[("[ft_i]", 1)], None),
    // avoirdupois masses
    ("[lb_av]", "453.59237", &[("g", 1)], None),
    ("[oz_av]", "6.25e-2", &[("[lb_av]", 1)], None),
    // non-ratio temperature
    ("Cel", "1", &[("K", 1)], Some("273.15")), // degree Celsius
];
