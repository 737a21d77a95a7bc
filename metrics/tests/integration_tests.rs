//! Integration-level smoke and property tests for the `fhir-metrics`
//! engine.

use fhir_metrics::{Catalog, Conversions, Exponential, MetricService, Quantity, QuantityTuple};
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn smoke_test_canonicalize() {
    let service = MetricService::new();
    let canonical = service
        .canonicalize(&QuantityTuple::ucum("1", "km"))
        .unwrap();
    assert_eq!(canonical.value, "1000");
    assert_eq!(canonical.unit.as_deref(), Some("m"));
}

#[test]
fn smoke_test_inch_precision() {
    let service = MetricService::new();
    let canonical = service
        .canonicalize(&QuantityTuple::ucum("1", "[in_i]"))
        .unwrap();
    assert_eq!(canonical.value, "0.025400");
    assert_eq!(canonical.unit.as_deref(), Some("m"));
}

#[test]
fn smoke_test_force() {
    let service = MetricService::new();
    let canonical = service
        .canonicalize(&QuantityTuple::ucum("9.81", "N"))
        .unwrap();
    assert_eq!(canonical.value, "9810");
    assert_eq!(canonical.unit.as_deref(), Some("g.m.s-2"));
}

#[test]
fn smoke_test_conversion() {
    let service = MetricService::new();
    let miles = service
        .convert_to(&QuantityTuple::ucum("10000", "m"), "[mi_i]")
        .unwrap();
    assert_eq!(miles.unit.as_deref(), Some("[mi_i]"));
    assert!(miles.value.starts_with("6.21"));
}

#[test]
fn smoke_test_custom_catalog() {
    let mut catalog = Catalog::new();
    catalog.add_base("bit");
    catalog.add_prefix("k", "1e3").unwrap();
    catalog.add_derived("By", "8", &[("bit", 1)], None).unwrap();

    let service = MetricService::with_catalog(&catalog);
    let canonical = service
        .canonicalize(&QuantityTuple::ucum("2", "kBy"))
        .unwrap();
    assert_eq!(canonical.value, "16000");
    assert_eq!(canonical.unit.as_deref(), Some("bit"));
}

fn unit_symbols() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "m", "km", "cm", "mm", "s", "ms", "g", "kg", "[in_i]", "[ft_i]", "Hz", "N", "J", "W", "m2",
        "m3", "s-1", "%", "L", "min", "h", "bar",
    ])
}

fn quantity(value: &str, unit: &str) -> Quantity {
    let catalog = Catalog::shared();
    Quantity::new(
        Exponential::parse(value).unwrap(),
        catalog.metric(unit).unwrap(),
    )
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent(
        value in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        unit in unit_symbols(),
    ) {
        let conversions = Conversions::new(Catalog::shared());
        let once = conversions.canonical(&quantity(&value, unit)).unwrap();
        let twice = conversions.canonical(&once).unwrap();
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn canonicalization_commutes_with_multiplication(
        v1 in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        v2 in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        u1 in unit_symbols(),
        u2 in unit_symbols(),
    ) {
        let conversions = Conversions::new(Catalog::shared());
        let q1 = quantity(&v1, u1);
        let q2 = quantity(&v2, u2);
        let direct = conversions.multiply(&q1, &q2).unwrap();
        let via_canonical = conversions
            .multiply(
                &conversions.canonical(&q1).unwrap(),
                &conversions.canonical(&q2).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(&direct, &via_canonical);
        prop_assert_eq!(&conversions.canonical(&direct).unwrap(), &direct);
    }

    #[test]
    fn canonicalization_commutes_with_division(
        v1 in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        v2 in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        u1 in unit_symbols(),
        u2 in unit_symbols(),
    ) {
        let conversions = Conversions::new(Catalog::shared());
        let q1 = quantity(&v1, u1);
        let q2 = quantity(&v2, u2);
        let direct = conversions.divide(&q1, &q2).unwrap();
        let via_canonical = conversions
            .divide(
                &conversions.canonical(&q1).unwrap(),
                &conversions.canonical(&q2).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(&direct, &via_canonical);
    }

    #[test]
    fn compare_is_reflexively_equal(
        value in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        unit in unit_symbols(),
    ) {
        let conversions = Conversions::new(Catalog::shared());
        let q = quantity(&value, unit);
        prop_assert_eq!(conversions.compare(&q, &q).unwrap(), Ordering::Equal);
    }

    #[test]
    fn formatted_output_reparses_to_the_same_magnitude(
        value in "[1-9][0-9]{0,2}(\\.[0-9]{1,4})?",
        unit in unit_symbols(),
    ) {
        let conversions = Conversions::new(Catalog::shared());
        let canonical = conversions.canonical(&quantity(&value, unit)).unwrap();
        let reparsed = Exponential::parse(&canonical.value().format()).unwrap();
        prop_assert_eq!(reparsed.compare(canonical.value()), Ordering::Equal);
    }
}
