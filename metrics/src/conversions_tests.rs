#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::conversions::Conversions;
    use crate::error::Error;
    use crate::exponential::Exponential;
    use crate::metric::Metric;
    use crate::quantity::Quantity;
    use rust_decimal_macros::dec;
    use std::cmp::Ordering;

    fn quantity(value: &str, unit: &str) -> Quantity {
        let catalog = Catalog::shared();
        let metric = if unit.is_empty() {
            Metric::dimensionless()
        } else {
            catalog.metric(unit).unwrap()
        };
        Quantity::new(Exponential::parse(value).unwrap(), metric)
    }

    fn conversions() -> Conversions<'static> {
        Conversions::new(Catalog::shared())
    }

    #[test]
    fn canonical_reduces_to_base_units() {
        let conv = conversions();
        assert_eq!(
            conv.canonical(&quantity("1", "m")).unwrap().to_string(),
            "1 m"
        );
        assert_eq!(
            conv.canonical(&quantity("1", "km")).unwrap().to_string(),
            "1000 m"
        );
        assert_eq!(
            conv.canonical(&quantity("-80", "cm")).unwrap().to_string(),
            "-0.800 m"
        );
    }

    #[test]
    fn canonical_carries_factor_digits_into_precision() {
        let conv = conversions();
        let inch = conv.canonical(&quantity("1", "[in_i]")).unwrap();
        assert_eq!(inch.value().mantissa(), dec!(0.0254));
        assert_eq!(inch.value().precision(), 5);
        assert_eq!(inch.to_string(), "0.025400 m");
    }

    #[test]
    fn canonical_is_idempotent() {
        let conv = conversions();
        for (value, unit) in [("1", "km"), ("1", "[in_i]"), ("-80", "cm"), ("3.5", "N")] {
            let once = conv.canonical(&quantity(value, unit)).unwrap();
            let twice = conv.canonical(&once).unwrap();
            assert_eq!(once, twice, "{value} {unit}");
        }
    }

    #[test]
    fn canonical_fails_on_unknown_axes() {
        let conv = conversions();
        let bogus = Quantity::new(Exponential::one(), Metric::base("blub"));
        assert!(matches!(
            conv.canonical(&bogus),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    fn multiply_combines_values_and_dimensions() {
        let conv = conversions();
        let area = conv
            .multiply(&quantity("1", "[in_i]"), &quantity("1", "m"))
            .unwrap();
        assert_eq!(area.to_string(), "0.025400 m2");

        let big = conv
            .multiply(&quantity("1000", "m"), &quantity("1", "km"))
            .unwrap();
        assert_eq!(big.to_string(), "1000000 m2");
    }

    #[test]
    fn divide_cancels_dimensions() {
        let conv = conversions();
        let length = conv
            .divide(&quantity("1", "m2"), &quantity("1", "m"))
            .unwrap();
        assert_eq!(length.to_string(), "1 m");

        let ratio = conv
            .divide(&quantity("1", "[in_i]"), &quantity("1", "m"))
            .unwrap();
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio.to_string(), "0.025400");

        let scalar = conv.divide(&quantity("6", "m"), &quantity("2", "m")).unwrap();
        assert_eq!(scalar.to_string(), "3");
    }

    #[test]
    fn divide_by_canonical_zero_fails() {
        let conv = conversions();
        assert_eq!(
            conv.divide(&quantity("1", "m"), &quantity("0", "m")),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn add_and_subtract_require_matching_dimensions() {
        let conv = conversions();
        let sum = conv.add(&quantity("1", "m"), &quantity("1", "km")).unwrap();
        assert_eq!(sum.to_string(), "1000 m");

        let diff = conv
            .subtract(&quantity("5", "m"), &quantity("2", "m"))
            .unwrap();
        assert_eq!(diff.to_string(), "3 m");

        assert!(matches!(
            conv.add(&quantity("1", "m"), &quantity("1", "s")),
            Err(Error::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn compare_orders_across_units() {
        let conv = conversions();
        assert_eq!(
            conv.compare(&quantity("1", "m"), &quantity("1", "km")).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            conv.compare(&quantity("1", "m"), &quantity("10", "[in_i]"))
                .unwrap(),
            Ordering::Greater
        );
        let q = quantity("2.5", "[ft_i]");
        assert_eq!(conv.compare(&q, &q).unwrap(), Ordering::Equal);
        assert!(matches!(
            conv.compare(&quantity("1", "m"), &quantity("1", "g")),
            Err(Error::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn celsius_applies_the_offset_after_scaling() {
        let conv = conversions();
        let body = conv.canonical(&quantity("37", "Cel")).unwrap();
        assert_eq!(body.to_string(), "310 K");

        let back = conv
            .convert_to(&quantity("310.15", "K"), "Cel")
            .unwrap();
        assert_eq!(back.to_string(), "37.00 Cel");
    }

    #[test]
    fn convert_to_attaches_the_written_target_metric() {
        let conv = conversions();
        let km = conv.convert_to(&quantity("2500", "m"), "km").unwrap();
        assert_eq!(km.to_string(), "2.500 km");

        let feet = conv.convert_to(&quantity("1", "m"), "[ft_i]").unwrap();
        assert_eq!(feet.to_string(), "3.28084 [ft_i]");
    }

    #[test]
    fn convert_to_rejects_mismatches() {
        let conv = conversions();
        assert!(matches!(
            conv.convert_to(&quantity("1", "m"), "s"),
            Err(Error::IncompatibleDimensions { .. })
        ));
        assert!(matches!(
            conv.convert_to(&quantity("1", "m"), "blub"),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    fn multiplication_commutes_with_canonicalization() {
        let conv = conversions();
        let q1 = quantity("2.0", "km");
        let q2 = quantity("4.00", "[in_i]");
        let direct = conv.multiply(&q1, &q2).unwrap();
        let via_canonical = conv
            .multiply(&conv.canonical(&q1).unwrap(), &conv.canonical(&q2).unwrap())
            .unwrap();
        assert_eq!(direct, via_canonical);
        assert_eq!(conv.canonical(&direct).unwrap(), direct);
    }
}
