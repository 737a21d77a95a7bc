#[cfg(test)]
mod tests {
    use crate::metric::Metric;

    fn force() -> Metric {
        Metric::base("g")
            .multiply(&Metric::base("m"))
            .multiply(&Metric::from_axis("s", -2))
    }

    #[test]
    fn multiply_unions_axes_and_sums_exponents() {
        let area = Metric::from_axis("m", 2);
        assert_eq!(area.multiply(&Metric::base("m")), Metric::from_axis("m", 3));
        assert_eq!((&area * &Metric::base("s")).canonical_string(), "m2.s");
    }

    #[test]
    fn divide_subtracts_exponents_and_drops_zero_axes() {
        let area = Metric::from_axis("m", 2);
        assert_eq!(area.divide(&Metric::base("m")), Metric::base("m"));
        assert_eq!(&area / &area, Metric::dimensionless());
        assert!(area.divide(&area).is_dimensionless());
    }

    #[test]
    fn powi_scales_every_exponent() {
        let speed = Metric::base("m").divide(&Metric::base("s"));
        assert_eq!(speed.powi(2).canonical_string(), "m2.s-2");
        assert!(speed.powi(0).is_dimensionless());
    }

    #[test]
    fn canonical_string_is_ordered_and_omits_unit_exponents() {
        assert_eq!(Metric::base("m").canonical_string(), "m");
        assert_eq!(Metric::from_axis("m", 2).canonical_string(), "m2");
        assert_eq!(force().canonical_string(), "g.m.s-2");
        assert_eq!(Metric::dimensionless().canonical_string(), "");
    }

    #[test]
    fn equal_content_renders_identically_regardless_of_build_order() {
        let a = Metric::base("m").multiply(&Metric::from_axis("s", -2));
        let b = Metric::from_axis("s", -2).multiply(&Metric::base("m"));
        assert_eq!(a, b);
        assert_eq!(a.canonical_string(), b.canonical_string());
    }

    #[test]
    fn compatibility_is_metric_equality() {
        let a = Metric::from_axis("m", 2);
        let b = Metric::base("m").multiply(&Metric::base("m"));
        let c = Metric::from_axis("m", 3).divide(&Metric::base("m"));
        // symmetric and transitive
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_ne!(a, Metric::base("m"));
    }
}
