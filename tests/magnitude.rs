use accel_travel_calculator::precision::{Magnitude, MagnitudeError};
use approx::assert_relative_eq;

#[test]
fn plain_values_round_trip_through_f64() {
    for value in [0.5, 1.0, 45.0, 1_000.0, 6.02214076e23, 1.0e-300, 1.7e308] {
        let magnitude = Magnitude::from_f64(value).unwrap();
        assert!(magnitude.mantissa() >= 1.0 && magnitude.mantissa() < 10.0);
        assert_relative_eq!(magnitude.to_f64(), value, max_relative = 4e-15);
    }
    let m = Magnitude::from_f64(45.0).unwrap();
    assert_eq!((m.mantissa(), m.exponent()), (4.5, 1));
}

#[test]
fn zero_is_its_own_normal_form() {
    let zero = Magnitude::from_f64(0.0).unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero, Magnitude::ZERO);
    assert_eq!(zero.to_f64(), 0.0);
    assert_eq!(zero.log10(), f64::NEG_INFINITY);
    assert_eq!(Magnitude::ZERO * Magnitude::ONE, Magnitude::ZERO);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(Magnitude::from_f64(-1.0), Err(MagnitudeError::Negative(-1.0)));
    assert!(matches!(Magnitude::from_f64(f64::NAN), Err(MagnitudeError::NonFinite(_))));
    assert!(matches!(Magnitude::from_f64(f64::INFINITY), Err(MagnitudeError::NonFinite(_))));
    assert!(matches!(Magnitude::exp_m1(-0.5), Err(MagnitudeError::Negative(_))));
    assert!(matches!(Magnitude::exp(f64::NAN), Err(MagnitudeError::NonFinite(_))));
    assert!(matches!(Magnitude::pow10(1.0e300), Err(MagnitudeError::ExponentOverflow(_))));
}

#[test]
fn exponents_outside_the_supported_range_are_rejected() {
    assert!(matches!(Magnitude::from_parts(1.0, i64::MAX), Err(MagnitudeError::ExponentOverflow(_))));
    assert!(matches!(Magnitude::from_parts(1.0, i64::MIN), Err(MagnitudeError::ExponentOverflow(_))));
    assert!(
        serde_json::from_str::<Magnitude>(r#"{"mantissa": 1.0, "exponent": 9223372036854775807}"#)
            .is_err()
    );

    let edge = Magnitude::from_parts(5.0, 1_000_000_000_000_000).unwrap();
    assert_eq!(edge.exponent(), 1_000_000_000_000_000);
    let mut product = edge;
    for _ in 0..20 {
        product = product * product;
    }
    assert!(product > edge);
    assert_eq!(product + edge, product);
}

#[test]
fn exp_agrees_with_f64_inside_its_range() {
    for x in [-700.0, -1.0, 0.0, 1.0, 2.0, 98.6, 480.0, 709.0] {
        let magnitude = Magnitude::exp(x).unwrap();
        assert_relative_eq!(magnitude.to_f64(), f64::exp(x), max_relative = 1e-14);
    }
}

#[test]
fn exp_past_f64_overflow() {
    // e^1000 = 1.9700711140170469938...e434
    let big = Magnitude::exp(1_000.0).unwrap();
    assert_eq!(big.exponent(), 434);
    assert_relative_eq!(big.mantissa(), 1.970_071_114_017_047, max_relative = 1e-11);
    assert!(big.to_f64().is_infinite());

    // stitching the log-domain branch onto the f64 branch must stay continuous
    let below = Magnitude::exp(709.0).unwrap();
    let above = Magnitude::exp(709.5).unwrap();
    assert_relative_eq!(above.log10() - below.log10(), 0.5 * std::f64::consts::LOG10_E, max_relative = 1e-10);
}

#[test]
fn exp_of_large_negative_argument_is_tiny_not_zero() {
    let tiny = Magnitude::exp(-2_000.0).unwrap();
    assert!(!tiny.is_zero());
    assert_eq!(tiny.exponent(), -869);
    assert_eq!(tiny.to_f64(), 0.0);
}

#[test]
fn exp_m1_is_accurate_near_zero() {
    let small = Magnitude::exp_m1(1.0e-10).unwrap();
    assert_eq!(small.exponent(), -10);
    assert_relative_eq!(small.mantissa(), 1.000_000_000_05, max_relative = 1e-15);
    assert!(Magnitude::exp_m1(0.0).unwrap().is_zero());
    assert_eq!(Magnitude::exp_m1(1_000.0).unwrap(), Magnitude::exp(1_000.0).unwrap());
}

#[test]
fn multiplication_adds_exponents() {
    let product = Magnitude::exp(1_000.0).unwrap() * Magnitude::exp(1_000.0).unwrap();
    let direct = Magnitude::exp(2_000.0).unwrap();
    assert!((product.log10() - direct.log10()).abs() < 1e-10);

    let scaled = Magnitude::from_f64(2.5).unwrap().scaled(4.0).unwrap();
    assert_eq!((scaled.mantissa(), scaled.exponent()), (1.0, 1));
    assert!(Magnitude::ONE.scaled(-2.0).is_err());
}

#[test]
fn addition_aligns_and_carries() {
    let nine_and_a_half = Magnitude::from_f64(9.5).unwrap();
    let half = Magnitude::from_f64(0.5).unwrap();
    let sum = nine_and_a_half + half;
    assert_eq!((sum.mantissa(), sum.exponent()), (1.0, 1));

    let a = Magnitude::from_f64(1.5e300).unwrap();
    assert_relative_eq!((a + a).to_f64(), 3.0e300, max_relative = 4e-15);

    let huge = Magnitude::exp(1_000.0).unwrap();
    assert_eq!(huge + Magnitude::ONE, huge);
    assert_eq!(Magnitude::ONE + huge, huge);
    assert_eq!(Magnitude::ZERO + half, half);
}

#[test]
fn ordering_follows_value() {
    let values = [
        Magnitude::ZERO,
        Magnitude::from_f64(1.0e-300).unwrap(),
        Magnitude::from_f64(0.5).unwrap(),
        Magnitude::ONE,
        Magnitude::from_f64(9.99).unwrap(),
        Magnitude::from_f64(10.0).unwrap(),
        Magnitude::exp(1_000.0).unwrap(),
    ];
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(values.iter().max(), Some(&values[6]));
}

#[test]
fn rounding_carries_into_exponent() {
    let m = Magnitude::from_f64(9.996).unwrap();
    assert_eq!(m.rounded(2), (1.0, 1));
    assert_eq!(format!("{m:.2e}"), "1.00e1");
    assert_eq!(format!("{:.3e}", Magnitude::from_f64(1_234.0).unwrap()), "1.234e3");
    assert_eq!(Magnitude::ZERO.to_string(), "0e0");
}

#[test]
fn serializes_as_mantissa_and_exponent() {
    let big = Magnitude::exp(1_000.0).unwrap();
    let json = serde_json::to_value(big).unwrap();
    assert_eq!(json["exponent"], 434);
    let back: Magnitude = serde_json::from_value(json).unwrap();
    assert_eq!(back, big);

    let unnormalised: Magnitude =
        serde_json::from_str(r#"{"mantissa": 12.0, "exponent": 0}"#).unwrap();
    assert_eq!(unnormalised, Magnitude::from_f64(12.0).unwrap());
    assert!(serde_json::from_str::<Magnitude>(r#"{"mantissa": -1.0, "exponent": 3}"#).is_err());
}
