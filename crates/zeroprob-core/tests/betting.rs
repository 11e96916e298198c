use proptest::prelude::*;
use zeroprob_core::{
    density_ratio, epsilon_neighborhood, expected_value, ArgumentError, BettingEdgeCase,
    CoreError, MeasureTag, Method, PointEvent, Probability,
};
use zeroprob_distributions::{ContinuousLaw, DistributionRef};

fn make_normal() -> DistributionRef {
    ContinuousLaw::normal(0.0, 1.0).unwrap().shared()
}

fn make_bet(bet_value: f64, payout: f64, cost: f64) -> BettingEdgeCase {
    BettingEdgeCase::new(make_normal(), bet_value, payout, cost)
}

#[test]
fn test_exact_hit_has_zero_probability() {
    assert_eq!(make_bet(0.0, 1000.0, 1.0).probability(), 0.0);
    assert_eq!(make_bet(3.7, 1e9, 0.0).probability(), 0.0);
}

#[test]
fn test_epsilon_method() {
    let bet = make_bet(0.5, 1000.0, 10.0);
    let near_hit = epsilon_neighborhood(&bet, 0.1).unwrap();
    let ev = expected_value(&bet, Method::Epsilon, 0.1).unwrap();
    assert!((ev - (near_hit * 1000.0 - 10.0)).abs() < 1e-12);
}

#[test]
fn test_density_method() {
    let bet = make_bet(0.5, 1000.0, 10.0);
    let ev = expected_value(&bet, Method::Density, 0.1).unwrap();
    assert!((ev - (density_ratio(&bet) * 0.1 * 1000.0 - 10.0)).abs() < 1e-12);
}

#[test]
fn test_methods_agree_for_small_windows() {
    // ε-neighborhood ≈ 2ε·density, so density·ε is about half of it.
    let bet = make_bet(0.0, 1.0, 0.0);
    let by_epsilon = expected_value(&bet, Method::Epsilon, 1e-4).unwrap();
    let by_density = expected_value(&bet, Method::Density, 1e-4).unwrap();
    assert!((by_epsilon - 2.0 * by_density).abs() < 1e-9);
}

#[test]
fn test_both_methods_are_finite() {
    let bet = make_bet(-2.0, 500.0, 3.0);
    for method in Method::ALL {
        assert!(expected_value(&bet, *method, 0.1).unwrap().is_finite());
    }
}

#[test]
fn test_expected_value_rejects_non_positive_epsilon() {
    let bet = make_bet(0.0, 100.0, 1.0);
    for method in Method::ALL {
        assert!(matches!(
            expected_value(&bet, *method, 0.0),
            Err(CoreError::InvalidArgument(ArgumentError::NonPositiveEpsilon { .. }))
        ));
    }
}

#[test]
fn test_unknown_method_tag() {
    assert!(matches!(
        Method::parse("martingale"),
        Err(ArgumentError::UnknownTag { kind: "method", .. })
    ));
}

#[test]
fn test_point_event_is_centred_on_bet_value() {
    let bet = make_bet(1.25, 10.0, 1.0);
    let event = bet.point_event(MeasureTag::Epsilon);
    assert_eq!(event.point(), 1.25);
    assert_eq!(event.measure(), MeasureTag::Epsilon);
    assert_eq!(
        epsilon_neighborhood(&event, 0.1).unwrap(),
        epsilon_neighborhood(&bet, 0.1).unwrap()
    );
}

proptest! {
    #[test]
    fn prop_payout_never_decreases_expected_value(
        bet_value in -3.0f64..3.0,
        payout in 0.0f64..1e6,
        bump in 0.0f64..1e6,
        cost in 0.0f64..100.0,
        epsilon in 1e-4f64..1.0,
    ) {
        for method in Method::ALL {
            let low_bet = make_bet(bet_value, payout, cost);
            let high_bet = make_bet(bet_value, payout + bump, cost);
            let low = expected_value(&low_bet, *method, epsilon).unwrap();
            let high = expected_value(&high_bet, *method, epsilon).unwrap();
            prop_assert!(high >= low);
        }
    }
}
