use rand::rngs::StdRng;
use rand::SeedableRng;
use zeroprob_distributions::{ContinuousLaw, DiscreteLaw, Distribution, DistributionError};

fn make_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn test_normal_peak_density() {
    let law = ContinuousLaw::normal(0.0, 1.0).unwrap();
    let peak = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
    assert!((law.density(0.0) - peak).abs() < 1e-12);
}

#[test]
fn test_normal_cumulative_is_monotone_and_bounded() {
    let law = ContinuousLaw::normal(0.0, 1.0).unwrap();
    let mut prev = 0.0;
    for i in -60..=60 {
        let x = i as f64 / 10.0;
        let c = law.cumulative(x);
        assert!((0.0..=1.0).contains(&c));
        assert!(c >= prev, "cumulative decreased at x={x}");
        prev = c;
    }
}

#[test]
fn test_quantile_inverts_cumulative() {
    let law = ContinuousLaw::normal(2.0, 3.0).unwrap();
    for p in [0.001, 0.1, 0.5, 0.9, 0.999] {
        let x = law.quantile(p);
        assert!((law.cumulative(x) - p).abs() < 1e-6, "p={p}");
    }
}

#[test]
fn test_quantile_out_of_range_is_nan() {
    let law = ContinuousLaw::normal(0.0, 1.0).unwrap();
    assert!(law.quantile(-0.1).is_nan());
    assert!(law.quantile(1.5).is_nan());
}

#[test]
fn test_continuous_law_has_no_mass() {
    let law = ContinuousLaw::uniform(0.0, 1.0).unwrap();
    assert_eq!(law.mass(0.5), None);
}

#[test]
fn test_sample_n_draws_from_support() {
    let law = ContinuousLaw::uniform(-1.0, 1.0).unwrap();
    let mut rng = make_rng();
    let draws = law.sample_n(&mut rng, 500);
    assert_eq!(draws.len(), 500);
    assert!(draws.iter().all(|x| (-1.0..=1.0).contains(x)));
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let law = ContinuousLaw::exponential(2.0).unwrap();
    let a = law.sample_n(&mut make_rng(), 20);
    let b = law.sample_n(&mut make_rng(), 20);
    assert_eq!(a, b);
}

#[test]
fn test_invalid_parameters_rejected() {
    match ContinuousLaw::normal(0.0, -1.0) {
        Err(DistributionError::InvalidParameters { law, .. }) => assert_eq!(law, "normal"),
        other => panic!("Expected InvalidParameters, got {:?}", other),
    }
    assert!(ContinuousLaw::exponential(0.0).is_err());
    assert!(DiscreteLaw::poisson(-3.0).is_err());
}

#[test]
fn test_poisson_mass_on_and_off_support() {
    let law = DiscreteLaw::poisson(3.0).unwrap();
    let expected = 3.0_f64.powi(2) * (-3.0_f64).exp() / 2.0;
    assert!((law.mass(2.0).unwrap() - expected).abs() < 1e-12);
    assert_eq!(law.mass(2.5), Some(0.0));
    assert_eq!(law.mass(-1.0), Some(0.0));
}

#[test]
fn test_discrete_cumulative_is_a_step_function() {
    let law = DiscreteLaw::binomial(0.5, 4).unwrap();
    assert_eq!(law.cumulative(-0.5), 0.0);
    assert!((law.cumulative(1.0) - law.cumulative(1.9)).abs() < 1e-15);
    assert!((law.cumulative(4.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_discrete_samples_land_on_support() {
    let law = DiscreteLaw::poisson(4.0).unwrap();
    let mut rng = make_rng();
    for x in law.sample_n(&mut rng, 200) {
        assert!(x >= 0.0);
        assert_eq!(x.fract(), 0.0);
    }
}

#[test]
fn test_discrete_quantile_below_first_mass_is_support_minimum() {
    let law = DiscreteLaw::poisson(4.0).unwrap();
    let first_mass = law.mass(0.0).unwrap();
    assert_eq!(law.quantile(0.01), 0.0);
    assert_eq!(law.quantile(first_mass / 2.0), 0.0);
    assert_eq!(law.quantile(0.0), 0.0);
}

#[test]
fn test_discrete_quantile_inverts_cumulative() {
    let law = DiscreteLaw::poisson(4.0).unwrap();
    for k in 0..12 {
        let x = k as f64;
        assert_eq!(law.quantile(law.cumulative(x)), x, "k={k}");
    }
    let binomial = DiscreteLaw::binomial(0.3, 6).unwrap();
    assert_eq!(binomial.quantile(1.0), 6.0);
}

#[test]
fn test_discrete_sampling_hits_support_minimum() {
    let law = DiscreteLaw::poisson(0.5).unwrap();
    let draws = law.sample_n(&mut make_rng(), 500);
    let zeros = draws.iter().filter(|x| **x == 0.0).count();
    assert!(zeros > 0);
    assert!(draws.iter().all(|x| *x >= 0.0 && x.fract() == 0.0));
}

#[test]
fn test_shared_handle_is_usable_across_threads() {
    let law = ContinuousLaw::normal(0.0, 1.0).unwrap().shared();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let law = law.clone();
            std::thread::spawn(move || law.cumulative(0.0))
        })
        .collect();
    for h in handles {
        assert!((h.join().unwrap() - 0.5).abs() < 1e-12);
    }
}
