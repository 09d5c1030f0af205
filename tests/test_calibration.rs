//! Calibration scenarios at reduced duration

use analog_chaos::{
    discover_range, make_oscillator, search_max_dt, AttractorKind, Axis, ChaosError, Phase,
    RangeConfig, StabilityConfig, RANGE_LIMIT,
};

fn quick_range() -> RangeConfig {
    RangeConfig {
        settle_seconds: 0.5,
        measure_seconds: 1.0,
        ..RangeConfig::default()
    }
}

#[test]
fn test_stable_attractor_never_exceeds_bounds() {
    let mut osc = make_oscillator("ruck").unwrap();
    let report = discover_range(&mut osc, &quick_range()).expect("Rucklidge should be stable");

    assert_eq!(report.samples, 44100);
    assert!(report.range.is_known());

    let tuned = osc.calibration();
    for (measured, known) in report.range.axes().iter().zip(tuned.axes()) {
        assert!(measured.min >= known.min && measured.max <= known.max,
            "measured {:?} exceeds calibration {:?}", measured, known);
    }
}

#[test]
fn test_every_kind_survives_short_range_run() {
    for kind in AttractorKind::ALL {
        let mut osc = kind.oscillator();
        let result = discover_range(&mut osc, &quick_range());
        assert!(result.is_ok(), "{}: {:?}", kind, result.err());
    }
}

#[test]
fn test_untuned_range_is_discovered() {
    let mut osc = make_oscillator("boul").unwrap();
    assert!(!osc.is_tuned());

    let report = discover_range(&mut osc, &quick_range()).unwrap();
    assert!(report.range.is_known());
    assert!(report.range.x.max > report.range.x.min);
}

#[test]
fn test_corrupted_max_dt_reports_axis() {
    // A ceiling far above the true stability limit lets each 0.5 s
    // update run as one Euler step.
    let mut osc = make_oscillator("ruck").unwrap().with_max_dt(Some(0.5));
    let config = RangeConfig {
        sample_rate: 2.0,
        settle_seconds: 10.0,
        measure_seconds: 10.0,
        ..RangeConfig::default()
    };

    let err = discover_range(&mut osc, &config).unwrap_err();
    assert_eq!(err.axis(), Some(Axis::X));
    match err {
        ChaosError::Diverged { phase, value, .. } => {
            assert_eq!(phase, Phase::Settle);
            assert!(!value.is_finite() || value.abs() > RANGE_LIMIT);
        }
        other => panic!("Expected divergence, got {:?}", other),
    }
}

#[test]
fn test_declared_max_dt_is_conservative() {
    let config = StabilityConfig {
        start_dt: 0.001,
        trial_seconds: 10.0,
        tolerance: 0.1,
        ..StabilityConfig::default()
    };

    for kind in AttractorKind::ALL {
        let mut osc = kind.oscillator();
        let declared = osc.max_dt();

        match search_max_dt(&mut osc, &config) {
            Ok(report) => {
                let found = report.max_dt.expect("0.001 should be stable");
                let declared = declared.expect("tuned kinds declare max_dt");
                assert!(found >= declared, "{}: found {} < declared {}", kind, found, declared);
                assert!(report.failure.is_some());
            }
            Err(ChaosError::Untuned(_)) => assert!(!osc.is_tuned()),
            Err(err) => panic!("{}: {}", kind, err),
        }
    }
}

#[test]
fn test_perturbed_start_still_settles() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(42);
    let mut osc = make_oscillator("ruck").unwrap();
    osc.perturb(0.01, &mut rng).unwrap();

    let report = discover_range(&mut osc, &quick_range()).unwrap();
    assert!(report.settled.is_finite());
}
