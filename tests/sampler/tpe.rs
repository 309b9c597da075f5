use fmin::parameter::FloatParam;
use fmin::sampler::tpe::{FixedGamma, HyperoptGamma, TpeSampler};
use fmin::{Error, Study, Trial};

#[test]
fn test_tpe_optimizes_quadratic_function() {
    // Minimize f(x) = (x - 3)^2 where x in [-10, 10]
    let sampler = TpeSampler::builder()
        .seed(42)
        .n_startup_trials(10)
        .n_ei_candidates(24)
        .build()
        .unwrap();

    let study = Study::with_sampler(sampler);
    let x_param = FloatParam::new(-10.0, 10.0);

    study
        .optimize(100, |trial: &mut Trial| {
            let x = x_param.suggest(trial)?;
            Ok::<_, Error>((x - 3.0).powi(2))
        })
        .expect("optimization should succeed");

    let best = study.best_trial().expect("should have at least one trial");
    assert!(
        best.value < 1.0,
        "TPE should find near-optimal: best value {} should be < 1.0",
        best.value
    );
}

#[test]
fn test_tpe_optimizes_multivariate_function() {
    // Minimize f(x, y) = x^2 + y^2 where x, y in [-5, 5]
    let sampler = TpeSampler::builder()
        .seed(123)
        .n_startup_trials(10)
        .build()
        .unwrap();

    let study = Study::with_sampler(sampler);
    let x_param = FloatParam::new(-5.0, 5.0);
    let y_param = FloatParam::new(-5.0, 5.0);

    study
        .optimize(150, |trial: &mut Trial| {
            let x = x_param.suggest(trial)?;
            let y = y_param.suggest(trial)?;
            Ok::<_, Error>(x * x + y * y)
        })
        .expect("optimization should succeed");

    let best = study.best_value().unwrap();
    assert!(best < 2.0, "best value {best} should be < 2.0");
}

#[test]
fn test_tpe_beats_its_own_startup_phase() {
    let sampler = TpeSampler::builder()
        .seed(7)
        .n_startup_trials(20)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let x = FloatParam::new(-50.0, 50.0);

    study
        .optimize(120, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>((v - 12.0).abs())
        })
        .unwrap();

    let trials = study.trials();
    let startup_best = trials[..20]
        .iter()
        .map(|t| t.value)
        .fold(f64::INFINITY, f64::min);
    let overall_best = study.best_value().unwrap();
    assert!(overall_best <= startup_best);
    assert!(overall_best < 2.0, "best {overall_best}");
}

#[test]
fn test_tpe_respects_bounds_for_log_and_step() {
    let sampler = TpeSampler::builder()
        .seed(3)
        .n_startup_trials(5)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let lr = FloatParam::new(1e-5, 1e-1).log_scale();
    let depth = FloatParam::new(1.0, 10.0).step(1.0);

    study
        .optimize(60, |trial: &mut Trial| {
            let a = lr.suggest(trial)?;
            let d = depth.suggest(trial)?;
            Ok::<_, Error>((a.log10() + 3.0).powi(2) + (d - 4.0).powi(2))
        })
        .unwrap();

    for t in study.trials() {
        let a = t.get(&lr).unwrap();
        let d = t.get(&depth).unwrap();
        assert!((1e-5..=1e-1).contains(&a), "lr {a} out of bounds");
        assert!((1.0..=10.0).contains(&d), "depth {d} out of bounds");
        assert!((d - d.round()).abs() < 1e-9, "depth {d} off the grid");
    }
}

#[test]
fn test_tpe_seeded_runs_match() {
    let run = |seed: u64| {
        let sampler = TpeSampler::builder().seed(seed).build().unwrap();
        let study = Study::with_sampler(sampler);
        let x = FloatParam::new(-10.0, 10.0);
        study
            .optimize(40, |trial: &mut Trial| {
                let v = x.suggest(trial)?;
                Ok::<_, Error>(v.sin() + 0.1 * v * v)
            })
            .unwrap();
        study
            .trials()
            .iter()
            .map(|t| t.value.to_bits())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn test_tpe_with_fixed_gamma() {
    let sampler = TpeSampler::builder()
        .gamma_strategy(FixedGamma::new(0.2).unwrap())
        .n_startup_trials(10)
        .seed(8)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let x = FloatParam::new(0.0, 10.0);

    study
        .optimize(80, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>((v - 7.5).powi(2))
        })
        .unwrap();
    assert!(study.best_value().unwrap() < 0.5);
}

#[test]
fn test_tpe_with_custom_hyperopt_gamma() {
    let sampler = TpeSampler::builder()
        .gamma_strategy(HyperoptGamma::new(0.5, 10).unwrap())
        .seed(12)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let x = FloatParam::new(-3.0, 3.0);

    study
        .optimize(60, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>(v * v)
        })
        .unwrap();
    assert_eq!(study.n_trials(), 60);
}

#[test]
fn test_tpe_fixed_bandwidth_and_no_prior() {
    let sampler = TpeSampler::builder()
        .kde_bandwidth(0.5)
        .prior_weight(0.0)
        .n_startup_trials(10)
        .seed(21)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let x = FloatParam::new(-10.0, 10.0);

    study
        .optimize(50, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>((v + 2.0).powi(2))
        })
        .unwrap();

    for t in study.trials() {
        assert!((-10.0..=10.0).contains(&t.get(&x).unwrap()));
    }
}

#[test]
fn test_tpe_builder_rejects_invalid_gamma() {
    assert!(matches!(
        TpeSampler::builder().gamma(0.0).build(),
        Err(Error::InvalidGamma(_))
    ));
    assert!(matches!(
        TpeSampler::builder().gamma(f64::NAN).build(),
        Err(Error::InvalidGamma(_))
    ));
}

#[test]
fn test_tpe_default_configuration() {
    let sampler = TpeSampler::new();
    assert_eq!(sampler.n_startup_trials(), 20);
    assert_eq!(sampler.gamma_strategy().n_good(100), 3);
}
