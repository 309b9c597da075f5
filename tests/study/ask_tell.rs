use fmin::parameter::FloatParam;
use fmin::sampler::tpe::TpeSampler;
use core::hint::black_box;

use fmin::{Error, Study};

#[test]
fn test_ask_and_tell_basic() {
    let study = Study::new();
    let x_param = FloatParam::new(0.0, 10.0);

    for _ in 0..10 {
        let mut trial = study.ask();
        let x = x_param.suggest(&mut trial).unwrap();
        study.tell(trial, Ok::<_, &str>(x * x)).unwrap();
    }

    assert_eq!(study.n_trials(), 10);
    assert!(study.best_value().unwrap() >= 0.0);
}

#[test]
fn test_ask_and_tell_with_failures() {
    let study = Study::new();
    let x_param = FloatParam::new(-5.0, 5.0);

    for i in 0..10 {
        let mut trial = study.ask();
        let x = x_param.suggest(&mut trial).unwrap();
        if i % 2 == 0 {
            study.tell(trial, Ok::<_, &str>(x * x)).unwrap();
        } else {
            study.tell(trial, Err::<f64, _>("simulated failure")).unwrap();
        }
    }

    // Only successful trials are recorded
    assert_eq!(study.n_trials(), 5);
    assert!(study.trials().iter().all(|t| t.value.is_finite()));
}

#[test]
fn test_ask_and_tell_feeds_tpe() {
    let sampler = TpeSampler::builder()
        .seed(17)
        .n_startup_trials(10)
        .build()
        .unwrap();
    let study = Study::with_sampler(sampler);
    let x_param = FloatParam::new(-10.0, 10.0);

    for _ in 0..80 {
        let mut trial = study.ask();
        let x = x_param.suggest(&mut trial).unwrap();
        study.tell(trial, Ok::<_, &str>((x - 4.0).powi(2))).unwrap();
    }

    let best = study.best_trial().unwrap();
    assert!(best.value < 1.0, "best value {}", best.value);
    assert!((best.get(&x_param).unwrap() - 4.0).abs() < 1.0);
}

#[test]
fn test_trial_ids_are_sequential() {
    let study = Study::new();
    let ids: Vec<u64> = (0..5).map(|_| study.ask().id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_tell_rejects_non_finite_losses() {
    let study = Study::new();
    let x_param = FloatParam::new(-1.0, 1.0);

    let mut trial = study.ask();
    let _ = x_param.suggest(&mut trial).unwrap();
    study.tell(trial, Ok::<_, &str>(1.0)).unwrap();

    // runtime 0/0 is a sign-negative NaN on x86
    let zero = black_box(0.0_f64);
    for loss in [zero / zero, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut trial = study.ask();
        let _ = x_param.suggest(&mut trial).unwrap();
        let id = trial.id();
        let result = study.tell(trial, Ok::<_, &str>(loss));
        assert!(
            matches!(result, Err(Error::NonFiniteObjective { trial_id, .. }) if trial_id == id),
            "loss {loss} was accepted"
        );
    }

    assert_eq!(study.n_trials(), 1);
    assert_eq!(study.best_value().unwrap(), 1.0);
}
