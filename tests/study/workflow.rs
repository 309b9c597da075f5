use fmin::parameter::FloatParam;
use fmin::sampler::random::RandomSampler;
use fmin::{Error, Study, Trial};

#[test]
fn test_manual_trial_workflow() {
    let study = Study::with_sampler(RandomSampler::with_seed(4));
    let x = FloatParam::new(-3.0, 3.0).name("x");

    for _ in 0..20 {
        let mut trial = study.create_trial();
        let v = x.suggest(&mut trial).unwrap();
        study.complete_trial(trial, v * v).unwrap();
    }

    let best = study.best_trial().unwrap();
    let v = best.get(&x).unwrap();
    assert_eq!(best.value, v * v);
    assert_eq!(best.param_labels.get(&x.id()).map(String::as_str), Some("x"));
}

#[test]
fn test_trials_preserve_completion_order() {
    let study = Study::new();
    let x = FloatParam::new(0.0, 1.0);

    study
        .optimize(15, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>(v)
        })
        .unwrap();

    let ids: Vec<u64> = study.trials().iter().map(|t| t.id).collect();
    assert_eq!(ids, (0..15).collect::<Vec<_>>());
}

#[test]
fn test_repeated_suggest_returns_cached_value() {
    let study = Study::new();
    let x = FloatParam::new(0.0, 100.0);

    study
        .optimize(10, |trial: &mut Trial| {
            let a = x.suggest(trial)?;
            let b = x.suggest(trial)?;
            assert_eq!(a.to_bits(), b.to_bits());
            Ok::<_, Error>(a)
        })
        .unwrap();
}

#[test]
fn test_best_value_without_trials() {
    let study = Study::new();
    assert!(matches!(study.best_value(), Err(Error::NoCompletedTrials)));
}
