use fmin::parameter::FloatParam;
use fmin::sampler::random::RandomSampler;
use fmin::sampler::tpe::TpeSampler;
use fmin::{Error, Study, Trial};

#[test]
fn test_builder_defaults_to_random_sampler() {
    let study = Study::builder().build();
    let x = FloatParam::new(0.0, 1.0);

    study
        .optimize(10, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>(v)
        })
        .unwrap();
    assert_eq!(study.n_trials(), 10);
}

#[test]
fn test_builder_with_seeded_sampler_is_reproducible() {
    let run = || {
        let study = Study::builder()
            .sampler(RandomSampler::with_seed(31))
            .build();
        let x = FloatParam::new(-1.0, 1.0);
        study
            .optimize(5, |trial: &mut Trial| {
                let v = x.suggest(trial)?;
                Ok::<_, Error>(v)
            })
            .unwrap();
        study.trials().iter().map(|t| t.value).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_set_sampler_keeps_history() {
    let mut study = Study::with_sampler(RandomSampler::with_seed(1));
    let x = FloatParam::new(0.0, 1.0);
    let objective = |trial: &mut Trial| {
        let v = x.suggest(trial)?;
        Ok::<_, Error>(v)
    };

    study.optimize(5, objective).unwrap();
    study.set_sampler(TpeSampler::builder().seed(2).build().unwrap());
    study.optimize(5, objective).unwrap();

    assert_eq!(study.n_trials(), 10);
}
