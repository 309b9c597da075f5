use fmin::parameter::FloatParam;
use fmin::sampler::random::RandomSampler;
use fmin::{Error, Study, Trial};

#[test]
fn test_random_sampler_stays_in_bounds() {
    let study = Study::with_sampler(RandomSampler::with_seed(1));
    let x = FloatParam::new(-200.0, 100.0);
    let y = FloatParam::new(-100.0, -20.0);

    study
        .optimize(200, |trial: &mut Trial| {
            let a = x.suggest(trial)?;
            let b = y.suggest(trial)?;
            Ok::<_, Error>(a + b)
        })
        .unwrap();

    for t in study.trials() {
        assert!((-200.0..=100.0).contains(&t.get(&x).unwrap()));
        assert!((-100.0..=-20.0).contains(&t.get(&y).unwrap()));
    }
}

#[test]
fn test_random_sampler_covers_the_interval() {
    let study = Study::with_sampler(RandomSampler::with_seed(2));
    let x = FloatParam::new(0.0, 10.0);

    study
        .optimize(500, |trial: &mut Trial| {
            let v = x.suggest(trial)?;
            Ok::<_, Error>(v)
        })
        .unwrap();

    let mut buckets = [0_usize; 10];
    for t in study.trials() {
        let v = t.get(&x).unwrap();
        buckets[(v as usize).min(9)] += 1;
    }
    assert!(buckets.iter().all(|&b| b > 20), "{buckets:?}");
}

#[test]
fn test_random_sampler_reproducible_with_seed() {
    let run = || {
        let study = Study::with_sampler(RandomSampler::with_seed(77));
        let x = FloatParam::new(-1.0, 1.0);
        study
            .optimize(20, |trial: &mut Trial| {
                let v = x.suggest(trial)?;
                Ok::<_, Error>(v)
            })
            .unwrap();
        study.trials().iter().map(|t| t.value).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_random_sampler_quantized_values() {
    let study = Study::with_sampler(RandomSampler::with_seed(5));
    let q = FloatParam::new(0.0, 1.0).step(0.25);

    study
        .optimize(100, |trial: &mut Trial| {
            let v = q.suggest(trial)?;
            Ok::<_, Error>(v)
        })
        .unwrap();

    for t in study.trials() {
        let v = t.get(&q).unwrap();
        assert!(
            [0.0, 0.25, 0.5, 0.75, 1.0].contains(&v),
            "{v} is not on the 0.25 grid"
        );
    }
}
