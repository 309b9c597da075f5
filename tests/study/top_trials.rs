use fmin::Study;
use fmin::parameter::FloatParam;

fn study_with(values: &[f64]) -> Study {
    let study = Study::new();
    let x = FloatParam::new(0.0, 10.0);
    for &v in values {
        let mut t = study.create_trial();
        let _ = x.suggest(&mut t);
        study.complete_trial(t, v).unwrap();
    }
    study
}

#[test]
fn test_top_trials_sorted_best_first() {
    let study = study_with(&[5.0, 1.0, 3.0, 4.0, 2.0]);
    let values: Vec<f64> = study.top_trials(3).iter().map(|t| t.value).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_top_trials_more_than_available() {
    let study = study_with(&[2.0, 1.0]);
    assert_eq!(study.top_trials(10).len(), 2);
}

#[test]
fn test_top_trials_empty_study() {
    let study = Study::new();
    assert!(study.top_trials(3).is_empty());
}

#[test]
fn test_best_trial_prefers_earliest_on_ties() {
    let study = study_with(&[3.0, 1.0, 1.0]);
    assert_eq!(study.best_trial().unwrap().id, 1);
}
