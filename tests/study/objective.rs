use core::ops::ControlFlow;

use fmin::parameter::FloatParam;
use fmin::sampler::CompletedTrial;
use fmin::{Error, Objective, Study, Trial};

struct StopAfter {
    x: FloatParam,
    limit: usize,
}

impl Objective for StopAfter {
    type Error = Error;

    fn evaluate(&self, trial: &mut Trial) -> Result<f64, Error> {
        self.x.suggest(trial)
    }

    fn after_trial(&self, study: &Study, _trial: &CompletedTrial) -> ControlFlow<()> {
        // the finished trial joins the history after this hook returns
        if study.n_trials() + 1 >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn test_after_trial_stops_the_loop() {
    let study = Study::new();
    study
        .optimize(
            100,
            StopAfter {
                x: FloatParam::new(0.0, 10.0),
                limit: 5,
            },
        )
        .unwrap();
    assert_eq!(study.n_trials(), 5);
}

struct NeverStart;

impl Objective for NeverStart {
    type Error = Error;

    fn evaluate(&self, _trial: &mut Trial) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn before_trial(&self, _study: &Study) -> ControlFlow<()> {
        ControlFlow::Break(())
    }
}

#[test]
fn test_before_trial_break_leaves_no_trials() {
    let study = Study::new();
    let result = study.optimize(10, NeverStart);
    assert!(matches!(result, Err(Error::NoCompletedTrials)));
}

#[test]
fn test_objective_error_carries_trial_and_message() {
    let study = Study::new();
    let x = FloatParam::new(0.0, 1.0);

    let result = study.optimize(10, |trial: &mut Trial| {
        let v = x.suggest(trial).map_err(|e| e.to_string())?;
        if trial.id() == 3 {
            return Err(format!("bad value {v}"));
        }
        Ok(v)
    });

    match result {
        Err(Error::ObjectiveFailed { trial_id, message }) => {
            assert_eq!(trial_id, 3);
            assert!(message.starts_with("bad value"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(study.n_trials(), 3);
}

#[test]
fn test_infinite_loss_is_rejected() {
    let study = Study::new();
    let result = study.optimize(5, |_: &mut Trial| Ok::<_, Error>(f64::INFINITY));
    assert!(matches!(
        result,
        Err(Error::NonFiniteObjective { trial_id: 0, .. })
    ));
    assert_eq!(study.n_trials(), 0);
}

#[test]
fn test_parameter_conflict_inside_objective() {
    let study = Study::new();
    let x = FloatParam::new(0.0, 1.0);
    let widened = x.clone().step(0.5);

    let result = study.optimize(1, |trial: &mut Trial| {
        let a = x.suggest(trial)?;
        let b = widened.suggest(trial)?;
        Ok::<_, Error>(a + b)
    });
    assert!(matches!(result, Err(Error::ParameterConflict { .. })));
}
