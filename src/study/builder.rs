use std::sync::Arc;

use crate::sampler::Sampler;
use crate::sampler::random::RandomSampler;

use super::Study;

/// A builder for constructing [`Study`] instances.
///
/// Created via [`Study::builder()`]. The sampler defaults to
/// [`RandomSampler`].
///
/// ```
/// use fmin::Study;
/// use fmin::sampler::TpeSampler;
///
/// let sampler = TpeSampler::builder().seed(3).build().unwrap();
/// let study = Study::builder().sampler(sampler).build();
/// assert_eq!(study.n_trials(), 0);
/// ```
#[derive(Default)]
pub struct StudyBuilder {
    sampler: Option<Arc<dyn Sampler>>,
}

impl StudyBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Set the sampler used for parameter suggestions.
    #[must_use]
    pub fn sampler(mut self, sampler: impl Sampler + 'static) -> Self {
        self.sampler = Some(Arc::new(sampler));
        self
    }

    /// Build the [`Study`].
    #[must_use]
    pub fn build(self) -> Study {
        let sampler = self
            .sampler
            .unwrap_or_else(|| Arc::new(RandomSampler::new()));
        Study::from_arc(sampler)
    }
}
