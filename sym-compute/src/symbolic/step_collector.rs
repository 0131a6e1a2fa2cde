/// Receives the steps taken by an algorithm as it runs.
///
/// The unit type `()` implements [`StepCollector`] by discarding every step, for callers that only
/// want the result. A [`Vec`] records the steps in the order they were taken.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
