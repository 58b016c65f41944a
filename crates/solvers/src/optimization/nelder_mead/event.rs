use super::{Node, Simplex, Step};

/// Emitted by the Nelder-Mead solver after every iteration.
///
/// The simplex is borrowed in its post-step state, sorted best first.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, const N: usize> {
    /// Iterations completed, starting at 1.
    pub iter: usize,

    /// The transformation this iteration applied.
    pub step: Step,

    /// The simplex after the step.
    pub simplex: &'a Simplex<N>,
}

impl<const N: usize> Event<'_, N> {
    /// Returns the best vertex after this iteration.
    #[must_use]
    pub fn best(&self) -> &Node<N> {
        self.simplex.best()
    }
}
