use crate::SmoothObjective;

/// A local minimum reported by an [`UnconstrainedMinimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum<const N: usize> {
    /// The located point.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub value: f64,

    /// Iterations the minimizer spent.
    pub iters: usize,

    /// Whether the minimizer met its tolerance.
    ///
    /// A `false` here is information, not failure: the point is still the
    /// best the minimizer found, and callers decide whether to use it.
    pub converged: bool,
}

/// A local unconstrained solver used as a black box by constrained solvers.
///
/// Given a smooth objective, a start point, and a tolerance, an implementor
/// returns a locally improved point. Solver options live in the implementing
/// type itself, so callers configure the solver before handing it over.
///
/// Implementations should treat non-finite objective values as "worse than
/// anything finite": barrier objectives return NaN outside their domain and
/// rely on the minimizer backing away from it.
pub trait UnconstrainedMinimizer<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Minimizes `objective` starting from `x0`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the solver cannot make sense of the problem,
    /// for example when the objective is not evaluable at `x0`.
    fn minimize<F>(
        &mut self,
        objective: &F,
        x0: [f64; N],
        tolerance: f64,
    ) -> Result<Minimum<N>, Self::Error>
    where
        F: SmoothObjective<N>;
}
