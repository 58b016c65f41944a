use super::Weights;

/// Indicates why the penalty loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The constraint violation fell to `epsilon_g` or below.
    Converged,

    /// Reached `max_outer_iters` without converging.
    MaxOuterIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One point of the outer iteration history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate<const N: usize> {
    pub x: [f64; N],

    /// Unpenalized objective `f(x)`.
    pub objective: f64,

    /// Constraint violation at `x`.
    pub violation: f64,

    /// Weights of the subproblem that produced `x`.
    ///
    /// For the starting point these are the initial weights.
    pub weights: Weights,

    /// Iterations the inner minimizer spent, zero for the starting point.
    pub inner_iters: usize,

    /// Whether the inner minimizer met its tolerance.
    pub inner_converged: bool,
}

/// The result of a penalty method solve.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The last iterate.
    pub x: [f64; N],

    /// Unpenalized objective value at `x`.
    pub objective: f64,

    /// Constraint violation at `x`.
    pub violation: f64,

    /// Outer iteration count when the solver finished.
    pub iters: usize,

    /// The starting point followed by every outer iterate.
    pub history: Vec<Iterate<N>>,
}

impl<const N: usize> Solution<N> {
    /// Returns true if the violation fell within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
