use super::{Simplex, Trajectory};

/// Indicates why the simplex search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Both the simplex size and the value spread fell within tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder-Mead search.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best vertex of the final simplex.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub value: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Every simplex visited, starting with the initial one.
    pub trajectory: Trajectory<N>,
}

impl<const N: usize> Solution<N> {
    pub(super) fn new(
        status: Status,
        simplex: &Simplex<N>,
        iters: usize,
        trajectory: Trajectory<N>,
    ) -> Self {
        let best = simplex.best();
        Self {
            status,
            x: *best.x(),
            value: best.value(),
            iters,
            trajectory,
        }
    }

    /// Returns true if the search met both tolerances.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
