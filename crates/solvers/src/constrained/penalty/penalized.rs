use descend_core::{ConstrainedProblem, Objective, SmoothObjective};

use super::{Penalty, Weights};

/// A constrained problem viewed as one unconstrained penalized objective.
///
/// Fixes the penalty family and weights for a single outer iteration.
/// `M` is the number of inequality constraints of the wrapped problem.
#[derive(Debug)]
pub struct Penalized<'a, P, const M: usize> {
    problem: &'a P,
    penalty: Penalty,
    weights: Weights,
}

impl<'a, P, const M: usize> Penalized<'a, P, M> {
    #[must_use]
    pub fn new(problem: &'a P, penalty: Penalty, weights: Weights) -> Self {
        Self {
            problem,
            penalty,
            weights,
        }
    }

    #[must_use]
    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    #[must_use]
    pub fn weights(&self) -> Weights {
        self.weights
    }
}

impl<P, const N: usize, const M: usize> SmoothObjective<N> for Penalized<'_, P, M>
where
    P: ConstrainedProblem<N, M>,
{
    fn value_and_gradient(&self, x: &[f64; N]) -> (f64, [f64; N]) {
        self.penalty.apply(self.problem, x, self.weights)
    }
}

impl<P, const N: usize, const M: usize> Objective<N> for Penalized<'_, P, M>
where
    P: ConstrainedProblem<N, M>,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self.value_and_gradient(x).0
    }
}
