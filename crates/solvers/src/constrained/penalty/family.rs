use descend_core::ConstrainedProblem;

/// The penalty applied to inequality constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Penalty {
    /// Quadratic penalty on violated constraints, defined everywhere.
    #[default]
    Exterior,

    /// Logarithmic barrier, defined only where every constraint is strictly satisfied.
    Interior,
}

/// Constraint weights for one outer iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Equality constraint weight.
    pub uh: f64,

    /// Inequality constraint weight.
    pub ug: f64,
}

impl Weights {
    /// Returns both weights scaled by `p`.
    #[must_use]
    pub fn scaled(self, p: f64) -> Self {
        Self {
            uh: p * self.uh,
            ug: p * self.ug,
        }
    }
}

impl Penalty {
    /// Evaluates the penalized objective and its gradient at `x`.
    pub fn apply<P, const N: usize, const M: usize>(
        self,
        problem: &P,
        x: &[f64; N],
        weights: Weights,
    ) -> (f64, [f64; N])
    where
        P: ConstrainedProblem<N, M>,
    {
        match self {
            Self::Exterior => exterior_quadratic(problem, x, weights),
            Self::Interior => interior_log(problem, x, weights),
        }
    }
}

/// Exterior quadratic penalty.
///
/// Returns `f + ug/2·Σ max(gᵢ, 0)² + uh/2·Σ hⱼ²` and its gradient.
/// Equals `(f, ∇f)` exactly wherever all constraints are satisfied.
pub fn exterior_quadratic<P, const N: usize, const M: usize>(
    problem: &P,
    x: &[f64; N],
    weights: Weights,
) -> (f64, [f64; N])
where
    P: ConstrainedProblem<N, M>,
{
    let mut value = problem.objective(x);
    let mut gradient = problem.gradient(x);

    let g = problem.inequality(x);
    let dg = problem.inequality_jacobian(x);
    for (gi, row) in g.iter().zip(&dg) {
        let violated = gi.max(0.0);
        if violated > 0.0 {
            value += 0.5 * weights.ug * violated * violated;
            accumulate(&mut gradient, weights.ug * violated, row);
        }
    }

    add_equality_penalty(problem, x, weights.uh, &mut value, &mut gradient);

    (value, gradient)
}

/// Interior logarithmic barrier.
///
/// Returns `f − ug·Σ ln(−gᵢ) + uh/2·Σ hⱼ²` and its gradient.
/// If any `gᵢ(x) ≥ 0` (or is NaN) the barrier is undefined and every returned
/// component is NaN, which minimizers treat as worse than any finite value.
pub fn interior_log<P, const N: usize, const M: usize>(
    problem: &P,
    x: &[f64; N],
    weights: Weights,
) -> (f64, [f64; N])
where
    P: ConstrainedProblem<N, M>,
{
    let g = problem.inequality(x);
    if !g.iter().all(|&gi| gi < 0.0) {
        return (f64::NAN, [f64::NAN; N]);
    }

    let mut value = problem.objective(x);
    let mut gradient = problem.gradient(x);

    let dg = problem.inequality_jacobian(x);
    for (gi, row) in g.iter().zip(&dg) {
        value -= weights.ug * (-gi).ln();
        accumulate(&mut gradient, -weights.ug / gi, row);
    }

    add_equality_penalty(problem, x, weights.uh, &mut value, &mut gradient);

    (value, gradient)
}

fn add_equality_penalty<P, const N: usize, const M: usize>(
    problem: &P,
    x: &[f64; N],
    uh: f64,
    value: &mut f64,
    gradient: &mut [f64; N],
) where
    P: ConstrainedProblem<N, M>,
{
    let h = problem.equality(x);
    if h.is_empty() {
        return;
    }

    let dh = problem.equality_jacobian(x);
    for (hj, row) in h.iter().zip(&dh) {
        *value += 0.5 * uh * hj * hj;
        accumulate(gradient, uh * hj, row);
    }
}

/// Adds `scale · row` to `gradient`.
fn accumulate<const N: usize>(gradient: &mut [f64; N], scale: f64, row: &[f64; N]) {
    for (g, r) in gradient.iter_mut().zip(row) {
        *g += scale * r;
    }
}
