//! Sequential penalty method for constrained minimization.
//!
//! # Algorithm
//!
//! The penalty method replaces a [`ConstrainedProblem`] with a sequence of
//! unconstrained subproblems. Each outer iteration:
//!
//! 1. Builds a [`Penalized`] objective from the problem, the configured
//!    [`Penalty`] family, and the current weights `uh` and `ug`
//! 2. Hands it to an [`UnconstrainedMinimizer`], starting from the previous
//!    iterate with tolerance `epsilon_g`
//! 3. Measures the [`constraint_violation`] `Σ|gᵢ| + Σ|hⱼ|` at the result
//! 4. Scales both weights by `p`
//!
//! The loop stops once the violation is at most `epsilon_g`.
//!
//! # Penalty Families
//!
//! - [`Penalty::Exterior`] adds `ug/2·Σ max(gᵢ, 0)²`. Satisfied constraints
//!   cost nothing, so iterates approach the optimum from outside the feasible
//!   region as `ug` grows (`p > 1`).
//! - [`Penalty::Interior`] adds the log barrier `−ug·Σ ln(−gᵢ)`, which is only
//!   defined for strictly feasible points. The start must be strictly feasible
//!   and `ug` shrinks toward zero (`0 < p < 1`).
//!
//! Both families add `uh/2·Σ hⱼ²` for equality constraints.
//!
//! The violation metric sums absolute inequality values, so it presumes the
//! inequality constraints are active at the optimum. An inactive constraint
//! keeps the violation above zero and the loop runs into its cap.
//!
//! # Termination
//!
//! Reaching `max_outer_iters` returns the last iterate with
//! [`Status::MaxOuterIters`] instead of looping forever. An inner solver that
//! fails to converge is not an error; its best point is used as-is.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per outer iteration. Observers can return
//! [`Action::StopEarly`] to halt after that iteration.

mod action;
mod config;
mod error;
mod event;
mod family;
mod penalized;
mod search;
mod solution;
mod violation;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use family::{Penalty, Weights, exterior_quadratic, interior_log};
pub use penalized::Penalized;
pub use solution::{Iterate, Solution, Status};
pub use violation::constraint_violation;

use descend_core::{ConstrainedProblem, Observer, UnconstrainedMinimizer};

use search::search;

/// Minimizes a constrained problem with the penalty method.
///
/// Each subproblem is handed to `minimizer`, which keeps its own options.
/// The observer receives an [`Event`] after every outer iteration.
/// See the [module docs](self) for details on the algorithm and termination.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is non-finite, an interior
/// penalty starts at a point that is not strictly feasible, or the inner
/// minimizer fails.
pub fn minimize<P, S, Obs, const N: usize, const M: usize>(
    problem: &P,
    x0: [f64; N],
    config: &Config,
    minimizer: &mut S,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: ConstrainedProblem<N, M>,
    S: UnconstrainedMinimizer<N>,
    Obs: Observer<Event<N>, Action>,
{
    search(problem, x0, config, minimizer, observer)
}

/// Minimizes a constrained problem without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<P, S, const N: usize, const M: usize>(
    problem: &P,
    x0: [f64; N],
    config: &Config,
    minimizer: &mut S,
) -> Result<Solution<N>, Error>
where
    P: ConstrainedProblem<N, M>,
    S: UnconstrainedMinimizer<N>,
{
    minimize(problem, x0, config, minimizer, ())
}
