//! Quasi-Newton minimization with the BFGS inverse-Hessian update.
//!
//! # Algorithm
//!
//! Starting from the identity, the solver keeps an approximation `H` of the
//! inverse Hessian. Each iteration:
//!
//! 1. Sets the search direction `d = −H·∇f`, resetting `H` to the identity
//!    if `d` is not a descent direction
//! 2. Backtracks along `d` from `step_init` until the Armijo sufficient
//!    decrease condition holds at a point with a finite value and gradient
//! 3. Updates `H` from the step `s` and gradient change `y`, skipping the
//!    update when the curvature condition `sᵀy > 0` fails
//!
//! Trial points where the objective is non-finite are rejected, so a barrier
//! objective that returns NaN outside its domain keeps every iterate inside it.
//!
//! # Termination
//!
//! The solver converges when `‖∇f‖∞ ≤ tolerance`. An exhausted line search
//! or reaching `max_iters` returns the current point with `converged = false`.
//!
//! # Usage
//!
//! [`Bfgs`] implements [`UnconstrainedMinimizer`] and is the usual inner
//! solver of the [`penalty`](crate::constrained::penalty) loop.

mod config;
mod error;
mod inverse_hessian;
mod line_search;


pub use config::{Config, ConfigError};
pub use error::Error;

use descend_core::{Minimum, SmoothObjective, UnconstrainedMinimizer};
use tracing::{debug, trace, warn};

use crate::vector::{all_finite, dot, max_abs};

use inverse_hessian::InverseHessian;
use line_search::backtrack;

/// The BFGS quasi-Newton minimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bfgs {
    config: Config,
}

impl Bfgs {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<const N: usize> UnconstrainedMinimizer<N> for Bfgs {
    type Error = Error;

    fn minimize<F>(
        &mut self,
        objective: &F,
        x0: [f64; N],
        tolerance: f64,
    ) -> Result<Minimum<N>, Self::Error>
    where
        F: SmoothObjective<N>,
    {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::Tolerance(tolerance));
        }
        if !all_finite(&x0) {
            return Err(Error::NonFiniteStart);
        }

        let mut x = x0;
        let (mut value, mut gradient) = objective.value_and_gradient(&x);
        if !value.is_finite() || !all_finite(&gradient) {
            return Err(Error::NonFiniteStart);
        }

        let mut h = InverseHessian::<N>::identity();
        let mut iters = 0;

        let converged = loop {
            if max_abs(&gradient) <= tolerance {
                break true;
            }
            if iters >= self.config.max_iters() {
                warn!(iters, grad_norm = max_abs(&gradient), "bfgs hit iteration limit");
                break false;
            }

            let mut direction = h.descent_direction(&gradient);
            let mut slope = dot(&gradient, &direction);
            if slope >= 0.0 || !slope.is_finite() {
                h = InverseHessian::identity();
                direction = gradient.map(|g| -g);
                slope = -dot(&gradient, &gradient);
            }

            let Some(trial) = backtrack(objective, &x, value, &direction, slope, &self.config)
            else {
                warn!(iters, value, "bfgs line search found no sufficient decrease");
                break false;
            };

            if !h.update(&trial.step, &trial.gradient_change(&gradient)) {
                trace!(iter = iters, "skipped bfgs update without positive curvature");
            }

            x = trial.x;
            value = trial.value;
            gradient = trial.gradient;
            iters += 1;
            trace!(iter = iters, value, step = trial.length, "bfgs step");
        };

        debug!(iters, value, converged, "bfgs finished");

        Ok(Minimum {
            x,
            value,
            iters,
            converged,
        })
    }
}
