use descend_core::{Minimum, SmoothObjective, UnconstrainedMinimizer};

use super::{Config, Error, search::search};

/// The simplex search packaged as an [`UnconstrainedMinimizer`].
///
/// The gradient half of the objective is ignored. The tolerance passed to
/// [`minimize`](UnconstrainedMinimizer::minimize) replaces both the size and
/// the value-spread tolerances of the stored config.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NelderMead {
    config: Config,
}

impl NelderMead {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<const N: usize> UnconstrainedMinimizer<N> for NelderMead {
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
        let config = self.config.with_tolerance(tolerance)?;
        let value_only = |x: &[f64; N]| objective.value_and_gradient(x).0;

        let solution = search(&value_only, x0, &config, ())?;

        Ok(Minimum {
            x: solution.x,
            value: solution.value,
            iters: solution.iters,
            converged: solution.converged(),
        })
    }
}
