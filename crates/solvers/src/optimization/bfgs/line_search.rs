use descend_core::SmoothObjective;

use crate::vector::{add_scaled, all_finite, sub};

use super::Config;

/// An accepted line search point.
#[derive(Debug, Clone, Copy)]
pub(super) struct Trial<const N: usize> {
    pub(super) x: [f64; N],
    pub(super) value: f64,
    pub(super) gradient: [f64; N],
    pub(super) step: [f64; N],
    pub(super) length: f64,
}

impl<const N: usize> Trial<N> {
    /// Returns `∇f(trial) − previous`.
    pub(super) fn gradient_change(&self, previous: &[f64; N]) -> [f64; N] {
        sub(&self.gradient, previous)
    }
}

/// Backtracks along `direction` until the Armijo condition holds.
///
/// `slope` is the directional derivative `∇f(x)·d` and must be negative.
/// Points with a non-finite value or gradient are rejected like any other
/// insufficient decrease. Returns `None` once `max_backtracks` trials fail
/// or the step becomes too short to move `x`.
pub(super) fn backtrack<F, const N: usize>(
    objective: &F,
    x: &[f64; N],
    value: f64,
    direction: &[f64; N],
    slope: f64,
    config: &Config,
) -> Option<Trial<N>>
where
    F: SmoothObjective<N>,
{
    let mut length = config.step_init();

    for _ in 0..config.max_backtracks() {
        let trial_x = add_scaled(x, length, direction);
        if trial_x == *x {
            // Step has rounded away; shorter ones will too.
            return None;
        }
        let (trial_value, gradient) = objective.value_and_gradient(&trial_x);

        let finite = trial_value.is_finite() && all_finite(&gradient);
        if finite && trial_value <= value + config.armijo() * length * slope {
            return Some(Trial {
                x: trial_x,
                value: trial_value,
                gradient,
                step: sub(&trial_x, x),
                length,
            });
        }

        length *= config.contraction();
    }

    None
}
