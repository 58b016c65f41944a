use descend_core::{Objective, Observer};
use tracing::{debug, trace, warn};

use crate::vector::all_finite;

use super::{
    Action, Config, Error, Event, Simplex, Solution, Status, Trajectory, step::take_step,
};

/// Core Nelder-Mead loop.
///
/// The iteration limit is checked before the convergence test, so a search
/// only reports [`Status::Converged`] when it converged in fewer than
/// `max_iters` iterations.
pub(super) fn search<F, Obs, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    if N == 0 {
        return Err(Error::ZeroDimension);
    }
    if !all_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut simplex = Simplex::regular(objective, x0, config.edge_length());
    let mut trajectory = Trajectory::new();
    trajectory.record(&simplex);

    let mut iters = 0;
    let status = loop {
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }
        if simplex.is_converged(config) {
            break Status::Converged;
        }

        let step = take_step(&mut simplex, objective);
        iters += 1;
        trajectory.record(&simplex);
        trace!(iter = iters, ?step, best = simplex.best().value(), "simplex step");

        let event = Event {
            iter: iters,
            step,
            simplex: &simplex,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    let (delta_x, delta_f) = (simplex.delta_x(), simplex.delta_f());
    match status {
        Status::MaxIters => warn!(iters, delta_x, delta_f, "simplex search hit iteration limit"),
        Status::Converged | Status::StoppedByObserver => {
            debug!(iters, ?status, delta_x, delta_f, "simplex search finished");
        }
    }

    Ok(Solution::new(status, &simplex, iters, trajectory))
}
