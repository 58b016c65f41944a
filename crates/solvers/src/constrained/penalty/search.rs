use descend_core::{ConstrainedProblem, Observer, UnconstrainedMinimizer};
use tracing::{debug, warn};

use crate::vector::all_finite;

use super::{
    Action, Config, Error, Event, Iterate, Penalized, Penalty, Solution, Status, Weights,
    constraint_violation,
};

/// Core penalty loop.
pub(super) fn search<P, S, Obs, const N: usize, const M: usize>(
    problem: &P,
    x0: [f64; N],
    config: &Config,
    minimizer: &mut S,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: ConstrainedProblem<N, M>,
    S: UnconstrainedMinimizer<N>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;
    if !all_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }
    if config.penalty == Penalty::Interior {
        check_strictly_feasible(problem, &x0)?;
    }

    let mut weights = Weights {
        uh: config.uh,
        ug: config.ug,
    };
    let mut current = Iterate {
        x: x0,
        objective: problem.objective(&x0),
        violation: constraint_violation(problem, &x0),
        weights,
        inner_iters: 0,
        inner_converged: true,
    };
    let mut history = vec![current];

    let mut iters = 0;
    let status = loop {
        if current.violation <= config.epsilon_g {
            break Status::Converged;
        }
        if iters >= config.max_outer_iters {
            warn!(
                iters,
                violation = current.violation,
                "penalty loop hit outer iteration limit"
            );
            break Status::MaxOuterIters;
        }

        let penalized = Penalized::<P, M>::new(problem, config.penalty, weights);
        let minimum = minimizer
            .minimize(&penalized, current.x, config.epsilon_g)
            .map_err(|error| Error::Minimizer(Box::new(error)))?;
        iters += 1;

        current = Iterate {
            x: minimum.x,
            objective: problem.objective(&minimum.x),
            violation: constraint_violation(problem, &minimum.x),
            weights,
            inner_iters: minimum.iters,
            inner_converged: minimum.converged,
        };
        history.push(current);
        debug!(
            iter = iters,
            objective = current.objective,
            violation = current.violation,
            ug = weights.ug,
            uh = weights.uh,
            inner_iters = minimum.iters,
            inner_converged = minimum.converged,
            "penalty outer iteration"
        );

        weights = weights.scaled(config.p);

        let event = Event {
            iter: iters,
            iterate: current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    debug!(iters, ?status, violation = current.violation, "penalty loop finished");

    Ok(Solution {
        status,
        x: current.x,
        objective: current.objective,
        violation: current.violation,
        iters,
        history,
    })
}

fn check_strictly_feasible<P, const N: usize, const M: usize>(
    problem: &P,
    x: &[f64; N],
) -> Result<(), Error>
where
    P: ConstrainedProblem<N, M>,
{
    match problem
        .inequality(x)
        .into_iter()
        .enumerate()
        .find(|&(_, g)| g >= 0.0 || g.is_nan())
    {
        Some((index, value)) => Err(Error::InfeasibleStart { index, value }),
        None => Ok(()),
    }
}
