//! Nelder-Mead simplex search for derivative-free minimization over ℝᴺ.
//!
//! # Algorithm
//!
//! The search keeps `N + 1` vertices, each with its cached objective value,
//! starting from a regular simplex with a configurable edge length anchored
//! at the initial point. Each iteration sorts the vertices, takes the centroid
//! `xc` of all but the worst, and tries points on the line
//! `xc + α·(xc − x_worst)`:
//!
//! | step              | α    | accepted when                                  |
//! |-------------------|------|------------------------------------------------|
//! | reflection        | 1    | no worse than the second-worst vertex          |
//! | expansion         | 2    | reflection and expansion both beat the best    |
//! | outside contract  | 0.5  | reflection lies between second-worst and worst, and this beats it |
//! | inside contract   | −0.5 | reflection is worse than the worst, and this beats the worst |
//!
//! When no candidate is accepted, every vertex but the best shrinks halfway
//! toward the best.
//!
//! # Termination
//!
//! The search stops after `max_iters` iterations, or once **both** the
//! simplex size (sum of vertex distances to the worst vertex) is within
//! `x_tol` **and** the standard deviation of the vertex values is within
//! `f_tol`. A flat but large simplex keeps searching.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every iteration with the applied
//! [`Step`] and the updated simplex. Observers can return
//! [`Action::StopEarly`] to halt immediately.
//!
//! # Trajectory
//!
//! The returned [`Solution`] carries a [`Trajectory`] with a copy of the
//! simplex before the first iteration and after every iteration, for
//! inspection or plotting.

mod action;
mod config;
mod error;
mod event;
mod minimizer;
mod node;
mod search;
mod simplex;
mod solution;
mod step;
mod trajectory;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use minimizer::NelderMead;
pub use node::Node;
pub use simplex::Simplex;
pub use solution::{Solution, Status};
pub use step::Step;
pub use trajectory::Trajectory;

use descend_core::{Objective, Observer};

use search::search;

/// Finds a local minimum of the objective using the Nelder-Mead simplex search.
///
/// The observer receives an [`Event`] after every iteration.
/// See the [module docs](self) for details on the algorithm and termination.
///
/// # Errors
///
/// Returns an error if `N` is zero or `x0` has non-finite coordinates.
pub fn minimize<F, Obs, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(objective, x0, config, observer)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N` is zero or `x0` has non-finite coordinates.
pub fn minimize_unobserved<F, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
{
    minimize(objective, x0, config, ())
}
