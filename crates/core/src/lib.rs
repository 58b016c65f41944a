//! Core traits and types for the Descend framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`] — a scalar function of a point in ℝᴺ
//! - [`SmoothObjective`] — an objective that also reports its gradient
//! - [`ConstrainedProblem`] — an objective with inequality (and optional
//!   equality) constraints and their Jacobians
//! - [`UnconstrainedMinimizer`] — the seam through which constrained solvers
//!   delegate to a local unconstrained solver
//! - [`Observer`] — receives solver events and optionally returns control actions

mod minimizer;
mod objective;
mod observer;
mod problems;

pub use minimizer::{Minimum, UnconstrainedMinimizer};
pub use objective::{Objective, SmoothObjective};
pub use observer::Observer;
pub use problems::ConstrainedProblem;
