//! Solvers for unconstrained minimization problems.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search over ℝᴺ; only needs an
//!   [`Objective`]
//! - [`bfgs`] — quasi-Newton descent with a backtracking line search; needs a
//!   [`SmoothObjective`]
//!
//! Both implement [`UnconstrainedMinimizer`] and can serve as the inner solver
//! of a [`penalty`](crate::constrained::penalty) loop.
//!
//! [`Objective`]: descend_core::Objective
//! [`SmoothObjective`]: descend_core::SmoothObjective
//! [`UnconstrainedMinimizer`]: descend_core::UnconstrainedMinimizer

pub mod bfgs;
pub mod nelder_mead;
