//! Numerical solvers for the Descend framework.
//!
//! # Modules
//!
//! - [`optimization`] — unconstrained minimization: the derivative-free
//!   [`nelder_mead`](optimization::nelder_mead) simplex search and the
//!   gradient-based [`bfgs`](optimization::bfgs) quasi-Newton method
//! - [`constrained`] — constrained minimization by the
//!   [`penalty`](constrained::penalty) method, which delegates each
//!   subproblem to any [`UnconstrainedMinimizer`]
//!
//! [`UnconstrainedMinimizer`]: descend_core::UnconstrainedMinimizer

pub mod constrained;
pub mod optimization;

mod vector;
