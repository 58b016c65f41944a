//! Solvers for constrained minimization problems.
//!
//! # Solvers
//!
//! - [`penalty`] — sequential penalty method; turns a [`ConstrainedProblem`]
//!   into a series of unconstrained subproblems solved by any
//!   [`UnconstrainedMinimizer`]
//!
//! [`ConstrainedProblem`]: descend_core::ConstrainedProblem
//! [`UnconstrainedMinimizer`]: descend_core::UnconstrainedMinimizer

pub mod penalty;
