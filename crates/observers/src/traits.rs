//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasViolation`] — events that carry a constraint violation
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descend_core::Observer;
//! use descend_observers::traits::{CanStopEarly, HasViolation};
//!
//! struct FeasibleEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasViolation, A: CanStopEarly> Observer<E, A> for FeasibleEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.violation() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use descend_solvers::{constrained::penalty, optimization::nelder_mead};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a constraint violation.
pub trait HasViolation {
    /// Returns the constraint violation for this event.
    fn violation(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasObjective impls ---

/// The best cached value in the simplex.
impl<const N: usize> HasObjective for nelder_mead::Event<'_, N> {
    fn objective(&self) -> f64 {
        self.best().value()
    }
}

/// The unpenalized objective at the new iterate.
impl<const N: usize> HasObjective for penalty::Event<N> {
    fn objective(&self) -> f64 {
        self.iterate.objective
    }
}

// --- HasViolation for penalty::Event ---

impl<const N: usize> HasViolation for penalty::Event<N> {
    fn violation(&self) -> f64 {
        self.iterate.violation
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for penalty::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
