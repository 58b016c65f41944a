//! Reusable observers for the Descend framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across different solvers in the Descend ecosystem.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasViolation`], [`CanStopEarly`])
//! - [`history`] — [`ObjectiveHistory`], which records the objective reported
//!   by each event
//!
//! [`Observer`]: descend_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasViolation`]: traits::HasViolation
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod history;
pub mod traits;

pub use history::ObjectiveHistory;
