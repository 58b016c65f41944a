//! An observer that records the objective reported by each event.

use descend_core::Observer;

use crate::traits::HasObjective;

/// Records the objective of every observed event, in order.
///
/// Works with any event implementing [`HasObjective`] and never acts.
/// Pass `&mut ObjectiveHistory` as the observer to inspect the values once
/// the solver returns.
///
/// # Example
///
/// ```rust
/// use descend_observers::ObjectiveHistory;
/// use descend_solvers::optimization::nelder_mead;
///
/// let bowl = |x: &[f64; 2]| x[0].powi(2) + x[1].powi(2);
/// let mut history = ObjectiveHistory::new();
///
/// nelder_mead::minimize(&bowl, [5.0, 5.0], &nelder_mead::Config::default(), &mut history)
///     .unwrap();
///
/// assert!(history.is_non_increasing());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveHistory {
    values: Vec<f64>,
}

impl ObjectiveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn record(&mut self, objective: f64) {
        self.values.push(objective);
    }

    /// Returns the recorded values in observation order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the last recorded value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns true if no value is greater than the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.values.windows(2).all(|pair| pair[1] <= pair[0])
    }
}

impl<E, A> Observer<E, A> for ObjectiveHistory
where
    E: HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.objective());
        None
    }
}

/// Allows `&mut ObjectiveHistory` to be passed to solvers that take an
/// observer by value.
impl<E, A> Observer<E, A> for &mut ObjectiveHistory
where
    E: HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
