use super::Iterate;

/// Emitted by the penalty method after every outer iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// Outer iterations completed, starting at 1.
    pub iter: usize,

    /// The iterate this outer iteration produced.
    pub iterate: Iterate<N>,
}

impl<const N: usize> Event<N> {
    /// Returns the new point.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        &self.iterate.x
    }

    /// Returns the constraint violation at the new point.
    #[must_use]
    pub fn violation(&self) -> f64 {
        self.iterate.violation
    }
}
