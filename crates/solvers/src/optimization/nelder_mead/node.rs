use descend_core::Objective;

/// A simplex vertex paired with its cached objective value.
///
/// Nodes are only created by evaluating the objective, so the cached value
/// always belongs to the stored point. Moving a vertex means building a new
/// node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<const N: usize> {
    x: [f64; N],
    value: f64,
}

impl<const N: usize> Node<N> {
    /// Evaluates `objective` at `x` and caches the result.
    pub(super) fn evaluate<F: Objective<N>>(objective: &F, x: [f64; N]) -> Self {
        let value = objective.value(&x);
        Self { x, value }
    }

    /// Returns the vertex coordinates.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        &self.x
    }

    /// Returns the objective value at [`x`](Self::x).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluate_caches_objective() {
        let node = Node::evaluate(&|x: &[f64; 2]| x[0] * x[1], [3.0, -2.0]);

        assert_eq!(node.x(), &[3.0, -2.0]);
        assert_relative_eq!(node.value(), -6.0);
    }
}
