use std::f64::consts::SQRT_2;

use descend_core::Objective;

use crate::vector::{add_scaled, distance, sub};

use super::{Config, Node};

/// The `N + 1` vertices of a simplex in ℝᴺ, ordered best to worst.
///
/// The vertex count never changes during a search. Every mutation re-sorts
/// the vertices by value (stable, NaN last), so index `0` is always the best
/// vertex and index `N` the worst.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex<const N: usize> {
    nodes: Vec<Node<N>>,
}

impl<const N: usize> Simplex<N> {
    /// Builds a regular simplex with all edges of length `edge_length`.
    ///
    /// Vertex 0 is `x0`. Vertex `j + 1` offsets every coordinate of `x0` by
    /// `l/(N√2)·(√(N+1) − 1)` and coordinate `j` by an additional `l/√2`.
    pub(super) fn regular<F: Objective<N>>(objective: &F, x0: [f64; N], edge_length: f64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = N as f64;
        let shift = edge_length / (n * SQRT_2) * ((n + 1.0).sqrt() - 1.0);
        let stride = edge_length / SQRT_2;

        let vertices = (0..N).map(|j| {
            let mut x = x0.map(|v| v + shift);
            x[j] += stride;
            x
        });

        Self::from_points(objective, std::iter::once(x0).chain(vertices))
    }

    /// Evaluates each point and builds a sorted simplex from the results.
    pub(super) fn from_points<F, I>(objective: &F, points: I) -> Self
    where
        F: Objective<N>,
        I: IntoIterator<Item = [f64; N]>,
    {
        let nodes: Vec<_> = points
            .into_iter()
            .map(|x| Node::evaluate(objective, x))
            .collect();
        debug_assert_eq!(nodes.len(), N + 1, "a simplex in ℝᴺ has N + 1 vertices");

        let mut simplex = Self { nodes };
        simplex.sort();
        simplex
    }

    /// Returns the vertices, best first.
    #[must_use]
    pub fn nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// Returns the vertex with the lowest value.
    #[must_use]
    pub fn best(&self) -> &Node<N> {
        &self.nodes[0]
    }

    /// Returns the vertex with the highest value.
    #[must_use]
    pub fn worst(&self) -> &Node<N> {
        &self.nodes[N]
    }

    /// Returns the vertex just better than the worst.
    pub(super) fn second_worst(&self) -> &Node<N> {
        &self.nodes[N - 1]
    }

    /// Simplex size: the sum of distances from each vertex to the worst one.
    #[must_use]
    pub fn delta_x(&self) -> f64 {
        let worst = self.worst().x();
        self.nodes[..N]
            .iter()
            .map(|node| distance(node.x(), worst))
            .sum()
    }

    /// Population standard deviation of the vertex values.
    #[must_use]
    pub fn delta_f(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let count = self.nodes.len() as f64;
        let mean = self.nodes.iter().map(Node::value).sum::<f64>() / count;
        let variance = self
            .nodes
            .iter()
            .map(|node| (node.value() - mean).powi(2))
            .sum::<f64>()
            / count;
        variance.sqrt()
    }

    /// Returns true once both the size and the value spread are within tolerance.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.delta_x() <= config.x_tol() && self.delta_f() <= config.f_tol()
    }

    /// Mean of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        #[allow(clippy::cast_precision_loss)]
        let n = N as f64;
        let sum = self.nodes[..N]
            .iter()
            .fold([0.0; N], |acc, node| add_scaled(&acc, 1.0, node.x()));
        sum.map(|v| v / n)
    }

    /// Replaces the worst vertex with `node`.
    pub(super) fn replace_worst(&mut self, node: Node<N>) {
        self.nodes[N] = node;
        self.sort();
    }

    /// Pulls every vertex except the best toward it by `factor`.
    pub(super) fn shrink<F: Objective<N>>(&mut self, objective: &F, factor: f64) {
        let best = *self.best().x();
        for node in &mut self.nodes[1..] {
            let toward_best = sub(node.x(), &best);
            *node = Node::evaluate(objective, add_scaled(&best, factor, &toward_best));
        }
        self.sort();
    }

    fn sort(&mut self) {
        self.nodes.sort_by(|a, b| a.value().total_cmp(&b.value()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn bowl(x: &[f64; 2]) -> f64 {
        x[0].powi(2) + x[1].powi(2)
    }

    fn assert_equal_edges<const N: usize>(simplex: &Simplex<N>, edge_length: f64, tol: f64) {
        let nodes = simplex.nodes();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                let d = distance(a.x(), b.x());
                assert!(
                    (d - edge_length).abs() <= tol,
                    "edge {d} differs from {edge_length}"
                );
            }
        }
    }

    #[test]
    fn regular_simplex_in_two_dimensions() {
        let simplex = Simplex::regular(&bowl, [5.0, 5.0], 1.0);

        assert_eq!(simplex.nodes().len(), 3);
        assert_equal_edges(&simplex, 1.0, 1e-12);
        assert!(simplex.nodes().iter().any(|node| node.x() == &[5.0, 5.0]));
    }

    #[test]
    fn regular_simplex_in_five_dimensions() {
        let objective = |x: &[f64; 5]| x.iter().sum::<f64>();
        let simplex = Simplex::regular(&objective, [1.0, -2.0, 0.5, 3.0, 0.0], 2.5);

        assert_eq!(simplex.nodes().len(), 6);
        assert_equal_edges(&simplex, 2.5, 1e-12);
    }

    proptest! {
        #[test]
        fn regular_simplex_has_equal_edges(
            x0 in proptest::array::uniform3(-100.0..100.0_f64),
            edge_length in 0.01..10.0_f64,
        ) {
            let objective = |x: &[f64; 3]| x[0] - x[1] * x[2];
            let simplex = Simplex::regular(&objective, x0, edge_length);

            let nodes = simplex.nodes();
            for (i, a) in nodes.iter().enumerate() {
                for b in &nodes[i + 1..] {
                    let d = distance(a.x(), b.x());
                    prop_assert!((d - edge_length).abs() <= 1e-9 * (1.0 + edge_length));
                }
            }
        }
    }

    #[test]
    fn vertices_are_sorted_best_first() {
        let simplex = Simplex::from_points(&bowl, [[3.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);

        assert_eq!(simplex.best().x(), &[1.0, 0.0]);
        assert_eq!(simplex.second_worst().x(), &[2.0, 0.0]);
        assert_eq!(simplex.worst().x(), &[3.0, 0.0]);
    }

    #[test]
    fn nan_values_sort_last() {
        let objective = |x: &[f64; 1]| if x[0] > 1.0 { f64::NAN } else { x[0] };
        let simplex = Simplex::from_points(&objective, [[2.0], [0.5]]);

        assert_eq!(simplex.best().x(), &[0.5]);
        assert!(simplex.worst().value().is_nan());
    }

    #[test]
    fn centroid_excludes_worst() {
        let simplex = Simplex::from_points(&bowl, [[0.0, 0.0], [2.0, 0.0], [10.0, 10.0]]);

        assert_eq!(simplex.centroid(), [1.0, 0.0]);
    }

    #[test]
    fn delta_x_sums_distances_to_worst() {
        let simplex = Simplex::from_points(&bowl, [[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]]);

        // Worst is (3, 4): distances 5 and 4.
        assert_relative_eq!(simplex.delta_x(), 9.0);
    }

    #[test]
    fn delta_f_is_population_standard_deviation() {
        let objective = |x: &[f64; 2]| x[0];
        let simplex = Simplex::from_points(&objective, [[1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);

        assert_relative_eq!(simplex.delta_f(), (2.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn convergence_needs_both_metrics() {
        // Constant objective: no value spread, but a large simplex.
        let flat = |_: &[f64; 2]| 1.0;
        let simplex = Simplex::regular(&flat, [0.0, 0.0], 1.0);
        let config = Config::new(1.0, 1e-6, 1e-6, 10).unwrap();

        assert_relative_eq!(simplex.delta_f(), 0.0);
        assert!(!simplex.is_converged(&config));

        let tiny = Simplex::regular(&flat, [0.0, 0.0], 1e-9);
        assert!(tiny.is_converged(&config));
    }

    #[test]
    fn replace_worst_keeps_order() {
        let mut simplex = Simplex::from_points(&bowl, [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);

        simplex.replace_worst(Node::evaluate(&bowl, [0.5, 0.0]));

        let xs: Vec<_> = simplex.nodes().iter().map(|node| node.x()[0]).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn shrink_keeps_best_and_halves_edges() {
        let mut simplex = Simplex::from_points(&bowl, [[0.0, 0.0], [2.0, 0.0], [0.0, 4.0]]);

        simplex.shrink(&bowl, 0.5);

        assert_eq!(simplex.best().x(), &[0.0, 0.0]);
        assert_eq!(simplex.nodes()[1].x(), &[1.0, 0.0]);
        assert_eq!(simplex.worst().x(), &[0.0, 2.0]);
        assert_relative_eq!(simplex.worst().value(), 4.0);
    }
}
