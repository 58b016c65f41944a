use descend_core::Objective;

use crate::vector::{add_scaled, sub};

use super::{Node, Simplex};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const OUTSIDE_CONTRACTION: f64 = 0.5;
const INSIDE_CONTRACTION: f64 = -0.5;
const SHRINK: f64 = 0.5;

/// The transformation applied to the simplex during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The worst vertex was replaced by its reflection through the centroid.
    Reflect,

    /// The worst vertex was replaced by a point twice as far past the centroid.
    Expand,

    /// The worst vertex was replaced by a point halfway between the centroid
    /// and the reflection.
    OutsideContract,

    /// The worst vertex was replaced by a point halfway between the centroid
    /// and the worst vertex.
    InsideContract,

    /// Every vertex except the best was pulled halfway toward the best.
    Shrink,
}

/// Performs one Nelder-Mead iteration on a sorted simplex.
///
/// Candidate points lie on the line `xc + α·(xc − x_worst)` through the
/// centroid `xc` of all vertices except the worst.
pub(super) fn take_step<F, const N: usize>(simplex: &mut Simplex<N>, objective: &F) -> Step
where
    F: Objective<N>,
{
    let centroid = simplex.centroid();
    let worst = *simplex.worst();
    let direction = sub(&centroid, worst.x());
    let candidate = |alpha: f64| Node::evaluate(objective, add_scaled(&centroid, alpha, &direction));

    let best_value = simplex.best().value();
    let reflected = candidate(REFLECTION);

    if reflected.value() < best_value {
        let expanded = candidate(EXPANSION);
        return if expanded.value() < best_value {
            simplex.replace_worst(expanded);
            Step::Expand
        } else {
            simplex.replace_worst(reflected);
            Step::Reflect
        };
    }

    if reflected.value() <= simplex.second_worst().value() {
        simplex.replace_worst(reflected);
        return Step::Reflect;
    }

    if reflected.value() > worst.value() {
        let inside = candidate(INSIDE_CONTRACTION);
        if inside.value() < worst.value() {
            simplex.replace_worst(inside);
            return Step::InsideContract;
        }
    } else {
        let outside = candidate(OUTSIDE_CONTRACTION);
        if outside.value() < reflected.value() {
            simplex.replace_worst(outside);
            return Step::OutsideContract;
        }
    }

    simplex.shrink(objective, SHRINK);
    Step::Shrink
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn xs(simplex: &Simplex<1>) -> Vec<f64> {
        simplex.nodes().iter().map(|node| node.x()[0]).collect()
    }

    fn square(x: &[f64; 1]) -> f64 {
        x[0] * x[0]
    }

    /// x² everywhere except a spike at x = -0.5.
    fn spiked_square(x: &[f64; 1]) -> f64 {
        if (x[0] + 0.5).abs() < 1e-12 {
            100.0
        } else {
            x[0] * x[0]
        }
    }

    #[test]
    fn expands_when_expansion_beats_best() {
        let linear = |x: &[f64; 1]| x[0];
        let mut simplex = Simplex::from_points(&linear, [[0.0], [1.0]]);

        // Reflection lands at -1, expansion at -2.
        assert_eq!(take_step(&mut simplex, &linear), Step::Expand);
        assert_eq!(xs(&simplex), vec![-2.0, 0.0]);
    }

    #[test]
    fn reflects_when_expansion_does_not_beat_best() {
        let shifted = |x: &[f64; 1]| (x[0] + 1.0).powi(2);
        let mut simplex = Simplex::from_points(&shifted, [[0.0], [1.0]]);

        // Reflection at -1 is the minimum; expansion at -2 only ties the best.
        assert_eq!(take_step(&mut simplex, &shifted), Step::Reflect);
        assert_eq!(xs(&simplex), vec![-1.0, 0.0]);
    }

    #[test]
    fn reflects_when_no_worse_than_second_worst() {
        let mut simplex = Simplex::from_points(&square, [[1.0], [3.0]]);

        // Reflection at -1 ties the best (which is also the second worst in 1D).
        assert_eq!(take_step(&mut simplex, &square), Step::Reflect);
        assert_eq!(xs(&simplex), vec![1.0, -1.0]);
    }

    #[test]
    fn expands_along_centroid_line_in_two_dimensions() {
        let objective = |x: &[f64; 2]| x[0];
        let mut simplex = Simplex::from_points(&objective, [[0.0, 0.0], [1.0, 1.0], [1.5, -1.0]]);

        // Centroid (0.5, 0.5), reflection (-0.5, 2.0): better than the best.
        // Expansion (-1.5, 3.5) is better still.
        assert_eq!(take_step(&mut simplex, &objective), Step::Expand);
        assert_eq!(simplex.best().x(), &[-1.5, 3.5]);
    }

    #[test]
    fn outside_contraction_when_reflection_between_second_worst_and_worst() {
        let mut simplex = Simplex::from_points(&square, [[1.0], [4.0]]);

        // Reflection at -2 (4) sits between best (1) and worst (16).
        // Outside contraction at -0.5 (0.25) improves on it.
        assert_eq!(take_step(&mut simplex, &square), Step::OutsideContract);
        assert_eq!(xs(&simplex), vec![-0.5, 1.0]);
    }

    #[test]
    fn shrinks_when_outside_contraction_fails() {
        let mut simplex = Simplex::from_points(&spiked_square, [[1.0], [4.0]]);

        assert_eq!(take_step(&mut simplex, &spiked_square), Step::Shrink);
        assert_eq!(xs(&simplex), vec![1.0, 2.5]);
        assert_relative_eq!(simplex.worst().value(), 6.25);
    }

    #[test]
    fn inside_contraction_when_reflection_worse_than_worst() {
        let mut simplex = Simplex::from_points(&square, [[1.0], [-2.0]]);

        // Reflection at 4 (16) is worse than the worst (4).
        // Inside contraction at -0.5 (0.25) improves on the worst.
        assert_eq!(take_step(&mut simplex, &square), Step::InsideContract);
        assert_eq!(xs(&simplex), vec![-0.5, 1.0]);
    }

    #[test]
    fn shrinks_when_inside_contraction_fails() {
        let mut simplex = Simplex::from_points(&spiked_square, [[1.0], [-2.0]]);

        assert_eq!(take_step(&mut simplex, &spiked_square), Step::Shrink);
        assert_eq!(simplex.best().x(), &[1.0]);
        assert_eq!(simplex.worst().x(), &[-0.5]);
    }

    #[test]
    fn best_value_never_worsens() {
        let rosenbrock =
            |x: &[f64; 2]| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2);
        let mut simplex = Simplex::regular(&rosenbrock, [-1.2, 1.0], 0.5);

        let mut previous = simplex.best().value();
        for _ in 0..200 {
            take_step(&mut simplex, &rosenbrock);
            let current = simplex.best().value();
            assert!(current <= previous);
            previous = current;
        }
    }
}
