use descend_core::ConstrainedProblem;

/// Returns `Σ|gᵢ(x)| + Σ|hⱼ(x)|`, the penalty loop's convergence metric.
///
/// Every constraint contributes its distance from equality, satisfied
/// inequalities included.
pub fn constraint_violation<P, const N: usize, const M: usize>(problem: &P, x: &[f64; N]) -> f64
where
    P: ConstrainedProblem<N, M>,
{
    let inequality: f64 = problem.inequality(x).iter().map(|g| g.abs()).sum();
    let equality: f64 = problem.equality(x).iter().map(|h| h.abs()).sum();
    inequality + equality
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct Box2;

    impl ConstrainedProblem<2, 2> for Box2 {
        fn objective(&self, x: &[f64; 2]) -> f64 {
            x[0] * x[1]
        }

        fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
            [x[1], x[0]]
        }

        fn inequality(&self, x: &[f64; 2]) -> [f64; 2] {
            [x[0] - 1.0, x[1] - 1.0]
        }

        fn inequality_jacobian(&self, _x: &[f64; 2]) -> [[f64; 2]; 2] {
            [[1.0, 0.0], [0.0, 1.0]]
        }

        fn equality(&self, x: &[f64; 2]) -> Vec<f64> {
            vec![x[0] + x[1] - 1.5]
        }

        fn equality_jacobian(&self, _x: &[f64; 2]) -> Vec<[f64; 2]> {
            vec![[1.0, 1.0]]
        }
    }

    #[test]
    fn sums_absolute_values_of_all_constraints() {
        // g = (1, −0.5), h = 1
        assert_relative_eq!(constraint_violation(&Box2, &[2.0, 0.5]), 1.0 + 0.5 + 1.0);
    }

    #[test]
    fn satisfied_inequalities_still_count() {
        assert_relative_eq!(constraint_violation(&Box2, &[1.0, 1.0]), 0.5);
        assert_relative_eq!(constraint_violation(&Box2, &[1.0, 0.5]), 0.5);
    }
}
