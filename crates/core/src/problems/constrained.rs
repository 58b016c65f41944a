/// Defines a constrained minimization problem.
///
/// A constrained problem supplies an objective `f(x)` with its gradient, `M`
/// inequality constraints `g(x) ≤ 0` with their Jacobian, and optionally a set
/// of equality constraints `h(x) = 0` with their Jacobian.
///
/// The const generic `N` is the number of solver variables and `M` the number
/// of inequality constraints. Every method must be a pure function of `x`;
/// penalty solvers call them at arbitrary points, including infeasible ones.
///
/// Equality constraints are optional. The default implementations report none,
/// which is what most problems want.
pub trait ConstrainedProblem<const N: usize, const M: usize> {
    /// Evaluates the objective `f(x)`.
    fn objective(&self, x: &[f64; N]) -> f64;

    /// Evaluates the objective gradient `∇f(x)`.
    fn gradient(&self, x: &[f64; N]) -> [f64; N];

    /// Evaluates the inequality constraints `g(x)`, satisfied when `g(x) ≤ 0`.
    fn inequality(&self, x: &[f64; N]) -> [f64; M];

    /// Evaluates the inequality Jacobian; row `i` is `∇gᵢ(x)`.
    fn inequality_jacobian(&self, x: &[f64; N]) -> [[f64; N]; M];

    /// Evaluates the equality constraints `h(x)`, satisfied when `h(x) = 0`.
    fn equality(&self, _x: &[f64; N]) -> Vec<f64> {
        Vec::new()
    }

    /// Evaluates the equality Jacobian; row `j` is `∇hⱼ(x)`.
    ///
    /// Must return one row per value returned by [`equality`](Self::equality).
    fn equality_jacobian(&self, _x: &[f64; N]) -> Vec<[f64; N]> {
        Vec::new()
    }
}
