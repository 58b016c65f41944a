/// A scalar objective over points in ℝᴺ.
///
/// The function should be total: it is called at arbitrary real points and
/// may return a non-finite value where it is undefined. Solvers decide how
/// to treat such values.
///
/// Closures of the form `Fn(&[f64; N]) -> f64` implement this trait.
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;
}

impl<F, const N: usize> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}

/// An objective that can report its gradient alongside its value.
///
/// Gradient-based minimizers consume this trait. Value and gradient are
/// returned together because penalized objectives share most of the work
/// between the two.
///
/// Closures of the form `Fn(&[f64; N]) -> (f64, [f64; N])` implement this trait.
pub trait SmoothObjective<const N: usize> {
    /// Evaluates the objective and its gradient at `x`.
    fn value_and_gradient(&self, x: &[f64; N]) -> (f64, [f64; N]);
}

impl<F, const N: usize> SmoothObjective<N> for F
where
    F: Fn(&[f64; N]) -> (f64, [f64; N]),
{
    fn value_and_gradient(&self, x: &[f64; N]) -> (f64, [f64; N]) {
        self(x)
    }
}
