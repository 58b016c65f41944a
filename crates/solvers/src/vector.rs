//! Small arithmetic helpers on fixed-size points.

/// Returns `a + scale * b`.
pub(crate) fn add_scaled<const N: usize>(a: &[f64; N], scale: f64, b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + scale * b[i])
}

/// Returns `a - b`.
pub(crate) fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

pub(crate) fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean distance between two points.
pub(crate) fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    let diff = sub(a, b);
    dot(&diff, &diff).sqrt()
}

/// Largest absolute component (∞-norm).
pub(crate) fn max_abs<const N: usize>(a: &[f64; N]) -> f64 {
    a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

pub(crate) fn all_finite<const N: usize>(a: &[f64; N]) -> bool {
    a.iter().all(|v| v.is_finite())
}
