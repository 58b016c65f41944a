use crate::vector::dot;

/// Dense symmetric approximation of the inverse Hessian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InverseHessian<const N: usize> {
    rows: [[f64; N]; N],
}

impl<const N: usize> InverseHessian<N> {
    pub(super) fn identity() -> Self {
        Self {
            rows: std::array::from_fn(|i| std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 })),
        }
    }

    /// Returns `−H·g`.
    pub(super) fn descent_direction(&self, gradient: &[f64; N]) -> [f64; N] {
        self.apply(gradient).map(|v| -v)
    }

    /// Applies the BFGS update for step `s` and gradient change `y`.
    ///
    /// `H⁺ = H − ρ(Hy·sᵀ + s·(Hy)ᵀ) + (ρ²·yᵀHy + ρ)·s·sᵀ` with `ρ = 1/sᵀy`.
    /// Leaves `H` unchanged when `sᵀy ≤ 0`, which keeps it positive definite.
    /// Returns whether the update was applied.
    pub(super) fn update(&mut self, s: &[f64; N], y: &[f64; N]) -> bool {
        let sy = dot(s, y);
        if sy <= 0.0 || !sy.is_finite() {
            return false;
        }

        let rho = 1.0 / sy;
        let hy = self.apply(y);
        let yhy = dot(y, &hy);
        let scale = rho * rho * yhy + rho;

        for (i, row) in self.rows.iter_mut().enumerate() {
            for (j, h) in row.iter_mut().enumerate() {
                *h += -rho * (hy[i] * s[j] + s[i] * hy[j]) + scale * s[i] * s[j];
            }
        }
        true
    }

    fn apply(&self, v: &[f64; N]) -> [f64; N] {
        self.rows.map(|row| dot(&row, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn identity_gives_steepest_descent() {
        let h = InverseHessian::<2>::identity();
        assert_eq!(h.descent_direction(&[3.0, -4.0]), [-3.0, 4.0]);
    }

    #[test]
    fn update_satisfies_secant_condition() {
        let mut h = InverseHessian::<2>::identity();
        let s = [1.0, 0.5];
        let y = [2.0, 3.0];

        assert!(h.update(&s, &y));

        // H⁺·y = s
        let hy = h.apply(&y);
        assert_relative_eq!(hy[0], s[0], epsilon = 1e-12);
        assert_relative_eq!(hy[1], s[1], epsilon = 1e-12);
    }

    #[test]
    fn update_stays_symmetric() {
        let mut h = InverseHessian::<3>::identity();
        h.update(&[1.0, 0.2, -0.3], &[0.5, 1.0, 0.1]);
        h.update(&[-0.4, 0.7, 0.2], &[0.1, 0.9, 0.8]);

        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(h.rows[i][j], h.rows[j][i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn skips_update_without_positive_curvature() {
        let mut h = InverseHessian::<2>::identity();

        assert!(!h.update(&[1.0, 0.0], &[-1.0, 0.0]));
        assert_eq!(h, InverseHessian::identity());
    }
}
