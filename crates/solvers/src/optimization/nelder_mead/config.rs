use thiserror::Error;

/// Configuration for the Nelder-Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    edge_length: f64,
    x_tol: f64,
    f_tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("edge_length must be finite and positive")]
    EdgeLength,

    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("f_tol must be finite and non-negative")]
    FTol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 1e-6, 1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// - `edge_length` is the edge length of the initial regular simplex.
    /// - `x_tol` bounds the simplex size (sum of vertex distances to the worst vertex).
    /// - `f_tol` bounds the standard deviation of the vertex values.
    /// - `max_iters` caps the number of simplex transformations.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge_length` is not positive, a tolerance is
    /// negative, any value is non-finite, or `max_iters` is zero.
    pub fn new(
        edge_length: f64,
        x_tol: f64,
        f_tol: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !edge_length.is_finite() || edge_length <= 0.0 {
            return Err(ConfigError::EdgeLength);
        }
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }
        if !f_tol.is_finite() || f_tol < 0.0 {
            return Err(ConfigError::FTol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            edge_length,
            x_tol,
            f_tol,
            max_iters,
        })
    }

    /// Returns a copy of this config with both tolerances replaced by `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_tolerance(self, tol: f64) -> Result<Self, ConfigError> {
        Self::new(self.edge_length, tol, tol, self.max_iters)
    }

    /// Returns the edge length of the initial simplex.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Returns the tolerance on simplex size.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the tolerance on the spread of vertex values.
    #[must_use]
    pub fn f_tol(&self) -> f64 {
        self.f_tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 100);
        assert!(config.edge_length() > 0.0);
    }

    #[test]
    fn rejects_bad_edge_length() {
        assert_eq!(Config::new(0.0, 1e-6, 1e-6, 10), Err(ConfigError::EdgeLength));
        assert_eq!(Config::new(-1.0, 1e-6, 1e-6, 10), Err(ConfigError::EdgeLength));
        assert_eq!(
            Config::new(f64::INFINITY, 1e-6, 1e-6, 10),
            Err(ConfigError::EdgeLength)
        );
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(1.0, -1e-6, 1e-6, 10), Err(ConfigError::XTol));
        assert_eq!(Config::new(1.0, 1e-6, f64::NAN, 10), Err(ConfigError::FTol));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(1.0, 1e-6, 1e-6, 0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        assert!(Config::new(1.0, 0.0, 0.0, 1).is_ok());
    }

    #[test]
    fn with_tolerance_keeps_other_fields() {
        let config = Config::new(0.5, 1e-6, 1e-6, 42)
            .unwrap()
            .with_tolerance(1e-3)
            .unwrap();

        assert_eq!(config.edge_length(), 0.5);
        assert_eq!(config.max_iters(), 42);
        assert_eq!(config.x_tol(), 1e-3);
        assert_eq!(config.f_tol(), 1e-3);
    }
}
