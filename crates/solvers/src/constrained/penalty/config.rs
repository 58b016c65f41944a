use thiserror::Error;

use super::Penalty;

/// Configuration for the penalty method.
///
/// Fields are public; [`minimize`](super::minimize) calls
/// [`validate`](Config::validate) before doing any work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Violation at or below which the loop stops, also the inner tolerance.
    pub epsilon_g: f64,

    /// Penalty family applied to the inequality constraints.
    pub penalty: Penalty,

    /// Initial equality constraint weight.
    pub uh: f64,

    /// Initial inequality constraint weight.
    pub ug: f64,

    /// Factor applied to both weights after every outer iteration.
    pub p: f64,

    /// Cap on the number of outer iterations.
    pub max_outer_iters: usize,
}

/// Errors that can occur when validating a penalty method config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon_g must be finite and positive")]
    EpsilonG,

    #[error("uh must be finite and positive")]
    Uh,

    #[error("ug must be finite and positive")]
    Ug,

    #[error("p must be finite and greater than 1 for an exterior penalty")]
    ExteriorEscalation,

    #[error("p must be strictly between 0 and 1 for an interior penalty")]
    InteriorEscalation,

    #[error("max_outer_iters must be at least 1")]
    MaxOuterIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon_g: 1e-6,
            penalty: Penalty::Exterior,
            uh: 1.0,
            ug: 1.0,
            p: 2.0,
            max_outer_iters: 100,
        }
    }
}

impl Config {
    /// Returns a default exterior config with the given weight and escalation.
    #[must_use]
    pub fn exterior(ug: f64, p: f64) -> Self {
        Self {
            penalty: Penalty::Exterior,
            ug,
            p,
            ..Self::default()
        }
    }

    /// Returns a default interior config with the given weight and reduction.
    #[must_use]
    pub fn interior(ug: f64, p: f64) -> Self {
        Self {
            penalty: Penalty::Interior,
            ug,
            p,
            ..Self::default()
        }
    }

    /// Sets the violation tolerance.
    #[must_use]
    pub fn with_epsilon_g(self, epsilon_g: f64) -> Self {
        Self { epsilon_g, ..self }
    }

    /// Checks that every field is in range for the chosen penalty family.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.epsilon_g) {
            return Err(ConfigError::EpsilonG);
        }
        if !positive(self.uh) {
            return Err(ConfigError::Uh);
        }
        if !positive(self.ug) {
            return Err(ConfigError::Ug);
        }
        match self.penalty {
            Penalty::Exterior if !(self.p.is_finite() && self.p > 1.0) => {
                return Err(ConfigError::ExteriorEscalation);
            }
            Penalty::Interior if !(self.p > 0.0 && self.p < 1.0) => {
                return Err(ConfigError::InteriorEscalation);
            }
            _ => {}
        }
        if self.max_outer_iters == 0 {
            return Err(ConfigError::MaxOuterIters);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.penalty, Penalty::Exterior);
        assert_eq!(config.epsilon_g, 1e-6);
        assert_eq!(config.max_outer_iters, 100);
    }

    #[test]
    fn escalation_depends_on_family() {
        assert_eq!(Config::exterior(1.0, 2.0).validate(), Ok(()));
        assert_eq!(
            Config::exterior(1.0, 0.5).validate(),
            Err(ConfigError::ExteriorEscalation)
        );
        assert_eq!(Config::interior(1.0, 0.5).validate(), Ok(()));
        assert_eq!(
            Config::interior(1.0, 2.0).validate(),
            Err(ConfigError::InteriorEscalation)
        );
        assert_eq!(
            Config::interior(1.0, 0.0).validate(),
            Err(ConfigError::InteriorEscalation)
        );
    }

    #[test]
    fn rejects_bad_tolerance_and_weights() {
        let config = Config::default().with_epsilon_g(0.0);
        assert_eq!(config.validate(), Err(ConfigError::EpsilonG));

        let config = Config {
            uh: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Uh));

        let config = Config::exterior(f64::NAN, 2.0);
        assert_eq!(config.validate(), Err(ConfigError::Ug));
    }

    #[test]
    fn rejects_zero_outer_iterations() {
        let config = Config {
            max_outer_iters: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxOuterIters));
    }
}
