use thiserror::Error;

/// Configuration for the BFGS solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_init: f64,
    contraction: f64,
    armijo: f64,
    max_backtracks: usize,
    max_iters: usize,
}

/// Errors that can occur when validating a BFGS solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_init must be finite and positive")]
    StepInit,

    #[error("contraction must be strictly between 0 and 1")]
    Contraction,

    #[error("armijo must be strictly between 0 and 1")]
    Armijo,

    #[error("max_backtracks must be at least 1")]
    MaxBacktracks,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 0.5, 1e-4, 60, 200).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// - `step_init` is the first step length tried along each search direction.
    /// - `contraction` scales the step after each rejected trial.
    /// - `armijo` is the sufficient decrease constant.
    /// - `max_backtracks` caps the trials per line search.
    /// - `max_iters` caps the number of quasi-Newton steps.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range.
    pub fn new(
        step_init: f64,
        contraction: f64,
        armijo: f64,
        max_backtracks: usize,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !step_init.is_finite() || step_init <= 0.0 {
            return Err(ConfigError::StepInit);
        }
        if !(contraction > 0.0 && contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !(armijo > 0.0 && armijo < 1.0) {
            return Err(ConfigError::Armijo);
        }
        if max_backtracks == 0 {
            return Err(ConfigError::MaxBacktracks);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            step_init,
            contraction,
            armijo,
            max_backtracks,
            max_iters,
        })
    }

    #[must_use]
    pub fn step_init(&self) -> f64 {
        self.step_init
    }

    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    #[must_use]
    pub fn armijo(&self) -> f64 {
        self.armijo
    }

    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
