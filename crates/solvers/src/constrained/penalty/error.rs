use super::ConfigError;

/// Errors that can occur during a penalty method solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial point has non-finite coordinates")]
    NonFiniteStart,

    #[error("interior penalty requires a strictly feasible start, but g[{index}] = {value}")]
    InfeasibleStart { index: usize, value: f64 },

    #[error("inner minimizer failed")]
    Minimizer(#[source] Box<dyn std::error::Error + Send + Sync>),
}
