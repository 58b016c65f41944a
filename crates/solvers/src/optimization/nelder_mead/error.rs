use super::ConfigError;

/// Errors that can occur during a simplex search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("cannot search a zero-dimensional space")]
    ZeroDimension,

    #[error("initial point has non-finite coordinates")]
    NonFiniteStart,
}
