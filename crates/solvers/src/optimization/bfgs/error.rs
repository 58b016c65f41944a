/// Errors that can occur during a BFGS minimization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tolerance must be finite and non-negative, got {0}")]
    Tolerance(f64),

    #[error("objective or gradient is non-finite at the initial point")]
    NonFiniteStart,
}
