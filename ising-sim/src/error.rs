use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Engine parameters that cannot describe a lattice (size 0, non-finite couplings).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed run configuration or driver input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
