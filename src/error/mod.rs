use thiserror::Error;

use crate::system::equation::ParseEquationError;

#[derive(Error, Debug)]
pub enum QuadsysError {
    #[error("The number of variables must be a positive integer")]
    InvalidVariableCount,
    #[error("Density must lie in (0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("At least two variables are needed to form a monomial, got {0}")]
    TooFewVariables(usize),
    #[error("Cannot draw {requested} distinct monomials from a universe of {available}")]
    InfeasibleSparsity { requested: usize, available: usize },
    #[error("Failed to write equations: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse equation: {0}")]
    Parse(#[from] ParseEquationError),
}
