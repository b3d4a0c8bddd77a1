use serde::{Deserialize, Serialize};

use crate::QuadsysError;

/// Shape of a generated system: how many variables, and how dense each
/// right-hand side is.
///
/// Fields are public so a configuration can be assembled or deserialized
/// directly; [SystemConfig::validate] is applied again by
/// [crate::Generator::new] before anything is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Number of variables, and therefore of equations
    pub nvars: usize,
    /// Fraction of all monomials that appear in each right-hand side, in (0, 1]
    pub density: f64,
}

impl SystemConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [QuadsysError::InvalidVariableCount] for `nvars == 0`,
    /// [QuadsysError::InvalidDensity] when `density` is not in (0, 1] and
    /// [QuadsysError::TooFewVariables] when no monomial can be formed.
    pub fn new(nvars: usize, density: f64) -> Result<Self, QuadsysError> {
        let config = Self { nvars, density };
        config.validate()?;
        Ok(config)
    }

    /// Set the number of variables
    pub fn with_nvars(mut self, nvars: usize) -> Self {
        self.nvars = nvars;
        self
    }

    /// Set the density
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn validate(&self) -> Result<(), QuadsysError> {
        if self.nvars == 0 {
            return Err(QuadsysError::InvalidVariableCount);
        }
        // NaN fails both comparisons
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(QuadsysError::InvalidDensity(self.density));
        }
        if self.nvars < 2 {
            return Err(QuadsysError::TooFewVariables(self.nvars));
        }
        Ok(())
    }

    /// Size of the monomial universe, C(n, 2)
    pub fn universe_size(&self) -> usize {
        self.nvars * self.nvars.saturating_sub(1) / 2
    }

    /// Number of non-zero coefficients per equation, constant included.
    ///
    /// `k = floor(density * C(n, 2))`, raised to 2 so every right-hand side
    /// keeps at least one monomial next to its constant.
    pub fn term_budget(&self) -> usize {
        let k = (self.density * self.universe_size() as f64).floor() as usize;
        k.max(2)
    }
}
