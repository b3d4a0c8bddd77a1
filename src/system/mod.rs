pub mod config;
pub mod equation;
pub mod monomial;
pub mod sampling;
pub mod variable;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::QuadsysError;
use config::SystemConfig;
use equation::{Equation, Term};
use monomial::Monomial;
use sampling::{dirichlet_uniform, sample_distinct};
use variable::Variable;

/// Builds random sparse quadratic systems of a fixed shape.
///
/// The variable list and the monomial universe are computed once in
/// [Generator::new] and only read afterwards, so a single generator can be
/// shared across threads and reused for any number of systems.
///
/// # Example
///
/// ```rust
/// use quadsys::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let generator = Generator::new(SystemConfig::new(3, 1.0)?)?;
/// let system = generator.generate(&mut StdRng::seed_from_u64(1));
/// assert_eq!(system.len(), 3);
/// for eq in system.iter() {
///     assert_eq!(eq.terms().len(), 2);
/// }
/// # Ok::<(), quadsys::QuadsysError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    config: SystemConfig,
    variables: Vec<Variable>,
    universe: Vec<Monomial>,
    budget: usize,
}

impl Generator {
    /// Prepare a generator for `config`.
    ///
    /// # Errors
    ///
    /// Any error of [SystemConfig::validate], or
    /// [QuadsysError::InfeasibleSparsity] when an equation would need more
    /// distinct monomials than exist.
    pub fn new(config: SystemConfig) -> Result<Self, QuadsysError> {
        config.validate()?;
        let variables = variable::variables(config.nvars);
        let universe = monomial::universe(&variables);
        let budget = config.term_budget();
        if budget - 1 > universe.len() {
            return Err(QuadsysError::InfeasibleSparsity {
                requested: budget - 1,
                available: universe.len(),
            });
        }
        tracing::debug!(
            nvars = config.nvars,
            density = config.density,
            universe = universe.len(),
            budget,
            "prepared monomial universe"
        );
        Ok(Self {
            config,
            variables,
            universe,
            budget,
        })
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn universe(&self) -> &[Monomial] {
        &self.universe
    }

    /// Coefficients per equation, constant included
    pub fn term_budget(&self) -> usize {
        self.budget
    }

    /// Draw the defining equation of `lhs`.
    ///
    /// Picks `k - 1` distinct monomials and a Dirichlet(1, .., 1) vector of
    /// length `k`. The i-th coefficient weighs the i-th drawn monomial and the
    /// last one is the constant.
    pub fn equation<R: Rng + ?Sized>(&self, lhs: Variable, rng: &mut R) -> Equation {
        let monomials = sample_distinct(rng, &self.universe, self.budget - 1);
        let mut coefficients = dirichlet_uniform(rng, self.budget);
        // budget >= 2, so there is always a last entry
        let constant = coefficients.pop().unwrap_or_default();
        let terms: Vec<Term> = coefficients
            .into_iter()
            .zip(monomials)
            .map(|(coefficient, monomial)| Term {
                coefficient,
                monomial,
            })
            .collect();
        tracing::trace!(lhs = %lhs, terms = terms.len(), "drew equation");
        Equation::new(lhs, terms, constant)
    }

    /// Draw one equation per variable, in index order, from a single source
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> EquationSystem {
        let mut equations = Vec::with_capacity(self.variables.len());
        for &lhs in &self.variables {
            equations.push(self.equation(lhs, rng));
        }
        EquationSystem { equations }
    }

    /// Parallel variant of [Generator::generate].
    ///
    /// One seed per equation is drawn from `rng` in index order before the
    /// parallel section; each equation then samples from its own [StdRng].
    /// The result depends only on the state of `rng`, not on scheduling, but
    /// differs from what [Generator::generate] draws from the same state.
    pub fn generate_par<R: Rng + ?Sized>(&self, rng: &mut R) -> EquationSystem {
        let seeds: Vec<<StdRng as SeedableRng>::Seed> =
            self.variables.iter().map(|_| rng.random()).collect();
        let equations = self
            .variables
            .par_iter()
            .zip(seeds.into_par_iter())
            .map(|(&lhs, seed)| {
                let mut local = StdRng::from_seed(seed);
                self.equation(lhs, &mut local)
            })
            .collect();
        EquationSystem { equations }
    }
}

/// A generated system, one equation per variable in index order
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem {
    equations: Vec<Equation>,
}

impl EquationSystem {
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.equations.iter()
    }

    /// Write one rule per line
    pub fn emit<W: Write>(&self, mut writer: W) -> Result<(), QuadsysError> {
        for eq in &self.equations {
            writeln!(writer, "{}", eq)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl IntoIterator for EquationSystem {
    type Item = Equation;
    type IntoIter = std::vec::IntoIter<Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.equations.into_iter()
    }
}

impl<'a> IntoIterator for &'a EquationSystem {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.equations.iter()
    }
}

/// Generate a system of `nvars` equations with the given density and write
/// it to `writer`, one rule per line.
///
/// Parameters are checked before anything is drawn or written, so an invalid
/// request produces no output at all.
pub fn generate<R, W>(nvars: usize, density: f64, rng: &mut R, writer: W) -> Result<(), QuadsysError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let generator = Generator::new(SystemConfig::new(nvars, density)?)?;
    generator.generate(rng).emit(writer)
}
