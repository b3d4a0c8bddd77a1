use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::monomial::Monomial;
use super::variable::Variable;

/// A weighted monomial on a right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: f64,
    pub monomial: Monomial,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coefficient, self.monomial)
    }
}

/// The defining equation of one variable:
/// `lhs = c_1 m_1 + .. + c_{k-1} m_{k-1} + c_k`.
///
/// Displays as a grammar rule, e.g. `<x0> ::= 0.37 <x0><x1> | 0.63;`.
/// Coefficients are written with the shortest representation that parses
/// back to the same `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    lhs: Variable,
    terms: Vec<Term>,
    constant: f64,
}

impl Equation {
    pub fn new(lhs: Variable, terms: Vec<Term>, constant: f64) -> Self {
        Self {
            lhs,
            terms,
            constant,
        }
    }

    pub fn lhs(&self) -> Variable {
        self.lhs
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Number of addends on the right-hand side, constant included
    pub fn addends(&self) -> usize {
        self.terms.len() + 1
    }

    /// All right-hand side coefficients, monomial terms first, constant last
    pub fn coefficients(&self) -> impl Iterator<Item = f64> + '_ {
        self.terms
            .iter()
            .map(|t| t.coefficient)
            .chain(std::iter::once(self.constant))
    }

    pub fn coefficient_sum(&self) -> f64 {
        self.coefficients().sum()
    }

    pub fn monomials(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.terms.iter().map(|t| t.monomial)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::= ", self.lhs.bracketed())?;
        for term in &self.terms {
            write!(f, "{} | ", term)?;
        }
        write!(f, "{};", self.constant)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseEquationError {
    #[error("rule must end with ';'")]
    MissingTerminator,
    #[error("rule must contain ' ::= '")]
    MissingDefinition,
    #[error("invalid variable '{0}', expected <x<index>>")]
    InvalidVariable(String),
    #[error("invalid coefficient '{0}'")]
    InvalidCoefficient(String),
    #[error("invalid monomial term '{0}'")]
    InvalidMonomial(String),
    #[error("monomial '{0}' multiplies a variable with itself")]
    SelfProduct(String),
    #[error("right-hand side has no monomial term")]
    NoMonomials,
}

/// Parses `x<index>` (without brackets)
fn parse_name(name: &str) -> Result<Variable, ParseEquationError> {
    name.strip_prefix('x')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<usize>().ok())
        .map(Variable::new)
        .ok_or_else(|| ParseEquationError::InvalidVariable(name.to_string()))
}

/// Parses `<x<index>>`
fn parse_bracketed(text: &str) -> Result<Variable, ParseEquationError> {
    text.strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(|| ParseEquationError::InvalidVariable(text.to_string()))
        .and_then(parse_name)
}

fn parse_coefficient(text: &str) -> Result<f64, ParseEquationError> {
    text.parse::<f64>()
        .map_err(|_| ParseEquationError::InvalidCoefficient(text.to_string()))
}

/// Parses `c <xa><xb>`
fn parse_term(text: &str) -> Result<Term, ParseEquationError> {
    let invalid = || ParseEquationError::InvalidMonomial(text.to_string());
    let (coefficient, product) = text.split_once(' ').ok_or_else(invalid)?;
    let inner = product
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(invalid)?;
    let (a, b) = inner.split_once("><").ok_or_else(invalid)?;
    let monomial = Monomial::new(parse_name(a)?, parse_name(b)?)
        .ok_or_else(|| ParseEquationError::SelfProduct(product.to_string()))?;
    Ok(Term {
        coefficient: parse_coefficient(coefficient)?,
        monomial,
    })
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_suffix(';')
            .ok_or(ParseEquationError::MissingTerminator)?;
        let (lhs, rhs) = body
            .split_once(" ::= ")
            .ok_or(ParseEquationError::MissingDefinition)?;
        let lhs = parse_bracketed(lhs.trim())?;

        let mut parts: Vec<&str> = rhs.split(" | ").collect();
        // split always yields at least one part
        let constant = parse_coefficient(parts.pop().unwrap_or_default().trim())?;
        if parts.is_empty() {
            return Err(ParseEquationError::NoMonomials);
        }
        let terms = parts
            .into_iter()
            .map(|p| parse_term(p.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Equation::new(lhs, terms, constant))
    }
}
