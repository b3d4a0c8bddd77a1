use std::fmt;

use serde::{Deserialize, Serialize};

use super::variable::Variable;

/// A degree-2 product of two distinct variables.
///
/// The pair is unordered; it is stored with the lower index first so that
/// `x3*x1` and `x1*x3` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Monomial {
    first: Variable,
    second: Variable,
}

impl Monomial {
    /// Returns `None` when both factors are the same variable
    pub fn new(a: Variable, b: Variable) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> Variable {
        self.first
    }

    pub fn second(&self) -> Variable {
        self.second
    }

    pub fn contains(&self, var: Variable) -> bool {
        self.first == var || self.second == var
    }
}

/// Renders as `<xa><xb>`
impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first.bracketed(), self.second.bracketed())
    }
}

/// All C(n, 2) monomials over `vars`, in lexicographic combination order:
/// `(v0,v1), (v0,v2), .., (v0,vn-1), (v1,v2), ..`
pub fn universe(vars: &[Variable]) -> Vec<Monomial> {
    let mut monomials = Vec::with_capacity(vars.len() * vars.len().saturating_sub(1) / 2);
    for (i, &a) in vars.iter().enumerate() {
        for &b in &vars[i + 1..] {
            if let Some(m) = Monomial::new(a, b) {
                monomials.push(m);
            }
        }
    }
    monomials
}
