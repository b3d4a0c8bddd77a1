use std::fmt;

use serde::{Deserialize, Serialize};

/// A variable of the system, identified by its index.
///
/// Displays as `x<index>`; [Variable::bracketed] gives the `<x<index>>` form
/// used inside rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable(usize);

impl Variable {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn bracketed(&self) -> Bracketed {
        Bracketed(*self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Display adapter for `<x<index>>`
#[derive(Debug, Clone, Copy)]
pub struct Bracketed(Variable);

impl fmt::Display for Bracketed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// The variables `x0..x{n-1}` in index order
pub fn variables(n: usize) -> Vec<Variable> {
    (0..n).map(Variable::new).collect()
}
