//! Random sparse systems of quadratic equations.
//!
//! Every variable `x_i` of an `n`-variable system gets one defining equation
//! whose right-hand side is a convex combination of a few products `x_a x_b`
//! (`a != b`) plus a constant. Equations are written as grammar rules:
//!
//! ```text
//! <x0> ::= 0.37 <x0><x1> | 0.63;
//! ```
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut out = Vec::new();
//! quadsys::generate(3, 1.0, &mut StdRng::seed_from_u64(7), &mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! # Ok::<(), quadsys::QuadsysError>(())
//! ```
pub mod error;
pub mod system;

pub use crate::system::config::SystemConfig;
pub use crate::system::equation::{Equation, ParseEquationError, Term};
pub use crate::system::monomial::Monomial;
pub use crate::system::variable::Variable;
pub use crate::system::{generate, EquationSystem, Generator};
pub use error::QuadsysError;

pub mod prelude {
    pub use crate::system::{
        config::SystemConfig,
        equation::{Equation, Term},
        generate,
        monomial::Monomial,
        variable::Variable,
        EquationSystem, Generator,
    };
    pub use crate::QuadsysError;
}
