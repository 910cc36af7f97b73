//! Symbolic long division of polynomials with complex coefficients: parsing
//! of free-form algebraic input, the division algorithm with its
//! intermediate-step trace, and display-text rendering.

pub mod complex;
pub mod divide;
pub mod error;
pub mod format;
pub mod parser;
pub mod polynomial;

pub use complex::Complex;
pub use divide::{divide, DivisionResult, DivisionStep};
pub use error::{PolyError, Result};
pub use format::{format_identity, format_polynomial};
pub use parser::{parse_complex, parse_polynomial};
pub use polynomial::Polynomial;
