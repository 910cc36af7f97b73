//! Dense coefficient sequences, highest degree first.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::complex::Complex;

/// A polynomial as an ordered coefficient sequence. Index 0 holds the
/// coefficient of the highest present degree, the last index the constant
/// term, and the sequence is never empty: the zero polynomial is `[0]`.
///
/// Leading zero coefficients are kept exactly as given; the division engine
/// relies on seeing them to reject a non-normalized divisor.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Complex>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Polynomial {
            coeffs: vec![Complex::ZERO],
        }
    }

    pub fn constant(value: Complex) -> Self {
        Polynomial {
            coeffs: vec![value],
        }
    }

    /// Wraps a raw sequence; an empty vector becomes the zero polynomial.
    pub fn from_coeffs(coeffs: Vec<Complex>) -> Self {
        if coeffs.is_empty() {
            Polynomial::zero()
        } else {
            Polynomial { coeffs }
        }
    }

    pub fn coeffs(&self) -> &[Complex] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn leading(&self) -> Complex {
        self.coeffs[0]
    }

    pub fn coeff(&self, index: usize) -> Complex {
        self.coeffs.get(index).copied().unwrap_or(Complex::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Strips leading near-zero coefficients; a fully zero sequence
    /// collapses to `[0]`.
    pub fn trimmed(&self) -> Polynomial {
        let start = self
            .coeffs
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(self.coeffs.len());
        Polynomial::from_coeffs(self.coeffs[start..].to_vec())
    }

    pub fn scale(&self, factor: Complex) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| *c * factor).collect(),
        }
    }

    /// Coefficient-wise comparison within tolerance, ignoring leading zeros.
    pub fn approx_eq(&self, other: &Polynomial) -> bool {
        let a = self.trimmed();
        let b = other.trimmed();
        a.coeffs.len() == b.coeffs.len()
            && a.coeffs.iter().zip(&b.coeffs).all(|(x, y)| x.approx_eq(y))
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = vec![Complex::ZERO; len];
        let offset = len - self.coeffs.len();
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs[offset + i] = *c;
        }
        let offset = len - rhs.coeffs.len();
        for (i, c) in rhs.coeffs.iter().enumerate() {
            coeffs[offset + i] = coeffs[offset + i] + *c;
        }
        Polynomial { coeffs }
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        self + rhs.clone()
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self + (-rhs)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self - rhs.clone()
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        let mut coeffs = vec![Complex::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + *a * *b;
            }
        }
        Polynomial { coeffs }
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self * rhs.clone()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_polynomial(self))
    }
}
