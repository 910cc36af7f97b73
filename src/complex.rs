//! Complex number primitive underlying all coefficient arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::{PolyError, Result};

/// Absolute tolerance for zero and equality tests on floating results.
pub const EPSILON: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Divides by `rhs` using the conjugate over the squared modulus.
    ///
    /// Fails with `DivisionByZero` when both components of `rhs` are within
    /// tolerance of zero, so the denominator never reaches zero and NaN
    /// never leaks into a result.
    pub fn divide(&self, rhs: &Complex) -> Result<Complex> {
        if rhs.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let modulus = rhs.re * rhs.re + rhs.im * rhs.im;
        Ok(Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / modulus,
            (self.im * rhs.re - self.re * rhs.im) / modulus,
        ))
    }

    pub fn is_real(&self) -> bool {
        self.im.abs() < EPSILON
    }

    /// True when the value is the real unit within tolerance.
    pub fn is_unit(&self) -> bool {
        self.is_real() && (self.re - 1.0).abs() < EPSILON
    }

    pub fn approx_eq(&self, other: &Complex) -> bool {
        (self.re - other.re).abs() < EPSILON && (self.im - other.im).abs() < EPSILON
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    /// Both components within tolerance of zero.
    fn is_zero(&self) -> bool {
        self.re.abs() < EPSILON && self.im.abs() < EPSILON
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    // (a+bi)(c+di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            return write!(f, "{}", trim_fixed(self.re));
        }
        let imag = trim_fixed(self.im.abs());
        if self.re.abs() < EPSILON {
            let sign = if self.im >= 0.0 { "" } else { "-" };
            write!(f, "{sign}{imag}i")
        } else {
            let sign = if self.im >= 0.0 { '+' } else { '-' };
            write!(f, "{}{sign}{imag}i", trim_fixed(self.re))
        }
    }
}

/// Fixed-point with four decimal places, insignificant trailing zeros
/// (and a bare trailing `.`) trimmed.
fn trim_fixed(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
