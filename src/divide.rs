//! Long-division engine over coefficient sequences.

use crate::complex::Complex;
use crate::error::Result;
use crate::polynomial::Polynomial;

/// One elimination step: the remainder before the step, the quotient
/// coefficient it produced, and the scaled divisor that was subtracted.
///
/// The remainder is an independent snapshot, never a view into the working
/// buffer, so later iterations cannot disturb it.
#[derive(Clone, Debug)]
pub struct DivisionStep {
    pub remainder: Polynomial,
    pub coefficient: Complex,
    pub subtrahend: Polynomial,
}

#[derive(Clone, Debug)]
pub struct DivisionResult {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
    pub steps: Vec<DivisionStep>,
}

impl DivisionResult {
    /// Rebuilds `quotient * divisor + remainder`, the verification identity.
    pub fn reconstruct(&self, divisor: &Polynomial) -> Polynomial {
        self.quotient.clone() * divisor + &self.remainder
    }
}

/// Divides `dividend` by `divisor`, recording one [`DivisionStep`] per
/// quotient coefficient.
///
/// A dividend of lower degree divides trivially: quotient zero, remainder
/// the dividend itself, no steps. A divisor whose leading coefficient is
/// within tolerance of zero fails with `DivisionByZero` on the first step;
/// the failure propagates rather than being papered over.
pub fn divide(dividend: &Polynomial, divisor: &Polynomial) -> Result<DivisionResult> {
    if dividend.degree() < divisor.degree() {
        return Ok(DivisionResult {
            quotient: Polynomial::zero(),
            remainder: dividend.clone(),
            steps: Vec::new(),
        });
    }

    let window = divisor.coeffs().len();
    let lead = divisor.leading();
    let mut buffer = dividend.coeffs().to_vec();
    let mut start = 0;
    let mut quotient = Vec::new();
    let mut steps = Vec::new();

    // `start` advances every pass, so the loop runs exactly
    // dividend_len - divisor_len + 1 times. A near-zero leading remainder
    // entry yields a zero quotient coefficient and keeps going; cutting the
    // loop short there would truncate the quotient whenever the dividend
    // has interior zero coefficients.
    while buffer.len() - start >= window {
        let coefficient = buffer[start].divide(&lead)?;
        let subtrahend: Vec<Complex> = divisor.coeffs().iter().map(|c| *c * coefficient).collect();
        steps.push(DivisionStep {
            remainder: Polynomial::from_coeffs(buffer[start..].to_vec()),
            coefficient,
            subtrahend: Polynomial::from_coeffs(subtrahend.clone()),
        });
        // The head entry cancels to (near) zero here, which the advance of
        // `start` then drops from the live window.
        for (slot, s) in buffer[start..start + window].iter_mut().zip(&subtrahend) {
            *slot = *slot - *s;
        }
        quotient.push(coefficient);
        start += 1;
    }

    Ok(DivisionResult {
        quotient: Polynomial::from_coeffs(quotient),
        remainder: Polynomial::from_coeffs(buffer[start..].to_vec()).trimmed(),
        steps,
    })
}
