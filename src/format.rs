//! Rendering coefficient sequences back to algebraic display text.

use num_traits::Zero;

use crate::divide::DivisionResult;
use crate::polynomial::Polynomial;

/// Renders a coefficient sequence as algebraic text, e.g.
/// `x^2 + (-5)x + (6)`.
///
/// Near-zero coefficients are skipped, a real-unit coefficient on a
/// variable term is suppressed, and every other coefficient is
/// parenthesized so the output re-parses unambiguously. An all-zero
/// sequence renders as `0`.
pub fn format_polynomial(poly: &Polynomial) -> String {
    let coeffs = poly.coeffs();
    let mut out = String::new();
    for (index, coefficient) in coeffs.iter().enumerate() {
        if coefficient.is_zero() {
            continue;
        }
        let exponent = coeffs.len() - 1 - index;
        if !out.is_empty() {
            out.push_str(" + ");
        }
        if !(exponent > 0 && coefficient.is_unit()) {
            out.push('(');
            out.push_str(&coefficient.to_string());
            out.push(')');
        }
        if exponent > 0 {
            out.push('x');
            if exponent > 1 {
                out.push('^');
                out.push_str(&exponent.to_string());
            }
        }
    }
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// Renders the verification identity
/// `dividend = (quotient)(divisor) + remainder`.
pub fn format_identity(
    dividend: &Polynomial,
    divisor: &Polynomial,
    result: &DivisionResult,
) -> String {
    format!(
        "{} = ({})({}) + {}",
        format_polynomial(dividend),
        format_polynomial(&result.quotient),
        format_polynomial(divisor),
        format_polynomial(&result.remainder),
    )
}
