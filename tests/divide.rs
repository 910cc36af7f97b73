use polydiv::{divide, parse_polynomial, Complex, PolyError, Polynomial};

fn poly(input: &str) -> Polynomial {
    parse_polynomial(input).expect("parse polynomial")
}

#[test]
fn quadratic_by_linear_factor() {
    let result = divide(&poly("x^2-5x+6"), &poly("x-2")).expect("divide");
    assert!(result.quotient.approx_eq(&poly("x-3")));
    assert!(result.remainder.is_zero());
}

#[test]
fn division_with_remainder() {
    let result = divide(&poly("x^2+1"), &poly("x+1")).expect("divide");
    assert!(result.quotient.approx_eq(&poly("x-1")));
    assert!(result.remainder.approx_eq(&poly("2")));
}

#[test]
fn lower_degree_dividend_passes_through() {
    let dividend = poly("x+1");
    let result = divide(&dividend, &poly("x^2+1")).expect("divide");
    assert!(result.quotient.is_zero());
    assert!(result.remainder.approx_eq(&dividend));
    assert!(result.steps.is_empty());
}

#[test]
fn interior_zero_coefficients_survive() {
    let result = divide(&poly("x^3+1"), &poly("x")).expect("divide");
    assert!(result.quotient.approx_eq(&poly("x^2")));
    assert_eq!(result.quotient.coeffs().len(), 3);
    assert!(result.remainder.approx_eq(&poly("1")));
}

#[test]
fn complex_linear_divisor() {
    // (x^2 + 1) = (x - i)(x + i)
    let result = divide(&poly("x^2+1"), &poly("x-i")).expect("divide");
    assert!(result.quotient.approx_eq(&poly("x+i")));
    assert!(result.remainder.is_zero());
}

#[test]
fn division_by_constant_scales() {
    let result = divide(&poly("2x^2+4x-6"), &poly("2")).expect("divide");
    assert!(result.quotient.approx_eq(&poly("x^2+2x-3")));
    assert!(result.remainder.is_zero());
}

#[test]
fn step_trace_records_independent_snapshots() {
    let dividend = poly("x^2-5x+6");
    let result = divide(&dividend, &poly("x-2")).expect("divide");

    assert_eq!(result.steps.len(), 2);
    assert!(result.steps[0].remainder.approx_eq(&dividend));
    assert!(result.steps[0].coefficient.approx_eq(&Complex::new(1.0, 0.0)));
    assert!(result.steps[0].subtrahend.approx_eq(&poly("x-2")));
    assert!(result.steps[1].remainder.approx_eq(&poly("-3x+6")));
    assert!(result.steps[1]
        .coefficient
        .approx_eq(&Complex::new(-3.0, 0.0)));
    assert!(result.steps[1].subtrahend.approx_eq(&poly("-3x+6")));
}

#[test]
fn zero_leading_divisor_coefficient_fails() {
    assert!(matches!(
        divide(&poly("x^2+1"), &poly("0x+5")),
        Err(PolyError::DivisionByZero)
    ));
}

#[test]
fn zero_divisor_fails() {
    assert!(matches!(
        divide(&poly("x+1"), &poly("0")),
        Err(PolyError::DivisionByZero)
    ));
}

#[test]
fn reconstruction_matches_the_dividend() {
    let dividend = poly("x^4 + 2ix^3 - x + 5");
    let divisor = poly("x^2 + (1-1i)");
    let result = divide(&dividend, &divisor).expect("divide");
    assert!(result.reconstruct(&divisor).approx_eq(&dividend));
    assert!(result.remainder.is_zero() || result.remainder.degree() < divisor.degree());
}
