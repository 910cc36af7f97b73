use polydiv::{
    divide, format_identity, format_polynomial, parse_polynomial, Complex, Polynomial,
};

fn poly(input: &str) -> Polynomial {
    parse_polynomial(input).expect("parse polynomial")
}

#[test]
fn integer_quadratic() {
    assert_eq!(format_polynomial(&poly("x^2-5x+6")), "x^2 + (-5)x + (6)");
}

#[test]
fn unit_coefficient_is_suppressed_on_variable_terms() {
    assert_eq!(format_polynomial(&poly("x")), "x");
    assert_eq!(format_polynomial(&poly("-x")), "(-1)x");
    assert_eq!(format_polynomial(&poly("1")), "(1)");
}

#[test]
fn near_zero_terms_are_skipped() {
    assert_eq!(format_polynomial(&poly("x^3+x")), "x^3 + x");
    assert_eq!(format_polynomial(&Polynomial::zero()), "0");
    let tiny = Polynomial::from_coeffs(vec![Complex::new(1e-12, 0.0)]);
    assert_eq!(format_polynomial(&tiny), "0");
}

#[test]
fn complex_coefficients_are_parenthesized() {
    let seq = Polynomial::from_coeffs(vec![Complex::new(3.0, 2.0), Complex::new(1.0, -1.0)]);
    assert_eq!(format_polynomial(&seq), "(3+2i)x + (1-1i)");
}

#[test]
fn formatted_text_reparses_to_the_same_text() {
    for input in ["x^2-5x+6", "(3+2i)x^2-4", "x^3+1", "2ix-7", "0"] {
        let text = format_polynomial(&poly(input));
        assert_eq!(
            format_polynomial(&poly(&text)),
            text,
            "round trip failed for {input}"
        );
    }
}

#[test]
fn identity_line_reads_back_the_division() {
    let dividend = poly("x^2+1");
    let divisor = poly("x+1");
    let result = divide(&dividend, &divisor).expect("divide");
    assert_eq!(
        format_identity(&dividend, &divisor, &result),
        "x^2 + (1) = (x + (-1))(x + (1)) + (2)"
    );
}
