//! Parser turning free-form algebraic text into coefficient sequences.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::error::VerboseError;
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};
use num_traits::One;

use crate::complex::Complex;
use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// One additive term: an optional negation, an optional textual
/// coefficient, and the exponent carried by the variable part.
#[derive(Clone, Debug)]
struct Term<'a> {
    negative: bool,
    coefficient: Option<&'a str>,
    exponent: usize,
}

/// Parses an algebraic polynomial in `x` into a coefficient sequence,
/// highest degree first.
///
/// Accepts implicit unit coefficients (`x`, `-x`, `x^3`), complex literals
/// with a trailing `i` (`2ix^2`, `3+2i`), and parenthesized coefficients as
/// emitted by the formatter (`(3+2i)x`). Terms targeting the same exponent
/// accumulate, so `2x + 3x` collapses to `5x`.
pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(PolyError::MissingInput);
    }
    let (_, terms) = all_consuming(parse_terms)(stripped.as_str())
        .map_err(|_| PolyError::InvalidNumber(stripped.clone()))?;

    let degree = terms.iter().map(|t| t.exponent).max().unwrap_or(0);
    let mut coeffs = vec![Complex::ZERO; degree + 1];
    for term in terms {
        let mut value = match term.coefficient {
            Some(text) => coefficient_value(text)?,
            None => Complex::one(),
        };
        if term.negative {
            value = -value;
        }
        let slot = degree - term.exponent;
        coeffs[slot] = coeffs[slot] + value;
    }
    Ok(Polynomial::from_coeffs(coeffs))
}

fn parse_terms(input: &str) -> IResult<&str, Vec<Term<'_>>, VerboseError<&str>> {
    let (rest, (sign, body)) = pair(opt(one_of("+-")), parse_body)(input)?;
    let (rest, tail) = many0(pair(one_of("+-"), parse_body))(rest)?;

    let mut terms = vec![term(sign, body)];
    terms.extend(tail.into_iter().map(|(sign, body)| term(Some(sign), body)));
    Ok((rest, terms))
}

fn term<'a>(sign: Option<char>, body: (Option<&'a str>, usize)) -> Term<'a> {
    let (coefficient, exponent) = body;
    Term {
        negative: sign == Some('-'),
        coefficient,
        exponent,
    }
}

fn parse_body(input: &str) -> IResult<&str, (Option<&str>, usize), VerboseError<&str>> {
    alt((
        map(pair(parse_coefficient, opt(parse_x_part)), |(c, e)| {
            (Some(c), e.unwrap_or(0))
        }),
        map(parse_x_part, |e| (None, e)),
    ))(input)
}

fn parse_coefficient(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    alt((
        delimited(char('('), take_until(")"), char(')')),
        take_while1(|c: char| !matches!(c, '+' | '-' | 'x' | '(' | ')')),
    ))(input)
}

fn parse_x_part(input: &str) -> IResult<&str, usize, VerboseError<&str>> {
    preceded(
        char('x'),
        map(
            opt(preceded(char('^'), map_res(digit1, str::parse::<usize>))),
            |exponent| exponent.unwrap_or(1),
        ),
    )(input)
}

/// An empty or sign-only coefficient slot stands for the implicit unit.
fn coefficient_value(text: &str) -> Result<Complex> {
    match text {
        "" | "+" => Ok(Complex::one()),
        "-" => Ok(-Complex::one()),
        _ => parse_complex(text),
    }
}

/// Parses a complex literal such as `3+2i`, `-2i`, `2.5`, or a bare `i`.
///
/// Once an `i` is present, the last sign not in the leading position splits
/// the real half from the imaginary half; with no such sign the whole body
/// is imaginary. An unparseable real half defaults to 0 and an unparseable
/// imaginary half to 1, the bare-`i` convention.
pub fn parse_complex(input: &str) -> Result<Complex> {
    let text: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if text.is_empty() {
        return Err(PolyError::MissingInput);
    }
    if !text.contains('i') {
        return text
            .parse::<f64>()
            .map(Complex::from_real)
            .map_err(|_| PolyError::InvalidNumber(text));
    }

    let body: String = text.chars().filter(|&c| c != 'i').collect();
    match body.as_str() {
        "" | "+" => return Ok(Complex::new(0.0, 1.0)),
        "-" => return Ok(Complex::new(0.0, -1.0)),
        _ => {}
    }

    let split = body
        .char_indices()
        .filter(|&(pos, c)| pos > 0 && (c == '+' || c == '-'))
        .map(|(pos, _)| pos)
        .last();
    let value = match split {
        Some(pos) => Complex::new(
            body[..pos].parse().unwrap_or(0.0),
            body[pos..].parse().unwrap_or(1.0),
        ),
        None => Complex::new(0.0, body.parse().unwrap_or(1.0)),
    };
    Ok(value)
}
