use polydiv::{divide, format_identity, format_polynomial, parse_polynomial, Result};

fn run(dividend_text: &str, divisor_text: &str) -> Result<()> {
    let dividend = parse_polynomial(dividend_text)?;
    let divisor = parse_polynomial(divisor_text)?;
    let result = divide(&dividend, &divisor)?;

    println!("({dividend_text}) / ({divisor_text})");
    for (number, step) in result.steps.iter().enumerate() {
        println!(
            "step {}: remainder {} | quotient coefficient {} | subtract {}",
            number + 1,
            format_polynomial(&step.remainder),
            step.coefficient,
            format_polynomial(&step.subtrahend),
        );
    }
    println!("quotient:  {}", format_polynomial(&result.quotient));
    println!("remainder: {}", format_polynomial(&result.remainder));
    println!("identity:  {}", format_identity(&dividend, &divisor, &result));
    Ok(())
}

fn main() {
    for (dividend, divisor) in [
        ("x^2 - 5x + 6", "x - 2"),
        ("x^3 + (2+1i)x^2 - 4", "x - 2i"),
    ] {
        if let Err(err) = run(dividend, divisor) {
            eprintln!("error: {err}");
        }
        println!();
    }
}
