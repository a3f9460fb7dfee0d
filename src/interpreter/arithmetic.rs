use crate::{error::MathError, interpreter::lexer::TrigFn};

/// Adds two numbers.
///
/// # Example
/// ```
/// use tricalc::interpreter::arithmetic::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// ```
#[must_use]
pub fn add(summand1: f64, summand2: f64) -> f64 {
    summand1 + summand2
}

/// Subtracts the subtrahend from the minuend.
#[must_use]
pub fn subtract(minuend: f64, subtrahend: f64) -> f64 {
    minuend - subtrahend
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(factor1: f64, factor2: f64) -> f64 {
    factor1 * factor2
}

/// Divides the dividend by the divisor.
///
/// # Parameters
/// - `dividend`: The value being divided.
/// - `divisor`: The value to divide by.
///
/// # Returns
/// The quotient as `f64`.
///
/// # Errors
/// Returns `MathError::DivisionByZero` when the divisor is exactly `0.0`.
///
/// # Example
/// ```
/// use tricalc::interpreter::arithmetic::divide;
///
/// assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, MathError> {
    if divisor == 0.0 {
        return Err(MathError::DivisionByZero);
    }

    Ok(dividend / divisor)
}

/// Applies a trigonometric function to an angle given in degrees.
///
/// User input is assumed to be in degrees, so the operand is converted to
/// radians before the function is applied.
///
/// # Parameters
/// - `function`: Which trigonometric function to apply.
/// - `degrees`: The angle in degrees.
///
/// # Returns
/// The function value as `f64`.
///
/// # Example
/// ```
/// use tricalc::interpreter::{arithmetic::apply_trig, lexer::TrigFn};
///
/// let s = apply_trig(TrigFn::Sin, 90.0);
/// assert!((s - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn apply_trig(function: TrigFn, degrees: f64) -> f64 {
    let radians = degrees.to_radians();

    match function {
        TrigFn::Sin => radians.sin(),
        TrigFn::Cos => radians.cos(),
        TrigFn::Tan => radians.tan(),
    }
}
