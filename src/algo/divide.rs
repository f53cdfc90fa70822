use log::debug;
use thiserror::Error;

/// The ways a guarded division can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DivisionErrorKind {
    #[error("division by zero")]
    ByZero,

    #[error("arithmetic failure: {0}")]
    Other(String),
}

/// Divide `x` by `y`, reporting failures as tagged values.
///
/// A zero divisor (of either sign) is [DivisionErrorKind::ByZero]. NaN
/// operands, undefined quotients (∞/∞), and overflow of a quotient of two
/// finite numbers are [DivisionErrorKind::Other].
///
/// ```
/// use algobox::algo::{safe_divide, DivisionErrorKind};
/// assert_eq!(safe_divide(4., 2.), Ok(2.));
/// assert_eq!(safe_divide(4., 0.), Err(DivisionErrorKind::ByZero));
/// ```
pub fn safe_divide(x: f64, y: f64) -> Result<f64, DivisionErrorKind> {
    if x.is_nan() || y.is_nan() {
        return Err(DivisionErrorKind::Other(format!(
            "non-numeric operand in {x} / {y}"
        )));
    }
    if y == 0. {
        return Err(DivisionErrorKind::ByZero);
    }

    let quotient = x / y;
    if quotient.is_nan() {
        return Err(DivisionErrorKind::Other(format!("{x} / {y} is undefined")));
    }
    if quotient.is_infinite() && x.is_finite() && y.is_finite() {
        return Err(DivisionErrorKind::Other(format!("{x} / {y} overflows")));
    }
    Ok(quotient)
}

/// [safe_divide] for operands given as text. Text not interpretable as a
/// number is [DivisionErrorKind::Other].
pub fn safe_divide_text(x: &str, y: &str) -> Result<f64, DivisionErrorKind> {
    safe_divide(parse_operand(x)?, parse_operand(y)?)
}

/// The arithmetic mean of `values`, computed through [safe_divide]: Empty
/// input is [DivisionErrorKind::ByZero].
pub fn average(values: &[f64]) -> Result<f64, DivisionErrorKind> {
    let total: f64 = values.iter().sum();
    safe_divide(total, values.len() as f64)
}

fn parse_operand(text: &str) -> Result<f64, DivisionErrorKind> {
    let Ok(value) = text.trim().parse::<f64>() else {
        debug!("safe_divide: cannot parse '{text}'");
        return Err(DivisionErrorKind::Other(format!(
            "'{text}' is not a number"
        )));
    };
    Ok(value)
}

// ----- T E S T S ---------------------------------------------------------------------
