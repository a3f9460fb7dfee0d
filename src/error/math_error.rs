#[derive(Debug)]
/// Represents all errors that can be raised by the arithmetic primitives.
pub enum MathError {
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for MathError {}
