/// Arithmetic errors.
///
/// Contains the error types raised by the arithmetic primitives, such as
/// division by zero.
pub mod math_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence,
/// including unexpected tokens, missing parentheses, and leftover input.
pub mod parse_error;

pub use math_error::MathError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Represents any error a single evaluation can produce.
///
/// Parsing and evaluation happen in one pass, so a syntax failure and an
/// arithmetic failure can both surface from the same call. The `Multiple`
/// variant carries independent errors detected together, such as a
/// lower-level failure joined with a trailing-tokens report at the top
/// level; neither overwrites the other.
pub enum EvalError {
    /// A syntax error from the parser.
    Parse(ParseError),
    /// An arithmetic error surfaced unchanged through the parser.
    Math(MathError),
    /// Several independent errors detected by one evaluation.
    Multiple(Vec<EvalError>),
}

impl EvalError {
    /// Combines two errors into one `Multiple`, flattening any nested
    /// `Multiple` values so the list stays one level deep.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        let mut errors = match self {
            Self::Multiple(errors) => errors,
            error => vec![error],
        };

        match other {
            Self::Multiple(more) => errors.extend(more),
            error => errors.push(error),
        }

        Self::Multiple(errors)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Math(error) => write!(f, "{error}"),
            Self::Multiple(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("; "))
            },
        }
    }
}

impl std::error::Error for EvalError {}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<MathError> for EvalError {
    fn from(error: MathError) -> Self {
        Self::Math(error)
    }
}
