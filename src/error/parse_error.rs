#[derive(Debug)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Reached the end of the token sequence unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but something else was found.
    ExpectedClosingParen {
        /// The token found instead of `)`.
        found: String,
    },
    /// A function name was not followed by an opening parenthesis `(`.
    MissingOpeningParen {
        /// The name of the function.
        function: String,
    },
    /// A numeric literal was expected but something else was found.
    ExpectedNumber {
        /// The token found instead of a number.
        found: String,
    },
    /// Tokens were left over after parsing should have consumed everything.
    TrailingTokens {
        /// The leftover tokens, rendered as source text.
        tokens: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { found } => {
                write!(f, "Expected closing parenthesis ')', found '{found}'.")
            },

            Self::MissingOpeningParen { function } => {
                write!(f, "Missing '(' after function '{function}'.")
            },

            Self::ExpectedNumber { found } => {
                write!(f, "Expected a number, found '{found}'.")
            },

            Self::TrailingTokens { tokens } => {
                write!(f, "Extra tokens after expression: {tokens}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
