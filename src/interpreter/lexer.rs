use std::fmt;

use logos::Logos;

/// The value of π printed with six fractional digits.
///
/// The constant `pi` enters the token sequence already rounded to this
/// value, so downstream parsing only ever sees a plain number for it.
const PI_SIX_DIGITS: f64 = 3.141593;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`.
    ///
    /// Only digit runs are recognized; a decimal point is not part of the
    /// pattern, so `3.14` lexes as `3` and `14` with the dot dropped.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Trigonometric function names: `sin`, `cos`, `tan`.
    #[token("sin", |_| TrigFn::Sin)]
    #[token("cos", |_| TrigFn::Cos)]
    #[token("tan", |_| TrigFn::Tan)]
    Function(TrigFn),
    /// The constant `pi`. Replaced by [`Token::Number`] during tokenization.
    #[token("pi")]
    Pi,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Pi => f.write_str("pi"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Whitespace => f.write_str(" "),
        }
    }
}

/// The trigonometric functions recognized by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TrigFn {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
}

impl TrigFn {
    /// Returns the source-level name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Breaks an expression string into tokens.
///
/// Recognizes integer literals, the arithmetic operators `+ - * /`,
/// parentheses, the functions `sin`, `cos` and `tan`, and the constant
/// `pi`, which is replaced in place by its six-digit decimal expansion.
/// Everything else, including whitespace and unsupported characters, is
/// dropped without error; malformed input surfaces later as a parse error.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// The ordered token sequence; empty if nothing in the input matches.
///
/// # Example
/// ```
/// use tricalc::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("2 + 3 * (4 - 1)");
/// assert_eq!(tokens.len(), 9);
///
/// // The decimal point is not part of the numeric pattern.
/// use tricalc::interpreter::lexer::Token;
/// assert_eq!(tokenize("3.14"), vec![Token::Number(3.0), Token::Number(14.0)]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for token in Token::lexer(expression) {
        match token {
            Ok(Token::Pi) => tokens.push(Token::Number(PI_SIX_DIGITS)),
            Ok(token) => tokens.push(token),
            // Unrecognized input is dropped, not reported.
            Err(()) => {},
        }
    }

    tokens
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
