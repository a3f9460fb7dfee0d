//! # tricalc
//!
//! tricalc evaluates arithmetic expressions supplied as text, producing an
//! `f64` result or a descriptive error. Expressions support the four basic
//! operators with the usual precedence, parentheses, the constant `pi`,
//! and the trigonometric functions `sin`, `cos` and `tan` over degrees.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, interpreter::lexer, interpreter::parser};

/// Provides unified error types for tokenizing, parsing, and arithmetic.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. It standardizes error reporting with descriptive messages
/// and supports joining independent errors detected in the same call.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, arithmetic).
/// - Unifies them under [`EvalError`], including joined composites.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the recursive-descent parser, and
/// the arithmetic primitives to turn expression text into a number. The
/// pipeline is purely functional over its input: no state survives across
/// calls, so independent evaluations need no coordination.
///
/// # Responsibilities
/// - Coordinates the stages: lexer, parser, arithmetic.
/// - Provides the entry point used by [`evaluate`].
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates an arithmetic expression given as text.
///
/// Tokenizes the input and parses the token sequence, computing the result
/// during the descent. Unrecognized characters are dropped before parsing,
/// so malformed input surfaces as a parse error rather than a lexical one.
///
/// # Errors
/// Returns an [`EvalError`] for syntax errors, leftover tokens, or
/// division by zero.
///
/// # Examples
/// ```
/// use tricalc::evaluate;
///
/// let result = evaluate("1 + 2 * 3").unwrap();
/// assert_eq!(result, 7.0);
///
/// // Trigonometric functions take their argument in degrees.
/// let s = evaluate("sin(90)").unwrap();
/// assert!((s - 1.0).abs() < 1e-12);
///
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression);

    parser::core::parse(&tokens)
}
