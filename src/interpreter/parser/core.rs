use crate::{
    error::{EvalError, ParseError},
    interpreter::{lexer::Token, parser::rules::parse_call},
};

/// Failure of a grammar rule.
///
/// Carries the error that aborted the descent together with the suffix of
/// the token sequence that was still unconsumed at the failure site. The
/// entry point uses the suffix to report leftover input alongside the
/// error; no partial value survives a failure.
pub(in crate::interpreter::parser) struct RuleFailure<'a> {
    /// The first error encountered on this branch.
    pub error: EvalError,
    /// The unconsumed remainder at the point of failure.
    pub rest:  &'a [Token],
}

/// Outcome of one grammar rule: the computed value and the unconsumed
/// remainder on success, or a [`RuleFailure`] as soon as the rule is
/// violated. Errors are not recoverable mid-parse; the first failure
/// propagates upward through every returning rule.
pub(in crate::interpreter::parser) type RuleResult<'a> =
    Result<(f64, &'a [Token]), RuleFailure<'a>>;

/// Parses a token sequence representing an expression and returns the
/// evaluated result. All tokens must be consumed during parsing.
///
/// The value is computed directly while descending through the grammar;
/// no syntax tree is built.
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Errors
/// Returns an [`EvalError`] when the grammar is violated or an arithmetic
/// primitive fails. Tokens left over after the descent are an error of
/// their own; when the descent also failed, both errors are joined and
/// reported together rather than one replacing the other.
pub fn parse(tokens: &[Token]) -> Result<f64, EvalError> {
    match parse_call(tokens) {
        Ok((value, rest)) if rest.is_empty() => Ok(value),
        Ok((_, rest)) => Err(trailing_tokens(rest)),
        Err(failure) if failure.rest.is_empty() => Err(failure.error),
        Err(failure) => Err(failure.error.join(trailing_tokens(failure.rest))),
    }
}

/// Builds the trailing-tokens error for an unconsumed suffix.
fn trailing_tokens(rest: &[Token]) -> EvalError {
    let tokens = rest.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join(" ");

    ParseError::TrailingTokens { tokens }.into()
}
