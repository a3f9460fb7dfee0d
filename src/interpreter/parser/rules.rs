use crate::{
    error::ParseError,
    interpreter::{
        arithmetic,
        lexer::Token,
        parser::core::{RuleFailure, RuleResult},
    },
};

/// Binary operators recognized by the precedence climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*`, or `/`.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Parses a function call, the top level of the grammar.
///
/// A leading function name must be followed by a parenthesized argument;
/// the argument re-enters the grammar at this level, so nested calls and
/// full expressions are allowed inside. The function binds only its
/// parenthesized argument, and the operand is taken to be in degrees.
/// Without a leading function name the rule falls through to the sum
/// level.
///
/// Grammar: `call := FUNC "(" call ")" | sum`
///
/// # Parameters
/// - `tokens`: Suffix of the token sequence to consume from.
///
/// # Returns
/// The computed value and the unconsumed remainder.
pub(in crate::interpreter::parser) fn parse_call(tokens: &[Token]) -> RuleResult<'_> {
    if let Some(Token::Function(function)) = tokens.first() {
        if !matches!(tokens.get(1), Some(Token::LParen)) {
            return Err(RuleFailure { error: ParseError::MissingOpeningParen { function: function.to_string(), }.into(),
                                     rest:  tokens, });
        }

        let (degrees, rest) = parse_call(&tokens[2..])?;

        return match rest.first() {
            Some(Token::RParen) => Ok((arithmetic::apply_trig(*function, degrees), &rest[1..])),
            Some(found) => {
                Err(RuleFailure { error: ParseError::ExpectedClosingParen { found: found.to_string(), }.into(),
                                  rest })
            },
            None => Err(RuleFailure { error: ParseError::UnexpectedEndOfInput.into(),
                                      rest }),
        };
    }

    parse_additive(tokens)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative chains of `+` and `-`. The loop requires more
/// than one remaining token so that a dangling trailing operator stays
/// unconsumed and is rejected by the entry point as leftover input instead
/// of being silently ignored.
///
/// Grammar: `sum := product (("+" | "-") product)*`
///
/// # Parameters
/// - `tokens`: Suffix of the token sequence to consume from.
///
/// # Returns
/// The combined value and the unconsumed remainder.
pub(in crate::interpreter::parser) fn parse_additive(tokens: &[Token]) -> RuleResult<'_> {
    let (mut value, mut rest) = parse_multiplicative(tokens)?;

    loop {
        if rest.len() > 1
           && let Some(op) = token_to_binary_operator(&rest[0])
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (right, next) = parse_multiplicative(&rest[1..])?;

            value = match op {
                BinaryOperator::Add => arithmetic::add(value, right),
                _ => arithmetic::subtract(value, right),
            };
            rest = next;

            continue;
        }

        break;
    }

    Ok((value, rest))
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative chains of `*` and `/`, one precedence level
/// above sums. A division-by-zero error from the arithmetic primitive
/// aborts the rule and propagates unchanged.
///
/// Grammar: `product := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Suffix of the token sequence to consume from.
///
/// # Returns
/// The combined value and the unconsumed remainder.
pub(in crate::interpreter::parser) fn parse_multiplicative(tokens: &[Token]) -> RuleResult<'_> {
    let (mut value, mut rest) = parse_factor(tokens)?;

    loop {
        if rest.len() > 1
           && let Some(op) = token_to_binary_operator(&rest[0])
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (right, next) = parse_factor(&rest[1..])?;

            value = match op {
                BinaryOperator::Mul => arithmetic::multiply(value, right),
                _ => match arithmetic::divide(value, right) {
                    Ok(quotient) => quotient,
                    Err(error) => {
                        return Err(RuleFailure { error: error.into(),
                                                 rest:  next, });
                    },
                },
            };
            rest = next;

            continue;
        }

        break;
    }

    Ok((value, rest))
}

/// Parses a factor, the leaf rule of the grammar.
///
/// A factor is one of:
/// - a parenthesized sub-expression, which re-enters the grammar at the
///   call level so operators and nested calls work inside parentheses;
/// - a function call, delegated to [`parse_call`] which owns the
///   `FUNC "(" ... ")"` shape;
/// - a numeric literal.
///
/// Grammar: `factor := "(" call ")" | FUNC "(" call ")" | NUMBER`
///
/// # Parameters
/// - `tokens`: Suffix of the token sequence to consume from.
///
/// # Returns
/// The value of the factor and the remainder after the consumed tokens.
pub(in crate::interpreter::parser) fn parse_factor(tokens: &[Token]) -> RuleResult<'_> {
    match tokens.first() {
        Some(Token::LParen) => {
            let (value, rest) = parse_call(&tokens[1..])?;

            match rest.first() {
                Some(Token::RParen) => Ok((value, &rest[1..])),
                Some(found) => {
                    Err(RuleFailure { error: ParseError::ExpectedClosingParen { found: found.to_string(), }.into(),
                                      rest })
                },
                // The input ended before a closing parenthesis appeared.
                None => Err(RuleFailure { error: ParseError::UnexpectedEndOfInput.into(),
                                          rest }),
            }
        },

        Some(Token::Function(_)) => parse_call(tokens),

        Some(Token::Number(value)) => Ok((*value, &tokens[1..])),

        Some(found) => Err(RuleFailure { error: ParseError::ExpectedNumber { found: found.to_string(), }.into(),
                                         rest:  tokens, }),

        None => Err(RuleFailure { error: ParseError::UnexpectedEndOfInput.into(),
                                  rest:  tokens, }),
    }
}
