/// The arithmetic module provides the primitive numeric operations.
///
/// The parser delegates every combination step to these primitives rather
/// than applying operators inline. Division is the only operation with a
/// failure mode.
///
/// # Responsibilities
/// - Implements addition, subtraction, multiplication, and checked division
///   over `f64` operands.
/// - Applies the trigonometric functions, converting operands from degrees
///   to radians first.
/// - Reports arithmetic errors such as division by zero.
pub mod arithmetic;
/// The lexer module tokenizes an expression string for parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a
/// sequence of tokens: numbers, operators, parentheses, and function names.
/// This is the first stage of evaluation and performs no semantic
/// validation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Replaces the constant `pi` with its numeric value.
/// - Drops unrecognized characters silently; tokenization never fails.
pub mod lexer;
/// The parser module evaluates the token sequence by recursive descent.
///
/// The parser consumes the token sequence produced by the lexer according
/// to a four-level precedence grammar and computes the numeric result
/// directly while descending. No syntax tree is built or retained.
///
/// # Responsibilities
/// - Implements the grammar levels: function call, sum, product, factor.
/// - Validates syntax, reporting descriptive errors for malformed input.
/// - Rejects input with tokens left over after a complete parse.
pub mod parser;
