/// Parser entry point and rule plumbing.
///
/// Contains the public `parse` function, the trailing-token check, and the
/// result types shared by the grammar rules.
pub mod core;

/// The grammar-level rules.
///
/// Implements the four precedence levels of the expression grammar, each
/// consuming a prefix of the token sequence and returning the remainder.
pub mod rules;
