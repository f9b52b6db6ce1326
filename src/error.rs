use thiserror::Error;

/// Error type for the crunch crate.
///
/// This is a closed set: every failure of [`calculate`](crate::calculate)
/// maps to exactly one of these kinds. The `Display` form is the message
/// meant to be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Malformed input: unexpected character, unknown function name, an
    /// operator applied to a function name, stacked unary signs, or an RPN
    /// program that does not reduce to a single value
    #[error("Syntax Error")]
    SyntaxError,
    /// A `)` without a matching `(`, or a `(` that is never closed
    #[error("Mismatched Parentheses")]
    MismatchedParentheses,
    /// A function applied outside of its real-valued domain
    #[error("Domain Error")]
    DomainError,
}
