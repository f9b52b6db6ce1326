//! Character classification used by the parser.
//!
//! Every predicate takes a string so it can be asked about a single character
//! or a short token alike. The empty string belongs to no class.

use crate::util::FUNCTIONS;

/// Check if `ch` is part of a numeric literal: a decimal digit or `.`
///
/// ```
/// # use crunch::is_operand;
/// assert!(is_operand("7"));
/// assert!(is_operand("."));
/// assert!(!is_operand("-"));
/// ```
#[must_use]
pub fn is_operand(ch: &str) -> bool {
    single(ch).map_or(false, is_operand_char)
}

/// Check if `ch` is an operator or a parenthesis: one of `+ - * / ^ ( )`
#[must_use]
pub fn is_operator(ch: &str) -> bool {
    single(ch).map_or(false, is_operator_char)
}

/// Check if `ch` is an ASCII letter
#[must_use]
pub fn is_letter(ch: &str) -> bool {
    single(ch).map_or(false, is_letter_char)
}

/// Check if `name` is exactly the name of a known function
///
/// ```
/// # use crunch::is_function;
/// assert!(is_function("sqrt"));
/// assert!(!is_function("sqr"));
/// ```
#[must_use]
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}

pub(crate) fn is_operand_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

pub(crate) fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

pub(crate) fn is_letter_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Get the only character of `s`, if it has exactly one
fn single(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
