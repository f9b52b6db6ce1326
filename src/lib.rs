#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Crunch, a small calculator for infix mathematical expressions.
//!
//! The easiest way to use this crate is with the
//! [`calculate`](fn.calculate.html) function:
//!
//! ```
//! assert_eq!(crunch::calculate("3 + 4 * 2"), Ok(11.0));
//! assert_eq!(crunch::calculate("2 ^ 3 ^ 2"), Ok(512.0));
//! ```
//!
//! Failures are reported as one of the three [`Error`](enum.Error.html)
//! kinds, whose `Display` form is a message ready to show to a user:
//!
//! ```
//! use crunch::{calculate, Error};
//!
//! assert_eq!(calculate("log(-1)"), Err(Error::DomainError));
//! assert_eq!(calculate("(1 + 2"), Err(Error::MismatchedParentheses));
//! assert_eq!(calculate("5 - - - 10").unwrap_err().to_string(), "Syntax Error");
//! ```
//!
//! The two phases are also available on their own: [`parse`](fn.parse.html)
//! produces the reverse polish notation queue, and
//! [`evaluate`](fn.evaluate.html) reduces it to a value.
//!
//! ```
//! use crunch::{evaluate, format_rpn, parse};
//!
//! let rpn = parse("3(4 - 1)").unwrap();
//! assert_eq!(format_rpn(&rpn), "3 4 1 - *");
//! assert_eq!(evaluate(rpn), Ok(9.0));
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - decimal literals: `12`, `4.32`, `.02`. There is no exponent notation;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation;
//! - a `-` at the start of the expression, or after an operator or `(`, is a
//!   sign for the next literal. Only one sign is allowed in a row: `5 - - 10`
//!   is fine, `5 - - - 10` is not;
//! - function calls: `log` (base 10), `ln`, `sin`, `cos`, `tan` (in radians)
//!   and `sqrt`. Arguments must be parenthesized;
//! - juxtaposition is multiplication: `3(4)`, `(5)(4)`, `(4 - 1)9`, `2sqrt(9)`.
//!
//! Whitespace is ignored and any other symbol is forbidden in the input.
//!
//! `+` and `-` bind weaker than `*` and `/`, which bind weaker than `^`. `^` is
//! right associative, all other operators are left associative.
//!
//! # Technical details
//!
//! The parser is a Shunting-Yard algorithm producing a queue of [`Token`]s in
//! reverse polish notation, which is then reduced on a value stack. All the
//! state lives in the call, so `calculate` can be used from many threads at
//! once.

#[macro_use]
extern crate lazy_static;

mod classify;
mod error;
mod eval;
mod parser;
mod token;
mod util;

pub use classify::{is_function, is_letter, is_operand, is_operator};
pub use error::Error;
pub use eval::evaluate;
pub use parser::parse;
pub use token::{format_rpn, Function, Op, Token};
pub use util::FUNCTIONS;

/// Calculate the value of a single `expression`.
///
/// Returns `Ok(result)` if the expression is valid, or `Err(kind)` if
/// parsing or evaluating it failed. Nothing is kept between calls.
///
/// # Example
///
/// ```
/// # use crunch::calculate;
/// assert_eq!(calculate("45 - 2^3"), Ok(37.0));
/// assert_eq!(calculate("(5)(4)(3)"), Ok(60.0));
/// ```
///
/// # Errors
///
/// See [`Error`] for the possible failures.
pub fn calculate(expression: &str) -> Result<f64, Error> {
    let rpn = parse(expression)?;
    tracing::debug!(expression, rpn = %format_rpn(&rpn), "parsed");
    evaluate(rpn)
}
