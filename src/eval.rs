use crate::error::Error;
use crate::token::Token;
use tracing::debug;

/// Evaluate a queue of tokens in reverse polish notation, as produced by
/// [`parse`](crate::parse).
///
/// The queue is consumed front to back.
///
/// # Examples
///
/// ```
/// # use crunch::{evaluate, Function, Op, Token};
/// let queue = vec![
///     Token::Number(81.0),
///     Token::Function(Function::Sqrt),
///     Token::Number(2.0),
///     Token::Op(Op::Minus),
/// ];
/// assert_eq!(evaluate(queue), Ok(7.0));
/// ```
///
/// # Errors
///
/// [`Error::SyntaxError`] if the queue does not reduce to exactly one value,
/// and [`Error::DomainError`] if a function gives a non finite result.
pub fn evaluate<I>(queue: I) -> Result<f64, Error>
where
    I: IntoIterator<Item = Token>,
{
    let mut values: Vec<f64> = Vec::new();

    for token in queue {
        match token {
            Token::Number(value) => values.push(value),
            Token::Function(func) => {
                let arg = values.pop().ok_or_else(|| {
                    debug!(%func, "missing function argument");
                    Error::SyntaxError
                })?;
                let result = func.apply(arg);
                if !result.is_finite() {
                    debug!(%func, arg, "argument out of domain");
                    return Err(Error::DomainError);
                }
                values.push(result);
            }
            Token::Op(op) => {
                // the right operand is on top of the stack
                let (right, left) = match (values.pop(), values.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => {
                        debug!(%op, "missing operand");
                        return Err(Error::SyntaxError);
                    }
                };
                values.push(op.apply(left, right));
            }
        }
    }

    match values.as_slice() {
        &[value] => Ok(value),
        remaining => {
            debug!(count = remaining.len(), "expression did not reduce to one value");
            Err(Error::SyntaxError)
        }
    }
}
