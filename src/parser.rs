use crate::classify::{is_letter_char, is_operand_char};
use crate::error::Error;
use crate::token::{Function, Op, Token};
use crate::util::FUNCTIONS;
use std::iter::Peekable;
use std::str::Chars;
use tracing::{debug, trace};

/// Convert an infix `expression` into a queue of tokens in reverse polish
/// notation.
///
/// # Examples
///
/// ```
/// # use crunch::{parse, Op, Token};
/// assert_eq!(
///     parse("3 + 4"),
///     Ok(vec![Token::Number(3.0), Token::Number(4.0), Token::Op(Op::Plus)])
/// );
/// ```
///
/// # Errors
///
/// [`Error::SyntaxError`] on malformed input and
/// [`Error::MismatchedParentheses`] on unbalanced parentheses.
pub fn parse(expression: &str) -> Result<Vec<Token>, Error> {
    Parser::new(expression).parse()
}

/// Entries of the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Op),
    LParen,
    Function(Function),
}

/// The most recently completed token
#[derive(Debug, Clone, Copy, PartialEq)]
enum Previous {
    Start,
    Operand,
    Operator,
    /// A `-` consumed as a sign
    Sign,
    LParen,
    RParen,
    Function,
}

impl Previous {
    /// A `-` read right after this token is a sign, not a subtraction
    fn allows_sign(self) -> bool {
        matches!(self, Self::Start | Self::Operator | Self::Sign | Self::LParen)
    }

    /// A value, `(` or function read right after this token is multiplied
    /// with it
    fn ends_group(self) -> bool {
        matches!(self, Self::Operand | Self::RParen)
    }
}

/// Shunting-yard state for a single expression
struct Parser<'a> {
    input: Peekable<Chars<'a>>,
    output: Vec<Token>,
    operators: Vec<Pending>,
    previous: Previous,
    negate: bool,
}

impl<'a> Parser<'a> {
    fn new(expression: &'a str) -> Self {
        Parser {
            input: expression.chars().peekable(),
            output: Vec::new(),
            operators: Vec::new(),
            previous: Previous::Start,
            negate: false,
        }
    }

    fn parse(mut self) -> Result<Vec<Token>, Error> {
        while let Some(&c) = self.input.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.input.next();
                }
                c if is_operand_char(c) => {
                    if self.previous == Previous::RParen {
                        self.implicit_mul()?;
                    }
                    self.operand()?;
                }
                c if is_letter_char(c) => {
                    if self.previous.ends_group() {
                        self.implicit_mul()?;
                    }
                    self.function()?;
                }
                '(' => {
                    if self.previous.ends_group() {
                        self.implicit_mul()?;
                    }
                    self.input.next();
                    self.operators.push(Pending::LParen);
                    self.previous = Previous::LParen;
                }
                ')' => {
                    self.input.next();
                    self.close_paren()?;
                }
                '-' if self.previous.allows_sign() => {
                    self.input.next();
                    if self.negate {
                        debug!("more than one unary sign in a row");
                        return Err(Error::SyntaxError);
                    }
                    self.negate = true;
                    self.previous = Previous::Sign;
                }
                other => {
                    let op = Op::from_char(other).ok_or_else(|| {
                        debug!(character = %other, "unexpected character in input");
                        Error::SyntaxError
                    })?;
                    self.input.next();
                    self.operator(op)?;
                }
            }
        }

        self.finish()
    }

    /// Read a numeric literal and send it to the output
    fn operand(&mut self) -> Result<(), Error> {
        let mut literal = String::new();
        while let Some(&c) = self.input.peek() {
            if !is_operand_char(c) {
                break;
            }
            self.input.next();
            literal.push(c);
        }

        let mut value: f64 = literal.parse().map_err(|_| {
            debug!(%literal, "invalid number");
            Error::SyntaxError
        })?;
        if self.negate {
            value = -value;
            self.negate = false;
        }

        self.output.push(Token::Number(value));
        self.previous = Previous::Operand;
        Ok(())
    }

    /// Read a function name and push it on the operator stack
    fn function(&mut self) -> Result<(), Error> {
        let mut name = String::new();
        while let Some(&c) = self.input.peek() {
            if !is_letter_char(c) {
                break;
            }
            self.input.next();
            name.push(c);
        }

        let func = *FUNCTIONS.get(name.as_str()).ok_or_else(|| {
            debug!(%name, "unknown function");
            Error::SyntaxError
        })?;
        self.operators.push(Pending::Function(func));
        self.previous = Previous::Function;
        Ok(())
    }

    /// Juxtaposed groups are multiplied: `3(4)`, `(4)9`, `2sqrt(4)`
    fn implicit_mul(&mut self) -> Result<(), Error> {
        trace!("inserting implicit multiplication");
        self.operator(Op::Mul)
    }

    fn operator(&mut self, op: Op) -> Result<(), Error> {
        while let Some(&top) = self.operators.last() {
            if !should_pop(top, op)? {
                break;
            }
            self.operators.pop();
            if let Pending::Op(top) = top {
                trace!(%top, "popping operator");
                self.output.push(Token::Op(top));
            }
        }
        self.operators.push(Pending::Op(op));
        self.previous = Previous::Operator;
        Ok(())
    }

    fn close_paren(&mut self) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some(Pending::LParen) => break,
                Some(Pending::Op(op)) => self.output.push(Token::Op(op)),
                Some(Pending::Function(func)) => self.output.push(Token::Function(func)),
                None => {
                    debug!("closing parenthesis without an opening one");
                    return Err(Error::MismatchedParentheses);
                }
            }
        }

        // the group was the argument of a function call
        if let Some(&Pending::Function(func)) = self.operators.last() {
            self.operators.pop();
            self.output.push(Token::Function(func));
        }

        self.previous = Previous::RParen;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Token>, Error> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::LParen => {
                    debug!("unclosed parenthesis");
                    return Err(Error::MismatchedParentheses);
                }
                Pending::Op(op) => self.output.push(Token::Op(op)),
                Pending::Function(func) => self.output.push(Token::Function(func)),
            }
        }

        if self.negate {
            debug!("unary sign without an operand");
            return Err(Error::SyntaxError);
        }
        Ok(self.output)
    }
}

/// Check if `top`, on top of the operator stack, must be sent to the output
/// before `incoming` is pushed.
///
/// Functions on the stack can only be released by their closing parenthesis,
/// so meeting one here is an error.
fn should_pop(top: Pending, incoming: Op) -> Result<bool, Error> {
    match top {
        Pending::LParen => Ok(false),
        Pending::Function(func) => {
            debug!(%func, %incoming, "operator applied to a function name");
            Err(Error::SyntaxError)
        }
        Pending::Op(top) => {
            let (p, q) = (top.precedence(), incoming.precedence());
            Ok(p > q || (p == q && incoming.is_left_associative()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::format_rpn;
    use test_case::test_case;

    fn rpn(expression: &str) -> Result<String, Error> {
        parse(expression).map(|tokens| format_rpn(&tokens))
    }

    #[test_case("3 + 4" => Ok("3 4 +".into()) ; "addition")]
    #[test_case("3+4" => Ok("3 4 +".into()) ; "spaces are optional")]
    #[test_case(" \t3 +\n4 " => Ok("3 4 +".into()) ; "any whitespace is skipped")]
    #[test_case("3 + 4 * 2" => Ok("3 4 2 * +".into()) ; "precedence")]
    #[test_case("8 - 3 - 2" => Ok("8 3 - 2 -".into()) ; "left associativity")]
    #[test_case("2 ^ 3 ^ 2" => Ok("2 3 2 ^ ^".into()) ; "right associativity")]
    #[test_case("(1 + 2) * 3" => Ok("1 2 + 3 *".into()) ; "parentheses")]
    #[test_case("4.32" => Ok("4.32".into()) ; "decimal literal")]
    #[test_case(".02" => Ok("0.02".into()) ; "leading decimal point")]
    #[test_case("-3" => Ok("-3".into()) ; "leading sign")]
    #[test_case("5 - - 10" => Ok("5 -10 -".into()) ; "sign after subtraction")]
    #[test_case("2 * (-3)" => Ok("2 -3 *".into()) ; "sign after open parenthesis")]
    #[test_case("(1) - 2" => Ok("1 2 -".into()) ; "minus after close parenthesis is binary")]
    fn shunting_yard(expression: &str) -> Result<String, Error> {
        rpn(expression)
    }

    #[test]
    fn full_example() {
        assert_eq!(
            parse("3 + - 4 * -2 / ( 1 - 5 ) ^ 2 ^ 3"),
            Ok(vec![
                Token::Number(3.0),
                Token::Number(-4.0),
                Token::Number(-2.0),
                Token::Op(Op::Mul),
                Token::Number(1.0),
                Token::Number(5.0),
                Token::Op(Op::Minus),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Op(Op::Exp),
                Token::Op(Op::Exp),
                Token::Op(Op::Div),
                Token::Op(Op::Plus),
            ])
        );
    }

    #[test_case("3(4 - 1)" => Ok("3 4 1 - *".into()) ; "operand then group")]
    #[test_case("(5)(4)(3)" => Ok("5 4 * 3 *".into()) ; "groups")]
    #[test_case("(4 - 1)9" => Ok("4 1 - 9 *".into()) ; "group then operand")]
    #[test_case("4log(9)" => Ok("4 9 log *".into()) ; "operand then function")]
    #[test_case("(2)sqrt(9)" => Ok("2 9 sqrt *".into()) ; "group then function")]
    #[test_case("2^3(2)" => Ok("2 3 ^ 2 *".into()) ; "implicit product binds like an explicit one")]
    fn implicit_multiplication(expression: &str) -> Result<String, Error> {
        rpn(expression)
    }

    #[test_case("log(100)" => Ok("100 log".into()) ; "call")]
    #[test_case("sqrt(81) + 1" => Ok("81 sqrt 1 +".into()) ; "call in a sum")]
    #[test_case("ln(sin(1))" => Ok("1 sin ln".into()) ; "nested calls")]
    #[test_case("cos(2 * 3)" => Ok("2 3 * cos".into()) ; "expression argument")]
    #[test_case("-tan(1)" => Ok("-1 tan".into()) ; "sign applies to the next literal")]
    fn functions(expression: &str) -> Result<String, Error> {
        rpn(expression)
    }

    #[test_case("log*" => Err(Error::SyntaxError) ; "operator after function name")]
    #[test_case("log 2 + 1" => Err(Error::SyntaxError) ; "function without parentheses")]
    #[test_case("foo(2)" => Err(Error::SyntaxError) ; "unknown function")]
    #[test_case("LOG(2)" => Err(Error::SyntaxError) ; "uppercase function")]
    #[test_case("2 % 3" => Err(Error::SyntaxError) ; "unknown character")]
    #[test_case("5 - - - 10" => Err(Error::SyntaxError) ; "stacked signs")]
    #[test_case("--1" => Err(Error::SyntaxError) ; "stacked leading signs")]
    #[test_case("1.2.3" => Err(Error::SyntaxError) ; "two decimal points")]
    #[test_case("." => Err(Error::SyntaxError) ; "lonely decimal point")]
    #[test_case("3 * -" => Err(Error::SyntaxError) ; "dangling sign")]
    #[test_case("(1 + 2" => Err(Error::MismatchedParentheses) ; "unclosed parenthesis")]
    #[test_case("1 + 2)" => Err(Error::MismatchedParentheses) ; "stray closing parenthesis")]
    #[test_case("sqrt(4" => Err(Error::MismatchedParentheses) ; "unclosed call")]
    #[test_case(")(" => Err(Error::MismatchedParentheses) ; "reversed parentheses")]
    #[test_case("(1 + -" => Err(Error::MismatchedParentheses) ; "unclosed parenthesis before a dangling sign")]
    #[test_case("sqrt(-" => Err(Error::MismatchedParentheses) ; "unclosed call with a dangling sign")]
    fn errors(expression: &str) -> Result<String, Error> {
        rpn(expression)
    }

    #[test]
    fn fresh_state() {
        assert_eq!(parse("(1 +"), Err(Error::MismatchedParentheses));
        assert_eq!(rpn("2"), Ok("2".into()));
        assert_eq!(parse("-"), Err(Error::SyntaxError));
        assert_eq!(rpn("2"), Ok("2".into()));
    }

    #[test]
    fn pop_rule() {
        assert_eq!(should_pop(Pending::LParen, Op::Plus), Ok(false));
        assert_eq!(should_pop(Pending::Op(Op::Mul), Op::Plus), Ok(true));
        assert_eq!(should_pop(Pending::Op(Op::Plus), Op::Mul), Ok(false));
        assert_eq!(should_pop(Pending::Op(Op::Minus), Op::Plus), Ok(true));
        assert_eq!(should_pop(Pending::Op(Op::Exp), Op::Exp), Ok(false));
        assert_eq!(
            should_pop(Pending::Function(Function::Ln), Op::Plus),
            Err(Error::SyntaxError)
        );
    }
}
