use std::fmt::{self, Display, Formatter};

/// A token of the output queue, in reverse polish notation order.
///
/// Parentheses only live on the parser's operator stack and never appear
/// here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, with any unary sign already applied
    Number(f64),
    /// A binary operator
    Op(Op),
    /// A unary function call
    Function(Function),
}

/// Allowed binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator matching the character `c`, if any.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Rank in the order of operations: `+ -` are 2, `* /` are 3 and `^` is 4.
    /// The parser releases an operator on the stack before pushing one of
    /// lower rank.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 2,
            Self::Mul | Self::Div => 3,
            Self::Exp => 4,
        }
    }

    /// `true` for every operator but `^`, so `8 - 3 - 2` groups as
    /// `(8 - 3) - 2`
    #[must_use]
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp => false,
        }
    }

    /// Only `^` groups to the right: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`
    #[must_use]
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Apply the operator, `left` being the operand that came first in the
    /// input.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => libm::pow(left, right),
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}

/// Unary functions callable from an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Base 10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Sine, in radians
    Sin,
    /// Cosine, in radians
    Cos,
    /// Tangent, in radians
    Tan,
    /// Square root
    Sqrt,
}

impl Function {
    /// The name this function is called by in expressions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
        }
    }

    /// Compute the function at `x`. Out of domain inputs give `NaN` or an
    /// infinity, the caller decides what to do with them.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Log => libm::log10(x),
            Self::Ln => libm::log(x),
            Self::Sin => libm::sin(x),
            Self::Cos => libm::cos(x),
            Self::Tan => libm::tan(x),
            Self::Sqrt => libm::sqrt(x),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Function(func) => write!(fmt, "{}", func),
        }
    }
}

/// Render an output queue as space separated text, e.g. `3 4 +`.
///
/// ```
/// # use crunch::{format_rpn, parse};
/// let rpn = parse("log(100) * -2").unwrap();
/// assert_eq!(format_rpn(&rpn), "100 log -2 *");
/// ```
#[must_use]
pub fn format_rpn(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
