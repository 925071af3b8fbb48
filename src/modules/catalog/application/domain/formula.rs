//! Price formulas attached to service options.
//!
//! A formula is arithmetic over numbers and the single variable `[value]`:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary)*
//! unary   := ("+" | "-") unary | primary
//! primary := number | "[value]" | "(" expr ")"
//! ```
//!
//! Formulas are parsed once into an AST and evaluated with the clamped option value.
//! Token count and nesting depth are bounded so neither parsing nor evaluation
//! can recurse without limit.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormulaError {
    #[error("Empty formula")]
    Empty,

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    #[error("Trailing input at position {0}")]
    TrailingInput(usize),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,

    #[error("Formula is longer than {0} tokens")]
    TooLong(usize),

    #[error("Formula nests deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(f64),
    Value,
    Negate(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn eval(&self, value: f64) -> Result<f64, FormulaError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Value => Ok(value),
            Expr::Negate(inner) => Ok(-inner.eval(value)?),
            Expr::Binary(op, lhs, rhs) => {
                let l = lhs.eval(value)?;
                let r = rhs.eval(value)?;
                match op {
                    BinaryOp::Add => Ok(l + r),
                    BinaryOp::Sub => Ok(l - r),
                    BinaryOp::Mul => Ok(l * r),
                    BinaryOp::Div if r == 0.0 => Err(FormulaError::DivisionByZero),
                    BinaryOp::Div => Ok(l / r),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Value,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

const VALUE_PLACEHOLDER: &str = "[value]";
const MAX_TOKENS: usize = 256;
const MAX_DEPTH: usize = 32;

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' | '-' | '*' | '/' | '(' | ')' => {
                chars.next();
                let token = match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LParen,
                    _ => Token::RParen,
                };
                tokens.push((pos, token));
            }
            '[' => {
                if !input[pos..].starts_with(VALUE_PLACEHOLDER) {
                    return Err(FormulaError::UnexpectedChar { found: c, position: pos });
                }
                for _ in 0..VALUE_PLACEHOLDER.len() {
                    chars.next();
                }
                tokens.push((pos, Token::Value));
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = pos;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[pos..end];
                let number = literal
                    .parse::<f64>()
                    .map_err(|_| FormulaError::InvalidNumber(literal.to_string()))?;
                tokens.push((pos, Token::Number(number)));
            }
            other => {
                return Err(FormulaError::UnexpectedChar {
                    found: other,
                    position: pos,
                })
            }
        }

        if tokens.len() > MAX_TOKENS {
            return Err(FormulaError::TooLong(MAX_TOKENS));
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn descend(&mut self) -> Result<(), FormulaError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(FormulaError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(_, t)| t)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.cursor).cloned();
        self.cursor += 1;
        token
    }

    fn expr(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.cursor += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.cursor += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, FormulaError> {
        let negate = match self.peek() {
            Some(Token::Plus) => false,
            Some(Token::Minus) => true,
            _ => return self.primary(),
        };
        self.cursor += 1;

        self.descend()?;
        let inner = self.unary()?;
        self.depth -= 1;

        Ok(if negate {
            Expr::Negate(Box::new(inner))
        } else {
            inner
        })
    }

    fn primary(&mut self) -> Result<Expr, FormulaError> {
        match self.next() {
            Some((_, Token::Number(n))) => Ok(Expr::Number(n)),
            Some((_, Token::Value)) => Ok(Expr::Value),
            Some((_, Token::LParen)) => {
                self.descend()?;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some((_, Token::RParen)) => Ok(inner),
                    Some((pos, _)) => Err(FormulaError::UnexpectedChar {
                        found: ')',
                        position: pos,
                    }),
                    None => Err(FormulaError::UnexpectedEnd),
                }
            }
            Some((pos, token)) => Err(FormulaError::UnexpectedChar {
                found: token_char(&token),
                position: pos,
            }),
            None => Err(FormulaError::UnexpectedEnd),
        }
    }
}

fn token_char(token: &Token) -> char {
    match token {
        Token::Plus => '+',
        Token::Minus => '-',
        Token::Star => '*',
        Token::Slash => '/',
        Token::LParen => '(',
        Token::RParen => ')',
        Token::Value => '[',
        Token::Number(_) => '0',
    }
}

/// A parsed option formula such as `+3+([value]*2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFormula {
    source: String,
    expr: Expr,
}

impl PriceFormula {
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Err(FormulaError::Empty);
        }

        let mut parser = Parser {
            tokens,
            cursor: 0,
            depth: 0,
        };
        let expr = parser.expr()?;

        if let Some((pos, _)) = parser.tokens.get(parser.cursor) {
            return Err(FormulaError::TrailingInput(*pos));
        }

        Ok(Self {
            source: source.to_string(),
            expr,
        })
    }

    pub fn evaluate(&self, value: f64) -> Result<f64, FormulaError> {
        let result = self.expr.eval(value)?;
        if !result.is_finite() {
            return Err(FormulaError::NonFinite);
        }
        Ok(result)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for PriceFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PriceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
