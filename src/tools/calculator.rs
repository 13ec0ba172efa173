//! Scientific calculator: a small recursive-descent expression evaluator.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr    = term (("+" | "-") term)*
//! term    = unary (("*" | "/" | "%") unary)*
//! unary   = ("-" | "+") unary | power
//! power   = postfix ("^" unary)?
//! postfix = primary "!"*
//! primary = number | constant | function "(" expr ")" | "(" expr ")"
//! ```

use std::f64::consts::{E, PI};
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::tools::ToolError;

/// Largest argument whose factorial is finite in `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Deepest operand nesting (parentheses, calls, signs, exponents) accepted.
const MAX_NESTING: usize = 128;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "deg" | "degrees" => Some(Self::Degrees),
            "rad" | "radians" => Some(Self::Radians),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ToolError> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<Chars<'_>> = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal.parse().map_err(|_| ToolError::Evaluation)?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() => {
                let mut ident = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_alphanumeric() {
                        ident.extend(d.to_lowercase());
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(if ident == "π" {
                    Token::Number(PI)
                } else {
                    Token::Ident(ident)
                });
            }
            '+' | '-' | '*' | '/' | '%' | '^' | '!' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            '×' => {
                tokens.push(Token::Op('*'));
                chars.next();
            }
            '÷' => {
                tokens.push(Token::Op('/'));
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            _ => return Err(ToolError::Evaluation),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    angle: AngleMode,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat_op(&mut self, ops: &[char]) -> Option<char> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<f64, ToolError> {
        let mut value = self.term()?;
        while let Some(op) = self.eat_op(&['+', '-']) {
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ToolError> {
        let mut value = self.unary()?;
        while let Some(op) = self.eat_op(&['*', '/', '%']) {
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                _ if rhs == 0.0 => return Err(ToolError::Evaluation),
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    // Every recursive path passes through here, so this bounds the stack.
    fn unary(&mut self) -> Result<f64, ToolError> {
        if self.depth >= MAX_NESTING {
            return Err(ToolError::Evaluation);
        }
        self.depth += 1;
        let value = match self.eat_op(&['-', '+']) {
            Some('-') => self.unary().map(|v| -v),
            Some(_) => self.unary(),
            None => self.power(),
        };
        self.depth -= 1;
        value
    }

    fn power(&mut self) -> Result<f64, ToolError> {
        let base = self.postfix()?;
        if self.eat_op(&['^']).is_some() {
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn postfix(&mut self) -> Result<f64, ToolError> {
        let mut value = self.primary()?;
        while self.eat_op(&['!']).is_some() {
            value = factorial(value)?;
        }
        Ok(value)
    }

    fn primary(&mut self) -> Result<f64, ToolError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(ToolError::Evaluation),
                }
            }
            Some(Token::Ident(name)) => match name.as_str() {
                "pi" => Ok(PI),
                "e" => Ok(E),
                _ => {
                    if self.next() != Some(Token::LParen) {
                        return Err(ToolError::Evaluation);
                    }
                    let argument = self.expr()?;
                    if self.next() != Some(Token::RParen) {
                        return Err(ToolError::Evaluation);
                    }
                    self.call(&name, argument)
                }
            },
            _ => Err(ToolError::Evaluation),
        }
    }

    fn call(&self, name: &str, x: f64) -> Result<f64, ToolError> {
        let to_radians = |v: f64| match self.angle {
            AngleMode::Degrees => v.to_radians(),
            AngleMode::Radians => v,
        };
        let from_radians = |v: f64| match self.angle {
            AngleMode::Degrees => v.to_degrees(),
            AngleMode::Radians => v,
        };

        let value = match name {
            "sin" => to_radians(x).sin(),
            "cos" => to_radians(x).cos(),
            "tan" => to_radians(x).tan(),
            "asin" => from_radians(x.asin()),
            "acos" => from_radians(x.acos()),
            "atan" => from_radians(x.atan()),
            "sqrt" => x.sqrt(),
            "cbrt" => x.cbrt(),
            "ln" => x.ln(),
            "log" => x.log10(),
            "abs" => x.abs(),
            "exp" => x.exp(),
            "floor" => x.floor(),
            "ceil" => x.ceil(),
            "round" => x.round(),
            _ => return Err(ToolError::Evaluation),
        };
        Ok(value)
    }
}

fn factorial(value: f64) -> Result<f64, ToolError> {
    if value < 0.0 || value.fract() != 0.0 || value > MAX_FACTORIAL {
        return Err(ToolError::Evaluation);
    }
    Ok((1..=value as u32).fold(1.0, |acc, n| acc * f64::from(n)))
}

/// Evaluates `expression`; any syntax or math error is [`ToolError::Evaluation`].
pub fn evaluate(expression: &str, angle: AngleMode) -> Result<f64, ToolError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(ToolError::Evaluation);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        angle,
    };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() || !value.is_finite() {
        return Err(ToolError::Evaluation);
    }
    Ok(value)
}
