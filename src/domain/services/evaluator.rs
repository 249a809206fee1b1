//! # Evaluator Service
//!
//! 式の文字列を解析して評価する
//!
//! ## 文法
//!
//! ```text
//! shift    := additive (("<<" | ">>") additive)*
//! additive := primary (("+" | "-") primary)*
//! primary  := NUMBER | "(" shift ")"
//! ```
//!
//! 括弧 > 加減算 > シフト の順に強く結合し、同じ優先順位では左結合。
//! 単項マイナスはない。

use crate::domain::entities::expression::{Expr, Operator};
use crate::domain::errors::EvalError;

/// 入力サイズの上限（バイト）
pub const MAX_INPUT_BYTES: usize = 64 * 1024;

/// 括弧のネストの上限
pub const MAX_DEPTH: usize = 256;

/// 演算子の個数の上限
///
/// 式木の深さは演算子の個数で決まり、評価・表示・破棄は木の深さだけ再帰する
pub const MAX_OPERATORS: usize = 512;

/// 式を評価する
///
/// # Errors
///
/// 構文エラーの場合に `EvalError` を返す
pub fn evaluate(input: &str) -> Result<i32, EvalError> {
    parse(input).map(|expr| expr.value())
}

/// 式を解析して式木を返す
///
/// # Errors
///
/// 構文エラーの場合に `EvalError` を返す
pub fn parse(input: &str) -> Result<Expr, EvalError> {
    if input.len() > MAX_INPUT_BYTES {
        return Err(EvalError::InputTooLarge {
            max_bytes: MAX_INPUT_BYTES,
            actual_bytes: input.len(),
        });
    }
    let tokens = Lexer::new(input).lex()?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.parse_shift()?;

    let next = parser.peek();
    match next.token {
        Token::Eof => Ok(expr),
        Token::RParen => Err(EvalError::UnbalancedParenthesis {
            position: next.position,
        }),
        _ => Err(EvalError::TrailingInput {
            position: next.position,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Plus,
    Minus,
    Shl,
    Shr,
    LParen,
    RParen,
    Eof,
}

impl Token<'_> {
    fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Shl | Token::Shr)
    }

    fn describe(&self) -> String {
        match self {
            Token::Number(raw) => (*raw).to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Shl => "<<".to_string(),
            Token::Shr => ">>".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SpannedToken<'a> {
    token: Token<'a>,
    /// Byte offset into the input.
    position: usize,
}

struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn lex(&mut self) -> Result<Vec<SpannedToken<'a>>, EvalError> {
        let mut tokens = Vec::new();
        let bytes = self.input.as_bytes();

        while self.offset < bytes.len() {
            match bytes[self.offset] {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.offset += 1;
                }
                b'(' => tokens.push(self.single(Token::LParen)),
                b')' => tokens.push(self.single(Token::RParen)),
                b'+' => tokens.push(self.single(Token::Plus)),
                b'-' => tokens.push(self.single(Token::Minus)),
                b'<' => tokens.push(self.double(b'<', Token::Shl, "<<")?),
                b'>' => tokens.push(self.double(b'>', Token::Shr, ">>")?),
                b'0'..=b'9' => {
                    let start = self.offset;
                    while bytes.get(self.offset).is_some_and(u8::is_ascii_digit) {
                        self.offset += 1;
                    }
                    tokens.push(SpannedToken {
                        token: Token::Number(&self.input[start..self.offset]),
                        position: start,
                    });
                }
                _ => {
                    let found = self.input[self.offset..].chars().next().unwrap_or('?');
                    return Err(EvalError::UnexpectedChar {
                        found,
                        position: self.offset,
                    });
                }
            }
        }

        if tokens.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        if let Some(extra) = tokens
            .iter()
            .filter(|t| t.token.is_operator())
            .nth(MAX_OPERATORS)
        {
            return Err(EvalError::TooManyOperators {
                max_operators: MAX_OPERATORS,
                position: extra.position,
            });
        }

        tokens.push(SpannedToken {
            token: Token::Eof,
            position: self.offset,
        });
        Ok(tokens)
    }

    fn single(&mut self, token: Token<'a>) -> SpannedToken<'a> {
        let spanned = SpannedToken {
            token,
            position: self.offset,
        };
        self.offset += 1;
        spanned
    }

    fn double(
        &mut self,
        second: u8,
        token: Token<'a>,
        expected: &'static str,
    ) -> Result<SpannedToken<'a>, EvalError> {
        if self.input.as_bytes().get(self.offset + 1) != Some(&second) {
            return Err(EvalError::UnexpectedToken {
                expected,
                found: char::from(second).to_string(),
                position: self.offset,
            });
        }
        let spanned = SpannedToken {
            token,
            position: self.offset,
        };
        self.offset += 2;
        Ok(spanned)
    }
}

struct Parser<'a> {
    tokens: Vec<SpannedToken<'a>>,
    cursor: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> SpannedToken<'a> {
        // The lexer always terminates the stream with Eof.
        self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> SpannedToken<'a> {
        let token = self.peek();
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
        token
    }

    fn parse_shift(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.peek().token {
                Token::Shl => Operator::Shl,
                Token::Shr => Operator::Shr,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_primary()?;
        loop {
            let op = match self.peek().token {
                Token::Plus => Operator::Add,
                Token::Minus => Operator::Sub,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_primary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        let next = self.advance();
        match next.token {
            Token::Number(raw) => raw
                .parse::<i32>()
                .map(Expr::Number)
                .map_err(|_| EvalError::InvalidNumber {
                    raw: raw.to_string(),
                    position: next.position,
                }),
            Token::LParen => {
                if self.depth >= MAX_DEPTH {
                    return Err(EvalError::NestingTooDeep {
                        max_depth: MAX_DEPTH,
                        position: next.position,
                    });
                }
                self.depth += 1;
                let inner = self.parse_shift()?;
                self.depth -= 1;

                let close = self.advance();
                match close.token {
                    Token::RParen => Ok(inner),
                    Token::Eof => Err(EvalError::UnbalancedParenthesis {
                        position: next.position,
                    }),
                    other => Err(EvalError::UnexpectedToken {
                        expected: "')'",
                        found: other.describe(),
                        position: close.position,
                    }),
                }
            }
            Token::Eof => Err(EvalError::UnexpectedEnd {
                expected: "number or '('",
            }),
            other => Err(EvalError::UnexpectedToken {
                expected: "number or '('",
                found: other.describe(),
                position: next.position,
            }),
        }
    }
}
