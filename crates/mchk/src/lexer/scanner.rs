//! Hand-written total scanner
//!
//! The scan is total and lossless: every input character becomes exactly
//! one token, unrecognized characters included, so the output always
//! exists and always spans the whole input.

use super::token::{Token, TokenKind, is_keyword, is_operator};
use crate::common::Span;

/// Single left-to-right pass over a source string, no backtracking
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Scan the whole input into tokens
    ///
    /// Dispatch order per character is authoritative: whitespace,
    /// alphabetic run, digit run, operator, unknown.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(c) = self.peek() {
            let start = self.pos;
            let kind = if c.is_whitespace() {
                self.bump(c);
                TokenKind::Whitespace
            } else if c.is_alphabetic() {
                // Digits and underscores never extend a name.
                self.take_run(char::is_alphabetic);
                if is_keyword(&self.input[start..self.pos]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            } else if c.is_ascii_digit() {
                // No decimal points, signs, or exponents.
                self.take_run(|c| c.is_ascii_digit());
                TokenKind::Number
            } else if is_operator(c) {
                self.bump(c);
                TokenKind::Operator
            } else {
                self.bump(c);
                TokenKind::Unknown
            };
            let span = Span::new(start, self.pos);
            tokens.push(Token::new(kind, &self.input[start..self.pos], span));
        }
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Advance over a maximal run of characters matching `pred`
    fn take_run(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump(c);
        }
    }
}

/// Tokenize `input`; pure and total, never fails
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
