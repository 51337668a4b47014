//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces Tokens on demand.
//! CONTEXT: This is the first stage of the parsing pipeline. The lexer keeps a
//! byte cursor into the input, skips whitespace, and classifies the next
//! token in priority order:
//!
//! 1. Numbers: a digit followed by any run of digits and '.'
//! 2. Parentheses: '(' and ')'
//! 3. Operators: the longest symbol from the OperatorTable that matches here
//!
//! Anything else yields `Token::Illegal` without moving the cursor.
//! The parser can rewind the cursor by one token with `push_back`.

use crate::operator::OperatorTable;
use crate::token::Token;

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    operators: &'a OperatorTable,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, operators: &'a OperatorTable) -> Self {
        Lexer {
            input,
            position: 0,
            operators,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed input, starting at the cursor.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let rest = self.remaining();
        match rest.chars().next() {
            None => Token::EOF,

            Some(ch) if ch.is_ascii_digit() => self.read_number(),

            Some('(') => {
                self.position += 1;
                Token::LParen
            }
            Some(')') => {
                self.position += 1;
                Token::RParen
            }

            Some(ch) => match self.operators.match_at(rest) {
                Some(symbol) => {
                    self.position += symbol.len();
                    Token::Operator(symbol.to_string())
                }
                None => Token::Illegal(ch),
            },
        }
    }

    /// Rewinds the cursor over `token`, which must be the token just returned.
    /// Whitespace skipped before it is not restored; it is skipped again.
    /// Any other token leaves the cursor unspecified but never before the
    /// start of the input.
    pub fn push_back(&mut self, token: &Token) {
        self.position = self.position.saturating_sub(token.len());
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// Reads a numeric literal. The text is not validated here, so "1.2.3"
    /// is a single token that fails later when its value is parsed.
    fn read_number(&mut self) -> Token {
        let rest = self.remaining();
        let end = rest
            .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
            .unwrap_or(rest.len());
        self.position += end;
        Token::Number(rest[..end].to_string())
    }
}
