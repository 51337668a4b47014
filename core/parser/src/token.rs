//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal text, kept verbatim (e.g. "3.14", or even "1.2.3").
    Number(String),
    /// A symbol registered in the operator table.
    Operator(String),

    // Delimiters
    LParen,
    RParen,

    // Special
    EOF,
    /// A character that starts no token. The lexer does not consume it.
    Illegal(char),
}

impl Token {
    /// Number of input bytes this token consumed.
    /// Used to push a token back onto the input.
    pub fn len(&self) -> usize {
        match self {
            Token::Number(text) | Token::Operator(text) => text.len(),
            Token::LParen | Token::RParen => 1,
            Token::EOF | Token::Illegal(_) => 0,
        }
    }

    /// True for the tokens that consume nothing (end of input, unknown character).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(symbol) => write!(f, "{}", symbol),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::EOF => write!(f, "EOF"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}
