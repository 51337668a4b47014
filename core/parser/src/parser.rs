//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Precedence-climbing parser that converts the token stream into an Expression tree.
//! CONTEXT: This is the second stage of the parsing pipeline. Operators are not
//! known at compile time; their precedence and associativity come from the
//! OperatorTable handed in by the caller.
//!
//! GRAMMAR:
//!   expression(min) --> simple ( OPERATOR expression(floor) )*
//!                       // while precedence(OPERATOR) > min
//!   simple          --> NUMBER | "(" expression(0) ")" | OPERATOR simple
//!
//! where `floor` is the operator's precedence for left- and non-associative
//! operators, and precedence - 1 for right-associative ones. Any operator in
//! prefix position parses as unary; whether it means anything is decided by
//! the evaluator.

use crate::ast::Expression;
use crate::lexer::Lexer;
use crate::operator::{Associativity, Operator, OperatorTable};
use crate::token::Token;
use thiserror::Error;

/// Default bound on parser recursion. Deeper input is rejected instead of
/// exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser errors. Positions are byte offsets into the input.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Unexpected end of expression")]
    UnexpectedEndOfInput,

    /// `position` is the offset of the parenthesis left without a partner.
    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("Unrecognized character '{ch}' at position {position}")]
    UnrecognizedCharacter { ch: char, position: usize },

    #[error("Operator '{operator}' at position {position} cannot be chained without parentheses")]
    NonAssociativeChain { operator: String, position: usize },

    #[error("Expression is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser holds the lexer cursor and the current recursion depth.
/// One Parser is created per input and discarded afterwards.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    operators: &'a OperatorTable,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, operators: &'a OperatorTable) -> Self {
        Parser {
            lexer: Lexer::new(input, operators),
            operators,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the recursion bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the entire input and returns the tree.
    /// Fails if anything is left over after the expression.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_binary_expression(0)?;

        let (token, position) = self.next();
        match token {
            Token::EOF => Ok(expr),
            Token::RParen => Err(ParseError::UnbalancedParentheses { position }),
            Token::Illegal(ch) => Err(ParseError::UnrecognizedCharacter { ch, position }),
            token => Err(ParseError::UnexpectedToken {
                token: token.to_string(),
                position,
            }),
        }
    }

    /// Fetches the next token together with the offset where it starts.
    fn next(&mut self) -> (Token, usize) {
        let token = self.lexer.next_token();
        let position = self.lexer.position() - token.len();
        (token, position)
    }

    /// Runs `f` one recursion level deeper, enforcing the depth bound.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses a literal, a parenthesized expression, or a prefix operator
    /// applied to another simple expression.
    fn parse_simple_expression(&mut self) -> ParseResult<Expression> {
        self.descend(|parser| {
            let (token, position) = parser.next();
            match token {
                Token::Number(text) => Ok(Expression::Literal(text)),

                Token::LParen => {
                    let inner = parser.parse_binary_expression(0)?;
                    match parser.next() {
                        (Token::RParen, _) => Ok(inner),
                        (Token::EOF, _) => Err(ParseError::UnexpectedEndOfInput),
                        (Token::Illegal(ch), at) => {
                            Err(ParseError::UnrecognizedCharacter { ch, position: at })
                        }
                        _ => Err(ParseError::UnbalancedParentheses { position }),
                    }
                }

                // Prefix position: always unary, regardless of the symbol
                Token::Operator(op) => {
                    let operand = parser.parse_simple_expression()?;
                    Ok(Expression::unary(op, operand))
                }

                Token::RParen => Err(ParseError::UnexpectedToken {
                    token: Token::RParen.to_string(),
                    position,
                }),
                Token::EOF => Err(ParseError::UnexpectedEndOfInput),
                Token::Illegal(ch) => Err(ParseError::UnrecognizedCharacter { ch, position }),
            }
        })
    }

    /// Precedence climbing. Consumes operators that bind tighter than
    /// `min_precedence`; the first one that does not is pushed back for an
    /// outer level to handle.
    fn parse_binary_expression(&mut self, min_precedence: i32) -> ParseResult<Expression> {
        self.descend(|parser| {
            let mut left = parser.parse_simple_expression()?;
            // Last operator combined at this level, for non-associative checks
            let mut previous: Option<Operator> = None;

            loop {
                let (token, position) = parser.next();
                let operator = match &token {
                    Token::Operator(symbol) => parser.operators.get(symbol).copied(),
                    _ => None,
                };
                let operator = match operator {
                    Some(op) if op.precedence > min_precedence => op,
                    _ => {
                        parser.lexer.push_back(&token);
                        return Ok(left);
                    }
                };

                if let Some(prev) = previous {
                    if prev.precedence == operator.precedence
                        && (prev.associativity == Associativity::None
                            || operator.associativity == Associativity::None)
                    {
                        return Err(ParseError::NonAssociativeChain {
                            operator: token.to_string(),
                            position,
                        });
                    }
                }

                let floor = match operator.associativity {
                    Associativity::Right => operator.precedence.saturating_sub(1),
                    Associativity::Left | Associativity::None => operator.precedence,
                };
                let right = parser.parse_binary_expression(floor)?;

                left = Expression::binary(left, token.to_string(), right);
                previous = Some(operator);
            }
        })
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str, operators: &OperatorTable) -> ParseResult<Expression> {
    Parser::new(input, operators).parse()
}
