use crate::lexar::token::TokenType;
use crate::parser::{ParseError, ParseResult, Parser};

/// Token kinds that may appear in a flat expression run.
const EXPRESSION_KINDS: [TokenType; 7] = [
    TokenType::NumericLiteral,
    TokenType::FloatLiteral,
    TokenType::StringLiteral,
    TokenType::BoolLiteral,
    TokenType::ArithmeticOperator,
    TokenType::Comparison,
    TokenType::Identifier,
];

impl<'a> Parser<'a> {
    /// Consumes the longest run of expression tokens. No tree, no precedence;
    /// only an empty run is an error.
    pub fn parse_expression(&mut self) -> ParseResult<()> {
        let start = self.position();
        while matches!(self.peek(), Some(tok) if EXPRESSION_KINDS.contains(&tok.kind)) {
            self.advance();
        }
        if self.position() > start {
            return Ok(());
        }
        Err(match self.peek() {
            Some(tok) => ParseError::InvalidExpression {
                found: tok.value.clone(),
                line: tok.line,
            },
            None => ParseError::EndOfInput {
                expected: "expression".to_string(),
            },
        })
    }

    /// Exactly `IDENTIFIER COMPARISON NUMERIC_LITERAL`.
    pub(crate) fn parse_condition_block(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Identifier)?;
        self.expect(TokenType::Comparison)?;
        self.expect(TokenType::NumericLiteral)?;
        Ok(())
    }

    /// `IDENTIFIER ++` or `IDENTIFIER --`.
    pub(crate) fn parse_iteration_block(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Identifier)?;
        if self.consume_if(TokenType::Increment) || self.consume_if(TokenType::Decrement) {
            Ok(())
        } else {
            Err(self.unexpected("INCREMENT or DECREMENT"))
        }
    }

    /// Simple assignments `IDENTIFIER = literal ;` up to the closing paren,
    /// which is left for the caller.
    pub(crate) fn parse_then_block(&mut self) -> ParseResult<()> {
        while !self.check(TokenType::RightParen) {
            self.expect(TokenType::Identifier)?;
            self.expect(TokenType::Assignment)?;
            match self.peek() {
                Some(tok) if tok.kind.is_literal() => {
                    self.advance();
                }
                _ => return Err(self.unexpected("literal")),
            }
            self.expect(TokenType::StatementEnd)?;
        }
        Ok(())
    }
}
