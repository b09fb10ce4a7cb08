use crate::lexar::token::{Keyword, TokenType};
use crate::parser::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Syntax: `DATA_TYPE IDENTIFIER = expression ;`
    pub fn parse_declaration(&mut self) -> ParseResult<()> {
        self.parse_declaration_head()?;
        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// Declaration without the trailing `;`, shared with the for-loop header.
    pub(crate) fn parse_declaration_head(&mut self) -> ParseResult<()> {
        self.expect(TokenType::DataType)?;
        self.expect(TokenType::Identifier)?;
        self.expect(TokenType::Assignment)?;
        self.parse_expression()
    }

    /// Syntax: `func IDENTIFIER ( params ) : then ( block ) ;`
    pub fn parse_function_decl(&mut self) -> ParseResult<()> {
        self.expect_keyword(Keyword::Func)?;
        self.expect(TokenType::Identifier)?; // function name
        self.expect(TokenType::LeftParen)?;
        self.parse_parameter_block()?;
        self.expect(TokenType::RightParen)?;
        self.parse_then_clause()?;
        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// Zero or more `DATA_TYPE IDENTIFIER` pairs separated by commas.
    fn parse_parameter_block(&mut self) -> ParseResult<()> {
        if self.check(TokenType::RightParen) {
            return Ok(());
        }
        loop {
            self.expect(TokenType::DataType)?;
            self.expect(TokenType::Identifier)?;
            if !self.consume_if(TokenType::Separator) {
                break;
            }
        }
        Ok(())
    }

    /// Syntax: `IDENTIFIER ( args ) ;`
    pub fn parse_call(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Identifier)?; // function name
        self.expect(TokenType::LeftParen)?;
        if !self.check(TokenType::RightParen) {
            self.parse_arguments()?;
        }
        self.expect(TokenType::RightParen)?;
        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// Comma-separated literals or identifiers.
    fn parse_arguments(&mut self) -> ParseResult<()> {
        loop {
            match self.peek() {
                Some(tok) if tok.kind.is_literal() || tok.kind == TokenType::Identifier => {
                    self.advance();
                }
                _ => return Err(self.unexpected("argument")),
            }
            if !self.consume_if(TokenType::Separator) {
                break;
            }
        }
        Ok(())
    }
}
