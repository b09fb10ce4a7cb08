use crate::lexar::token::{Keyword, TokenType};
use crate::parser::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Syntax:
    ///   - `if ( cond ) : then ( block ) ;`
    ///   - followed by any number of `if not ( cond ) : then ( block )`
    ///   - and at most one final `else : then ( block )`
    /// The whole chain is closed by a single `;`.
    pub fn parse_conditional(&mut self) -> ParseResult<()> {
        self.expect_keyword(Keyword::If)?;
        self.parse_guarded_clause()?;

        loop {
            if self.consume_keyword(Keyword::IfNot) {
                self.parse_guarded_clause()?;
            } else if self.consume_keyword(Keyword::Else) {
                // nothing may follow an else branch
                self.parse_then_clause()?;
                break;
            } else {
                break;
            }
        }

        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// Syntax: `for ( DATA_TYPE IDENTIFIER = expr , cond , step ) : then ( block ) ;`
    pub fn parse_for_loop(&mut self) -> ParseResult<()> {
        self.expect_keyword(Keyword::For)?;
        self.expect(TokenType::LeftParen)?;
        self.parse_declaration_head()?;
        self.expect(TokenType::Separator)?;
        self.parse_condition_block()?;
        self.expect(TokenType::Separator)?;
        self.parse_iteration_block()?;
        self.expect(TokenType::RightParen)?;
        self.parse_then_clause()?;
        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// Syntax: `while ( cond ) : then ( block ) ;`
    pub fn parse_while_loop(&mut self) -> ParseResult<()> {
        self.expect_keyword(Keyword::While)?;
        self.expect(TokenType::LeftParen)?;
        self.parse_condition_block()?;
        self.expect(TokenType::RightParen)?;
        self.parse_then_clause()?;
        self.expect(TokenType::StatementEnd)?;
        Ok(())
    }

    /// `( cond ) : then ( block )`, the body of `if` and `if not`.
    fn parse_guarded_clause(&mut self) -> ParseResult<()> {
        self.expect(TokenType::LeftParen)?;
        self.parse_condition_block()?;
        self.expect(TokenType::RightParen)?;
        self.parse_then_clause()
    }

    /// `: then ( block )`
    pub(crate) fn parse_then_clause(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Colon)?;
        self.expect_keyword(Keyword::Then)?;
        self.expect(TokenType::LeftParen)?;
        self.parse_then_block()?;
        self.expect(TokenType::RightParen)?;
        Ok(())
    }
}
