use super::context::{CodeGen, CodegenError, CodegenResult};
use super::registers::ScratchRegisters;
use crate::lexar::token::{Keyword, Token, TokenType};

impl<'a, R: ScratchRegisters> CodeGen<'a, R> {
    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    pub(crate) fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.current + 1)
    }

    pub(crate) fn advance(&mut self, expected: &str) -> CodegenResult<&'a Token> {
        let token = self.peek().ok_or_else(|| CodegenError::EndOfInput {
            expected: expected.to_string(),
        })?;
        self.current += 1;
        Ok(token)
    }

    pub(crate) fn check(&self, kind: TokenType) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().and_then(Token::keyword) == Some(keyword)
    }

    pub(crate) fn consume_if(&mut self, kind: TokenType) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenType) -> CodegenResult<&'a Token> {
        let token = self.advance(kind.name())?;
        if token.kind != kind {
            return Err(unexpected(kind.name(), token));
        }
        Ok(token)
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> CodegenResult<&'a Token> {
        let token = self.advance(keyword.as_str())?;
        if token.keyword() != Some(keyword) {
            return Err(unexpected(keyword.as_str(), token));
        }
        Ok(token)
    }

    /// Moves forward until the current token has `kind`, without consuming it.
    pub(crate) fn skip_until(&mut self, kind: TokenType) -> CodegenResult<()> {
        while !self.check(kind) {
            self.advance(kind.name())?;
        }
        Ok(())
    }
}

fn unexpected(expected: &str, found: &Token) -> CodegenError {
    CodegenError::UnexpectedToken {
        expected: expected.to_string(),
        found: found.value.clone(),
        line: found.line,
    }
}
