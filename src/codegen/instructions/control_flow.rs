use crate::codegen::core::context::{CodeGen, CodegenResult};
use crate::codegen::core::registers::ScratchRegisters;
use crate::codegen::instructions::Instr;
use crate::lexar::token::{Keyword, Token, TokenType};

impl<'a, R: ScratchRegisters> CodeGen<'a, R> {
    /// Lowers an `if` chain. Each guarded clause gets a skip label; a shared
    /// end label is only allocated once a second branch shows up, so a lone
    /// `if` produces exactly one label.
    ///
    /// ```text
    /// LOAD R0, cond        ; per guarded clause
    /// JZ R0, Lskip
    /// <block>
    /// JMP Lend             ; only when another branch follows
    /// Lskip:
    /// ...
    /// Lend:
    /// ```
    pub(crate) fn gen_conditional(&mut self) -> CodegenResult<()> {
        self.expect_keyword(Keyword::If)?;
        let mut end_label: Option<String> = None;

        loop {
            self.expect(TokenType::LeftParen)?;
            let tested = self.read_condition()?;
            self.expect(TokenType::RightParen)?;

            let skip = self.fresh_label();
            self.gen_condition_test(tested, &skip);
            self.gen_then_clause()?;

            if self.check_keyword(Keyword::IfNot) || self.check_keyword(Keyword::Else) {
                let end = match &end_label {
                    Some(label) => label.clone(),
                    None => {
                        let label = self.fresh_label();
                        end_label = Some(label.clone());
                        label
                    }
                };
                self.emit(Instr::Jmp { target: end });
            }
            self.emit_label(skip);

            if self.consume_keyword(Keyword::IfNot) {
                continue;
            }
            if self.consume_keyword(Keyword::Else) {
                self.gen_then_clause()?;
            }
            break;
        }

        if let Some(end) = end_label {
            self.emit_label(end);
        }
        Ok(())
    }

    /// `IDENTIFIER COMPARISON NUMERIC_LITERAL`; returns the tested variable.
    pub(crate) fn read_condition(&mut self) -> CodegenResult<&'a Token> {
        let tested = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::Comparison)?;
        self.expect(TokenType::NumericLiteral)?;
        Ok(tested)
    }

    pub(crate) fn gen_condition_test(&mut self, tested: &Token, target: &str) {
        let reg = self.registers.scratch();
        self.emit(Instr::Load {
            dst: reg,
            src: tested.value.clone(),
        });
        self.emit(Instr::Jz {
            cond: reg,
            target: target.to_string(),
        });
    }

    /// `: then ( block )`
    pub(crate) fn gen_then_clause(&mut self) -> CodegenResult<()> {
        self.expect(TokenType::Colon)?;
        self.expect_keyword(Keyword::Then)?;
        self.expect(TokenType::LeftParen)?;
        self.gen_block()?;
        self.expect(TokenType::RightParen)?;
        Ok(())
    }
}
