use crate::codegen::core::context::{CodeGen, CodegenResult};
use crate::codegen::core::registers::ScratchRegisters;
use crate::codegen::instructions::Instr;
use crate::lexar::token::{Keyword, TokenType};

impl<'a, R: ScratchRegisters> CodeGen<'a, R> {
    /// ```text
    /// Lstart:
    /// LOAD R0, cond
    /// JZ R0, Lend
    /// <block>
    /// JMP Lstart
    /// Lend:
    /// ```
    pub(crate) fn gen_while_loop(&mut self) -> CodegenResult<()> {
        self.expect_keyword(Keyword::While)?;
        self.expect(TokenType::LeftParen)?;
        let tested = self.read_condition()?;
        self.expect(TokenType::RightParen)?;

        let start = self.fresh_label();
        let end = self.fresh_label();

        self.emit_label(start.clone());
        self.gen_condition_test(tested, &end);
        self.gen_then_clause()?;
        self.emit(Instr::Jmp { target: start });
        self.emit_label(end);
        Ok(())
    }

    /// Same shape as `while`, with the init store before the start label and
    /// a load of the step variable before the back jump.
    pub(crate) fn gen_for_loop(&mut self) -> CodegenResult<()> {
        self.expect_keyword(Keyword::For)?;
        self.expect(TokenType::LeftParen)?;

        // init: DATA_TYPE IDENTIFIER = value
        self.expect(TokenType::DataType)?;
        let counter = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::Assignment)?;
        let initial = self.advance("initializer")?;
        self.skip_until(TokenType::Separator)?;
        self.expect(TokenType::Separator)?;

        let tested = self.read_condition()?;
        self.expect(TokenType::Separator)?;

        let stepped = self.expect(TokenType::Identifier)?;
        self.skip_until(TokenType::RightParen)?;
        self.expect(TokenType::RightParen)?;

        let start = self.fresh_label();
        let end = self.fresh_label();

        self.gen_store(&counter.value, &initial.value);
        self.emit_label(start.clone());
        self.gen_condition_test(tested, &end);
        self.gen_then_clause()?;

        let reg = self.registers.scratch();
        self.emit(Instr::Load {
            dst: reg,
            src: stepped.value.clone(),
        });
        self.emit(Instr::Jmp { target: start });
        self.emit_label(end);
        Ok(())
    }
}
