use crate::codegen::core::context::{CodeGen, CodegenError, CodegenResult};
use crate::codegen::core::registers::{ScratchRegisters, REGISTER_COUNT};
use crate::codegen::instructions::Instr;
use crate::lexar::token::{Keyword, Token, TokenType};

impl<'a, R: ScratchRegisters> CodeGen<'a, R> {
    /// `func name (params) : then (block)` becomes `name_start:`, the block,
    /// then `RET`. Parameters produce no code.
    pub(crate) fn gen_function(&mut self) -> CodegenResult<()> {
        self.expect_keyword(Keyword::Func)?;
        let name = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::LeftParen)?;
        self.skip_until(TokenType::RightParen)?;
        self.expect(TokenType::RightParen)?;

        self.emit_label(format!("{}_start", name.value));
        self.gen_then_clause()?;
        self.emit(Instr::Ret);
        Ok(())
    }

    /// Argument `k` is loaded into its own register, then `CALL name`.
    pub(crate) fn gen_call(&mut self) -> CodegenResult<()> {
        let name = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::LeftParen)?;

        let mut args: Vec<&'a Token> = Vec::new();
        while !self.check(TokenType::RightParen) {
            let token = self.advance(TokenType::RightParen.name())?;
            if token.kind != TokenType::Separator {
                args.push(token);
            }
        }
        self.expect(TokenType::RightParen)?;

        if args.len() > REGISTER_COUNT {
            return Err(too_many_arguments(name, args.len()));
        }
        for (index, arg) in args.iter().enumerate() {
            let reg = self
                .registers
                .argument(index)
                .ok_or_else(|| too_many_arguments(name, args.len()))?;
            self.emit(Instr::Load {
                dst: reg,
                src: arg.value.clone(),
            });
        }
        self.emit(Instr::Call {
            target: name.value.clone(),
        });
        Ok(())
    }
}

fn too_many_arguments(name: &Token, count: usize) -> CodegenError {
    CodegenError::TooManyArguments {
        function: name.value.clone(),
        count,
        limit: REGISTER_COUNT,
        line: name.line,
    }
}
