use super::registers::{FixedScratch, ScratchRegisters};
use crate::codegen::instructions::{AssemblyProgram, Instr};
use crate::lexar::token::{Keyword, Token, TokenType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("Code generation expected {expected} at line {line}, got {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("Code generation reached end of input, expected {expected}")]
    EndOfInput { expected: String },

    #[error(
        "Call to '{function}' at line {line} passes {count} arguments, but only {limit} registers exist"
    )]
    TooManyArguments {
        function: String,
        count: usize,
        limit: usize,
        line: usize,
    },
}

impl CodegenError {
    pub fn line(&self) -> Option<usize> {
        match self {
            CodegenError::UnexpectedToken { line, .. }
            | CodegenError::TooManyArguments { line, .. } => Some(*line),
            CodegenError::EndOfInput { .. } => None,
        }
    }
}

pub type CodegenResult<T> = Result<T, CodegenError>;

/// Walks a syntax-checked token stream once and appends instructions.
pub struct CodeGen<'a, R: ScratchRegisters = FixedScratch> {
    pub(crate) tokens: &'a [Token],
    pub(crate) current: usize,
    pub(crate) program: AssemblyProgram,
    label_count: usize, // Labels are L1, L2, ... in allocation order
    pub(crate) registers: R,
}

impl<'a> CodeGen<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_registers(tokens, FixedScratch)
    }
}

impl<'a, R: ScratchRegisters> CodeGen<'a, R> {
    pub fn with_registers(tokens: &'a [Token], registers: R) -> Self {
        Self {
            tokens,
            current: 0,
            program: AssemblyProgram::new(),
            label_count: 0,
            registers,
        }
    }

    pub fn generate(mut self) -> CodegenResult<AssemblyProgram> {
        while let Some(token) = self.peek() {
            match token.kind {
                TokenType::DataType => self.gen_declaration()?,
                TokenType::Identifier => self.gen_reference()?,
                TokenType::Keyword => match token.keyword() {
                    Some(Keyword::If) => self.gen_conditional()?,
                    Some(Keyword::While) => self.gen_while_loop()?,
                    Some(Keyword::For) => self.gen_for_loop()?,
                    Some(Keyword::Func) => self.gen_function()?,
                    _ => self.current += 1,
                },
                _ => self.current += 1,
            }
        }
        Ok(self.program)
    }

    pub(crate) fn fresh_label(&mut self) -> String {
        self.label_count += 1;
        format!("L{}", self.label_count)
    }

    pub(crate) fn emit(&mut self, instr: Instr) {
        self.program.push(instr);
    }

    pub(crate) fn emit_label(&mut self, name: impl Into<String>) {
        self.program.push_label(name);
    }

    /// `type name [= value]`; the trailing `;` is left to the caller.
    pub(crate) fn gen_declaration(&mut self) -> CodegenResult<()> {
        self.expect(TokenType::DataType)?;
        let name = self.expect(TokenType::Identifier)?;
        if self.consume_if(TokenType::Assignment) {
            let value = self.advance("initializer")?;
            self.gen_store(&name.value, &value.value);
        }
        Ok(())
    }

    pub(crate) fn gen_store(&mut self, name: &str, value: &str) {
        let reg = self.registers.scratch();
        self.emit(Instr::Load {
            dst: reg,
            src: value.to_string(),
        });
        self.emit(Instr::Store {
            src: reg,
            dst: name.to_string(),
        });
    }

    /// An identifier followed by `(` is a call, anything else a value load.
    pub(crate) fn gen_reference(&mut self) -> CodegenResult<()> {
        if self.peek_next().map(|t| t.kind) == Some(TokenType::LeftParen) {
            return self.gen_call();
        }
        let name = self.expect(TokenType::Identifier)?;
        let reg = self.registers.scratch();
        self.emit(Instr::Load {
            dst: reg,
            src: name.value.clone(),
        });
        Ok(())
    }

    /// Emits code for everything up to (not including) the block's `)`.
    pub(crate) fn gen_block(&mut self) -> CodegenResult<()> {
        loop {
            let token = self.peek().ok_or_else(|| CodegenError::EndOfInput {
                expected: TokenType::RightParen.name().to_string(),
            })?;
            match token.kind {
                TokenType::RightParen => return Ok(()),
                TokenType::Identifier => self.gen_reference()?,
                _ => self.current += 1,
            }
        }
    }
}

/// Lowers a token stream that already passed the syntax check.
pub fn generate_code(tokens: &[Token]) -> CodegenResult<String> {
    Ok(CodeGen::new(tokens).generate()?.to_string())
}
