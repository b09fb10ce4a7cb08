pub mod core;
pub mod functions;
pub mod instructions;
pub mod loops;

pub use self::core::context::{generate_code, CodeGen, CodegenError, CodegenResult};
pub use self::core::registers::{FixedScratch, Register, ScratchRegisters, REGISTER_COUNT};
pub use instructions::{AsmLine, AssemblyProgram, Instr};
