// Sylva Compiler Library
// Exports all compiler stages for the binaries, tests and external use

pub mod analyzer;
pub mod codegen;
pub mod compiler;
pub mod diagnostics;
pub mod lexar;
pub mod parser;

// Re-export commonly used types
pub use analyzer::{analyze_semantics, SemanticAnalyzer, SemanticError};
pub use codegen::{generate_code, CodeGen, CodegenError};
pub use compiler::{compile_project, compile_source, CompileOptions, CompileResult};
pub use lexar::{lex, SymbolTable, Token, TokenType};
pub use parser::{parse_syntax, ParseError, Parser};
