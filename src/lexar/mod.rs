pub mod lexer;
pub mod symbols;
pub mod token;

pub use lexer::{lex, lex_with_diagnostics, LexError, LexOutput};
pub use symbols::{EntryKind, SymbolEntry, SymbolTable, SymbolType};
pub use token::{DataType, Keyword, Token, TokenType};

#[cfg(test)]
mod tests;
