pub mod declarations;
pub mod expressions;
pub mod parser;
pub mod statements;

pub use parser::{parse_syntax, ParseError, ParseResult, Parser, RecognizerState, StatementKind};

#[cfg(test)]
mod tests;
