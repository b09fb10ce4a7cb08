pub mod analyzer;
pub mod declarations;
pub mod expressions;
pub mod types;

pub use analyzer::{analyze_semantics, SemanticAnalyzer};
pub use types::SemanticError;
