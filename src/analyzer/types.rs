use crate::lexar::token::DataType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    // Declaration errors
    #[error(
        "Variable '{name}' already declared with type '{declared}' at line {declared_line}, \
         redeclared as '{redeclared}' at line {line}"
    )]
    TypeConflict {
        name: String,
        declared: DataType,
        declared_line: usize,
        redeclared: DataType,
        line: usize,
    },
    #[error(
        "Type mismatch: variable '{name}' of type '{ty}' assigned non-{} value {found} at line {line}",
        .ty.literal_description()
    )]
    InitializerMismatch {
        name: String,
        ty: DataType,
        found: String,
        line: usize,
    },

    // Use errors
    #[error("Variable '{name}' not declared before use at line {line}")]
    UndeclaredVariable { name: String, line: usize },
    #[error("Function '{name}' not declared before use at line {line}")]
    UndeclaredFunction { name: String, line: usize },
    #[error("'{name}' is used as a function but is not one at line {line}")]
    NotAFunction { name: String, line: usize },
}

impl SemanticError {
    pub fn line(&self) -> usize {
        match self {
            SemanticError::TypeConflict { line, .. }
            | SemanticError::InitializerMismatch { line, .. }
            | SemanticError::UndeclaredVariable { line, .. }
            | SemanticError::UndeclaredFunction { line, .. }
            | SemanticError::NotAFunction { line, .. } => *line,
        }
    }
}
