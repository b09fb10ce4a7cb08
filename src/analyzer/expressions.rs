use super::analyzer::SemanticAnalyzer;
use super::types::SemanticError;
use crate::lexar::token::Token;

impl SemanticAnalyzer<'_> {
    /// A plain identifier must name something in the table.
    pub(crate) fn check_variable_usage(&self, token: &Token) -> Option<SemanticError> {
        match self.symbols.lookup(&token.value) {
            Some(_) => None,
            None => Some(SemanticError::UndeclaredVariable {
                name: token.value.clone(),
                line: token.line,
            }),
        }
    }

    /// A called identifier must name a function entry.
    pub(crate) fn check_function_call(&self, token: &Token) -> Option<SemanticError> {
        match self.symbols.lookup(&token.value) {
            None => Some(SemanticError::UndeclaredFunction {
                name: token.value.clone(),
                line: token.line,
            }),
            Some(entry) if !entry.is_function() => Some(SemanticError::NotAFunction {
                name: token.value.clone(),
                line: token.line,
            }),
            Some(_) => None,
        }
    }
}
