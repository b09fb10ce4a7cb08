use super::analyzer::SemanticAnalyzer;
use super::types::SemanticError;
use crate::lexar::token::TokenType;

impl SemanticAnalyzer<'_> {
    /// Checks the declaration whose type keyword sits at `index`.
    /// Reports at most one problem: a type conflict with the first
    /// declaration of the name wins over an initializer mismatch.
    pub(crate) fn check_declaration(&self, index: usize) -> Option<SemanticError> {
        let ty = self.tokens[index].data_type()?;
        let name_tok = self
            .tokens
            .get(index + 1)
            .filter(|t| t.kind == TokenType::Identifier)?;

        if let Some(existing) = self.symbols.lookup(&name_tok.value) {
            // Only variable entries carry a comparable type
            if let Some(declared) = existing.data_type() {
                if declared != ty {
                    return Some(SemanticError::TypeConflict {
                        name: name_tok.value.clone(),
                        declared,
                        declared_line: existing.declared_line,
                        redeclared: ty,
                        line: name_tok.line,
                    });
                }
            }
        }

        let has_initializer = matches!(
            self.tokens.get(index + 2),
            Some(tok) if tok.kind == TokenType::Assignment
        );
        if !has_initializer {
            return None;
        }

        let value = self.tokens.get(index + 3)?;
        if value.kind != ty.literal_kind() {
            return Some(SemanticError::InitializerMismatch {
                name: name_tok.value.clone(),
                ty,
                found: value.value.clone(),
                line: value.line,
            });
        }
        None
    }

    /// Tokens covered by the type keyword and its declared name.
    pub(crate) fn declaration_width(&self, index: usize) -> usize {
        match self.tokens.get(index + 1) {
            Some(tok) if tok.kind == TokenType::Identifier => 2,
            _ => 1,
        }
    }
}
