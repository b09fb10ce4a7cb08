use crate::analyzer::types::SemanticError;
use crate::lexar::symbols::SymbolTable;
use crate::lexar::token::{Token, TokenType};

/// Cross-checks declarations and uses in the token stream against the
/// symbol table built by the lexer. The table is never modified here.
pub struct SemanticAnalyzer<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) symbols: &'a SymbolTable,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(tokens: &'a [Token], symbols: &'a SymbolTable) -> Self {
        Self { tokens, symbols }
    }

    /// Scans every token once and returns the problems in source order.
    pub fn analyze(&self) -> Vec<SemanticError> {
        let mut errors = Vec::new();
        let mut i = 0;

        while i < self.tokens.len() {
            let token = &self.tokens[i];
            match token.kind {
                TokenType::DataType => {
                    if let Some(err) = self.check_declaration(i) {
                        errors.push(err);
                    }
                    // The declared name is not a use; the initializer is
                    // scanned like any other token.
                    i += self.declaration_width(i);
                    continue;
                }
                TokenType::Identifier => {
                    let result = if self.is_function_call(i) {
                        self.check_function_call(token)
                    } else {
                        self.check_variable_usage(token)
                    };
                    if let Some(err) = result {
                        errors.push(err);
                    }
                }
                _ => {}
            }
            i += 1;
        }

        errors
    }

    /// True when the identifier at `index` is immediately followed by `(`.
    pub(crate) fn is_function_call(&self, index: usize) -> bool {
        matches!(self.tokens.get(index + 1), Some(next) if next.kind == TokenType::LeftParen)
    }
}

pub fn analyze_semantics(tokens: &[Token], symbols: &SymbolTable) -> Vec<SemanticError> {
    SemanticAnalyzer::new(tokens, symbols).analyze()
}
