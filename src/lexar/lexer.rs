use crate::lexar::symbols::SymbolTable;
use crate::lexar::token::{DataType, Keyword, Token, TokenType};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Nothing in the rule table matched; the rest of the line was dropped.
    #[error("Invalid token on line {line}: {text}")]
    UnmatchedInput { line: usize, text: String },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnmatchedInput { line, .. } => *line,
        }
    }
}

/// One entry of the ordered rule table. `kind: None` marks text that is
/// recognized but never emitted (whitespace).
struct Rule {
    kind: Option<TokenType>,
    pattern: Regex,
}

fn rule(kind: Option<TokenType>, pattern: &str) -> Rule {
    Rule {
        kind,
        pattern: Regex::new(&format!("^(?:{})", pattern)).expect("invalid lexer rule"),
    }
}

// First match in list order wins, so multi-word and multi-character
// patterns must sit above their prefixes.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Keywords
        rule(Some(TokenType::Keyword), r"if\s+not\b"),
        rule(Some(TokenType::Keyword), r"(?:if|while|func|for|else|then)\b"),
        // Types and word-like literals/operators
        rule(Some(TokenType::DataType), r"(?:num|line|binal|point)\b"),
        rule(Some(TokenType::BoolLiteral), r"(?:True|False)\b"),
        rule(Some(TokenType::LogicalOperator), r"(?:and|or|not)\b"),
        rule(Some(TokenType::Identifier), r"[a-zA-Z_]\w*"),
        // Operators
        rule(Some(TokenType::Comparison), r"<=|>=|==|!=|<|>"),
        rule(Some(TokenType::Assignment), r"="),
        rule(Some(TokenType::Increment), r"\+\+"),
        rule(Some(TokenType::Decrement), r"--"),
        rule(Some(TokenType::ArithmeticOperator), r"[+\-*/%]"),
        rule(Some(TokenType::BitwiseOperator), r"[&|^~]"),
        // Grouping
        rule(Some(TokenType::LeftParen), r"\("),
        rule(Some(TokenType::RightParen), r"\)"),
        // Numeric and string literals
        rule(Some(TokenType::FloatLiteral), r"\d+\.\d+"),
        rule(Some(TokenType::NumericLiteral), r"\d+"),
        rule(Some(TokenType::StringLiteral), r#""[^"]*""#),
        // Skipped
        rule(None, r"\s+"),
        // Punctuation
        rule(Some(TokenType::StatementEnd), r";"),
        rule(Some(TokenType::Separator), r","),
        rule(Some(TokenType::Colon), r":"),
    ]
});

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_]\w*").expect("invalid identifier pattern"));

/// Everything the lexer produces for one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<LexError>,
}

/// Lexes `input` into tokens and a symbol table. Lines that cannot be fully
/// tokenized are truncated silently; use [`lex_with_diagnostics`] to see them.
pub fn lex(input: &str) -> (Vec<Token>, SymbolTable) {
    let out = lex_with_diagnostics(input);
    (out.tokens, out.symbols)
}

pub fn lex_with_diagnostics(input: &str) -> LexOutput {
    let mut out = LexOutput::default();

    for (idx, raw_line) in input.split('\n').enumerate() {
        let line = idx + 1;
        let mut rest = raw_line.trim();

        while !rest.is_empty() {
            match next_token(rest, line, &mut out) {
                Some(remaining) => rest = remaining,
                None => {
                    out.diagnostics.push(LexError::UnmatchedInput {
                        line,
                        text: rest.to_string(),
                    });
                    break;
                }
            }
        }
    }

    out
}

/// Matches one rule at the start of `rest` and returns the unconsumed text,
/// or `None` if no rule applies.
fn next_token<'s>(rest: &'s str, line: usize, out: &mut LexOutput) -> Option<&'s str> {
    for rule in RULES.iter() {
        let Some(m) = rule.pattern.find(rest) else {
            continue;
        };
        let text = m.as_str();
        let remaining = &rest[m.end()..];

        let Some(kind) = rule.kind else {
            return Some(remaining);
        };

        out.tokens.push(Token::new(line, kind, text));

        return Some(match kind {
            TokenType::DataType => {
                let ty = DataType::from_lexeme(text)?;
                declare(remaining, line, out, |symbols, name| {
                    symbols.add_variable(name, ty, line);
                })
            }
            TokenType::Keyword if Keyword::from_lexeme(text) == Some(Keyword::Func) => {
                declare(remaining, line, out, |symbols, name| {
                    symbols.add_function(name, line);
                })
            }
            TokenType::Identifier => {
                out.symbols.update_usage(text, line);
                remaining
            }
            _ => remaining,
        });
    }
    None
}

/// Consumes the name following a declaring word (a data type or `func`),
/// emits it and registers it through `insert`.
fn declare<'s>(
    rest: &'s str,
    line: usize,
    out: &mut LexOutput,
    insert: impl FnOnce(&mut SymbolTable, &str),
) -> &'s str {
    let rest = rest.trim_start();
    match IDENTIFIER.find(rest) {
        Some(m) => {
            let name = m.as_str();
            out.tokens.push(Token::new(line, TokenType::Identifier, name));
            insert(&mut out.symbols, name);
            rest[m.end()..].trim_start()
        }
        None => rest,
    }
}
