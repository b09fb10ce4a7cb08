use crate::lexar::token::{Keyword, Token, TokenType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected {expected} at line {line}, got {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
    },
    #[error("Expected expression at line {line}, got {found}")]
    InvalidExpression { found: String, line: usize },
    #[error("Unexpected statement at line {line}, got {found}")]
    UnexpectedStatement { found: String, line: usize },
    #[error("Unexpected end of input, expected {expected}")]
    EndOfInput { expected: String },
}

impl ParseError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::InvalidExpression { line, .. }
            | ParseError::UnexpectedStatement { line, .. } => Some(*line),
            ParseError::EndOfInput { .. } => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The statement grammar chosen by looking at the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Declaration,
    Conditional,
    ForLoop,
    WhileLoop,
    Function,
    Call,
    Unknown,
}

/// Where the recognizer is between two calls to [`Parser::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerState {
    /// At a statement boundary, about to pick a grammar.
    Dispatching,
    /// A grammar has been committed to; the next step runs it.
    InStatement(StatementKind),
    /// The last statement failed; the next step skips past its `;`.
    Resynchronizing,
    Finished,
}

/// Grammar recognizer over a token slice. Builds nothing; it only records
/// the statements that fail to match.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    state: RecognizerState,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            current: 0,
            state: RecognizerState::Dispatching,
            errors: Vec::new(),
        }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    pub(crate) fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.current + 1)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.current);
        if tok.is_some() {
            self.current += 1;
        }
        tok
    }

    pub(crate) fn check(&self, kind: TokenType) -> bool {
        matches!(self.peek(), Some(tok) if tok.kind == kind)
    }

    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.peek(), Some(tok) if tok.is_keyword(keyword))
    }

    pub(crate) fn consume_if(&mut self, kind: TokenType) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Error for the current token (or end of input) not being `expected`.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.peek() {
            Some(tok) => ParseError::UnexpectedToken {
                expected,
                found: tok.value.clone(),
                line: tok.line,
            },
            None => ParseError::EndOfInput { expected },
        }
    }

    /// Consumes a token of `kind` or fails without moving the cursor.
    pub(crate) fn expect(&mut self, kind: TokenType) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.current += 1;
                Ok(tok)
            }
            _ => Err(self.unexpected(kind.name())),
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(tok) if tok.is_keyword(keyword) => {
                self.current += 1;
                Ok(tok)
            }
            _ => Err(self.unexpected(keyword.as_str())),
        }
    }

    /// Picks a grammar by lookahead without consuming anything.
    pub fn identify_statement(&self) -> StatementKind {
        let Some(tok) = self.peek() else {
            return StatementKind::Unknown;
        };
        match tok.kind {
            TokenType::DataType => StatementKind::Declaration,
            TokenType::Keyword => match tok.keyword() {
                Some(Keyword::If) => StatementKind::Conditional,
                Some(Keyword::For) => StatementKind::ForLoop,
                Some(Keyword::While) => StatementKind::WhileLoop,
                Some(Keyword::Func) => StatementKind::Function,
                _ => StatementKind::Unknown,
            },
            TokenType::Identifier
                if matches!(self.peek_next(), Some(next) if next.kind == TokenType::LeftParen) =>
            {
                StatementKind::Call
            }
            _ => StatementKind::Unknown,
        }
    }

    pub fn parse_statement(&mut self, kind: StatementKind) -> ParseResult<()> {
        match kind {
            StatementKind::Declaration => self.parse_declaration(),
            StatementKind::Conditional => self.parse_conditional(),
            StatementKind::ForLoop => self.parse_for_loop(),
            StatementKind::WhileLoop => self.parse_while_loop(),
            StatementKind::Function => self.parse_function_decl(),
            StatementKind::Call => self.parse_call(),
            StatementKind::Unknown => Err(match self.peek() {
                Some(tok) => ParseError::UnexpectedStatement {
                    found: tok.value.clone(),
                    line: tok.line,
                },
                None => ParseError::EndOfInput {
                    expected: "statement".to_string(),
                },
            }),
        }
    }

    /// Advances until a statement end has been consumed or input runs out.
    pub(crate) fn skip_to_statement_end(&mut self) {
        while let Some(tok) = self.advance() {
            if tok.kind == TokenType::StatementEnd {
                break;
            }
        }
    }

    /// Runs one transition of the recognizer. Returns false once finished.
    pub fn step(&mut self) -> bool {
        self.state = match self.state {
            RecognizerState::Dispatching => {
                if self.is_at_end() {
                    RecognizerState::Finished
                } else {
                    RecognizerState::InStatement(self.identify_statement())
                }
            }
            RecognizerState::InStatement(kind) => match self.parse_statement(kind) {
                Ok(()) => RecognizerState::Dispatching,
                Err(err) => {
                    self.errors.push(err);
                    RecognizerState::Resynchronizing
                }
            },
            RecognizerState::Resynchronizing => {
                self.skip_to_statement_end();
                RecognizerState::Dispatching
            }
            RecognizerState::Finished => return false,
        };
        true
    }

    /// Checks every statement and returns the failures in source order.
    /// An empty list means the whole input is grammatical.
    pub fn parse(mut self) -> Vec<ParseError> {
        while self.step() {}
        self.errors
    }
}

/// Validates the grammar of a token sequence.
pub fn parse_syntax(tokens: &[Token]) -> Vec<ParseError> {
    Parser::new(tokens).parse()
}
