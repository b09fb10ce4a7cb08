use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // --- Words ---
    Keyword,  // if, if not, while, func, for, else, then
    DataType, // num, line, binal, point
    Identifier,

    // --- Literals ---
    BoolLiteral,    // True, False
    FloatLiteral,   // 9.9
    NumericLiteral, // 88
    StringLiteral,  // "text"

    // --- Operators ---
    Assignment,         // =
    Comparison,         // <= >= == != < >
    Increment,          // ++
    Decrement,          // --
    ArithmeticOperator, // + - * / %
    LogicalOperator,    // and or not
    BitwiseOperator,    // & | ^ ~

    // --- Delimiters & Punctuation ---
    LeftParen,    // (
    RightParen,   // )
    StatementEnd, // ;
    Separator,    // ,
    Colon,        // :
}

impl TokenType {
    /// Upper-case name used in token dumps and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "KEYWORD",
            TokenType::DataType => "DATA_TYPE",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::BoolLiteral => "BOOL_LITERAL",
            TokenType::FloatLiteral => "FLOAT_LITERAL",
            TokenType::NumericLiteral => "NUMERIC_LITERAL",
            TokenType::StringLiteral => "STRING_LITERAL",
            TokenType::Assignment => "ASSIGNMENT",
            TokenType::Comparison => "COMPARISON",
            TokenType::Increment => "INCREMENT",
            TokenType::Decrement => "DECREMENT",
            TokenType::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenType::LogicalOperator => "LOGICAL_OPERATOR",
            TokenType::BitwiseOperator => "BITWISE_OPERATOR",
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::StatementEnd => "STATEMENT_END",
            TokenType::Separator => "SEPARATOR",
            TokenType::Colon => "COLON",
        }
    }

    /// Any literal that may stand on the right of an assignment.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::BoolLiteral
                | TokenType::FloatLiteral
                | TokenType::NumericLiteral
                | TokenType::StringLiteral
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The reserved words carried by `TokenType::Keyword` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    IfNot,
    While,
    Func,
    For,
    Else,
    Then,
}

impl Keyword {
    /// Resolves keyword text. `if not` may be written with any run of
    /// whitespace between the two words.
    pub fn from_lexeme(text: &str) -> Option<Keyword> {
        let mut words = text.split_whitespace();
        let first = words.next()?;
        let second = words.next();
        if words.next().is_some() {
            return None;
        }
        match (first, second) {
            ("if", Some("not")) => Some(Keyword::IfNot),
            ("if", None) => Some(Keyword::If),
            ("while", None) => Some(Keyword::While),
            ("func", None) => Some(Keyword::Func),
            ("for", None) => Some(Keyword::For),
            ("else", None) => Some(Keyword::Else),
            ("then", None) => Some(Keyword::Then),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::IfNot => "if not",
            Keyword::While => "while",
            Keyword::Func => "func",
            Keyword::For => "for",
            Keyword::Else => "else",
            Keyword::Then => "then",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Num,   // integer
    Line,  // string
    Binal, // boolean
    Point, // float
}

impl DataType {
    pub fn from_lexeme(text: &str) -> Option<DataType> {
        match text {
            "num" => Some(DataType::Num),
            "line" => Some(DataType::Line),
            "binal" => Some(DataType::Binal),
            "point" => Some(DataType::Point),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Num => "num",
            DataType::Line => "line",
            DataType::Binal => "binal",
            DataType::Point => "point",
        }
    }

    /// Storage size in bytes recorded in the symbol table.
    pub fn size(&self) -> usize {
        match self {
            DataType::Num => 4,
            DataType::Point => 8,
            DataType::Line => 0,
            DataType::Binal => 1,
        }
    }

    /// The only literal kind accepted as an initializer for this type.
    pub fn literal_kind(&self) -> TokenType {
        match self {
            DataType::Num => TokenType::NumericLiteral,
            DataType::Line => TokenType::StringLiteral,
            DataType::Binal => TokenType::BoolLiteral,
            DataType::Point => TokenType::FloatLiteral,
        }
    }

    /// Human wording for the literal kind, e.g. "numeric".
    pub fn literal_description(&self) -> &'static str {
        match self {
            DataType::Num => "numeric",
            DataType::Line => "string",
            DataType::Binal => "boolean",
            DataType::Point => "float",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub line: usize,
    pub kind: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(line: usize, kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            line,
            kind,
            value: value.into(),
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenType::Keyword {
            Keyword::from_lexeme(&self.value)
        } else {
            None
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn data_type(&self) -> Option<DataType> {
        if self.kind == TokenType::DataType {
            DataType::from_lexeme(&self.value)
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} - {}", self.line, self.kind, self.value)
    }
}
