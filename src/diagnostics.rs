/// Centralized diagnostics for sylva.
/// Every stage error converts into a `Diagnostic`, which renders to stderr
/// with an error code, a `--> file:line` locator and the offending source line.
use crate::analyzer::SemanticError;
use crate::codegen::CodegenError;
use crate::lexar::LexError;
use crate::parser::ParseError;
use color_print::cformat;
use std::fmt;

/// Pipeline stage a diagnostic came from. Each stage has its own error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
    Codegen,
}

impl Stage {
    pub fn code(&self) -> &'static str {
        match self {
            Stage::Lexical => "E1001",
            Stage::Syntax => "E2001",
            Stage::Semantic => "E3001",
            Stage::Codegen => "E4001",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Lexical => "lexical",
            Stage::Syntax => "syntax",
            Stage::Semantic => "semantic",
            Stage::Codegen => "codegen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(stage: Stage, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            stage,
            message: message.into(),
            line,
        }
    }
}

/// Plain, uncolored form: `error[E2001]: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.stage.code(), self.message)
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Diagnostic::new(Stage::Lexical, err.to_string(), Some(err.line()))
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic::new(Stage::Syntax, err.to_string(), err.line())
    }
}

impl From<&SemanticError> for Diagnostic {
    fn from(err: &SemanticError) -> Self {
        Diagnostic::new(Stage::Semantic, err.to_string(), Some(err.line()))
    }
}

impl From<&CodegenError> for Diagnostic {
    fn from(err: &CodegenError) -> Self {
        Diagnostic::new(Stage::Codegen, err.to_string(), err.line())
    }
}

/// Highlights the two halves of "Expected X ..., got Y" messages.
fn colorize_message(msg: &str) -> String {
    if msg.starts_with("Expected ") {
        if let Some((expected, got)) = msg.split_once(", got ") {
            let expected = expected.trim_start_matches("Expected ");
            return cformat!("Expected <green,bold>{}</>, got <red,bold>{}</>", expected, got);
        }
    }
    msg.to_string()
}

/// Renders one diagnostic with color. The snippet is skipped when the line
/// is unknown or out of range for `source`.
pub fn render(diag: &Diagnostic, source: &str, filename: &str) -> String {
    let mut out = cformat!(
        "<red,bold>error[{}]</> <dim>({})</>: {}\n",
        diag.stage.code(),
        diag.stage.label(),
        colorize_message(&diag.message)
    );
    match diag.line {
        Some(line) => {
            out.push_str(&cformat!("     <blue>--></> <underline>{}:{}</>\n", filename, line));
            if let Some(text) = line.checked_sub(1).and_then(|i| source.lines().nth(i)) {
                out.push_str(&cformat!("      <blue>|</>\n"));
                out.push_str(&cformat!(" <blue>{:>4} |</> {}\n", line, text.trim()));
                out.push_str(&cformat!("      <blue>|</>\n"));
            }
        }
        None => out.push_str(&cformat!("     <blue>--></> <underline>{}</>\n", filename)),
    }
    out
}

pub fn print_diagnostic(diag: &Diagnostic, source: &str, filename: &str) {
    eprintln!("{}", render(diag, source, filename));
}

/// Prints every diagnostic in stage order followed by a one-line summary.
pub fn print_grouped(diags: &[Diagnostic], source: &str, filename: &str) {
    if diags.is_empty() {
        return;
    }
    eprintln!("{}", cformat!("<cyan>In</> <dim>{}</>", filename));
    for diag in diags {
        print_diagnostic(diag, source, filename);
    }
    let noun = if diags.len() == 1 { "error" } else { "errors" };
    eprintln!(
        "{}",
        cformat!("<red,bold>error</>: found {} {}", diags.len(), noun)
    );
}

pub fn print_note(note: &str) {
    eprintln!("{}", cformat!("<yellow,bold>note</>: {}", note));
}

/// Stage progress output, shown only in developer mode.
pub fn trace(dev_mode: bool, stage: &str, msg: &str) {
    if dev_mode {
        eprintln!("{}", cformat!("<dim>[{}]</> {}", stage, msg));
    }
}
