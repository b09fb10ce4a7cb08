// The compilation pipeline shared by the sylvac CLI and the sylva-dev binary.
// Lexes, checks syntax, checks semantics, then lowers to pseudo-assembly.
// Semantic analysis and code generation only run on a syntax-clean stream.

use crate::analyzer::{analyze_semantics, SemanticError};
use crate::codegen::{generate_code, CodegenError};
use crate::diagnostics::{print_grouped, print_note, trace, Diagnostic};
use crate::lexar::{lex_with_diagnostics, LexError, SymbolTable, Token};
use crate::parser::{parse_syntax, ParseError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up when the input path is a directory.
pub const ENTRY_FILE: &str = "main.syl";

/// Extension of the generated assembly file.
pub const ASM_EXTENSION: &str = "asm";

/// Program compiled by `sylvac demo` and the sylva-dev binary.
pub const DEMO_SOURCE: &str = r#"
num rr = 88;
line sample = "s";
point vae = 9.9;
binal ees = True;
if(rr >= 3):
then( sample = "hello";
)
else:
then( sample = "done";
);
if(rr < 8):
then(
sample = "second";
)
if not( vae < 10):
then(
sample = "condition";
);
for(num i = 0, i <= 3, i++):
then(
sample = "print";
);
while(i >= 5):
then(
sample = "pp";
);
func add(num x, num y):
then( sample = "ss";
);
func sum(num a, num b):
then( sample = "uihsvdgh";
);
add(3,5);
sum(7,9);
"#;

/// Options for controlling the compilation process.
/// These are set by the CLI and control input/output and what gets printed.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Path to a source file or a directory containing main.syl
    pub input_path: PathBuf,
    /// Where to write the assembly; defaults to the input with an .asm extension
    pub output_path: Option<PathBuf>,
    /// Enable developer mode (prints stage traces)
    pub dev_mode: bool,
    /// Print the token listing after lexing
    pub print_tokens: bool,
    /// Print the symbol table after lexing
    pub print_symbols: bool,
    /// Print the generated assembly
    pub print_asm: bool,
    /// Only check for errors, do not generate code
    pub check_only: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: None,
            dev_mode: cfg!(debug_assertions),
            print_tokens: false,
            print_symbols: false,
            print_asm: false,
            check_only: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{} not found in {}", ENTRY_FILE, .0.display())]
    MissingEntry(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything the pipeline produced, including the per-stage error lists.
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    pub success: bool,
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub lex_errors: Vec<LexError>,
    pub syntax_errors: Vec<ParseError>,
    pub semantic_errors: Vec<SemanticError>,
    pub codegen_error: Option<CodegenError>,
    /// Generated program, present whenever code generation ran and succeeded
    pub assembly: Option<String>,
    /// Path of the written assembly file (compile_project only)
    pub output_path: Option<PathBuf>,
}

impl CompileResult {
    pub fn error_count(&self) -> usize {
        self.lex_errors.len()
            + self.syntax_errors.len()
            + self.semantic_errors.len()
            + usize::from(self.codegen_error.is_some())
    }

    /// All errors as diagnostics, in stage order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out: Vec<Diagnostic> = Vec::with_capacity(self.error_count());
        out.extend(self.lex_errors.iter().map(Diagnostic::from));
        out.extend(self.syntax_errors.iter().map(Diagnostic::from));
        out.extend(self.semantic_errors.iter().map(Diagnostic::from));
        out.extend(self.codegen_error.iter().map(Diagnostic::from));
        out
    }
}

/// Runs the four stages over `source`. Nothing is printed except dev-mode
/// traces; use [`report`] to show the outcome.
pub fn compile_source(source: &str, opts: &CompileOptions) -> CompileResult {
    let lexed = lex_with_diagnostics(source);
    trace(
        opts.dev_mode,
        "lex",
        &format!(
            "{} tokens, {} symbols, {} skipped",
            lexed.tokens.len(),
            lexed.symbols.len(),
            lexed.diagnostics.len()
        ),
    );

    let mut result = CompileResult {
        syntax_errors: parse_syntax(&lexed.tokens),
        tokens: lexed.tokens,
        symbols: lexed.symbols,
        lex_errors: lexed.diagnostics,
        ..CompileResult::default()
    };
    trace(
        opts.dev_mode,
        "syntax",
        &format!("{} errors", result.syntax_errors.len()),
    );

    if !result.syntax_errors.is_empty() {
        trace(
            opts.dev_mode,
            "syntax",
            "skipping semantic analysis and code generation",
        );
        return result;
    }

    result.semantic_errors = analyze_semantics(&result.tokens, &result.symbols);
    trace(
        opts.dev_mode,
        "semantic",
        &format!("{} errors", result.semantic_errors.len()),
    );

    if !opts.check_only {
        match generate_code(&result.tokens) {
            Ok(asm) => {
                trace(
                    opts.dev_mode,
                    "codegen",
                    &format!("{} lines", asm.lines().count()),
                );
                result.assembly = Some(asm);
            }
            Err(e) => result.codegen_error = Some(e),
        }
    }

    result.success = result.error_count() == 0;
    result
}

/// Prints the requested listings and all diagnostics for one compilation.
pub fn report(result: &CompileResult, opts: &CompileOptions, source: &str, filename: &str) {
    if opts.print_tokens {
        for token in &result.tokens {
            println!("{}", token);
        }
    }
    if opts.print_symbols {
        println!("{}", result.symbols);
    }

    print_grouped(&result.diagnostics(), source, filename);
    if !result.syntax_errors.is_empty() {
        print_note("semantic analysis and code generation were skipped because of syntax errors");
    }

    if opts.print_asm {
        if let Some(asm) = &result.assembly {
            println!("{}", asm);
        }
    }
}

/// Resolves a file, or `main.syl` inside a directory.
pub fn resolve_input(path: &Path) -> Result<PathBuf, CompileError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    let entry = path.join(ENTRY_FILE);
    if entry.is_file() {
        Ok(entry)
    } else {
        Err(CompileError::MissingEntry(path.to_path_buf()))
    }
}

/// The main entry point for compiling a source file on disk:
/// 1. Locates and reads the source
/// 2. Runs the pipeline and reports diagnostics
/// 3. Writes the assembly when everything is clean (unless `check_only`)
pub fn compile_project(opts: CompileOptions) -> Result<CompileResult, CompileError> {
    let input_path = resolve_input(&opts.input_path)?;
    let source = fs::read_to_string(&input_path).map_err(|source| CompileError::Read {
        path: input_path.clone(),
        source,
    })?;
    trace(opts.dev_mode, "input", &input_path.display().to_string());

    let mut result = compile_source(&source, &opts);
    report(&result, &opts, &source, &input_path.display().to_string());

    if !result.success || opts.check_only {
        return Ok(result);
    }

    if let Some(asm) = &result.assembly {
        let output_path = opts
            .output_path
            .clone()
            .unwrap_or_else(|| input_path.with_extension(ASM_EXTENSION));
        fs::write(&output_path, format!("{}\n", asm)).map_err(|source| CompileError::Write {
            path: output_path.clone(),
            source,
        })?;
        println!("✓ Assembly written to {}", output_path.display());
        result.output_path = Some(output_path);
    }

    Ok(result)
}
