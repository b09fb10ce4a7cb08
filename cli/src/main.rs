use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::exit;
use sylva::compiler::{
    compile_project, compile_source, report, resolve_input, CompileOptions, DEMO_SOURCE,
};
use sylva::lexar::lex;

/// ===============================================================
/// sylvac - command-line interface for the Sylva teaching language
///
/// Commands:
///   - `sylvac build`: Compiles a program to pseudo-assembly (.asm).
///   - `sylvac check`: Runs every check without generating code.
///   - `sylvac tokens`: Prints the token listing.
///   - `sylvac symbols`: Prints the symbol table.
///   - `sylvac demo`: Compiles the built-in demo program.
/// ===============================================================
#[derive(Parser)]
#[command(name = "sylvac")]
#[command(about = "Sylva compiler CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print stage traces
    #[arg(long, global = true)]
    dev: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a program to pseudo-assembly
    Build {
        /// Path to a .syl file or a directory containing main.syl
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to the input with an .asm extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the generated assembly
        #[arg(long)]
        print_asm: bool,
    },

    /// Check for errors without generating code
    Check {
        /// Path to a .syl file or a directory containing main.syl
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the token listing
    Tokens {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the symbol table
    Symbols {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Compile the built-in demo program and print its assembly
    Demo,
}

/// Returns the process exit code (0 for success, 1 for any error).
fn run_cli(cli: Cli) -> i32 {
    let base = CompileOptions {
        dev_mode: cli.dev,
        ..CompileOptions::default()
    };

    match cli.command {
        None => {
            println!("sylvac - Sylva compiler");
            println!("Type `sylvac --help` for usage");
            0
        }
        Some(Commands::Build {
            path,
            output,
            print_asm,
        }) => {
            let opts = CompileOptions {
                input_path: path,
                output_path: output,
                print_asm,
                ..base
            };
            finish("Build", compile_project(opts))
        }
        Some(Commands::Check { path }) => {
            let opts = CompileOptions {
                input_path: path,
                check_only: true,
                ..base
            };
            finish("Check", compile_project(opts))
        }
        Some(Commands::Tokens { path }) => listing(&path, |source| {
            let (tokens, _) = lex(source);
            for token in tokens {
                println!("{}", token);
            }
        }),
        Some(Commands::Symbols { path }) => listing(&path, |source| {
            let (_, symbols) = lex(source);
            println!("{}", symbols);
        }),
        Some(Commands::Demo) => {
            let opts = CompileOptions {
                print_asm: true,
                ..base
            };
            let result = compile_source(DEMO_SOURCE, &opts);
            report(&result, &opts, DEMO_SOURCE, "<demo>");
            if result.success {
                0
            } else {
                1
            }
        }
    }
}

fn finish(
    action: &str,
    outcome: Result<sylva::CompileResult, sylva::compiler::CompileError>,
) -> i32 {
    match outcome {
        Ok(result) if result.success => {
            println!("✓ {} successful", action);
            0
        }
        Ok(result) => {
            eprintln!("{} failed with {} errors", action, result.error_count());
            1
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

/// Reads the source at `path` and hands it to `print`.
fn listing(path: &Path, print: impl FnOnce(&str)) -> i32 {
    let source = resolve_input(path).and_then(|file| {
        std::fs::read_to_string(&file)
            .map_err(|source| sylva::compiler::CompileError::Read { path: file, source })
    });
    match source {
        Ok(source) => {
            print(&source);
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    exit(run_cli(cli));
}
