use clap::Parser;
use std::process::exit;
use sylva::compiler::{compile_source, report, CompileOptions, DEMO_SOURCE};

/// Compiles the built-in demo program and prints every stage's output.
#[derive(Parser)]
struct Args {
    /// Hide the token listing
    #[clap(long)]
    no_tokens: bool,
    /// Hide the symbol table
    #[clap(long)]
    no_symbols: bool,
}

fn main() {
    let args = Args::parse();

    let opts = CompileOptions {
        dev_mode: true,
        print_tokens: !args.no_tokens,
        print_symbols: !args.no_symbols,
        print_asm: false,
        ..CompileOptions::default()
    };

    let result = compile_source(DEMO_SOURCE, &opts);
    report(&result, &opts, DEMO_SOURCE, "<demo>");

    println!("Syntax Analysis Results:");
    print_stage(result.syntax_errors.iter().map(|e| e.to_string()));
    println!("\nSemantic Analysis Results:");
    print_stage(result.semantic_errors.iter().map(|e| e.to_string()));

    if let Some(asm) = &result.assembly {
        println!("\nGenerated Assembly Code:");
        println!("{}", asm);
    }

    if result.success {
        println!("\n✓ Compilation successful");
    } else {
        eprintln!(
            "\n✗ Compilation failed with {} error(s)",
            result.error_count()
        );
        exit(1);
    }
}

fn print_stage(messages: impl Iterator<Item = String>) {
    let mut any = false;
    for message in messages {
        println!("{}", message);
        any = true;
    }
    if !any {
        println!("No errors");
    }
}
