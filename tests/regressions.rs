use sylva::analyzer::SemanticError;
use sylva::compiler::{compile_source, CompileOptions};
use sylva::lexar::{lex, DataType, TokenType};
use sylva::parse_syntax;

fn compile_full_pipeline(input: &str) -> Result<String, String> {
    let opts = CompileOptions {
        dev_mode: false,
        ..Default::default()
    };
    let result = compile_source(input, &opts);
    if result.success {
        result.assembly.ok_or_else(|| "no assembly".to_string())
    } else {
        Err(result
            .diagnostics()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[test]
fn regression_double_equals_is_one_comparison() {
    let (tokens, _) = lex("if(a == 1): then( );");
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenType::Comparison));
    assert!(!kinds.contains(&TokenType::Assignment));
    assert!(parse_syntax(&tokens).is_empty());
}

#[test]
fn regression_keyword_prefix_is_an_identifier() {
    let (tokens, symbols) = lex("num format = 1;\nnum iffy = 2;\nbinal Trueish = True;");
    let idents: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenType::Identifier)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(idents, vec!["format", "iffy", "Trueish"]);
    assert_eq!(symbols.len(), 3);
}

#[test]
fn regression_logical_words_are_operators() {
    let (tokens, _) = lex("a and b or not c");
    let logical = tokens
        .iter()
        .filter(|t| t.kind == TokenType::LogicalOperator)
        .count();
    assert_eq!(logical, 3);
}

#[test]
fn regression_blank_lines_keep_line_numbers() {
    let (tokens, symbols) = lex("\n\n\nnum late = 1;");
    assert!(tokens.iter().all(|t| t.line == 4));
    assert_eq!(symbols.lookup("late").map(|e| e.declared_line), Some(4));
}

#[test]
fn regression_usage_line_tracks_last_use_of_first_entry() {
    let (_, symbols) = lex("num a = 1;\nnum a = 2;\nwhile(a > 0): then( );\nf(a);");
    let entries = symbols.all_entries();
    assert_eq!(entries[0].used_line, Some(4));
    assert_eq!(entries[1].used_line, None);
}

#[test]
fn regression_third_redeclaration_is_checked_against_first() {
    let (tokens, symbols) = lex("point p = 1.0;\npoint p = 2.0;\nnum p = 3;");
    assert_eq!(symbols.len(), 3);
    let errors = sylva::analyze_semantics(&tokens, &symbols);
    assert_eq!(
        errors,
        vec![SemanticError::TypeConflict {
            name: "p".to_string(),
            declared: DataType::Point,
            declared_line: 1,
            redeclared: DataType::Num,
            line: 3,
        }]
    );
}

#[test]
fn regression_nothing_may_follow_else() {
    let input = "if(a > 1): then( ) else: then( ) if not(a > 2): then( );";
    let (tokens, _) = lex(input);
    assert!(!parse_syntax(&tokens).is_empty());
}

#[test]
fn regression_lone_if_has_no_end_label() {
    let asm = compile_full_pipeline("num a = 1;\nif(a > 0): then( a = 2; );").unwrap();
    assert_eq!(asm.lines().filter(|l| l.ends_with(':')).count(), 1);
    assert!(!asm.contains("JMP"));
}

#[test]
fn regression_function_name_resolves_as_function() {
    // the declared name right after `func` is not a variable use
    assert!(compile_full_pipeline("func go():\nthen( );\ngo();").is_ok());
}

#[test]
fn regression_errors_render_with_codes() {
    let err = compile_full_pipeline("line s = 9.9;").unwrap_err();
    assert_eq!(
        err,
        "error[E3001]: Type mismatch: variable 's' of type 'line' assigned non-string value 9.9 at line 1"
    );
}

#[test]
fn regression_relexing_is_deterministic() {
    let source = "num a = 1;\nfunc f(num x):\nthen( a = 2; );\nf(a);";
    assert_eq!(lex(source), lex(source));
}
