#[cfg(test)]
mod parser_tests {
    use crate::lexar::lexer::lex;
    use crate::parser::{parse_syntax, ParseError, Parser, RecognizerState, StatementKind};

    fn syntax_errors(input: &str) -> Vec<ParseError> {
        let (tokens, _) = lex(input);
        parse_syntax(&tokens)
    }

    // --- VALID TESTS ---
    #[test]
    fn test_declarations_of_every_type() {
        let input = r#"
            num rr = 88;
            line sample = "s";
            point vae = 9.9;
            binal ees = True;
        "#;
        assert!(syntax_errors(input).is_empty());
    }

    #[test]
    fn test_declaration_with_flat_expression() {
        assert!(syntax_errors("num total = rr + 4 * 2;").is_empty());
    }

    #[test]
    fn test_if_else_chain() {
        let input = r#"
            if(rr >= 3):
            then( sample = "hello"; )
            if not( rr < 1):
            then( sample = "low"; )
            else:
            then( sample = "done"; );
        "#;
        assert!(syntax_errors(input).is_empty());
    }

    #[test]
    fn test_if_with_empty_block() {
        assert!(syntax_errors("if(a == 1): then( );").is_empty());
    }

    #[test]
    fn test_for_loop() {
        let input = r#"for(num i = 0, i <= 3, i++): then( sample = "print"; );"#;
        assert!(syntax_errors(input).is_empty());
        let input = "for(num i = 9, i > 0, i--): then( );";
        assert!(syntax_errors(input).is_empty());
    }

    #[test]
    fn test_while_loop() {
        let input = "while(i >= 5):\nthen(\nsample = \"pp\";\ncount = 2;\n);";
        assert!(syntax_errors(input).is_empty());
    }

    #[test]
    fn test_function_declaration() {
        let input = r#"func add(num x, num y): then( sample = "ss"; );"#;
        assert!(syntax_errors(input).is_empty());
        assert!(syntax_errors("func noop(): then( );").is_empty());
    }

    #[test]
    fn test_function_call() {
        assert!(syntax_errors("add(3, 5);").is_empty());
        assert!(syntax_errors(r#"show("x", 1.5, True, rr);"#).is_empty());
        assert!(syntax_errors("tick();").is_empty());
    }

    // --- INVALID TESTS ---
    #[test]
    fn test_missing_statement_end() {
        let errors = syntax_errors("num a = 1\nnum b = 2;");
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedToken {
                expected: "STATEMENT_END".to_string(),
                found: "num".to_string(),
                line: 2,
            }]
        );
        assert_eq!(errors[0].to_string(), "Expected STATEMENT_END at line 2, got num");
    }

    #[test]
    fn test_empty_initializer() {
        let errors = syntax_errors("num a = ;\nnum b = 2;");
        assert_eq!(
            errors,
            vec![ParseError::InvalidExpression {
                found: ";".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_unrecognized_statement() {
        let errors = syntax_errors("x = 5;\nnum a = 1;");
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedStatement {
                found: "x".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_condition_requires_numeric_literal() {
        let errors = syntax_errors("while(i >= x): then( );");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ParseError::UnexpectedToken {
                expected: "NUMERIC_LITERAL".to_string(),
                found: "x".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_then_block_rejects_identifier_value() {
        let errors = syntax_errors("if(a > 1): then( b = c; );");
        assert_eq!(
            errors[0],
            ParseError::UnexpectedToken {
                expected: "literal".to_string(),
                found: "c".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_nothing_may_follow_else() {
        let input = r#"
            if(a > 1): then( )
            else: then( )
            if not(a < 0): then( );
        "#;
        let errors = syntax_errors(input);
        assert_eq!(
            errors[0],
            ParseError::UnexpectedToken {
                expected: "STATEMENT_END".to_string(),
                found: "if not".to_string(),
                line: 4,
            }
        );
    }

    #[test]
    fn test_for_loop_requires_step_operator() {
        let errors = syntax_errors("for(num i = 0, i <= 3, i): then( );");
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedToken {
                expected: "INCREMENT or DECREMENT".to_string(),
                found: ")".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_function_missing_then() {
        let errors = syntax_errors("func f(num a): ( );");
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedToken {
                expected: "then".to_string(),
                found: "(".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_bad_call_argument() {
        let errors = syntax_errors("f(=);");
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedToken {
                expected: "argument".to_string(),
                found: "=".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_end_of_input() {
        let errors = syntax_errors("num a = 1");
        assert_eq!(
            errors,
            vec![ParseError::EndOfInput {
                expected: "STATEMENT_END".to_string(),
            }]
        );
        assert_eq!(errors[0].line(), None);
    }

    #[test]
    fn test_one_error_per_failed_statement() {
        let input = "num a = ;\nghost;\nnum b = 2;\nwhile(b > 1): then( );";
        assert_eq!(syntax_errors(input).len(), 2);
    }

    // --- RECOGNIZER STATE MACHINE ---
    #[test]
    fn test_identify_statement() {
        let cases = [
            ("num a = 1;", StatementKind::Declaration),
            ("if(a > 1): then( );", StatementKind::Conditional),
            ("for(num i = 0, i < 1, i++): then( );", StatementKind::ForLoop),
            ("while(a > 1): then( );", StatementKind::WhileLoop),
            ("func f(): then( );", StatementKind::Function),
            ("f();", StatementKind::Call),
            ("f;", StatementKind::Unknown),
            ("else: then( );", StatementKind::Unknown),
        ];
        for (input, expected) in cases {
            let (tokens, _) = lex(input);
            assert_eq!(Parser::new(&tokens).identify_statement(), expected, "{}", input);
        }
    }

    #[test]
    fn test_resynchronization_boundary() {
        let (tokens, _) = lex("x;\nnum a = 1;");
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.state(), RecognizerState::Dispatching);

        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::InStatement(StatementKind::Unknown));

        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::Resynchronizing);
        assert_eq!(parser.errors().len(), 1);

        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::Dispatching);
        assert_eq!(parser.position(), 2); // just past the first ';'

        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::InStatement(StatementKind::Declaration));
        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::Dispatching);
        assert!(parser.step());
        assert_eq!(parser.state(), RecognizerState::Finished);
        assert!(!parser.step());
        assert_eq!(parser.errors().len(), 1);
    }

    #[test]
    fn test_resync_stops_at_first_statement_end_inside_block() {
        // The failed header is skipped up to the ';' inside the block, so
        // the dangling ')' is reported as a separate statement.
        let errors = syntax_errors("while(i >= x): then( a = 1; );");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[1],
            ParseError::UnexpectedStatement {
                found: ")".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_input_without_statement_end_terminates() {
        let (tokens, _) = lex("x y z");
        let mut parser = Parser::new(&tokens);
        let mut steps = 0;
        while parser.step() {
            steps += 1;
            assert!(steps < 10);
        }
        assert_eq!(parser.position(), tokens.len());
        assert_eq!(parser.errors().len(), 1);
    }
}
