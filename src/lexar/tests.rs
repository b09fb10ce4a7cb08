#[cfg(test)]
mod lexer_tests {
    use crate::lexar::lexer::{lex, lex_with_diagnostics, LexError};
    use crate::lexar::symbols::{EntryKind, SymbolType};
    use crate::lexar::token::{DataType, Keyword, Token, TokenType};

    fn kinds(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_declaration_tokens() {
        let (tokens, _) = lex("num rr = 88;");
        assert_eq!(
            tokens,
            vec![
                Token::new(1, TokenType::DataType, "num"),
                Token::new(1, TokenType::Identifier, "rr"),
                Token::new(1, TokenType::Assignment, "="),
                Token::new(1, TokenType::NumericLiteral, "88"),
                Token::new(1, TokenType::StatementEnd, ";"),
            ]
        );
    }

    #[test]
    fn test_declaration_creates_symbol() {
        let (_, symbols) = lex("num rr = 88;");
        assert_eq!(symbols.len(), 1);
        let entry = &symbols.all_entries()[0];
        assert_eq!(entry.name, "rr");
        assert_eq!(entry.ty, SymbolType::Data(DataType::Num));
        assert_eq!(entry.size, Some(4));
        assert_eq!(entry.dimension, Some(1));
        assert_eq!(entry.declared_line, 1);
        assert_eq!(entry.used_line, None);
        assert_eq!(entry.address, 1);
        assert_eq!(entry.kind, EntryKind::Variable);
    }

    #[test]
    fn test_literals() {
        let input = r#"9.9 42 "hello world" True False"#;
        let (tokens, _) = lex(input);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::FloatLiteral,
                TokenType::NumericLiteral,
                TokenType::StringLiteral,
                TokenType::BoolLiteral,
                TokenType::BoolLiteral,
            ]
        );
        assert_eq!(tokens[2].value, "\"hello world\"");
    }

    #[test]
    fn test_operators() {
        let (tokens, _) = lex("<= >= == != < > = ++ -- + - * / % & | ^ ~");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Comparison,
                TokenType::Comparison,
                TokenType::Comparison,
                TokenType::Comparison,
                TokenType::Comparison,
                TokenType::Comparison,
                TokenType::Assignment,
                TokenType::Increment,
                TokenType::Decrement,
                TokenType::ArithmeticOperator,
                TokenType::ArithmeticOperator,
                TokenType::ArithmeticOperator,
                TokenType::ArithmeticOperator,
                TokenType::ArithmeticOperator,
                TokenType::BitwiseOperator,
                TokenType::BitwiseOperator,
                TokenType::BitwiseOperator,
                TokenType::BitwiseOperator,
            ]
        );
        assert_eq!(tokens[2].value, "==");
    }

    #[test]
    fn test_keywords() {
        let (tokens, _) = lex("if while for else then");
        let keywords: Vec<_> = tokens.iter().map(|t| t.keyword()).collect();
        assert_eq!(
            keywords,
            vec![
                Some(Keyword::If),
                Some(Keyword::While),
                Some(Keyword::For),
                Some(Keyword::Else),
                Some(Keyword::Then),
            ]
        );
    }

    #[test]
    fn test_if_not_is_one_keyword() {
        let (tokens, _) = lex("if not( vae < 10):");
        assert_eq!(tokens[0].kind, TokenType::Keyword);
        assert_eq!(tokens[0].value, "if not");
        assert!(tokens[0].is_keyword(Keyword::IfNot));
        assert_eq!(tokens[1].kind, TokenType::LeftParen);
    }

    #[test]
    fn test_logical_operators_are_not_identifiers() {
        let (tokens, _) = lex("a and b or not c");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Identifier,
                TokenType::LogicalOperator,
                TokenType::Identifier,
                TokenType::LogicalOperator,
                TokenType::LogicalOperator,
                TokenType::Identifier,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_stays_identifier() {
        let (tokens, _) = lex("iffy numbers Truest");
        assert!(tokens.iter().all(|t| t.kind == TokenType::Identifier));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_func_declares_function() {
        let (tokens, symbols) = lex("func add(num x, num y):");
        assert_eq!(tokens[0].kind, TokenType::Keyword);
        assert_eq!(tokens[1], Token::new(1, TokenType::Identifier, "add"));

        let add = symbols.lookup("add").expect("add should be declared");
        assert_eq!(add.kind, EntryKind::Function);
        assert_eq!(add.ty, SymbolType::Function);
        assert_eq!(add.size, None);
        assert_eq!(add.dimension, None);

        // Parameters are declarations too
        assert_eq!(symbols.lookup("x").unwrap().address, 2);
        assert_eq!(symbols.lookup("y").unwrap().address, 3);
    }

    #[test]
    fn test_usage_line_updated_by_later_reference() {
        let input = "num rr = 88;\n\nwhile(rr >= 5):";
        let (_, symbols) = lex(input);
        let rr = symbols.lookup("rr").unwrap();
        assert_eq!(rr.declared_line, 1);
        assert_eq!(rr.used_line, Some(3));
    }

    #[test]
    fn test_unknown_identifier_is_not_an_error() {
        let out = lex_with_diagnostics("ghost = 1;");
        assert!(out.diagnostics.is_empty());
        assert!(out.symbols.is_empty());
        assert_eq!(out.tokens.len(), 4);
    }

    #[test]
    fn test_blank_lines_advance_line_counter() {
        let (tokens, _) = lex("\n   \nnum a = 1;");
        assert!(tokens.iter().all(|t| t.line == 3));
    }

    #[test]
    fn test_unmatched_text_drops_rest_of_line_only() {
        let input = "num a = 1; @ num b = 2;\nnum c = 3;";
        let out = lex_with_diagnostics(input);

        assert_eq!(
            out.diagnostics,
            vec![LexError::UnmatchedInput {
                line: 1,
                text: "@ num b = 2;".to_string(),
            }]
        );
        let names: Vec<_> = out.symbols.all_entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(out.tokens.last().unwrap().line, 2);
    }

    #[test]
    fn test_unterminated_string_is_unmatched() {
        let out = lex_with_diagnostics(r#"line s = "open;"#);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].line(), 1);
        assert_eq!(out.tokens.len(), 3);
    }

    #[test]
    fn test_relex_is_idempotent() {
        let input = "num a = 1;\nfunc f(num p):\nthen( a = 2; );\nf(a);";
        let first = lex(input);
        let second = lex(input);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }
}

#[cfg(test)]
mod symbol_table_tests {
    use crate::lexar::symbols::{EntryKind, SymbolTable};
    use crate::lexar::token::DataType;

    #[test]
    fn test_addresses_increase_across_kinds() {
        let mut table = SymbolTable::new();
        assert_eq!(table.add_variable("a", DataType::Num, 1), 1);
        assert_eq!(table.add_function("f", 2), 2);
        assert_eq!(table.add_variable("b", DataType::Point, 3), 3);

        let addresses: Vec<_> = table.all_entries().iter().map(|e| e.address).collect();
        assert_eq!(addresses, vec![1, 2, 3]);
    }

    #[test]
    fn test_redeclaration_appends_but_lookup_finds_first() {
        let mut table = SymbolTable::new();
        table.add_variable("x", DataType::Num, 1);
        table.add_variable("x", DataType::Line, 4);
        table.add_variable("x", DataType::Binal, 7);

        assert_eq!(table.len(), 3);
        let found = table.lookup("x").unwrap();
        assert_eq!(found.declared_line, 1);
        assert_eq!(found.data_type(), Some(DataType::Num));
    }

    #[test]
    fn test_update_usage_touches_first_entry_only() {
        let mut table = SymbolTable::new();
        table.add_variable("x", DataType::Num, 1);
        table.add_function("x", 2);

        assert!(table.update_usage("x", 9));
        assert_eq!(table.all_entries()[0].used_line, Some(9));
        assert_eq!(table.all_entries()[1].used_line, None);
        assert_eq!(table.all_entries()[1].kind, EntryKind::Function);
        assert!(!table.update_usage("missing", 9));
    }

    #[test]
    fn test_sizes_by_type() {
        let mut table = SymbolTable::new();
        table.add_variable("n", DataType::Num, 1);
        table.add_variable("p", DataType::Point, 1);
        table.add_variable("l", DataType::Line, 1);
        table.add_variable("b", DataType::Binal, 1);
        let sizes: Vec<_> = table.all_entries().iter().map(|e| e.size).collect();
        assert_eq!(sizes, vec![Some(4), Some(8), Some(0), Some(1)]);
    }

    #[test]
    fn test_table_dump_has_headers_and_rows() {
        let mut table = SymbolTable::new();
        table.add_variable("rr", DataType::Num, 1);
        table.add_function("add", 2);
        let dump = table.to_string();

        assert!(dump.contains("| Name "));
        assert!(dump.contains("Line of Declaration"));
        assert!(dump.contains("| rr "));
        assert!(dump.contains("| 1D "));
        assert!(dump.contains("| function "));
        // header, separator, two rows, borders
        assert_eq!(dump.lines().count(), 7);
    }
}
