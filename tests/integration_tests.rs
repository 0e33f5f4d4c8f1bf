//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing, and drive the
//! command line entry point against files on disk.

use std::{fs, path::PathBuf};

use mini_ll1::{
    cli::{self, Args, EXIT_ANALYSIS_FAILED, EXIT_INPUT_UNAVAILABLE, EXIT_SUCCESS},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{
        lexer::tokenize,
        tokens::{kinds_line, TokenKind},
    },
    parser::{parser::parse, symbols::Symbol},
};

const PROGRAMS: &[&str] = &[
    "",
    "int x;",
    "int x; x = 3 + 4; print(x);",
    "int a; int b;\na = 10;\nb = a * (a - 2) / 3;\nprint(b);",
    "x = ((a));",
    "print(x); print(y); z = 1 - 2 - 3 * 4 * 5;",
    "// header\nint total; // running sum\ntotal = total + 1;\n",
];

/// Writes the final sentence of a derivation back out as source text.
fn concretize(sentence: &[Symbol]) -> String {
    sentence
        .iter()
        .map(|symbol| match symbol {
            Symbol::Terminal(TokenKind::Identifier) => "v".to_string(),
            Symbol::Terminal(TokenKind::Number) => "7".to_string(),
            Symbol::Terminal(kind) => kind.grammar_symbol().to_string(),
            Symbol::NonTerminal(nonterminal) => panic!("{} left in sentence", nonterminal),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_cli(source: Option<&str>, tokens_only: bool, partial_trace: bool) -> (u8, String, String) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("program.mini");
    if let Some(source) = source {
        fs::write(&file, source).unwrap();
    }

    let args = Args {
        file,
        tokens_only,
        partial_trace,
        verbose: false,
    };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cli::run(&args, &mut out, &mut err).unwrap();

    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_reference_program() {
    let tokens = tokenize("int x; x = 3 + 4; print(x);".to_string()).unwrap();
    assert_eq!(
        kinds_line(&tokens),
        "INT ID SEMICOLON ID ASSIGN NUMBER PLUS NUMBER SEMICOLON PRINT LPAREN ID RPAREN SEMICOLON EOF"
    );

    let derivation = parse(tokens).unwrap();
    assert_eq!(derivation.steps()[0].to_string(), "Program");
    assert_eq!(
        derivation.steps().last().unwrap().to_string(),
        "int id ; id = number + number ; print ( id ) ;"
    );
}

#[test]
fn test_missing_semicolon_reports_eof_line() {
    let tokens = tokenize("int x".to_string()).unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF,
            ..
        }
    ));
    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_missing_operand_reports_factor_alternatives() {
    let tokens = tokenize("x = 1 + ;".to_string()).unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error_name(), "NoViableAlternative");
    assert!(error.to_string().contains("SEMICOLON"));
    assert!(error.to_string().ends_with("expected ID, NUMBER, or LPAREN"));
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("@x = 1;".to_string()).unwrap_err();

    assert_eq!(
        error.to_string(),
        "Lexical error at line 1, column 1: unexpected character '@'"
    );
}

#[test]
fn test_comment_only_input() {
    let tokens = tokenize("// just a comment\n".to_string()).unwrap();
    assert_eq!(kinds_line(&tokens), "EOF");

    let derivation = parse(tokens).unwrap();
    assert_eq!(derivation.applied(), 3);
}

#[test]
fn test_duplicate_declaration() {
    let tokens = tokenize("int x; int x;".to_string()).unwrap();
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_derivations_round_trip() {
    for source in PROGRAMS {
        let derivation = parse(tokenize(source.to_string()).unwrap()).unwrap();

        assert_eq!(derivation.steps().len(), derivation.applied() + 1);
        assert_eq!(derivation.steps()[0].to_string(), "Program");

        let sentence = derivation.sentence().expect("derivation ends in terminals");
        let rebuilt = concretize(sentence.symbols());

        let reparsed = parse(tokenize(rebuilt.clone()).unwrap())
            .unwrap_or_else(|error| panic!("{:?} from {:?}: {}", rebuilt, source, error));
        assert_eq!(reparsed.sentence(), Some(sentence));
        assert_eq!(reparsed.steps(), derivation.steps());
    }
}

#[test]
fn test_rejected_programs() {
    let rejected = [
        "int;",
        "int x = 1;",
        "x = ;",
        "x = 1",
        "print x;",
        "print(x)",
        "x = (1;",
        "x = 1 +* 2;",
        "x = 1; int y;",
        "x = 1);",
        "int int;",
        "print(print);",
    ];

    for source in rejected {
        let tokens = tokenize(source.to_string()).unwrap();
        let error = parse(tokens).expect_err(source);
        assert_eq!(error.kind(), ErrorKind::Syntax, "{}", source);
    }
}

#[test]
fn test_deep_nesting_is_an_error() {
    let depth = 100_000;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(matches!(error.get_impl(), ErrorImpl::NestingTooDeep { .. }));
    assert!(error.to_string().starts_with("Syntax error at line 1: parentheses nested deeper than"));
}

#[test]
fn test_cli_success() {
    let (code, out, err) = run_cli(Some("int x; x = 3 + 4; print(x);"), false, false);

    assert_eq!(code, EXIT_SUCCESS);
    assert!(err.is_empty());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "=== Token Stream ===");
    assert_eq!(
        lines[1],
        "INT ID SEMICOLON ID ASSIGN NUMBER PLUS NUMBER SEMICOLON PRINT LPAREN ID RPAREN SEMICOLON EOF"
    );
    assert!(out.contains("Program parsed successfully."));
    assert!(out.contains("=== Leftmost Derivation ===\n 1) Program\n 2) DeclList StmtList\n"));
    assert!(out.ends_with("int id ; id = number + number ; print ( id ) ;\n"));
}

#[test]
fn test_cli_tokens_only() {
    let (code, out, _) = run_cli(Some("x = 1;"), true, false);

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(out, "=== Token Stream ===\nID ASSIGN NUMBER SEMICOLON EOF\n");
}

#[test]
fn test_cli_syntax_error() {
    let (code, out, err) = run_cli(Some("int x"), false, false);

    assert_eq!(code, EXIT_ANALYSIS_FAILED);
    assert!(out.starts_with("=== Token Stream ===\nINT ID EOF\n"));
    assert!(!out.contains("Derivation"));
    assert!(err.starts_with("Syntax error at line 1:"));
    assert!(err.contains("did you miss a semicolon?"));
}

#[test]
fn test_cli_partial_trace() {
    let (code, out, _) = run_cli(Some("int x"), false, true);

    assert_eq!(code, EXIT_ANALYSIS_FAILED);
    assert!(out.contains("=== Derivation Before Error ===\n 1) Program\n"));
    assert!(out.ends_with(" 4) int id ; DeclList StmtList\n"));
}

#[test]
fn test_cli_lexical_error() {
    let (code, out, err) = run_cli(Some("x = 1;\ny = @;"), false, false);

    assert_eq!(code, EXIT_ANALYSIS_FAILED);
    assert!(out.is_empty());
    assert!(err.starts_with("Lexical error at line 2, column 5: unexpected character '@'"));
    assert!(err.contains("2 | y = @;"));
}

#[test]
fn test_cli_missing_file() {
    let (code, out, err) = run_cli(None, false, false);

    assert_eq!(code, EXIT_INPUT_UNAVAILABLE);
    assert_ne!(code, EXIT_ANALYSIS_FAILED);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: cannot read"));
}

#[test]
fn test_cli_args_parse() {
    use clap::Parser;

    let args = Args::parse_from(["mini-ll1", "--partial-trace", "prog.mini"]);
    assert_eq!(args.file, PathBuf::from("prog.mini"));
    assert!(args.partial_trace);
    assert!(!args.tokens_only);
    assert!(!args.verbose);

    assert!(Args::try_parse_from(["mini-ll1"]).is_err());
}
