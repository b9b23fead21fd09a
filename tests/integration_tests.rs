//! Integration tests for the whole front end.
//!
//! These tests drive source text through tokenization and parsing, then
//! walk the resulting trees with the printer, the evaluator and the name
//! collector, and finally run the `plumber` binary itself.

use std::{env, fs, process::Command, thread};

use plumber::{
    ast::{ast::Expr, names::NameCollector, printer::AstPrinter},
    eval::evaluator::Evaluator,
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_source},
    render_error,
    value::Value,
};
use pretty_assertions::assert_eq;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_source_to_value() {
    let cases = [
        ("3 + 4", "(+ 3 4)", Value::Number(7.0)),
        ("-5", "(- 5)", Value::Number(-5.0)),
        ("(1 + 2)", "(group (+ 1 2))", Value::Number(3.0)),
        ("\"a\" + \"b\" == \"ab\"", "(== (+ a b) ab)", Value::Boolean(true)),
        ("!(1 > 2) and nil", "(and (! (group (> 1 2))) nil)", Value::Nil),
    ];

    for (source, printed, value) in cases {
        let tokens = tokenize(source, Some("test.plumb".to_string())).unwrap();
        let ast = parse(tokens).unwrap();

        assert_eq!(AstPrinter.print(&ast), printed, "printing {}", source);
        assert_eq!(Evaluator.evaluate(&ast).unwrap(), value, "evaluating {}", source);
    }
}

#[test]
fn test_class_expressions_print() {
    let ast = parse_source("this.total = super.sum(this.a, b) * 2", None).unwrap();

    assert_eq!(
        AstPrinter.print(&ast),
        "(set this total (* (call (super sum) (get this a) b) 2))"
    );

    let names = NameCollector::collect(&ast);
    assert_eq!(names.read_names(), vec!["b"]);
    assert_eq!(names.class_refs.len(), 3);
}

#[test]
fn test_call_error_points_at_paren() {
    let source = "write(1,\n  2)";
    let ast = parse_source(source, Some("calls.plumb".to_string())).unwrap();
    let error = Evaluator.evaluate(&ast).unwrap_err();

    assert_eq!(error.get_position().0, 12);
    assert_eq!(error.get_position().1.as_str(), "calls.plumb");

    let rendered = render_error(&error, source, "calls.plumb");
    let expected = "Error: NotConstant (call cannot be evaluated without a running program)\n\
                    -> calls.plumb\n  \
                    |\n\
                    2 | 2)\n  \
                    | -^\n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_trees_are_shared_across_threads() {
    assert_send_sync::<Expr>();

    let ast = parse_source("(1 + 2) * 3 - 4 / 2", None).unwrap();

    let results: Vec<(String, Value)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let printed = AstPrinter.print(&ast);
                    let value = Evaluator.evaluate(&ast).unwrap();
                    (printed, value)
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (printed, value) in results {
        assert_eq!(printed, "(- (* (group (+ 1 2)) 3) (/ 4 2))");
        assert_eq!(value, Value::Number(7.0));
    }
}

#[test]
fn test_cli_prints_tree_and_value() {
    let output = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .arg("3 + 4 * 2")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(+ 3 (* 4 2))\n11\n");
}

#[test]
fn test_cli_exit_codes() {
    let run = |arg: &str| {
        Command::new(env!("CARGO_BIN_EXE_plumber"))
            .arg(arg)
            .env_remove("RUST_LOG")
            .output()
            .unwrap_or_else(|e| panic!("failed to run plumber: {}", e))
    };

    let parse_failure = run("(1 +");
    assert_eq!(parse_failure.status.code(), Some(65));
    assert!(String::from_utf8_lossy(&parse_failure.stderr).contains("ExpectedExpression"));

    let eval_failure = run("x + 1");
    assert_eq!(eval_failure.status.code(), Some(70));
    assert_eq!(String::from_utf8_lossy(&eval_failure.stdout), "(+ x 1)\n");

    let usage = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));
    assert_eq!(usage.status.code(), Some(64));
}

#[test]
fn test_cli_double_negation_is_an_expression() {
    let output = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .arg("--5")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(- (- 5))\n5\n");
}

#[test]
fn test_cli_unreadable_file() {
    let missing = env::temp_dir().join("plumber-missing-dir").join("nothing.plumb");

    let output = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .arg("--file")
        .arg(&missing)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));

    assert_eq!(output.status.code(), Some(66));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_reads_file() {
    let dir = env::temp_dir().join(format!("plumber-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let good = dir.join("sum.plumb");
    fs::write(&good, "1 + 2 // three\n* 3").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .arg("--file")
        .arg(&good)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(+ 1 (* 2 3))\n7\n");

    let bad = dir.join("broken.plumb");
    fs::write(&bad, "1 +\n  true").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_plumber"))
        .arg("--file")
        .arg(&bad)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run plumber: {}", e));

    assert_eq!(output.status.code(), Some(70));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-> broken.plumb"), "stderr was {:?}", stderr);
    assert!(stderr.contains("OperandTypeError"), "stderr was {:?}", stderr);

    fs::remove_dir_all(&dir).unwrap();
}
