use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn test_script(script: &str) {
    let expected_path = script.replace(".nap", ".out");
    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|_| panic!("Missing expected output {}", expected_path));

    let output = cargo_bin_cmd!("napkin")
        .arg(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8_lossy(&output),
        expected,
        "Running script {} produced unexpected output.",
        script
    );
}

mod integration_tests {
    use super::*;

    fn ui_tests() -> Vec<&'static str> {
        vec![
            "demos/python_scope.nap",
            "demos/closures.nap",
            "demos/complex.nap",
            "demos/control_flow.nap",
            "demos/fib.nap",
        ]
    }

    #[test]
    fn run_scripts() {
        for ui_test in ui_tests() {
            test_script(ui_test);
        }
    }

    #[test]
    fn scope_demo_matches_script() {
        let expected = fs::read_to_string("demos/python_scope.out").unwrap();
        cargo_bin_cmd!("napkin")
            .arg("--scope-demo")
            .assert()
            .success()
            .stdout(predicate::str::diff(expected));
    }

    #[test]
    fn scope_demo_is_repeatable() {
        let run = || {
            cargo_bin_cmd!("napkin")
                .arg("--scope-demo")
                .assert()
                .success()
                .get_output()
                .stdout
                .clone()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn exit_builtin_sets_status() {
        cargo_bin_cmd!("napkin")
            .arg("demos/exit.nap")
            .assert()
            .code(3)
            .stdout("before\n");
    }

    #[test]
    fn missing_file() {
        cargo_bin_cmd!("napkin")
            .arg("demos/does_not_exist.nap")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error: could not open file."));
    }

    #[test]
    fn runtime_error_goes_to_stderr() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/undefined.nap")
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains(
                "RuntimeError (line 2): undefined variable 'missing'.",
            ));
    }

    #[test]
    fn parser_error() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/postfix_j.nap")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Parser error: unexpected 'j'. Did you mean to prefix it?",
            ));
    }

    #[test]
    fn lexer_error() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/bad_char.nap")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Lexer error: unexpected character '@'",
            ));
    }

    #[test]
    fn dump_tokens() {
        cargo_bin_cmd!("napkin")
            .args(["tests/fixtures/tiny.nap", "--dump-tokens"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("TOKEN_IDENTIFIER : x line: 1 col: 1")
                    .and(predicate::str::contains("TOKEN_COLON_EQUAL : := line: 1 col: 3"))
                    .and(predicate::str::contains("TOKEN_OUTPUT : output line: 2 col: 1"))
                    .and(predicate::str::contains("TOKEN_EOF"))
                    .and(predicate::str::ends_with("\n1\n")),
            );
    }

    #[test]
    fn dump_tokens_from_env() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/tiny.nap")
            .env("NAPKIN_DUMP_TOKENS", "true")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("TOKEN_IDENTIFIER : x"));
    }

    #[test]
    fn dump_ast() {
        cargo_bin_cmd!("napkin")
            .args(["tests/fixtures/tiny.nap", "--dump-ast"])
            .assert()
            .success()
            .stdout("(:= x 1)\n(output x)\n1\n");
    }

    #[test]
    fn getline_reads_stdin() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/greet.nap")
            .write_stdin("napkin\n")
            .assert()
            .success()
            .stdout("hello, napkin\n");
    }

    #[test]
    fn logging_stays_off_stdout() {
        cargo_bin_cmd!("napkin")
            .arg("tests/fixtures/tiny.nap")
            .env("NAPKIN_LOG", "trace")
            .assert()
            .success()
            .stdout("1\n");
    }
}
