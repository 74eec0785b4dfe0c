//! Library-level tests for whole input documents
//!
//! These drive `squaresum::run` over in-memory input and check the exact
//! output text, including what survives a failing case.

use squaresum::{ErrorKind, InputError, run};

fn run_input(input: &str) -> (Result<squaresum::Summary, InputError>, String) {
    let mut out = Vec::new();
    let result = run(input.as_bytes(), &mut out);
    (result, String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn test_sum_of_squares_scenarios() {
    let cases = [
        ("1\n3\n1 2 3\n", "14\n"),
        ("1\n3\n-5 0 4\n", "16\n"),
        ("2\n2\n1 1\n2\n2 2\n", "2\n8\n"),
    ];
    for (input, expected) in cases {
        let (result, out) = run_input(input);
        assert!(result.is_ok(), "input {:?} failed: {:?}", input, result);
        assert_eq!(out, expected, "input {:?}", input);
    }
}

#[test]
fn test_negatives_and_zero_never_change_the_total() {
    let (_, with) = run_input("1\n6\n-100 3 0 -1 4 -50\n");
    let (_, without) = run_input("1\n2\n3 4\n");
    assert_eq!(with, "25\n");
    assert_eq!(with, without);
}

#[test]
fn test_out_of_range_value_aborts_without_output() {
    let (result, out) = run_input("1\n2\n101 1\n");
    assert_eq!(out, "");
    match result {
        Err(InputError::Range(v)) => assert_eq!(v, 101),
        other => panic!("Expected Range error, got {:?}", other),
    }
}

#[test]
fn test_failure_keeps_output_of_earlier_cases() {
    let (result, out) = run_input("3\n1\n2\n1\n3\n2\n-101 5\n");
    assert_eq!(out, "4\n9\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn test_missing_last_values_line_is_not_an_error() {
    let (result, out) = run_input("2\n1\n7\n1\n");
    let summary = result.unwrap();
    assert_eq!(out, "49\n");
    assert_eq!(summary.processed, 1);
    assert!(summary.exhausted);
}

#[test]
fn test_declared_count_bounds() {
    let (result, out) = run_input("0\n1\n1\n");
    assert_eq!(out, "");
    assert_eq!(result.unwrap().processed, 0);

    let (result, out) = run_input("101\n1\n1\n");
    assert_eq!(out, "");
    assert_eq!(result.unwrap().processed, 0);
}

#[test]
fn test_hundred_cases_of_hundred_values() {
    let mut input = String::from("100\n");
    let line = vec!["100"; 100].join(" ");
    for _ in 0..100 {
        input.push_str("100\n");
        input.push_str(&line);
        input.push('\n');
    }
    let (result, out) = run_input(&input);
    assert_eq!(result.unwrap().processed, 100);
    assert_eq!(out.lines().count(), 100);
    assert!(out.lines().all(|l| l == "1000000"));
}

#[test]
fn test_input_without_trailing_newline() {
    let (result, out) = run_input("1\n2\n3 4");
    assert!(result.is_ok());
    assert_eq!(out, "25\n");
}

#[test]
fn test_invalid_utf8_value_aborts_after_earlier_output() {
    let mut out = Vec::new();
    let input: &[u8] = b"2\n1\n3\n1\n\xff\n";
    let result = run(input, &mut out);
    assert_eq!(String::from_utf8_lossy(&out), "9\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Parse);
}
