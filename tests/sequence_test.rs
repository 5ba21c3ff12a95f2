use workshop_solvers::{run_task, TaskName};

#[test]
fn test_single_letter() {
    let output = run_task(TaskName::PrefixSequence, "c\n").unwrap();
    assert_eq!(output, "\"a\"\n\"b\"\n\"c\"");
}

#[test]
fn test_prefix_grows_after_each_position() {
    let output = run_task(TaskName::PrefixSequence, "bad\n").unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "\"a\"", "\"b\"", // position 0 finalizes 'b'
            "\"ba\"", // position 1 finalizes 'a'
            "\"baa\"", "\"bab\"", "\"bac\"", "\"bad\"", // position 2
        ]
    );
}

#[test]
fn test_line_count_is_sum_of_letter_ranks() {
    let output = run_task(TaskName::PrefixSequence, "zz\n").unwrap();
    assert_eq!(output.lines().count(), 26 + 26);
}

#[test]
fn test_last_line_is_the_quoted_input() {
    let output = run_task(TaskName::PrefixSequence, "hello\n").unwrap();
    assert_eq!(output.lines().last().unwrap(), "\"hello\"");
}

#[test]
fn test_digit_input_is_rejected() {
    assert!(run_task(TaskName::PrefixSequence, "ab1\n").is_err());
}
