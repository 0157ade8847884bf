use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rand_below"))
        .args(args)
        .env_clear()
        .output()
        .expect("failed to launch rand_below")
}

fn printed_value(output: &Output) -> u64 {
    let text = std::str::from_utf8(&output.stdout).expect("stdout is not UTF-8");
    assert!(text.ends_with('\n'), "{:?}", text);
    assert_eq!(text.matches('\n').count(), 1, "{:?}", text);
    let digits = &text[..text.len() - 1];
    assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()), "{:?}", text);
    assert!(digits == "0" || !digits.starts_with('0'), "leading zero in {:?}", text);
    digits.parse().unwrap()
}

#[test]
fn prints_one_value_below_bound() {
    let output = run_binary(&[]);
    assert!(output.status.success(), "{:?}", output);
    assert!(printed_value(&output) < 1000);
}

#[test]
fn arguments_are_ignored() {
    let output = run_binary(&["5", "--bound", "10"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(printed_value(&output) < 1000);
}

#[test]
fn repeated_runs_stay_in_range() {
    let values: Vec<u64> = (0..20).map(|_| {
        let output = run_binary(&[]);
        assert!(output.status.success(), "{:?}", output);
        printed_value(&output)
    }).collect();
    assert!(values.iter().all(|&v| v < 1000));
    // 20 runs all printing the same value: chance is 1000^-19 for independent runs
    assert!(values.iter().any(|&v| v != values[0]), "{:?}", values);
}
