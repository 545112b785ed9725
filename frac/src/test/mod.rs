//! End-to-end tests of frac, driven in-process through [get_opts] and [run_frac].

use crate::{get_opts, run_frac, FracResult};
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> FracResult {
    let argv = std::iter::once("frac").chain(args.iter().copied());
    let opts = get_opts(|app| app.get_matches_from_safe(argv), false).unwrap();
    run_frac(opts)
}

macro_rules! frac_test {
    ($($name:ident: [$($arg:expr),*] => $stdout:expr)*) => {
    $(
        #[test]
        fn $name() {
            assert_eq!(
                run(&[$($arg),*]),
                FracResult {
                    code: 0,
                    stdout: $stdout.to_owned(),
                    stderr: String::new(),
                }
            );
        }
    )*
    }
}

mod ok {
    use super::*;
    use pretty_assertions::assert_eq;

    frac_test! {
        reduces: ["303/33"] => "101/11"
        negative: ["--", "-1009/10007"] => "-1009/10007"
        zero: ["0/100"] => "0/1"
        arithmetic: ["1/2 + 1/3 - 1/6"] => "2/3"
        base_i8: ["-b", "i8", "100/3 * 3/100"] => "1/1"
        base_u128: ["--base", "u128", "340282366920938463463374607431768211455 / 5"] => "68056473384187692692674921486353642291/1"
        decimal: ["-o", "decimal", "3/8"] => "0.375"
        integer: ["--output-form", "integer", "--", "-7/2"] => "-3"
        debug: ["-o", "debug", "6/4"] => "Fraction { numerator: 3, denominator: 2 }"
    }
}

#[test]
fn overflow_is_a_diagnostic() {
    let result = run(&["-b", "i8", "100 + 100"]);
    assert_eq!(result.code, 1);
    assert_eq!(result.stdout, "");
    assert!(
        result.stderr.starts_with("error: addition overflows i8"),
        "{}",
        result.stderr
    );
}

#[test]
fn division_by_zero_is_a_diagnostic() {
    let result = run(&["1/(1 - 1)"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("this divisor is zero"), "{}", result.stderr);
}

#[test]
fn unsigned_underflow_is_a_diagnostic() {
    let result = run(&["-b", "u32", "1 - 2"]);
    assert_eq!(result.code, 1);
    assert!(
        result.stderr.starts_with("error: subtraction overflows u32"),
        "{}",
        result.stderr
    );
}

#[test]
fn rejects_unknown_base() {
    let argv = vec!["frac", "-b", "f64", "1"];
    assert!(get_opts(|app| app.get_matches_from_safe(argv), false).is_err());
}

#[test]
fn rejects_unknown_option_values_in_opts() {
    let result = run_frac(crate::Opts {
        program: "1".into(),
        base: "i7".into(),
        output_form: "fraction".into(),
        color: false,
    });
    assert_eq!(result.code, 1);
    assert_eq!(result.stderr, "error: `i7` is not a supported base");

    let result = run_frac(crate::Opts {
        program: "1".into(),
        base: "i64".into(),
        output_form: "latex".into(),
        color: false,
    });
    assert_eq!(result.code, 1);
    assert_eq!(result.stderr, "error: `latex` is not an output form");
}

#[test]
fn wide_whitespace_is_a_diagnostic() {
    let result = run(&["\u{3000}\u{3000}\u{3000}1/0"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("this divisor is zero"), "{}", result.stderr);
}

#[test]
fn deep_nesting_is_a_diagnostic() {
    let program = "(".repeat(10_000) + "1" + &")".repeat(10_000);
    let result = run(&[program.as_str()]);
    assert_eq!(result.code, 1);
    assert!(
        result.stderr.starts_with("error: expression nested too deeply"),
        "{}",
        result.stderr
    );
}
