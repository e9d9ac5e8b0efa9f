use std::process::{Command, Output};

fn demo_command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_args-demo"));
    command
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ARGS_DEMO_FORMAT")
        .env_remove("ARGS_DEMO_DEBUG");
    command
}

fn run_demo(args: &[&str]) -> Output {
    demo_command(args)
        .output()
        .expect("failed to run args-demo")
}

fn run_demo_with_format(format: &str, args: &[&str]) -> Output {
    demo_command(args)
        .env("ARGS_DEMO_FORMAT", format)
        .output()
        .expect("failed to run args-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn text_output_without_tokens_shows_defaults() {
    let output = run_demo(&[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "A off by default.\nB on by default.\nC has no value as it was not specified.\nArguments:\n"
    );
}

#[test]
fn raw_arguments_reach_the_parser() {
    let output = run_demo(&["-a", "pos"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "A switched on.\nB on by default.\n\
         C has no value as it was not specified.\nArguments: pos\n"
    );
}

#[test]
fn text_output_reflects_parsed_options() {
    let output = run_demo(&["-a", "--b-option", "-c", "val", "pos1", "--", "-a", "pos2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "A switched on.\nB switched off.\nC has value \"val\".\nArguments: pos1 -a pos2\n"
    );
}

#[test]
fn parse_errors_are_printed_and_exit_status_stays_zero() {
    let output = run_demo(&["-z", "--no-such-flag", "file", "-c"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with(
        "ERRORS: \n    Unknown argument: -z\n    Unknown argument: --no-such-flag\n"
    ));
    assert!(text.contains(
        "    -c requires an argument, but there are no more arguments to parse.\n"
    ));
    assert!(text.ends_with("Arguments: file\n"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = run_demo_with_format("json", &["-ab", "-c", "x", "-", "y"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(report["a_option"], true);
    assert_eq!(report["b_option"], false);
    assert_eq!(report["c_value"], "x");
    assert_eq!(report["arguments"], serde_json::json!(["-", "y"]));
    assert_eq!(report["errors"], serde_json::json!([]));
}

#[test]
fn yaml_output_lists_errors() {
    let output = run_demo_with_format("yaml", &["--unknown"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("errors:"));
    assert!(text.contains("Unknown argument: --unknown"));
}

#[test]
fn format_flag_on_command_line_is_a_parser_token() {
    let output = run_demo(&["--format", "json"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("ERRORS: \n    Unknown argument: --format\n"));
    assert!(text.ends_with("Arguments: json\n"));
}

#[test]
fn invalid_format_setting_is_rejected() {
    let output = run_demo_with_format("xml", &["-a"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
