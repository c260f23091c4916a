use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn prompt_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", content).expect("write temp file");
    file
}

#[test]
fn default_operation_prints_ast_json() {
    let file = prompt_file("You are a helpful assistant. Never guess.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path());

    let output_pred = predicate::str::contains("role_definition")
        .and(predicate::str::contains("helpful assistant"))
        .and(predicate::str::contains("constraint"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn variables_operation_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg("-").arg("--op").arg("variables");
    cmd.write_stdin("Ship to {{address}} via [CARRIER].");

    let output_pred = predicate::str::contains("\"address\"")
        .and(predicate::str::contains("double_brace"))
        .and(predicate::str::contains("bracket_upper"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn variables_style_filter_narrows_output() {
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg("-")
        .arg("--op")
        .arg("variables")
        .arg("--style")
        .arg("double_brace");
    cmd.write_stdin("Ship to {{address}} via [CARRIER].");

    let output_pred = predicate::str::contains("\"address\"")
        .and(predicate::str::contains("bracket_upper").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn metrics_operation_prints_scores() {
    let file = prompt_file("You are a tutor. Never give the answer directly.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path()).arg("--op").arg("metrics");

    let output_pred = predicate::str::contains("\"overall\"")
        .and(predicate::str::contains("\"structure\""))
        .and(predicate::str::contains("\"vocabulary_richness\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn review_operation_lists_missing_pieces() {
    let file = prompt_file("Summarize the attached report.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path()).arg("--op").arg("review");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("missing_role"));
}

#[test]
fn transform_rewrites_placeholders() {
    let file = prompt_file("Ship ${order_id} today.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path())
        .arg("--op")
        .arg("transform")
        .arg("--transform")
        .arg("normalize_variables");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{{order_id}}"));
}

#[test]
fn unknown_transform_lists_available_names() {
    let file = prompt_file("You are a guide.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path())
        .arg("--op")
        .arg("transform")
        .arg("--transform")
        .arg("upside_down");

    let stderr_pred = predicate::str::contains("Unknown transformation")
        .and(predicate::str::contains("markdown_to_json"))
        .and(predicate::str::contains("single_to_multiturn"));

    cmd.assert().failure().stderr(stderr_pred);
}

#[test]
fn transform_without_name_fails() {
    let file = prompt_file("You are a guide.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path()).arg("--op").arg("transform");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs --transform"));
}

#[test]
fn unknown_operation_fails() {
    let file = prompt_file("You are a guide.");
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg(file.path()).arg("--op").arg("sing");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation 'sing'"));
}

#[test]
fn unknown_style_fails() {
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg("-").arg("--op").arg("variables").arg("--style").arg("angle");
    cmd.write_stdin("{{a}}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown placeholder style 'angle'"));
}

#[test]
fn missing_file_reports_on_stderr() {
    let mut cmd = cargo_bin_cmd!("promptx");
    cmd.arg("no-such-prompt.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading 'no-such-prompt.txt'"));
}
