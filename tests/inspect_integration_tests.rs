mod common;

use common::{CLEAN_PY, DIRTY_PY, JS_INDENT_CONFIG, TWO_SPACE_JS, TestFixture};
use predicates::prelude::*;

// ============================================================================
// Exit codes and text output
// ============================================================================

#[test]
fn clean_files_exit_success() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", CLEAN_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "."])
        .assert()
        .success()
        .stdout("0 issue(s) in 1 file(s) inspected\n");
}

#[test]
fn findings_exit_one_with_one_line_each() {
    let fixture = TestFixture::new();
    fixture.create_file("dirty.py", DIRTY_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./dirty.py:1: [TrailingWhitespace] "))
        .stdout(predicate::str::contains("./dirty.py:3: [ExcessiveBlankLines] "))
        .stdout(predicate::str::contains("2 issue(s) in 1 file(s) inspected"));
}

#[test]
fn quiet_suppresses_summary() {
    let fixture = TestFixture::new();
    fixture.create_file("dirty.py", DIRTY_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-q", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[TrailingWhitespace]"))
        .stdout(predicate::str::contains("inspected").not());
}

#[test]
fn only_selected_extensions_are_inspected() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", CLEAN_PY);
    fixture.create_file("notes.txt", DIRTY_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "."])
        .assert()
        .success()
        .stdout("0 issue(s) in 1 file(s) inspected\n");
}

#[test]
fn files_are_reported_in_sorted_order() {
    let fixture = TestFixture::new();
    fixture.create_file("b.py", "x = 1 \n");
    fixture.create_file("a.py", "y = 1 \n");

    let output = codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-q", "--color", "never"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("./a.py:1:"));
    assert!(lines[1].starts_with("./b.py:1:"));
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn nonexistent_path_exits_two_without_findings() {
    let fixture = TestFixture::new();

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "does-not-exist"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: Path not found"));
}

#[test]
fn missing_required_arguments_exit_two() {
    codedust!().args(["-e", "py"]).assert().code(2);
    codedust!().args(["-p", "."]).assert().code(2);
}

#[test]
fn invalid_ignore_regex_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", CLEAN_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-i", "(unclosed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid ignore pattern"));
}

#[test]
fn invalid_config_value_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", DIRTY_PY);
    fixture.create_config("[default]\nmax_line_length = long\n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "."])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("max_line_length"));
}

#[test]
fn missing_explicit_config_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", CLEAN_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-c", "missing.ini"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn discovered_config_overrides_per_extension() {
    let fixture = TestFixture::new();
    fixture.create_file("app.js", TWO_SPACE_JS);
    fixture.create_config(JS_INDENT_CONFIG);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "js", "-p", "."])
        .assert()
        .success();
}

#[test]
fn no_config_ignores_discovered_file() {
    let fixture = TestFixture::new();
    fixture.create_file("app.js", TWO_SPACE_JS);
    fixture.create_config(JS_INDENT_CONFIG);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "js", "-p", ".", "--no-config", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./app.js:2: [IndentSize]"));
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", TWO_SPACE_JS);
    fixture.create_file("conf/lint.ini", JS_INDENT_CONFIG);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "js", "-p", "src", "-c", "conf/lint.ini"])
        .assert()
        .success();
}

#[test]
fn rule_toggle_disables_rule() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", "x = 1 \n");
    fixture.create_config("[py]\nCD0202 = disable\n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "."])
        .assert()
        .success();
}

#[test]
fn line_comment_enables_comment_rules() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", "#comment\nx = 1\n");
    fixture.create_config("[py]\nline_comment = #\n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "./app.py:1: [MissingSpaceAfterCommentMarker]",
        ));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn slash_delimited_ignore_pattern_excludes_matches() {
    let fixture = TestFixture::new();
    fixture.create_file("node_modules/lib.js", "x = 1 \n");
    fixture.create_file("src/node_modules_helper.js", "x = 1 \n");
    fixture.create_file("src/main.js", "x = 1;\n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "js", "-p", ".", "-i", "/node_modules/"])
        .assert()
        .success()
        .stdout("0 issue(s) in 1 file(s) inspected\n");
}

#[test]
fn directory_ignore_pattern_keeps_similar_names() {
    let fixture = TestFixture::new();
    fixture.create_file("node_modules/lib.js", "x = 1 \n");
    fixture.create_file("src/node_modules_helper.js", "x = 1 \n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "js", "-p", ".", "-i", "node_modules/", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./src/node_modules_helper.js:1:"))
        .stdout(predicate::str::contains("./node_modules/lib.js").not());
}

#[test]
fn comma_delimited_extensions_and_multiple_paths() {
    let fixture = TestFixture::new();
    fixture.create_file("one/app.py", CLEAN_PY);
    fixture.create_file("two/app.js", "x = 1;\n");

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py,js", "-p", "one", "-p", "two"])
        .assert()
        .success()
        .stdout("0 issue(s) in 2 file(s) inspected\n");
}

// ============================================================================
// Per-file problems and directives
// ============================================================================

#[test]
fn unreadable_file_is_reported_and_run_continues() {
    let fixture = TestFixture::new();
    fixture.create_bytes("blob.py", &[0x00, 0xff, 0xfe, b'\n']);
    fixture.create_file("good.py", CLEAN_PY);

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./blob.py:1: [UnreadableFile]"))
        .stdout(predicate::str::contains("1 issue(s) in 2 file(s) inspected"));
}

#[test]
fn inline_directives_suppress_findings() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "app.py",
        "x = 1  # CodeDust: SKIP\n# CodeDust: OFF\ny = 2 \n# CodeDust: ON\n",
    );

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "."])
        .assert()
        .success();
}

// ============================================================================
// JSON output and logging
// ============================================================================

#[test]
fn json_output_is_valid() {
    let fixture = TestFixture::new();
    fixture.create_file("dirty.py", DIRTY_PY);

    let output = codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-f", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_findings"], 2);
    assert_eq!(json["findings"][0]["rule"], "TrailingWhitespace");
    assert_eq!(json["findings"][0]["code"], "CD0202");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::new();
    fixture.create_file("app.py", CLEAN_PY);

    codedust!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["-e", "py", "-p", ".", "-vv"])
        .assert()
        .success()
        .stdout("0 issue(s) in 1 file(s) inspected\n")
        .stderr(predicate::str::contains("file(s)"));
}

#[test]
fn help_lists_exit_codes() {
    codedust!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_inspected() {
    let fixture = TestFixture::new();
    fixture.create_file("shared/real.py", "x = 1 \n");
    fixture.create_file("src/main.py", CLEAN_PY);
    std::os::unix::fs::symlink(fixture.file("shared/real.py"), fixture.file("src/link.py"))
        .unwrap();

    codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", "src", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("src/link.py:1: [TrailingWhitespace]"))
        .stdout(predicate::str::contains("1 issue(s) in 2 file(s) inspected"));
}

#[test]
fn sibling_file_sorts_before_directory_of_same_stem() {
    let fixture = TestFixture::new();
    fixture.create_file("a/b.py", "x = 1 \n");
    fixture.create_file("a.py", "y = 1 \n");

    let output = codedust!()
        .current_dir(fixture.path())
        .args(["-e", "py", "-p", ".", "-q", "--color", "never"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines[0].starts_with("./a.py:1:"));
    assert!(lines[1].starts_with("./a/b.py:1:"));
}
