mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_builtin_cards() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("roadmap"))
        .stdout(predicate::str::contains("(varies)"))
        .stdout(predicate::str::contains("[Subject=Recursion, Language=Python]"))
        .stdout(predicate::str::contains("project"));
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = value.as_array().unwrap();
    assert_eq!(cards.len(), 9);
    assert_eq!(cards[2]["key"], "pareto-py");
    assert_eq!(cards[2]["placeholders"][0]["default"], "Functions");
}

#[test]
fn show_substitutes_placeholders() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "explain", "--set", "Subject=Closures", "--set", "Language=Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explain the concept of Closures in Rust"))
        .stdout(predicate::str::contains("<Language>").not());
}

#[test]
fn show_uses_defaults_for_blank_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "pareto-py", "--set", "Subject=   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teach me about Python Functions"));
}

#[test]
fn show_alias_works() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["s", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Act as an expert Python debugger."));
}

#[test]
fn show_unknown_card_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template 'nonexistent'"));
}

#[test]
fn show_rejects_malformed_set() {
    let ctx = TestContext::new();

    ctx.cli().args(["show", "project", "--set", "Subject"]).assert().failure();
}

#[test]
fn ask_joins_topic_words() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "binary", "search", "trees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"binary search trees\""));
}

#[test]
fn ask_rejects_blank_topic() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search topic must not be empty"));
}

#[test]
fn theme_defaults_to_system_preference() {
    let ctx = TestContext::new();

    ctx.cli().arg("theme").assert().success().stdout("light\n");
    ctx.cli().arg("theme").env("COLORFGBG", "15;0").assert().success().stdout("dark\n");
    assert!(ctx.read_preferences().is_none());
}

#[test]
fn theme_toggle_persists() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["theme", "toggle"])
        .env("COLORFGBG", "15;0")
        .assert()
        .success()
        .stdout("light\n");
    assert_eq!(ctx.read_preferences().unwrap().trim(), "theme = \"light\"");

    ctx.cli().args(["theme", "toggle"]).assert().success().stdout("dark\n");
    ctx.cli().arg("theme").assert().success().stdout("dark\n");
}

#[test]
fn theme_set_explicit() {
    let ctx = TestContext::new();

    ctx.cli().args(["theme", "dark"]).assert().success().stdout("dark\n");
    ctx.cli().args(["theme", "show"]).env("COLORFGBG", "0;15").assert().success().stdout("dark\n");
}

#[test]
fn user_catalog_overrides_and_extends() {
    let ctx = TestContext::new();
    ctx.write_user_catalog(
        r#"
[[templates]]
key = "debug"
title = "Debug Rust"
body = "Act as an expert Rust debugger for <Crate>."
placeholders = [{ name = "Crate", default = "tokio" }]

[[templates]]
key = "review"
title = "Code Review"
body = "Review this pull request."
"#,
    );

    ctx.cli()
        .args(["show", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expert Rust debugger for tokio."));
    ctx.cli().args(["show", "review"]).assert().success();
    ctx.cli().arg("list").assert().success().stdout(predicate::str::contains("Code Review"));
}

#[test]
fn catalog_flag_and_env_select_file() {
    let ctx = TestContext::new();
    let path = ctx.write_catalog_at(
        "team.toml",
        "[search]\nvariants = [\"Team prompt about {{ topic }}.\"]\n",
    );

    ctx.cli()
        .args(["ask", "ownership", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Team prompt about ownership.\n");

    ctx.cli()
        .args(["ask", "borrowing"])
        .env("PROMPTCARD_CATALOG", &path)
        .assert()
        .success()
        .stdout("Team prompt about borrowing.\n");
}

#[test]
fn invalid_catalog_is_reported() {
    let ctx = TestContext::new();
    ctx.write_user_catalog(
        r#"
[[templates]]
key = "broken"
title = "Broken"
body = "Uses <Missing> placeholder."
"#,
    );

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("undeclared placeholders: Missing"));
}

#[test]
fn missing_explicit_catalog_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--catalog", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog file not found"));
}

#[test]
fn copy_failure_still_prints_prompt() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "debug", "--copy"])
        .env("PATH", "/nonexistent")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Act as an expert Python debugger."))
        .stderr(predicate::str::contains("Clipboard error: Clipboard error").not());
}

#[test]
fn logs_are_plain_when_stderr_is_not_a_terminal() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded embedded catalog"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
