use assert_cmd::Command;
use ohmybar_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

#[test]
fn test_without_config_prints_default_header() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "🤔\n---\n");
}

#[test]
fn test_quick_links_and_bookmarks() {
    let world = TestWorld::new();
    let bookmarks = world.write_bookmarks(&[("Docs", "https://docs.rs"), ("Crates", "https://crates.io")]);
    let world = world.with_config(&format!(
        "header = \"Work\"\n\n[quick_links]\nWiki = \"https://wiki.example.com\"\n\n{}",
        fixtures::bookmarks_plugin(&bookmarks)
    ));

    let result = world.run(&[]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    Work
    ---
    Wiki | href=https://wiki.example.com
    ---
    Docs | href=https://docs.rs
    Crates | href=https://crates.io
    ");
}

#[test]
fn test_plugin_failure_stays_in_menu() {
    let world = TestWorld::new().with_config(
        r#"
[plugins.jira]
host = "https://acme.atlassian.net"
email = "me@acme.test"

[plugins.github]
token = ""
"#,
    );

    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assertions::assert_menu_header(result.stdout(), "🤔").unwrap();
    assertions::assert_error_line(result.stdout(), "jira").unwrap();
    assertions::assert_error_line(result.stdout(), "github").unwrap();
    assert!(result.stdout().contains("missing jira token"));
}

#[test]
fn test_unreadable_config_renders_error_menu() {
    let world = TestWorld::new().with_config("header = [");

    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assertions::assert_menu_header(result.stdout(), "🤔").unwrap();
    assertions::assert_error_line(result.stdout(), "config").unwrap();
}

#[test]
fn test_json_config_file() {
    let world = TestWorld::new().with_config_file("config.json", r#"{"header": "JSON"}"#);

    let result = world.run(&[]).unwrap();

    assert_eq!(result.lines(), vec!["JSON", "---"]);
}

#[test]
fn test_json_format_dumps_tree() {
    let world = TestWorld::new().with_config("header = \"Tree\"");

    let result = world.run(&["--format", "json"]).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json[0]["type"], "item");
    assert_eq!(json[0]["title"], "Tree");
    assert_eq!(json[1]["type"], "separator");
}

#[test]
fn test_plugins_subcommand_lists_registry() {
    let result = TestWorld::new().run(&["plugins"]).unwrap();

    assert!(result.success());
    let names: Vec<&str> = result
        .lines()
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["jira", "github", "bookmarks"]);
}

#[test]
fn test_config_path_prefers_env() {
    let world = TestWorld::new().with_env("OHMYBAR_CONFIG", "/tmp/ohmybar-test/config.toml");

    let result = world.run(&["config-path"]).unwrap();

    assert!(result.stdout().starts_with("/tmp/ohmybar-test/config.toml"));
}

#[test]
#[allow(deprecated)]
fn test_help_lists_global_options() {
    Command::cargo_bin("ohmybar")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("plugins"));
}

#[test]
#[allow(deprecated)]
fn test_rejects_unknown_format() {
    Command::cargo_bin("ohmybar")
        .unwrap()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}
