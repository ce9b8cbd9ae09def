use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_declare_and_use_across_files() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO \"hello\")\n")?;
    test.write_file("src/CMakeLists.txt", "message(${FOO})\n")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("variables:"));
    assert!(stdout.contains("--- FOO:"));
    assert!(stdout.contains("------< CMakeLists.txt:"));
    assert!(stdout.contains("\"hello\""));
    assert!(stdout.contains("------> src/CMakeLists.txt:"));
    assert!(stdout.contains("used 1 times"));

    Ok(())
}

#[test]
fn test_option_declaration() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "option(MY_OPT \"enable things\" ON)\n")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("options:"));
    assert!(stdout.contains("--- MY_OPT:"));
    assert!(stdout.contains("\"enable things\" ON"));

    Ok(())
}

#[test]
fn test_reserved_prefix_is_builtin() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(CMAKE_BUILD_TYPE Release)\n")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    let cmake_section = stdout.find("cmake:").unwrap();
    let variables_section = stdout.find("variables:").unwrap();
    let name = stdout.find("--- CMAKE_BUILD_TYPE:").unwrap();
    assert!(cmake_section < name && name < variables_section);

    Ok(())
}

#[test]
fn test_simple_mode_skips_detail() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO 1)\n")?;

    let output = test.command().arg("--simple").output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("--- FOO:"));
    assert!(!stdout.contains("----- sets:"));
    assert!(!stdout.contains("----- uses:"));

    Ok(())
}

#[test]
fn test_ignore_temp_drops_private_names() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(_tmp 1)\nset(FOO 2)\n")?;

    let output = test.command().arg("--ignore-temp").output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("--- FOO:"));
    assert!(!stdout.contains("_tmp"));

    Ok(())
}

#[test]
fn test_filter_restricts_reported_names() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(KEEP 1)\nset(DROP 2)\n")?;

    let output = test.command().args(["--filter", "^KEEP$"]).output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("--- KEEP:"));
    assert!(!stdout.contains("--- DROP:"));

    Ok(())
}

#[test]
fn test_exclude_skips_files() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO 1)\n")?;
    test.write_file("legacy/CMakeLists.txt", "set(OLD 1)\n")?;

    let output = test.command().args(["--exclude", "^legacy/"]).output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("--- FOO:"));
    assert!(!stdout.contains("--- OLD:"));

    Ok(())
}

#[test]
fn test_vendored_directories_are_skipped() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO 1)\n")?;
    test.write_file("build/CMakeLists.txt", "set(GENERATED 1)\n")?;
    test.write_file("thirdparty/CMakeLists.txt", "set(VENDORED 1)\n")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("--- FOO:"));
    assert!(!stdout.contains("GENERATED"));
    assert!(!stdout.contains("VENDORED"));

    Ok(())
}

#[test]
fn test_config_file_ignores() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO 1)\n")?;
    test.write_file("generated/config.cmake", "set(GEN 1)\n")?;
    test.write_file(".cmvarrc.json", "{ \"ignores\": [\"generated/**\"] }\n")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("--- FOO:"));
    assert!(!stdout.contains("--- GEN:"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(X 1)\n")?;
    test.write_file("a.cmake", "set(X 2)\nmessage(${X})\n")?;

    let output = test.command().arg("--json").output()?;
    let report: Value = serde_json::from_str(&stdout_of(&output))?;

    let categories = report["categories"].as_array().unwrap();
    let labels: Vec<_> = categories
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["cmake", "temp", "variables", "options"]);

    let variables = categories[2]["variables"].as_array().unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0]["name"], "X");

    // declaration sites keep file-processing (sorted traversal) order
    let declarations = variables[0]["declarations"].as_array().unwrap();
    assert_eq!(declarations[0]["file"], "CMakeLists.txt");
    assert_eq!(declarations[0]["value"], "1");
    assert_eq!(declarations[1]["file"], "a.cmake");
    assert_eq!(declarations[1]["value"], "2");

    let usages = variables[0]["usages"].as_array().unwrap();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0]["file"], "a.cmake");
    assert_eq!(usages[0]["count"], 1);

    Ok(())
}

#[test]
fn test_invalid_exclude_regex_fails() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "set(FOO 1)\n")?;

    let output = test.command().args(["--exclude", "["]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("--ignore-temp"));
    assert!(stdout.contains("--filter"));

    Ok(())
}
