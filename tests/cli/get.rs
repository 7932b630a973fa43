use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_get_default_language() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "fruits.banana"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "香蕉\n");

    Ok(())
}

#[test]
fn test_get_explicit_language() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "fruits.banana", "--in", "en"])?;
    assert_eq!(output.stdout, "banana\n");

    Ok(())
}

#[test]
fn test_get_uses_fallback_language() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "fruits.cherry"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "cherry\n");

    Ok(())
}

#[test]
fn test_get_missing_prints_sentinel() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "fruits.kiwi"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\n");

    let output = test.run(&["get", "fruits.kiwi", "--as", "int"])?;
    assert_eq!(output.stdout, "-1\n");

    Ok(())
}

#[test]
fn test_get_typed() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "test.num2", "--as", "int"])?;
    assert_eq!(output.stdout, "123\n");

    let output = test.run(&["get", "test.num2", "--as", "float", "--in", "en"])?;
    assert_eq!(output.stdout, "654.321\n");

    let output = test.run(&["get", "test.strList", "--as", "list"])?;
    assert_eq!(output.stdout, "abc\ndef\n");

    Ok(())
}

#[test]
fn test_get_formatted() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "test.format_test", "--args", "测试", "1", "1.1", "x"])?;
    assert_eq!(output.stdout, "参数测试 参数1 参数1.1 参数x\n");

    Ok(())
}

#[test]
fn test_get_raw() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "test.items[1].name", "--as", "raw"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "second\n");

    let output = test.run(&["get", "test.strList", "--as", "raw"])?;
    assert_eq!(output.stdout, "[\"abc\",\"def\"]\n");

    Ok(())
}

#[test]
fn test_get_raw_missing_fails() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "test.items[5].name", "--as", "raw", "--in", "zh-CN"])?;
    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("out of range"), "{}", output.stderr);

    Ok(())
}

#[test]
fn test_get_template_with_extra_language() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["get", "test.temp_test3"])?;
    assert_eq!(output.stdout, "测试按语言引用:测试 eng <NotFound>\n");

    let output = test.run(&[
        "get",
        "test.temp_test3",
        "-l",
        "en",
        "-l",
        "zh-CN",
        "-l",
        "common",
    ])?;
    assert_eq!(output.stdout, "测试按语言引用:测试 eng common_str\n");

    Ok(())
}

#[test]
fn test_get_from_subdirectory() -> Result<()> {
    let test = CliTest::with_fixtures()?;
    test.write_file("src/app/.keep", "")?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("src").join("app"));
    cmd.args(["get", "fruits.apple"]);

    let output = run(cmd)?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "苹果\n");

    Ok(())
}

#[test]
fn test_get_with_root_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en/app.yaml", "app:\n  title: Langtree\n")?;

    let output = test.run(&["--root", "i18n", "get", "app.title"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "Langtree\n");

    Ok(())
}

#[test]
fn test_get_without_documents_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["get", "fruits.banana"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.starts_with("Error:"), "{}", output.stderr);
    assert!(output.stderr.contains("document root"), "{}", output.stderr);

    Ok(())
}

#[test]
fn test_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en/app.yaml", "app:\n  title: Langtree\n")?;

    let output = test.run(&["get", "app.title", "-v"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "Langtree\n");
    assert!(
        output
            .stderr
            .contains("Note: No .langtreerc.json found, using default configuration"),
        "{}",
        output.stderr
    );

    Ok(())
}
