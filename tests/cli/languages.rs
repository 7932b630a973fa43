use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_languages_marks_default_and_fallback() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["languages"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "en (fallback)\nzh-CN (default)\n");

    Ok(())
}

#[test]
fn test_languages_with_overrides() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["languages", "-l", "common", "--default-language", "en"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "common\nen (default, fallback)\n");

    Ok(())
}

#[test]
fn test_languages_unknown_language_is_an_error() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["languages", "-l", "fr"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("[fr]"), "{}", output.stderr);

    Ok(())
}
