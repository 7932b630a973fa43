use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_has_in_all_languages() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["has", "fruits.banana"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} en\n\u{2713} zh-CN\n");

    Ok(())
}

#[test]
fn test_has_in_selected_languages() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["has", "test.first.second.third", "--in", "en", "--in", "zh-CN"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} zh-CN\n");

    Ok(())
}

#[test]
fn test_has_not_found() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = test.run(&["has", "fruits.kiwi"])?;
    assert_eq!(output.code, 1);
    assert_eq!(
        output.stdout,
        "\u{2718} [fruits.kiwi] not found in any language\n"
    );

    Ok(())
}
