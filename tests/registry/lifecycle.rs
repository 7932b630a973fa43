use std::fs;

use langtree::{DirectorySource, Error, MergeMode, Options, Registry, Value};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::{options, registry, source};

#[test]
fn test_initialize_from_directory() {
    let registry = registry();
    assert!(registry.is_initialized());
    assert_eq!(registry.languages(), vec!["en", "zh-CN"]);
    assert_eq!(registry.default_language(), "zh-CN");
    assert_eq!(registry.fallback_language(), "en");
}

#[test]
fn test_json_and_yaml_documents_merge() {
    let registry = registry();
    // fruits.yaml and test.json both land in the en tree.
    assert_eq!(registry.get_string_in("en", "fruits.cherry"), "cherry");
    assert_eq!(registry.get_string_in("en", "test.eng"), "eng");
}

#[test]
fn test_nested_documents_are_loaded() {
    let mut registry = registry();
    registry.load_language("common").unwrap();
    assert_eq!(registry.get_int_in("common", "stats.total"), 5);
    assert_eq!(registry.get_string_in("common", "common.str1"), "common_str");
}

#[test]
fn test_reload_is_idempotent() {
    let mut registry = registry();
    let before = registry.tree("zh-CN").unwrap().clone();
    registry.load_language("zh-CN").unwrap();
    assert_eq!(registry.tree("zh-CN").unwrap(), &before);
}

#[test]
fn test_strict_reload_of_unchanged_documents() {
    let options = options().with_merge_mode(MergeMode::Strict);
    let mut registry = Registry::with_source(source(), &options).unwrap();
    registry.load_language("en").unwrap();
    assert_eq!(registry.get_string_in("en", "fruits.banana"), "banana");
}

#[test]
fn test_unknown_language() {
    let mut registry = registry();
    assert!(matches!(
        registry.load_language("fr"),
        Err(Error::LanguageNotOnStorage(_))
    ));
    assert!(!registry.has_language("fr"));
}

#[test]
fn test_directory_source_requires_directory() {
    let missing = crate::fixtures_root().join("missing");
    assert!(matches!(
        DirectorySource::new(missing),
        Err(Error::SourceRoot(_))
    ));
}

#[test]
fn test_last_document_wins() {
    let dir = TempDir::new().unwrap();
    let en = dir.path().join("en");
    fs::create_dir(&en).unwrap();
    fs::write(en.join("a.yaml"), "menu:\n  open: Open\n  close: Close\n").unwrap();
    fs::write(en.join("b.yaml"), "menu:\n  open: Open file\n").unwrap();

    let source = DirectorySource::new(dir.path()).unwrap();
    let registry = Registry::with_source(source, &Options::new("en", "en").with_languages(["en"]))
        .unwrap();

    assert_eq!(registry.get_string("menu.open"), "Open file");
    assert_eq!(registry.get_string("menu.close"), "Close");
}

#[test]
fn test_strict_mode_rejects_conflicts() {
    let dir = TempDir::new().unwrap();
    let en = dir.path().join("en");
    fs::create_dir(&en).unwrap();
    fs::write(en.join("a.yaml"), "menu:\n  open: Open\n").unwrap();
    fs::write(en.join("b.yaml"), "menu:\n  open: Open file\n").unwrap();

    let source = DirectorySource::new(dir.path()).unwrap();
    let options = Options::new("en", "en")
        .with_languages(["en"])
        .with_merge_mode(MergeMode::Strict);
    let mut registry = Registry::new();

    let err = registry.initialize(source, &options).unwrap_err();
    assert!(matches!(err, Error::Merge(_)));
    assert!(!registry.is_initialized());
}

#[test]
fn test_broken_document_reports_its_name() {
    let dir = TempDir::new().unwrap();
    let en = dir.path().join("en");
    fs::create_dir(&en).unwrap();
    fs::write(en.join("broken.json"), "{ nope").unwrap();

    let source = DirectorySource::new(dir.path()).unwrap();
    let err = Registry::with_source(source, &Options::new("en", "en").with_languages(["en"]))
        .unwrap_err();
    assert!(err.to_string().contains("en/broken.json"));
}

#[test]
fn test_reset_then_reinitialize() {
    let mut registry = registry();
    registry.reset();
    assert!(!registry.is_initialized());

    registry
        .initialize(
            source(),
            &Options::new("en", "en").with_languages(["en"]),
        )
        .unwrap();
    assert_eq!(registry.languages(), vec!["en"]);
    assert_eq!(registry.get_string("fruits.banana"), "banana");
}

#[test]
#[should_panic(expected = "not initialized")]
fn test_accessor_after_reset_panics() {
    let mut registry = registry();
    registry.reset();
    registry.get_string("fruits.banana");
}

#[test]
fn test_get_value_after_failed_index_lookup() {
    let registry = registry();
    assert!(matches!(
        registry.lookup_in("zh-CN", "test.items[5].name"),
        Err(Error::IndexOutOfRange { index: 5, len: 3, .. })
    ));
    assert_eq!(
        registry.get_value("test.items[2].name", Some(Value::Null)).unwrap(),
        Value::from("third")
    );
}
