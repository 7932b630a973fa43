use langtree::{Arg, Error, Value};
use pretty_assertions::assert_eq;

use crate::registry;

#[test]
fn test_default_language_first() {
    let registry = registry();
    assert_eq!(registry.get_string("fruits.banana"), "香蕉");
    assert_eq!(registry.get_string_in("en", "fruits.banana"), "banana");
}

#[test]
fn test_fallback_language() {
    let registry = registry();
    assert_eq!(registry.get_string("fruits.cherry"), "cherry");
    assert_eq!(registry.get_string_in("zh-CN", "fruits.cherry"), "");
    assert_eq!(registry.get_string("fruits.kiwi"), "");
    assert_eq!(registry.get_string_or("fruits.kiwi", "kiwi"), "kiwi");
}

#[test]
fn test_numbers() {
    let registry = registry();
    assert_eq!(registry.get_int("test.num1"), 123);
    assert_eq!(registry.get_int("test.num2"), 123);
    assert_eq!(registry.get_int("test.str1"), -1);
    assert_eq!(registry.get_float("test.num2"), 123.456);
    assert_eq!(registry.get_float_in("en", "test.num2"), 654.321);
    assert_eq!(registry.get::<i64>("test.num1", 0), 123);
}

#[test]
fn test_lists() {
    let registry = registry();
    assert_eq!(registry.get_list::<i64>("test.numList"), vec![1, 2]);
    assert_eq!(registry.get_list::<i64>("test.strList"), vec![-1, -1]);
    assert_eq!(
        registry.get_list::<String>("test.strList"),
        vec!["abc", "def"]
    );
    assert_eq!(
        registry.get_list_in::<String>("en", "test.strList"),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_formatted() {
    let registry = registry();
    let args = [
        Arg::from("测试"),
        Arg::from(1),
        Arg::from(1.1),
        Arg::from(vec!["abc", "def"]),
    ];
    assert_eq!(
        registry.get_formatted("test.format_test", &args),
        "参数测试 参数1 参数1.1 参数[abc def]"
    );
}

#[test]
fn test_has_path() {
    let registry = registry();
    assert_eq!(
        registry.has_path("test.first.second.third", &[]),
        (true, vec!["zh-CN".to_string()])
    );
    assert_eq!(
        registry.has_path("fruits.banana", &[]),
        (true, vec!["en".to_string(), "zh-CN".to_string()])
    );
    assert_eq!(registry.has_path("test.first", &[]), (false, vec![]));
}

#[test]
fn test_indexed_paths() {
    let registry = registry();
    assert_eq!(registry.get_string("test.strList[0]"), "abc");
    assert_eq!(registry.get_string("test.items[1].name"), "second");
    assert!(matches!(
        registry.lookup_in("zh-CN", "test.str1[0]"),
        Err(Error::NotASequence { .. })
    ));
    assert!(matches!(
        registry.lookup_in("zh-CN", "test.strList[x]"),
        Err(Error::InvalidIndex { .. })
    ));
}

#[test]
fn test_invalid_paths() {
    let registry = registry();
    for path in ["a..b", ".a", "a b", ""] {
        assert!(
            matches!(
                registry.lookup_in("en", path),
                Err(Error::InvalidPath { .. })
            ),
            "{path}"
        );
        assert_eq!(registry.get_string(path), "");
    }
}

#[test]
fn test_path_through_scalar() {
    let registry = registry();
    let err = registry
        .lookup_in("zh-CN", "test.str1.deeper")
        .unwrap_err();
    assert!(matches!(err, Error::PathNotObject { .. }));
    assert!(err.to_string().contains("test.<str1>.deeper"));
}

#[test]
fn test_get_value_requires_default() {
    let registry = registry();
    assert!(matches!(
        registry.get_value("test.num1", None),
        Err(Error::MissingDefault)
    ));
    assert_eq!(
        registry.get_value("test.num1", Some(Value::Null)).unwrap(),
        Value::Int(123)
    );
}
