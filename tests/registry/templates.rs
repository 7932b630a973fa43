use langtree::NOT_FOUND_PLACEHOLDER;
use pretty_assertions::assert_eq;

use crate::registry;

#[test]
fn test_same_language_references() {
    let registry = registry();
    assert_eq!(registry.get_string("test.temp_test1"), "测试字符串1:测试");
    assert_eq!(registry.get_string("test.temp_test2"), "测试数字2:123.456");
}

#[test]
fn test_cross_language_references() {
    let mut registry = registry();
    assert_eq!(
        registry.get_string("test.temp_test3"),
        format!("测试按语言引用:测试 eng {}", NOT_FOUND_PLACEHOLDER)
    );

    registry.load_language("common").unwrap();
    assert_eq!(
        registry.get_string("test.temp_test3"),
        "测试按语言引用:测试 eng common_str"
    );
}

#[test]
fn test_reference_to_unloaded_language() {
    let mut registry = registry();
    assert_eq!(registry.get_string("test.count"), "count=<NotFound>");

    registry.load_language("common").unwrap();
    assert_eq!(registry.get_string("test.count"), "count=5");
}
