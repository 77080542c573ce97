//! 公開 API を下流クレートの視点で検証するテスト

#![allow(missing_docs)]
#![allow(clippy::indexing_slicing)]

use googletest::prelude::*;
use i18n_extract_marker::{
    Extractable,
    TranslationKey,
    TranslationKeys,
    marker,
    t,
};

const TITLE: TranslationKey = marker("HOME.TITLE");
static NAV_KEYS: TranslationKeys<'static> = marker(&["NAV.HOME", "NAV.ABOUT"]);

/// アプリケーション側で定義する絞り込み済みキー型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuKey(&'static str);

impl AsRef<str> for MenuKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Extractable for MenuKey {}

#[test]
fn test_const_marked_key_is_usable() {
    assert_that!(TITLE, eq("HOME.TITLE"));
}

#[test]
fn test_static_key_table_preserves_order() {
    assert_that!(NAV_KEYS.len(), eq(2));
    assert_that!(NAV_KEYS[0], eq("NAV.HOME"));
    assert_that!(NAV_KEYS[1], eq("NAV.ABOUT"));
}

#[test]
fn test_alias_and_marker_are_interchangeable() {
    let key = "KEY.A";
    assert_that!(t(key), eq(marker(key)));
    assert_that!(std::ptr::eq(t::<&str>(key), marker::<&str>(key)), eq(true));
}

#[test]
fn test_application_key_type_is_accepted() {
    let key = marker(MenuKey("MENU.OPEN"));
    assert_that!(key.as_ref(), eq("MENU.OPEN"));

    let keys = marker([MenuKey("MENU.OPEN"), MenuKey("MENU.SAVE")]);
    assert_that!(keys.len(), eq(2));
    assert_that!(keys[1], eq(MenuKey("MENU.SAVE")));
}

#[test]
fn test_collection_input_survives_a_round_trip() {
    let keys = vec![String::from("HOME.TITLE"), String::from("HOME.SUBTITLE")];
    let ptr = keys.as_ptr();
    let marked = marker(keys);
    assert_that!(marked.as_ptr(), eq(ptr));
    assert_that!(marked[0].as_str(), eq("HOME.TITLE"));
    assert_that!(marked[1].as_str(), eq("HOME.SUBTITLE"));
}
