//! i18n-extract-marker
//!
//! 翻訳キーを静的抽出ツール向けにマークするための identity 関数ライブラリ
//!
//! The [`marker`] function (and its short alias [`t`]) flags string literals
//! as translation keys so that an external static-extraction tool can find
//! them by scanning source text for the call-sites. At runtime nothing
//! happens at all: the argument is returned unchanged, same value, same
//! allocation, no side effects.
//!
//! ```
//! use i18n_extract_marker::{marker, t};
//!
//! let title = marker("HOME.TITLE");
//! assert_eq!(title, "HOME.TITLE");
//!
//! // Several keys at once, order preserved.
//! let keys = marker(["MENU.OPEN", "MENU.SAVE"]);
//! assert_eq!(keys, ["MENU.OPEN", "MENU.SAVE"]);
//!
//! // The alias is the same function under a shorter name.
//! assert_eq!(t("HOME.SUBTITLE"), marker("HOME.SUBTITLE"));
//! ```
//!
//! Extraction tools match the call-sites textually, so the names `marker`
//! and `t` are stable API: renaming either would silently break every
//! catalog built from them.

pub mod marker;
pub mod types;

// marker 関数とエイリアスを再エクスポート
pub use marker::{
    marker,
    t,
};
pub use types::{
    Extractable,
    TranslationKey,
    TranslationKeys,
};
