//! Type-level surface: the input constraint and the key-narrowing aliases.
//!
//! Nothing here exists at runtime. [`Extractable`] names the shapes the
//! extraction tool records, and the two aliases let callers write down what
//! a value is for without introducing a new type.

use std::borrow::Cow;

/// A single translation key.
///
/// Purely a caller-side convenience. `K` defaults to borrowed static text
/// and can be substituted with an application's own narrowed key type.
///
/// ```
/// use i18n_extract_marker::{TranslationKey, marker};
///
/// const TITLE: TranslationKey = marker("HOME.TITLE");
/// assert_eq!(TITLE, "HOME.TITLE");
/// ```
pub type TranslationKey<K = &'static str> = K;

/// An ordered sequence of translation keys.
///
/// ```
/// use i18n_extract_marker::{TranslationKeys, marker};
///
/// static NAV: TranslationKeys<'static> = marker(&["NAV.HOME", "NAV.ABOUT"]);
/// assert_eq!(NAV.len(), 2);
/// ```
pub type TranslationKeys<'a, K = &'a str> = &'a [K];

/// Shapes of value the static extraction tool records: a single translation
/// key, or an ordered collection of translation keys.
///
/// The provided implementations cover the string-like types and the usual
/// containers of them. The trait is deliberately open: an application can
/// implement it for its own key type and thereby restrict marking to the
/// keys its catalog actually contains, while the provided impls keep
/// arbitrary text usable.
///
/// ```
/// use i18n_extract_marker::{Extractable, marker};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct AppKey(&'static str);
///
/// impl AsRef<str> for AppKey {
///     fn as_ref(&self) -> &str {
///         self.0
///     }
/// }
///
/// impl Extractable for AppKey {}
///
/// const HOME_TITLE: AppKey = AppKey("HOME.TITLE");
/// assert_eq!(marker(HOME_TITLE), HOME_TITLE);
/// ```
pub trait Extractable {}

impl Extractable for &str {}
impl Extractable for String {}
impl Extractable for Cow<'_, str> {}

impl<K: AsRef<str>, const N: usize> Extractable for [K; N] {}
impl<K: AsRef<str>, const N: usize> Extractable for &[K; N] {}
impl<K: AsRef<str>> Extractable for &[K] {}
impl<K: AsRef<str>> Extractable for Vec<K> {}
