//! Marker function for translation-key extraction.
//!
//! The extraction tool locates keys by scanning source text for calls to
//! [`marker`] / [`t`]; nothing in this module does any work at runtime.

use crate::types::Extractable;

/// Flags `key` for the static extraction tool and returns it unchanged.
///
/// A pure identity function: the argument moves straight back to the
/// caller. Owned inputs keep their allocation, borrowed inputs come back as
/// the identical reference, and collections keep their length, order, and
/// contents. The call cannot fail and has no side effects.
///
/// ```
/// use i18n_extract_marker::marker;
///
/// let key = marker("HELLO_WORLD");
/// assert_eq!(key, "HELLO_WORLD");
///
/// let keys = marker(["HELLO", "WORLD", "GOODBYE"]);
/// assert_eq!(keys.len(), 3);
/// ```
///
/// Marked keys are ordinary values; hand them to whatever translation
/// service the application uses:
///
/// ```
/// use i18n_extract_marker::marker;
///
/// fn translate(key: &str) -> String {
///     // catalog lookup elided
///     key.to_string()
/// }
///
/// let greeting = translate(marker("MY_TRANSLATION_KEY"));
/// # assert_eq!(greeting, "MY_TRANSLATION_KEY");
/// ```
#[must_use = "marking has no effect unless the returned key is used"]
pub const fn marker<K: Extractable>(key: K) -> K {
    key
}

/// Short alias for [`marker`], for call-sites where the full name is noisy.
///
/// A plain re-export, so the two names are interchangeable in every call.
/// Extraction tools scan for both names.
pub use self::marker as t;
