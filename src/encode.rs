//! Property value encoding.
//!
//! Values are made safe for a content line in two steps:
//!
//! 1. **Escaping**: raw carriage returns and line feeds become the two-character
//!    sequences `\r` and `\n`, so a value never breaks its own line.
//! 2. **Folding**: the escaped text is cut into segments of at most [`FOLD_WIDTH`]
//!    characters, joined by a line break followed by a single space. Readers undo
//!    the fold by deleting every `CRLF` + space pair.
//!
//! Both steps are pure functions. Encoding is applied once, when a property is set;
//! the serializer writes stored values verbatim.
//!
//! ```rust
//! use icalgen::encode::encode_value;
//!
//! assert_eq!(encode_value("line one\nline two"), "line one\\nline two");
//!
//! let long = "a".repeat(70);
//! let folded = encode_value(&long);
//! assert_eq!(folded, format!("{}\r\n {}", "a".repeat(65), "a".repeat(5)));
//! ```

use std::borrow::Cow;

/// Maximum number of value characters per folded segment.
pub const FOLD_WIDTH: usize = 65;

/// Joins folded segments.
pub const FOLD_SEPARATOR: &str = "\r\n ";

/// Escapes raw CR and LF characters.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape.
#[must_use]
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Folds `value` into segments of at most [`FOLD_WIDTH`] characters.
///
/// Segments are counted in characters, not bytes, so multi-byte text is never
/// split inside a code point.
#[must_use]
pub fn fold(value: &str) -> Cow<'_, str> {
    if value.chars().count() <= FOLD_WIDTH {
        return Cow::Borrowed(value);
    }

    let mut folded = String::with_capacity(value.len() + value.len() / FOLD_WIDTH * 3);
    for (i, ch) in value.chars().enumerate() {
        if i > 0 && i % FOLD_WIDTH == 0 {
            folded.push_str(FOLD_SEPARATOR);
        }
        folded.push(ch);
    }
    Cow::Owned(folded)
}

/// Escapes then folds a raw property value.
#[must_use]
pub fn encode_value(value: &str) -> String {
    fold(&escape(value)).into_owned()
}

/// Makes `value` safe as a parameter value, e.g. the `TZID` in `DTSTART;TZID=...`.
///
/// Control characters and double quotes are dropped. The result is quoted when it
/// contains `:`, `;` or `,`.
///
/// ```rust
/// use icalgen::encode::param_value;
///
/// assert_eq!(param_value("Europe/Berlin"), "Europe/Berlin");
/// assert_eq!(param_value("GMT+01:00"), "\"GMT+01:00\"");
/// ```
#[must_use]
pub fn param_value(value: &str) -> Cow<'_, str> {
    let unsafe_char = |ch: char| ch.is_control() || ch == '"';
    let needs_quotes = value.contains([':', ';', ',']);
    if !needs_quotes && !value.contains(unsafe_char) {
        return Cow::Borrowed(value);
    }

    let cleaned: String = value.chars().filter(|ch| !unsafe_char(*ch)).collect();
    if needs_quotes {
        Cow::Owned(format!("\"{cleaned}\""))
    } else {
        Cow::Owned(cleaned)
    }
}

/// Reverses [`fold`] by removing every fold separator.
///
/// Escape sequences are left as they are.
#[must_use]
pub fn unfold(value: &str) -> String {
    value.replace(FOLD_SEPARATOR, "")
}
