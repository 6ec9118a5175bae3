//! Character classes used by the transition table.

/// Separators between tag parts. Never emitted outside strings, comments
/// and bindings.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Characters that may start a tag name.
#[must_use]
pub const fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters of a number value.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may never appear where a tag or attribute name is expected.
#[must_use]
pub const fn is_forbidden_in_name(c: char) -> bool {
    matches!(c, '"' | '\'' | '<' | '=')
}

/// Whether `value` followed by `closer` is a complete JSON document.
///
/// Used to decide whether a `]` or `}` ends an array or object value or sits
/// inside a nested structure or string. Each attempt is linear in the
/// value length.
#[must_use]
pub fn closes_json_value(value: &str, closer: char) -> bool {
    let mut candidate = String::with_capacity(value.len() + closer.len_utf8());
    candidate.push_str(value);
    candidate.push(closer);
    serde_json::from_str::<serde::de::IgnoredAny>(&candidate).is_ok()
}
