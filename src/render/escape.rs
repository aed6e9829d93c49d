use std::borrow::Cow;

/// Replaces control characters that would break a single terminal row with
/// their backslash escapes (`\n`, `\r`, `\t`, `\b`, `\f`, `\v`).
pub fn escape_special_chars(name: &str) -> Cow<'_, str> {
    if !name.chars().any(needs_escape) {
        return Cow::Borrowed(name);
    }

    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\u{b}' => escaped.push_str("\\v"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\u{8}' | '\u{c}' | '\u{b}')
}
