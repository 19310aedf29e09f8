//! Internal module for decoding and encoding JSON escape sequences

/// Decodes a single-character escape code, that means the character following
/// the backslash for all escapes except `\uXXXX`
///
/// Returns `None` for unknown escape codes; `u` is not handled here because
/// the four hex digits have to be pulled from the source by the caller.
pub(crate) fn decode_code(code: char) -> Option<char> {
    match code {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Value of a hex digit in a `\uXXXX` escape, accepting both cases
pub(crate) fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Appends `text` to `out` with all characters escaped which JSON requires to
/// be escaped in string content: `"`, `\` and the control characters U+0000
/// to U+001F
///
/// Control characters with a short escape use it, the remaining ones are
/// written as `\uXXXX`. `/` is left unescaped; the reader accepts both forms.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0000}'..='\u{001F}' => {
                out.push_str("\\u");
                let value = c as u32;
                for shift in [12u32, 8, 4, 0] {
                    let digit = (value >> shift) & 0xF;
                    out.push(char::from_digit(digit, 16).unwrap().to_ascii_uppercase());
                }
            }
            _ => out.push(c),
        }
    }
}
