/// Line boundaries recognised when splitting input into tokens.
///
/// `\r\n` needs no special casing: the empty piece between `\r` and `\n` is
/// dropped together with every other blank line.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace stripped from both ends of a line.
///
/// The information separators `\x1c`..=`\x1f` count as whitespace here even
/// though `char::is_whitespace` rejects them; `\x1f` is the only one that can
/// survive the line split.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Splits `raw` into trimmed, non-empty lines, in input order.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split(is_line_break)
        .map(|line| line.trim_matches(is_padding))
        .filter(|line| !line.is_empty())
        .collect()
}
