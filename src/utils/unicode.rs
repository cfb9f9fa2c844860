use unicode_width::UnicodeWidthStr;

/// Collapse every `\r` and `\n` into a single-line form, one space per character.
pub fn collapse_newlines(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Display form of a cell: newlines collapsed, then the middle replaced by
/// `...` when the text is longer than `front_len + back_len` characters.
pub fn truncate_middle(s: &str, front_len: usize, back_len: usize) -> String {
    let flat = collapse_newlines(s);
    let char_count = flat.chars().count();
    if char_count <= front_len + back_len {
        return flat;
    }

    let front: String = flat.chars().take(front_len).collect();
    let back: String = flat.chars().skip(char_count - back_len).collect();
    format!("{front}...{back}")
}

/// Left-pad `s` with spaces to `width` terminal columns.
pub fn pad_left_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - current), s)
}
