/// Threshold used for problem descriptions unless configured otherwise.
pub const DEFAULT_WRAP_WIDTH: usize = 81;

/// Greedily reflow `text` into lines, cutting only at spaces.
///
/// A line is cut at the first space seen once more than `width` characters
/// have been counted since the previous cut; the space itself is dropped. The
/// final character always closes the last line. Words longer than `width`
/// are never split. The counter starts at zero for the first line and at one
/// after every cut, which keeps output identical to the descriptions already
/// published with this width.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut start = 0usize;
    let mut count = 0usize;

    while let Some((idx, ch)) = chars.next() {
        let at_end = chars.peek().is_none();
        if (count > width && ch == ' ') || at_end {
            let end = if at_end { text.len() } else { idx };
            lines.push(text[start..end].to_string());
            count = 0;
            start = idx + ch.len_utf8();
        }
        count += 1;
    }

    lines
}
