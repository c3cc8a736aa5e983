/// First `max_chars` characters of `text` on a single line.
///
/// Line breaks become spaces; the cut never lands inside a multi-byte character.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
