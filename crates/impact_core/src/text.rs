/// Non-breaking space used to glue the last two words together.
pub const NBSP: char = '\u{00A0}';

/// An impact text split into its lead phrase and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedText {
    /// Empty when the text does not start with the highlight.
    pub highlighted: String,
    /// Starts with a single space when it follows a highlight.
    pub remaining: String,
}

/// Splits `text` at the end of `highlight` when `highlight` is a prefix.
pub fn split_highlight(text: &str, highlight: &str) -> HighlightedText {
    let text = text.trim();
    let highlight = highlight.trim();

    let rest = match text.strip_prefix(highlight) {
        Some(rest) if !highlight.is_empty() => rest.trim(),
        _ => {
            return HighlightedText {
                highlighted: String::new(),
                remaining: text.to_owned(),
            }
        }
    };

    HighlightedText {
        highlighted: highlight.to_owned(),
        remaining: if rest.is_empty() {
            String::new()
        } else {
            format!(" {rest}")
        },
    }
}

/// Keeps the last word from wrapping onto a line of its own.
pub fn prevent_orphan(text: &str) -> String {
    let text = text.trim();
    match text.rsplit_once(' ') {
        Some((head, last)) => format!("{head}{NBSP}{last}"),
        None => text.to_owned(),
    }
}
