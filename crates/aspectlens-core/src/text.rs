//! Text normalization

/// Normalize raw review text for vectorization and lexicon comparison.
///
/// Lowercases, strips ASCII punctuation, and collapses whitespace runs to
/// single spaces with leading/trailing whitespace trimmed. Total: any input
/// string produces a (possibly empty) normalized string, never an error.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
