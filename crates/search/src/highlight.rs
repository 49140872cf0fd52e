//! Match highlighting for rendered labels.

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Wrap each matched character of `s` in `<mark>` tags.
///
/// `matches` are character indices as returned by [`crate::fuzzy_match`],
/// expected in increasing order. Unmatched text is copied verbatim and is
/// **not** HTML-escaped; escape untrusted input before highlighting.
///
/// Indices past the end of `s`, or out of order, are not reported as errors.
/// They never panic but the highlighted output is then unspecified.
///
/// # Example
/// ```
/// use sveltacular_search::highlight_matches;
///
/// assert_eq!(highlight_matches("Modal", &[0, 2]), "<mark>M</mark>o<mark>d</mark>al");
/// assert_eq!(highlight_matches("Modal", &[]), "Modal");
/// ```
pub fn highlight_matches(s: &str, matches: &[usize]) -> String {
    if matches.is_empty() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + matches.len() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    let mut pending = matches.iter().copied().peekable();

    for (index, c) in s.chars().enumerate() {
        // Skip stale indices so unordered input can't stall the cursor.
        while pending.next_if(|&m| m < index).is_some() {}

        if pending.next_if_eq(&index).is_some() {
            out.push_str(MARK_OPEN);
            out.push(c);
            out.push_str(MARK_CLOSE);
        } else {
            out.push(c);
        }
    }

    out
}
