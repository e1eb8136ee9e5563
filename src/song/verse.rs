//! Splitting lyrics into verses and paging through them.

const DELIMITERS: [&str; 2] = ["\n\n", "\n"];

/// Splits `text` on blank lines, falling back to single newlines when the former yields nothing.
pub fn split(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    DELIMITERS
        .iter()
        .map(|delimiter| text.split(delimiter).collect::<Vec<_>>())
        .find(|verses| !verses.is_empty())
        .unwrap_or_default()
}

/// Returns at most `limit` verses starting at `offset`.
///
/// A non-positive `limit` means everything from `offset` onward, a negative `offset` counts as
/// zero and an `offset` past the end gives an empty window.
pub fn window<T>(verses: &[T], limit: i64, offset: i64) -> &[T] {
    let start = usize::try_from(offset).unwrap_or_default();
    if start >= verses.len() {
        return &[];
    }

    let remaining = verses.len() - start;
    let count = match usize::try_from(limit) {
        Ok(limit) if limit > 0 => limit.min(remaining),
        _ => remaining,
    };
    &verses[start..start + count]
}

/// [`split`] followed by [`window`], owning the result.
pub fn paginate(text: &str, limit: i64, offset: i64) -> Vec<String> {
    window(&split(text), limit, offset).iter().map(|verse| (*verse).to_owned()).collect()
}
