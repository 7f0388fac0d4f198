//! Keyword context windowing.
//!
//! Yields a whitespace-normalized excerpt around every case-insensitive
//! whole-word occurrence of a keyword, in left-to-right order. The
//! sequence is lazy so callers that stop early (the synopsis stage)
//! never pay for the rest of the scan.

use regex::Regex;

/// Lazy iterator over context windows for one keyword. Finite; a fresh
/// scan starts with each call to [`windows`].
pub struct ContextWindows<'t> {
    text: &'t str,
    pattern: Option<Regex>,
    radius: usize,
    pos: usize,
}

/// Iterate the context windows of `keyword` in `text`.
///
/// Each match yields the span `[match - radius, match + radius]`
/// clamped to the text, with `radius` measured in characters so the
/// excerpt never splits a UTF-8 sequence. Overlapping matches each get
/// their own window. An empty keyword yields nothing.
pub fn windows<'t>(text: &'t str, keyword: &str, radius: usize) -> ContextWindows<'t> {
    let keyword = keyword.trim();
    let pattern = if keyword.is_empty() {
        None
    } else {
        // The keyword is escaped, so the pattern always compiles.
        Some(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).unwrap())
    };
    ContextWindows { text, pattern, radius, pos: 0 }
}

impl Iterator for ContextWindows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let pattern = self.pattern.as_ref()?;
        let m = pattern.find_at(self.text, self.pos)?;
        self.pos = m.end();
        let (lo, hi) = window_bounds(self.text, m.start(), m.end(), self.radius);
        Some(normalize(&self.text[lo..hi]))
    }
}

/// Widen `[start, end)` by `radius` characters on each side, clamped
/// to the text bounds.
fn window_bounds(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    if radius == 0 {
        return (start, end);
    }
    let lo = text[..start]
        .char_indices()
        .rev()
        .nth(radius - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let hi = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    (lo, hi)
}

/// Trim and collapse internal whitespace runs to single spaces.
fn normalize(passage: &str) -> String {
    passage.split_whitespace().collect::<Vec<_>>().join(" ")
}
