//! Terminal column measurement.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Columns one character occupies; control characters take none.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // One column is reserved for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let end = s
        .char_indices()
        .find_map(|(i, c)| {
            used += char_width(c);
            (used > budget).then_some(i)
        })
        .unwrap_or(s.len());

    let mut cut = String::with_capacity(end + ELLIPSIS.len_utf8());
    cut.push_str(&s[..end]);
    cut.push(ELLIPSIS);
    Cow::Owned(cut)
}
