//! Character-safe accessors for string slices.
//!
//! Positions here count characters (Unicode scalar values), not bytes, so
//! these helpers can never split a multi-byte character or panic on a
//! non-boundary byte offset. Slicing returns a borrowed subslice of the
//! input; nothing allocates.

use std::ops::Range;

/// Returns the character at a character-counted position, or `None` if the
/// position is past the end.
///
/// # Examples
///
/// ```
/// use slicekit::char_at;
///
/// assert_eq!(char_at("Hello World!", 3), Some('l'));
/// assert_eq!(char_at("Hello World!", 20), None);
/// ```
pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.chars().nth(index)
}

/// Returns the substring covering character positions
/// `[range.start, range.end)`, or `None` if the requested span does not fit
/// entirely within the string.
///
/// Like [`slice_in_range`](crate::slice_in_range), the whole span must be
/// realizable; an overrunning end yields `None` rather than a truncated
/// result.
///
/// # Examples
///
/// ```
/// use slicekit::slice_chars;
///
/// assert_eq!(slice_chars("Hello World!", 6..11), Some("World"));
/// assert_eq!(slice_chars("Hello World!", 21..110), None);
/// ```
pub fn slice_chars(s: &str, range: Range<usize>) -> Option<&str> {
    if range.start > range.end {
        return None;
    }
    let start = byte_offset(s, range.start)?;
    let end = byte_offset(s, range.end)?;
    Some(&s[start..end])
}

/// Returns up to `length` characters starting at character position
/// `start`.
///
/// Returns `None` when `start` is past the last character. A span that
/// overruns the end is clamped to the end (the one deliberate best-effort
/// accessor in this crate); `length == 0` yields `Some("")`.
///
/// # Examples
///
/// ```
/// use slicekit::slicing;
///
/// assert_eq!(slicing("Hello World", 6, 5), Some("World"));
/// assert_eq!(slicing("Hello World", 6, 50), Some("World"));
/// assert_eq!(slicing("Hello World", 50, 5), None);
/// ```
pub fn slicing(s: &str, start: usize, length: usize) -> Option<&str> {
    let count = s.chars().count();
    if start >= count {
        return None;
    }
    let end = start.saturating_add(length).min(count);
    slice_chars(s, start..end)
}

/// Byte offset of the `n`-th character, or `None` if `n` is past the end.
/// `n` equal to the character count maps to the string's byte length.
fn byte_offset(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    s.char_indices()
        .nth(n - 1)
        .map(|(offset, ch)| offset + ch.len_utf8())
}
