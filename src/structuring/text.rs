//! Byte-offset helpers for slicing UTF-8 text at approximate positions.

/// Largest char boundary at or below `i`.
pub fn floor_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary at or above `i`.
pub fn ceil_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Slice `s` by an approximate byte range, snapping both ends to char
/// boundaries.
pub fn window(s: &str, start: usize, end: usize) -> &str {
    let start = floor_boundary(s, start);
    let end = ceil_boundary(s, end.max(start));
    &s[start..end]
}
