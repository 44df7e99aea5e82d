//! Horizontal scrolling for single-line inputs. Offsets are UTF-8 byte indices.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Byte range `[start, end)` of `text` that fits in `width` cells with the
/// cursor (and the character under it) visible.
pub(super) fn window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    if width == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    let under_cursor = text[cursor..].chars().next().map_or(0, char::len_utf8);
    let head = &text[..cursor + under_cursor];
    let start = if head.width() <= width {
        0
    } else {
        let mut used = 0usize;
        let mut start = cursor + under_cursor;
        for (idx, ch) in head.char_indices().rev() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = idx;
        }
        start
    };

    let mut used = 0usize;
    let mut end = start;
    for (idx, ch) in text[start..].char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end = start + idx + ch.len_utf8();
    }
    (start, end)
}
