//! Helpers for asserting on rendered terminal buffers.

use ratatui::buffer::Buffer;

/// Returns the rendered buffer as text, one line per row with trailing
/// whitespace trimmed.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
