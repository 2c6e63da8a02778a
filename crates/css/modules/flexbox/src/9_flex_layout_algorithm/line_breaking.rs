//! Collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use crate::chapter6::FlexChild;

/// Line start/end indices for items included in the line: `[start, end)`.
pub type LineRange = (usize, usize);

/// Break items into lines by accumulating outer hypothetical main sizes and `main_gap`
/// until exceeding `line_limit`. The first item on a line is always kept.
pub fn break_into_lines(line_limit: f32, main_gap: f32, items: &[FlexChild]) -> Vec<LineRange> {
    let mut line_ranges: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (idx, child) in items.iter().enumerate() {
        let size = child.outer_hypothetical_main();
        let is_first_in_line = idx == start;
        let gap = if is_first_in_line { 0.0 } else { main_gap };
        let next = cursor + gap + size;
        if next <= line_limit + f32::EPSILON || is_first_in_line {
            cursor = next;
        } else {
            line_ranges.push((start, idx));
            start = idx;
            cursor = size;
        }
    }
    if start < items.len() {
        line_ranges.push((start, items.len()));
    }
    line_ranges
}
