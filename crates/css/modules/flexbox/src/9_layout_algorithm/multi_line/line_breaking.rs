//! Line breaking logic for multi-line flex containers.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::super::FlexChild;

/// Slack allowed when deciding whether the next item still fits on a line.
const FIT_EPSILON: f32 = 1e-3;

/// Items `[start, end)` of the order-modified item list forming one line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

/// Break items into lines by accumulating outer hypothetical main sizes and
/// `main_gap` until exceeding the container's main size.
///
/// Single-line containers and indefinite main sizes produce one line. An item
/// that alone exceeds the line still gets a line of its own; no line is ever
/// empty.
pub fn break_into_lines(
    items: &[FlexChild],
    container_main: Option<f32>,
    main_gap: f32,
    single_line: bool,
) -> Vec<LineRange> {
    if items.is_empty() {
        return Vec::new();
    }
    let Some(limit) = container_main.filter(|_| !single_line) else {
        return vec![LineRange {
            start: 0,
            end: items.len(),
        }];
    };
    let mut lines = Vec::new();
    let mut start = 0_usize;
    let mut cursor = 0.0_f32;
    for (idx, child) in items.iter().enumerate() {
        let size = child.outer_hypothetical_main();
        if idx == start {
            cursor = size;
            continue;
        }
        let next = cursor + main_gap + size;
        if next <= limit + FIT_EPSILON {
            cursor = next;
        } else {
            lines.push(LineRange { start, end: idx });
            start = idx;
            cursor = size;
        }
    }
    lines.push(LineRange {
        start,
        end: items.len(),
    });
    debug!(
        target: "css::flexbox::lines",
        "broke {} items into {} lines (limit={limit:.3} gap={main_gap:.3})",
        items.len(),
        lines.len()
    );
    lines
}
