//! Main-axis space distribution: flexible lengths, auto margins, justification.

pub mod auto_margins;
pub mod flex_algorithm;
pub mod main_axis;

pub use auto_margins::resolve_main_auto_margins;
pub use flex_algorithm::resolve_flexible_lengths;
pub use main_axis::{MainOffsetPlan, accumulate_main_offsets};

/// Total CSS gap between `count` adjacent boxes.
#[inline]
pub fn gaps_total(count: usize, gap: f32) -> f32 {
    if count > 1 {
        (count as f32 - 1.0) * gap
    } else {
        0.0
    }
}
