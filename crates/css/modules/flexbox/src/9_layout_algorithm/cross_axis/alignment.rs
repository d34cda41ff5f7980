//! Cross-axis alignment and sizing for flex items.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-margins>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-stretch>

use css_sizing::clamp_min_wins;

use super::super::FlexChild;
use super::baseline::BaselineGroups;
use super::sizing::CrossMeasure;
use crate::chapter8::AlignItems;

/// Where an item sits within its line on the cross axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossPlacement {
    /// Offset of the margin box from the line's cross-start edge.
    pub cross_offset: f32,
    /// Used cross size (after stretching).
    pub cross_size: f32,
    /// Resolved cross-start margin, auto margins included.
    pub margin_start: f32,
    /// Resolved cross-end margin, auto margins included.
    pub margin_end: f32,
}

/// Size and position one item within a line of cross size `line_cross`.
///
/// Behavior:
/// - Stretch: items with an auto cross size take the line's cross size minus
///   their margins, clamped by min/max.
/// - Auto margins: absorb positive free space before `align-self` applies.
/// - Baseline: the item's baseline lands on its group's shared baseline.
///   Items without a baseline fall back to start (first baseline) or end
///   (last baseline).
pub fn place_in_line(
    child: &FlexChild,
    measure: &CrossMeasure,
    baseline_offset: Option<f32>,
    groups: &BaselineGroups,
    line_cross: f32,
) -> CrossPlacement {
    let margins = child.margin.cross_sum();
    let cross_size = if measure.size.should_stretch() {
        clamp_min_wins(line_cross - margins, child.min_cross, child.max_cross)
    } else {
        measure.size.intrinsic_size()
    };
    let free = line_cross - cross_size - margins;
    let mut margin_start = child.margin.cross_start;
    let mut margin_end = child.margin.cross_end;

    let auto_slots =
        usize::from(child.auto_margin.cross_start) + usize::from(child.auto_margin.cross_end);
    if auto_slots > 0 {
        if free > 0.0 {
            let each = free / auto_slots as f32;
            if child.auto_margin.cross_start {
                margin_start += each;
            }
            if child.auto_margin.cross_end {
                margin_end += each;
            }
        }
        return CrossPlacement {
            cross_offset: 0.0,
            cross_size,
            margin_start,
            margin_end,
        };
    }

    let cross_offset = match child.align {
        AlignItems::Stretch | AlignItems::FlexStart => 0.0,
        AlignItems::FlexEnd => free,
        AlignItems::Center => free * 0.5,
        AlignItems::Baseline => {
            baseline_offset.map_or(0.0, |before| groups.first.before - before)
        }
        AlignItems::LastBaseline => baseline_offset
            .map_or(free, |before| line_cross - groups.last.after - before),
    };
    CrossPlacement {
        cross_offset,
        cross_size,
        margin_start,
        margin_end,
    }
}
