//! Main-axis positioning of a line's items.

use css_box::LayoutUnit;

#[derive(Copy, Clone, Debug)]
/// Parameters for planning main-axis offset accumulation.
pub struct MainOffsetPlan {
    /// Pre-placement offset from main-start.
    pub leading: f32,
    /// Extra spacing between items from justify-content (excludes CSS gap).
    pub between: f32,
    /// CSS main-axis gap between adjacent items in px.
    pub main_gap: f32,
    /// Quantize positions to the layout unit.
    pub snap: bool,
}

/// Compute per-item margin-box start offsets from the items' outer sizes.
///
/// Offsets are measured from main-start; reversal is applied when geometry is
/// mapped to physical coordinates. With snapping, the cursor is re-quantized at
/// every step and the between-spacing is floored so that repeated spacing never
/// overruns the space it was carved from.
pub fn accumulate_main_offsets(plan: &MainOffsetPlan, outer_sizes: &[f32]) -> Vec<f32> {
    let quantize = |value: f32| {
        if plan.snap {
            LayoutUnit::snap(value)
        } else {
            value
        }
    };
    let spacing = if plan.snap {
        plan.main_gap + LayoutUnit::snap_floor(plan.between)
    } else {
        plan.main_gap + plan.between
    };
    let mut cursor = quantize(plan.leading);
    let mut offsets = Vec::with_capacity(outer_sizes.len());
    let mut iter = outer_sizes.iter().peekable();
    while let Some(&size) = iter.next() {
        offsets.push(cursor);
        cursor = quantize(cursor + size);
        if iter.peek().is_some() {
            cursor = quantize(cursor + spacing);
        }
    }
    offsets
}
