//! Baseline alignment support for flex lines.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>

use super::super::FlexChild;
use super::sizing::CrossMeasure;
use crate::chapter7::Axes;
use crate::chapter8::AlignItems;

/// Extent of one baseline-sharing group: the largest distance from an item's
/// margin-box cross-start to its baseline, and from the baseline to its
/// margin-box cross-end.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaselineGroup {
    pub before: f32,
    pub after: f32,
    pub members: usize,
}

impl BaselineGroup {
    fn add(&mut self, before: f32, after: f32) {
        self.before = self.before.max(before);
        self.after = self.after.max(after);
        self.members += 1;
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        if self.members == 0 {
            0.0
        } else {
            self.before + self.after
        }
    }
}

/// First- and last-baseline groups of one line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaselineGroups {
    pub first: BaselineGroup,
    pub last: BaselineGroup,
}

/// Distance from the item's margin-box cross-start edge to the baseline it
/// aligns by, when it participates in baseline alignment.
///
/// Items with cross-axis auto margins or without a reported baseline do not
/// participate. Baselines are reported from the physical top of the content
/// box, so under `wrap-reverse` they are measured back from the bottom.
pub fn baseline_offset(child: &FlexChild, measure: &CrossMeasure, axes: Axes) -> Option<f32> {
    if !child.align.is_baseline() || child.auto_margin.cross_start || child.auto_margin.cross_end {
        return None;
    }
    let metrics = measure.baseline?;
    let chosen = if matches!(child.align, AlignItems::LastBaseline) {
        metrics.last
    } else {
        metrics.first
    };
    let inner = measure.size.intrinsic_size();
    let within = chosen.clamp(0.0, inner.max(0.0));
    Some(if axes.cross_reverse {
        child.margin.cross_start + (inner - within)
    } else {
        child.margin.cross_start + within
    })
}

/// Collect the baseline groups of a line from each item's baseline offset.
pub fn line_baseline_groups(
    line: &[FlexChild],
    measures: &[CrossMeasure],
    offsets: &[Option<f32>],
) -> BaselineGroups {
    let mut groups = BaselineGroups::default();
    for ((child, measure), offset) in line.iter().zip(measures).zip(offsets) {
        let Some(before) = *offset else {
            continue;
        };
        let outer = measure.size.intrinsic_size() + child.margin.cross_sum();
        let after = outer - before;
        if matches!(child.align, AlignItems::LastBaseline) {
            groups.last.add(before, after);
        } else {
            groups.first.add(before, after);
        }
    }
    groups
}
