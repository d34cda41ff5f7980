//! Hypothetical cross sizes and line cross sizes.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-item>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>

use anyhow::Result as AnyResult;
use css_sizing::{AvailableSize, Baselines, clamp_min_wins};

use super::super::{FlexChild, ItemMeasurer};
use super::baseline::BaselineGroups;
use crate::chapter6::FlexItem;
use crate::chapter7::Axes;
use crate::chapter8::AlignItems;

/// Cross-size specification for flex items, distinguishing between
/// explicit sizes, items that stretch to fill their line, and content sizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossSize {
    /// Item has a definite cross-size property (clamped)
    Explicit(f32),
    /// Item should stretch to its line; value is the measured content size
    Stretch(f32),
    /// Item keeps its measured content size
    Content(f32),
}

impl CrossSize {
    /// Get the hypothetical cross size (the size before stretching)
    #[inline]
    pub const fn intrinsic_size(self) -> f32 {
        match self {
            Self::Explicit(size) | Self::Stretch(size) | Self::Content(size) => size,
        }
    }

    /// Check if this item should stretch
    #[inline]
    pub const fn should_stretch(self) -> bool {
        matches!(self, Self::Stretch(_))
    }
}

/// An item's hypothetical cross size and, when it aligns by baseline, its
/// baselines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossMeasure {
    pub size: CrossSize,
    pub baseline: Option<Baselines>,
}

/// Determine an item's hypothetical cross size at its final main size.
///
/// Baselines are only collected in row containers; in a column container the
/// baseline is perpendicular to the cross axis and alignment falls back.
///
/// # Errors
/// Propagates measurement failures.
pub fn hypothetical_cross<M: ItemMeasurer + ?Sized>(
    child: &FlexChild,
    item: &FlexItem,
    main_size: f32,
    axes: Axes,
    measurer: &M,
) -> AnyResult<CrossMeasure> {
    let wants_baseline = child.align.is_baseline() && axes.main_is_inline;
    let stretch = matches!(child.align, AlignItems::Stretch)
        && !child.auto_margin.cross_start
        && !child.auto_margin.cross_end;
    let at_main = AvailableSize::Definite(main_size);
    match child.cross_prop {
        Some(specified) => {
            let baseline = if wants_baseline {
                measurer
                    .measure_item(item, axes.cross_dimension(), at_main)?
                    .baseline
            } else {
                None
            };
            Ok(CrossMeasure {
                size: CrossSize::Explicit(clamp_min_wins(
                    specified,
                    child.min_cross,
                    child.max_cross,
                )),
                baseline,
            })
        }
        None => {
            let sizes = measurer.measure_item(item, axes.cross_dimension(), at_main)?;
            let clamped = clamp_min_wins(sizes.max_content, child.min_cross, child.max_cross);
            Ok(CrossMeasure {
                size: if stretch {
                    CrossSize::Stretch(clamped)
                } else {
                    CrossSize::Content(clamped)
                },
                baseline: sizes.baseline.filter(|_| wants_baseline),
            })
        }
    }
}

/// A line's cross size: the largest outer hypothetical cross size among items
/// that do not participate in baseline alignment, or the extent of each
/// baseline-sharing group, whichever is larger.
pub fn line_cross_size(
    line: &[FlexChild],
    measures: &[CrossMeasure],
    baseline_offsets: &[Option<f32>],
    groups: &BaselineGroups,
) -> f32 {
    let plain = line
        .iter()
        .zip(measures)
        .zip(baseline_offsets)
        .filter(|&(_, offset)| offset.is_none())
        .map(|((child, measure), _)| measure.size.intrinsic_size() + child.margin.cross_sum())
        .fold(0.0_f32, f32::max);
    plain.max(groups.first.extent()).max(groups.last.extent())
}
