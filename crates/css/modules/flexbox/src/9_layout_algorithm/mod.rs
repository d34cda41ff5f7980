//! Flex Layout Algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! ```text
//! items ─► basis (9.2) ─► lines (9.3) ─► flexible lengths (9.7) ─► auto margins / justify (9.5)
//!                                   └──► cross sizes (9.4) ─► align-content ─► align-self (9.6)
//! ```
//!
//! Everything here runs in logical main/cross space measured from main-start
//! and cross-start. [`place_box`] maps the result to physical coordinates and
//! applies `row-reverse`, `column-reverse` and `wrap-reverse` mirroring.

pub mod basis;
pub mod cross_axis;
pub mod distribution;
pub mod multi_line;

use anyhow::{Result as AnyResult, bail};
use css_box::{LayoutUnit, Rect, sanitize_length};
use css_sizing::{AvailableSize, ContentSizes, Dimension, clamp_min_wins};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chapter5::FlexContainer;
use crate::chapter6::{FlexItem, ItemRef};
use crate::chapter7::{Axes, LogicalEdges, order_modified_indices, resolve_axes};
use crate::chapter8::{AlignItems, Distribution, justify_distribution};
use crate::chapter12::ItemSlice;
use basis::{FlexBasis, collect_children};
use cross_axis::{
    CrossMeasure, baseline_offset, hypothetical_cross, line_baseline_groups, line_cross_size,
    place_in_line,
};
use distribution::{
    MainOffsetPlan, accumulate_main_offsets, gaps_total, resolve_flexible_lengths,
    resolve_main_auto_margins,
};
use multi_line::{break_into_lines, pack_lines};

/// Intrinsic measurement of an item's content, whatever that content is.
///
/// The engine implements this by asking the caller's prober about opaque
/// content and by measuring nested flex containers itself.
pub trait ItemMeasurer {
    /// # Errors
    /// Returns an error when the content cannot be measured.
    fn measure_item(
        &self,
        item: &FlexItem,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes>;
}

/// An item as the algorithm sees it: logical margins, resolved basis and
/// constraints. Built once per pass by [`basis::collect_children`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    /// Index into the container's item list (document order).
    pub index: usize,
    pub handle: ItemRef,
    pub basis: FlexBasis,
    pub base_size: f32,
    pub hypothetical_main: f32,
    /// Min-content main size, for content-based items.
    pub content_min: Option<f32>,
    pub min_main: f32,
    pub max_main: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    /// Fixed margins; `auto` margins count as zero here.
    pub margin: LogicalEdges<f32>,
    pub auto_margin: LogicalEdges<bool>,
    /// Definite cross size property, if any.
    pub cross_prop: Option<f32>,
    pub min_cross: f32,
    pub max_cross: f32,
    /// `align-self` with `auto` already resolved.
    pub align: AlignItems,
}

impl FlexChild {
    #[inline]
    pub fn outer_hypothetical_main(&self) -> f32 {
        self.hypothetical_main + self.margin.main_sum()
    }

    /// Outer min-content contribution along the main axis.
    #[inline]
    pub fn outer_min_contribution(&self) -> f32 {
        let inner = self
            .content_min
            .filter(|_| self.basis.is_content())
            .unwrap_or(self.base_size);
        clamp_min_wins(inner, self.min_main, self.max_main) + self.margin.main_sum()
    }
}

/// One item after layout, in logical coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaidOutItem {
    pub index: usize,
    pub handle: ItemRef,
    /// Margin-box start from the container's main-start edge.
    pub main_offset: f32,
    pub main_size: f32,
    /// Margin-box start from the line's cross-start edge.
    pub cross_offset: f32,
    pub cross_size: f32,
    /// Resolved margins, auto margins included.
    pub margin: LogicalEdges<f32>,
}

impl LaidOutItem {
    #[inline]
    pub fn outer_main(&self) -> f32 {
        self.main_size + self.margin.main_sum()
    }

    #[inline]
    pub fn outer_cross(&self) -> f32 {
        self.cross_size + self.margin.cross_sum()
    }
}

/// One flex line after layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutLine {
    /// Offset of the line from the container's cross-start edge.
    pub cross_offset: f32,
    pub cross_size: f32,
    pub items: Vec<LaidOutItem>,
}

/// A complete flex layout in logical space.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicalLayout {
    pub axes: Axes,
    pub lines: Vec<LaidOutLine>,
    /// Used inner main size of the container.
    pub main_size: f32,
    /// Used inner cross size of the container.
    pub cross_size: f32,
}

/// Final geometry of one flex item (or one fragment of it), in the container's
/// local coordinate space.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItemBox {
    pub handle: ItemRef,
    /// Index of the item in the container's item list.
    pub index: usize,
    pub margin_box: Rect,
    pub content_box: Rect,
    pub slice: ItemSlice,
    /// Geometry of a nested flex container's items, relative to this box's
    /// content box.
    pub children: Vec<ResolvedItemBox>,
}

/// The logical window a set of boxes is placed into: the whole container, or
/// one fragment of it. Mirroring for reversed axes happens within the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub main_start: f32,
    pub main_extent: f32,
    pub cross_start: f32,
    pub cross_extent: f32,
}

impl Frame {
    /// The whole container.
    pub const fn whole(layout: &LogicalLayout) -> Self {
        Self {
            main_start: 0.0,
            main_extent: layout.main_size,
            cross_start: 0.0,
            cross_extent: layout.cross_size,
        }
    }
}

#[inline]
fn quantize(value: f32, snap: bool) -> f32 {
    if snap { LayoutUnit::snap(value) } else { value }
}

/// Run the flex layout algorithm for `container` in the given space.
///
/// Items are processed in order-modified document order. The result carries
/// lines in line-breaking order and items in line order.
///
/// # Errors
/// Propagates measurement failures and internal invariant failures of the
/// flexible length resolution.
pub fn layout_logical<M: ItemMeasurer + ?Sized>(
    container: &FlexContainer,
    available_main: AvailableSize,
    available_cross: AvailableSize,
    snap: bool,
    measurer: &M,
) -> AnyResult<LogicalLayout> {
    let style = &container.style;
    let axes = resolve_axes(style.direction, style.wrap);
    let container_main = available_main.definite();
    let container_cross = available_cross.definite();
    let main_gap = sanitize_length(style.main_gap);
    let cross_gap = sanitize_length(style.cross_gap);

    let order = order_modified_indices(&container.items);
    let children = collect_children(
        container,
        &order,
        axes,
        container_main,
        container_cross,
        measurer,
    )?;
    let ranges = break_into_lines(&children, container_main, main_gap, style.is_single_line());

    // Main axis, per line.
    let mut main_lines: Vec<Vec<(f32, f32, LogicalEdges<f32>)>> = Vec::with_capacity(ranges.len());
    let mut content_main = 0.0_f32;
    for range in &ranges {
        let line = children.get(range.start..range.end).unwrap_or(&[]);
        let sizes = resolve_flexible_lengths(line, container_main, main_gap)?;
        let gaps = gaps_total(line.len(), main_gap);
        let outer_sum: f32 = line
            .iter()
            .zip(&sizes)
            .map(|(child, size)| size + child.margin.main_sum())
            .sum::<f32>()
            + gaps;
        content_main = content_main.max(outer_sum);
        let line_main = container_main.unwrap_or(outer_sum);
        let auto = resolve_main_auto_margins(line, line_main - outer_sum);
        let dist = if auto.absorbed() {
            debug!(target: "css::flexbox::flex", "auto margins absorb {:.3} each", auto.each);
            Distribution::default()
        } else {
            justify_distribution(style.justify_content, auto.leftover, line.len())
        };
        let margins: Vec<LogicalEdges<f32>> = line
            .iter()
            .map(|child| LogicalEdges {
                main_start: child.margin.main_start
                    + if child.auto_margin.main_start { auto.each } else { 0.0 },
                main_end: child.margin.main_end
                    + if child.auto_margin.main_end { auto.each } else { 0.0 },
                ..child.margin
            })
            .collect();
        let outer: Vec<f32> = sizes
            .iter()
            .zip(&margins)
            .map(|(size, margin)| size + margin.main_sum())
            .collect();
        let plan = MainOffsetPlan {
            leading: dist.leading,
            between: dist.between,
            main_gap,
            snap,
        };
        let offsets = accumulate_main_offsets(&plan, &outer);
        main_lines.push(
            offsets
                .into_iter()
                .zip(sizes)
                .zip(margins)
                .map(|((offset, size), margin)| (offset, size, margin))
                .collect(),
        );
    }
    let main_size = container_main.unwrap_or(content_main);

    // Cross axis: hypothetical sizes, then line sizes.
    let mut measures: Vec<Vec<CrossMeasure>> = Vec::with_capacity(ranges.len());
    let mut natural_cross = Vec::with_capacity(ranges.len());
    for (range, main_line) in ranges.iter().zip(&main_lines) {
        let line = children.get(range.start..range.end).unwrap_or(&[]);
        let mut line_measures = Vec::with_capacity(line.len());
        for (child, &(_, size, _)) in line.iter().zip(main_line) {
            let Some(item) = container.items.get(child.index) else {
                bail!("flex child {} has no source item", child.index);
            };
            line_measures.push(hypothetical_cross(child, item, size, axes, measurer)?);
        }
        let offsets: Vec<Option<f32>> = line
            .iter()
            .zip(&line_measures)
            .map(|(child, measure)| baseline_offset(child, measure, axes))
            .collect();
        let groups = line_baseline_groups(line, &line_measures, &offsets);
        let cross = match container_cross {
            Some(definite) if style.is_single_line() => definite,
            _ => line_cross_size(line, &line_measures, &offsets, &groups),
        };
        debug!(
            target: "css::flexbox::cross",
            "line [{}, {}) cross={cross:.3}",
            range.start,
            range.end
        );
        natural_cross.push(cross);
        measures.push(line_measures);
    }
    let packing = pack_lines(
        style.align_content,
        &natural_cross,
        container_cross,
        cross_gap,
        style.is_single_line(),
        snap,
    );

    // Place items within their (possibly stretched) lines.
    let mut lines = Vec::with_capacity(ranges.len());
    for (((range, main_line), line_measures), (&line_cross, &line_offset)) in ranges
        .iter()
        .zip(&main_lines)
        .zip(&measures)
        .zip(packing.line_cross.iter().zip(&packing.offsets))
    {
        let line = children.get(range.start..range.end).unwrap_or(&[]);
        let offsets: Vec<Option<f32>> = line
            .iter()
            .zip(line_measures)
            .map(|(child, measure)| baseline_offset(child, measure, axes))
            .collect();
        let groups = line_baseline_groups(line, line_measures, &offsets);
        let items = line
            .iter()
            .zip(main_line)
            .zip(line_measures)
            .zip(&offsets)
            .map(|(((child, &(main_offset, main_size, margin)), measure), &baseline)| {
                let cross = place_in_line(child, measure, baseline, &groups, line_cross);
                LaidOutItem {
                    index: child.index,
                    handle: child.handle,
                    main_offset,
                    main_size,
                    cross_offset: quantize(cross.cross_offset, snap),
                    cross_size: cross.cross_size,
                    margin: LogicalEdges {
                        cross_start: cross.margin_start,
                        cross_end: cross.margin_end,
                        ..margin
                    },
                }
            })
            .collect();
        lines.push(LaidOutLine {
            cross_offset: line_offset,
            cross_size: line_cross,
            items,
        });
    }

    Ok(LogicalLayout {
        axes,
        lines,
        main_size,
        cross_size: packing.container_cross,
    })
}

/// Outer min-content and max-content contributions of every item along the
/// main axis, with the container's main size treated as indefinite.
///
/// # Errors
/// Propagates measurement failures.
pub fn main_contributions<M: ItemMeasurer + ?Sized>(
    container: &FlexContainer,
    available_cross: AvailableSize,
    measurer: &M,
) -> AnyResult<Vec<(f32, f32)>> {
    let axes = resolve_axes(container.style.direction, container.style.wrap);
    let order = order_modified_indices(&container.items);
    let children = collect_children(
        container,
        &order,
        axes,
        None,
        available_cross.definite(),
        measurer,
    )?;
    Ok(children
        .iter()
        .map(|child| {
            let max = child.outer_hypothetical_main();
            (child.outer_min_contribution().min(max), max)
        })
        .collect())
}

/// Map a laid-out item to physical coordinates within `frame`.
///
/// The item's logical position is taken relative to the frame's start, then
/// mirrored within the frame's extent on reversed axes.
pub fn place_box(
    axes: Axes,
    item: &LaidOutItem,
    line_cross_offset: f32,
    frame: Frame,
    slice: ItemSlice,
) -> ResolvedItemBox {
    let outer_main = item.outer_main();
    let outer_cross = item.outer_cross();
    let mut main_pos = item.main_offset - frame.main_start;
    let mut cross_pos = line_cross_offset + item.cross_offset - frame.cross_start;
    if axes.main_reverse {
        main_pos = frame.main_extent - main_pos - outer_main;
    }
    if axes.cross_reverse {
        cross_pos = frame.cross_extent - cross_pos - outer_cross;
    }
    let margins = axes.to_physical(item.margin);
    let (margin_box, content_width, content_height) = if axes.main_is_inline {
        (
            Rect::new(main_pos, cross_pos, outer_main, outer_cross),
            item.main_size,
            item.cross_size,
        )
    } else {
        (
            Rect::new(cross_pos, main_pos, outer_cross, outer_main),
            item.cross_size,
            item.main_size,
        )
    };
    let content_box = Rect::new(
        margin_box.x + margins.left,
        margin_box.y + margins.top,
        content_width,
        content_height,
    );
    ResolvedItemBox {
        handle: item.handle,
        index: item.index,
        margin_box,
        content_box,
        slice,
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests;
