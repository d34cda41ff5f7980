//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
//!
//! Only `horizontal-tb` is supported: rows run along the width, columns along
//! the height.

use css_box::Edges;
use css_sizing::Dimension;

use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::{FlexItem, ItemRef};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal (row-wise layout)
    pub main_is_inline: bool,
    /// True when main axis is reversed (row-reverse or column-reverse)
    pub main_reverse: bool,
    /// True when lines stack from cross-end (wrap-reverse)
    pub cross_reverse: bool,
}

impl Axes {
    #[inline]
    pub const fn main_dimension(self) -> Dimension {
        if self.main_is_inline {
            Dimension::Width
        } else {
            Dimension::Height
        }
    }

    #[inline]
    pub const fn cross_dimension(self) -> Dimension {
        self.main_dimension().opposite()
    }

    /// Map physical edges onto the flex-relative start/end sides.
    ///
    /// Main-start is the right edge in `row-reverse` and the bottom edge in
    /// `column-reverse`; cross-start flips the same way under `wrap-reverse`.
    pub fn to_logical<T: Copy>(self, edges: Edges<T>) -> LogicalEdges<T> {
        let (horizontal_start, horizontal_end, vertical_start, vertical_end) = (
            if self.horizontal_reversed() { edges.right } else { edges.left },
            if self.horizontal_reversed() { edges.left } else { edges.right },
            if self.vertical_reversed() { edges.bottom } else { edges.top },
            if self.vertical_reversed() { edges.top } else { edges.bottom },
        );
        if self.main_is_inline {
            LogicalEdges {
                main_start: horizontal_start,
                main_end: horizontal_end,
                cross_start: vertical_start,
                cross_end: vertical_end,
            }
        } else {
            LogicalEdges {
                main_start: vertical_start,
                main_end: vertical_end,
                cross_start: horizontal_start,
                cross_end: horizontal_end,
            }
        }
    }

    /// Inverse of [`Axes::to_logical`].
    pub fn to_physical<T: Copy>(self, edges: LogicalEdges<T>) -> Edges<T> {
        let (horizontal_start, horizontal_end, vertical_start, vertical_end) = if self.main_is_inline
        {
            (
                edges.main_start,
                edges.main_end,
                edges.cross_start,
                edges.cross_end,
            )
        } else {
            (
                edges.cross_start,
                edges.cross_end,
                edges.main_start,
                edges.main_end,
            )
        };
        let (left, right) = if self.horizontal_reversed() {
            (horizontal_end, horizontal_start)
        } else {
            (horizontal_start, horizontal_end)
        };
        let (top, bottom) = if self.vertical_reversed() {
            (vertical_end, vertical_start)
        } else {
            (vertical_start, vertical_end)
        };
        Edges {
            top,
            right,
            bottom,
            left,
        }
    }

    const fn horizontal_reversed(self) -> bool {
        if self.main_is_inline {
            self.main_reverse
        } else {
            self.cross_reverse
        }
    }

    const fn vertical_reversed(self) -> bool {
        if self.main_is_inline {
            self.cross_reverse
        } else {
            self.main_reverse
        }
    }
}

/// Edges named by flex-relative direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalEdges<T> {
    pub main_start: T,
    pub main_end: T,
    pub cross_start: T,
    pub cross_end: T,
}

impl<T: Copy> LogicalEdges<T> {
    #[inline]
    pub fn map<U>(self, mut func: impl FnMut(T) -> U) -> LogicalEdges<U> {
        LogicalEdges {
            main_start: func(self.main_start),
            main_end: func(self.main_end),
            cross_start: func(self.cross_start),
            cross_end: func(self.cross_end),
        }
    }
}

impl LogicalEdges<f32> {
    #[inline]
    pub fn main_sum(&self) -> f32 {
        self.main_start + self.main_end
    }

    #[inline]
    pub fn cross_sum(&self) -> f32 {
        self.cross_start + self.cross_end
    }
}

/// Resolve main/cross axes given flex-direction and flex-wrap.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection, wrap: FlexWrap) -> Axes {
    let cross_reverse = matches!(wrap, FlexWrap::WrapReverse);
    match direction {
        FlexDirection::Row => Axes {
            main_is_inline: true,
            main_reverse: false,
            cross_reverse,
        },
        FlexDirection::RowReverse => Axes {
            main_is_inline: true,
            main_reverse: true,
            cross_reverse,
        },
        FlexDirection::Column => Axes {
            main_is_inline: false,
            main_reverse: false,
            cross_reverse,
        },
        FlexDirection::ColumnReverse => Axes {
            main_is_inline: false,
            main_reverse: true,
            cross_reverse,
        },
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so a stable sort by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Stable sort of items by order, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(items: &[(ItemRef, i32)]) -> Vec<ItemRef> {
    let mut keyed: Vec<((i32, usize), ItemRef)> = items
        .iter()
        .enumerate()
        .map(|(original_index, &(handle, order))| (order_key(order, original_index), handle))
        .collect();
    keyed.sort_by_key(|entry| entry.0);
    keyed.into_iter().map(|(_, handle)| handle).collect()
}

/// Source indices of `items` in order-modified document order.
pub fn order_modified_indices(items: &[FlexItem]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&index| {
        order_key(items.get(index).map_or(0, |item| item.order), index)
    });
    indices
}
