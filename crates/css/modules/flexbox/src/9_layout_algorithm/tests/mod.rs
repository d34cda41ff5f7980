//! Tests for the flex layout algorithm in logical space.

use super::*;
use crate::chapter5::{ContainerStyle, FlexDirection, FlexWrap};
use crate::chapter6::{FixedContent, FixedContentProber, FlexBasisValue, IntrinsicSizeProber as _};
use crate::chapter8::{AlignContent, JustifyContent};
use css_sizing::SizeValue;

mod align_content_tests;

impl ItemMeasurer for FixedContentProber {
    fn measure_item(
        &self,
        item: &FlexItem,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes> {
        self.measure(item.handle, dimension, available_opposite)
    }
}

/// Helper to create an item with a definite flex basis and zero margins.
#[inline]
pub fn basis_item(handle: u64, basis: f32) -> FlexItem {
    let mut item = FlexItem::new(ItemRef(handle));
    item.flex_basis = FlexBasisValue::Length(basis);
    item.flex_shrink = 0.0;
    item
}

/// Helper to create three items with basis 50.
#[inline]
pub fn three_items_50() -> Vec<FlexItem> {
    vec![basis_item(1, 50.0), basis_item(2, 50.0), basis_item(3, 50.0)]
}

#[inline]
pub fn container(style: ContainerStyle, items: Vec<FlexItem>) -> FlexContainer {
    FlexContainer::new(style, items)
}

#[inline]
pub fn row_style() -> ContainerStyle {
    ContainerStyle::default()
}

#[inline]
pub fn wrap_style() -> ContainerStyle {
    ContainerStyle {
        wrap: FlexWrap::Wrap,
        ..ContainerStyle::default()
    }
}

/// Lay out without snapping, against a prober with no registered content.
pub fn run(
    container: &FlexContainer,
    main: Option<f32>,
    cross: Option<f32>,
) -> AnyResult<LogicalLayout> {
    run_with(container, main, cross, &FixedContentProber::new())
}

pub fn run_with(
    container: &FlexContainer,
    main: Option<f32>,
    cross: Option<f32>,
    prober: &FixedContentProber,
) -> AnyResult<LogicalLayout> {
    let to_available = |size: Option<f32>| size.map_or(AvailableSize::Indefinite, AvailableSize::Definite);
    layout_logical(container, to_available(main), to_available(cross), false, prober)
}

/// Items of every line, in line order.
pub fn all_items(layout: &LogicalLayout) -> Vec<LaidOutItem> {
    layout
        .lines
        .iter()
        .flat_map(|line| line.items.iter().copied())
        .collect()
}

pub fn main_sizes(layout: &LogicalLayout) -> Vec<f32> {
    all_items(layout).iter().map(|item| item.main_size).collect()
}

pub fn main_offsets(layout: &LogicalLayout) -> Vec<f32> {
    all_items(layout).iter().map(|item| item.main_offset).collect()
}

/// Compare two float sequences element-wise.
pub fn approx(got: &[f32], expected: &[f32]) -> bool {
    got.len() == expected.len()
        && got
            .iter()
            .zip(expected)
            .all(|(left, right)| (left - right).abs() < 0.01)
}
