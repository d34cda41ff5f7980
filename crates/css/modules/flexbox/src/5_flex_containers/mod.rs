//! Flex Containers: container properties and the container model
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use css_sizing::AvailableSize;

use crate::chapter6::FlexItem;
use crate::chapter8::{AlignContent, AlignItems, JustifyContent};

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

/// Container-level flex properties, already resolved by the cascade.
///
/// Gaps follow the flex direction: `main_gap` separates items within a line
/// (`column-gap` for rows), `cross_gap` separates lines (`row-gap` for rows).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub main_gap: f32,
    pub cross_gap: f32,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: FlexWrap::Nowrap,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            main_gap: 0.0,
            cross_gap: 0.0,
        }
    }
}

impl ContainerStyle {
    /// A `flex-wrap: nowrap` container has exactly one line.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#single-line>
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        matches!(self.wrap, FlexWrap::Nowrap)
    }
}

/// A flex container and the items it owns for one layout pass.
///
/// `available_main` / `available_cross` describe the container's own inner size
/// along its main and cross axes. They are read when the engine has to choose
/// the space itself: paginated layout and intrinsic measurement. One-shot layout
/// receives its space explicitly, and a container nested inside a flex item is
/// always laid out into that item's content box.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexContainer {
    pub style: ContainerStyle,
    pub items: Vec<FlexItem>,
    pub available_main: AvailableSize,
    pub available_cross: AvailableSize,
}

impl FlexContainer {
    /// A container with indefinite size in both axes.
    pub const fn new(style: ContainerStyle, items: Vec<FlexItem>) -> Self {
        Self {
            style,
            items,
            available_main: AvailableSize::Indefinite,
            available_cross: AvailableSize::Indefinite,
        }
    }

    #[must_use]
    pub const fn with_available(mut self, main: AvailableSize, cross: AvailableSize) -> Self {
        self.available_main = main;
        self.available_cross = cross;
        self
    }
}
