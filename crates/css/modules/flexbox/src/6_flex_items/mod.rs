//! Flex Items: the item model and the intrinsic size capability
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use std::collections::HashMap;

use anyhow::Result as AnyResult;
use css_box::{Edges, MarginValue};
use css_sizing::{AvailableSize, ContentSizes, Dimension, SizeValue};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chapter5::FlexContainer;
use crate::chapter8::AlignSelf;
use crate::chapter12::{BreakBetween, BreakInside};

/// Opaque handle identifying an item's content to the caller. This crate never
/// interprets it beyond equality.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemRef(pub u64);

/// The `flex-basis` property as specified.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum FlexBasisValue {
    /// `auto`: use the main size property, or `content` if that is `auto` too.
    #[default]
    Auto,
    /// `content`: size from the item's max-content contribution.
    Content,
    Length(f32),
    /// Fraction of the container's inner main size (`0.5` = `50%`).
    Percent(f32),
}

/// What is inside a flex item.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ItemContent {
    /// Content measured through the [`IntrinsicSizeProber`] and never split.
    #[default]
    Opaque,
    /// A nested flex container, laid out recursively by the same engine.
    Flex(Box<FlexContainer>),
}

/// A flex item with its cascade-resolved style.
///
/// Sizes and margins are physical (width / height, top / right / bottom /
/// left); the engine maps them onto the container's main and cross axes.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub handle: ItemRef,
    pub order: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: FlexBasisValue,
    pub width: SizeValue,
    pub height: SizeValue,
    /// `auto` requests the automatic minimum size.
    pub min_width: SizeValue,
    pub min_height: SizeValue,
    /// `auto` means `none`.
    pub max_width: SizeValue,
    pub max_height: SizeValue,
    pub margin: Edges<MarginValue>,
    pub align_self: AlignSelf,
    pub break_before: BreakBetween,
    pub break_after: BreakBetween,
    pub break_inside: BreakInside,
    pub content: ItemContent,
}

impl FlexItem {
    /// An item with initial values: `flex: 0 1 auto`, auto sizes, zero margins.
    pub fn new(handle: ItemRef) -> Self {
        Self {
            handle,
            order: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexBasisValue::Auto,
            width: SizeValue::Auto,
            height: SizeValue::Auto,
            min_width: SizeValue::Auto,
            min_height: SizeValue::Auto,
            max_width: SizeValue::Auto,
            max_height: SizeValue::Auto,
            margin: Edges::all(MarginValue::Length(0.0)),
            align_self: AlignSelf::Auto,
            break_before: BreakBetween::Auto,
            break_after: BreakBetween::Auto,
            break_inside: BreakInside::Auto,
            content: ItemContent::Opaque,
        }
    }

    /// The size property for a physical dimension.
    #[inline]
    pub const fn size(&self, dimension: Dimension) -> SizeValue {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    #[inline]
    pub const fn min_size(&self, dimension: Dimension) -> SizeValue {
        match dimension {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    #[inline]
    pub const fn max_size(&self, dimension: Dimension) -> SizeValue {
        match dimension {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }

    /// The nested container, when this item's content is one.
    #[inline]
    pub fn nested(&self) -> Option<&FlexContainer> {
        match &self.content {
            ItemContent::Flex(container) => Some(container),
            ItemContent::Opaque => None,
        }
    }
}

/// Reports intrinsic sizes for opaque item content.
///
/// `available_opposite` is the space in the other dimension: when measuring an
/// item's height after its width is final, it is `Definite(width)`.
pub trait IntrinsicSizeProber {
    /// Measure `item` in `dimension`.
    ///
    /// # Errors
    /// Returns an error when the content cannot be measured; the layout call
    /// that asked for the measurement fails with it.
    fn measure(
        &self,
        item: ItemRef,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes>;
}

impl<F> IntrinsicSizeProber for F
where
    F: Fn(ItemRef, Dimension, AvailableSize) -> AnyResult<ContentSizes>,
{
    fn measure(
        &self,
        item: ItemRef,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes> {
        self(item, dimension, available_opposite)
    }
}

/// Precomputed intrinsic sizes of one piece of content in both dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedContent {
    pub width: ContentSizes,
    pub height: ContentSizes,
}

impl FixedContent {
    /// Content with a fixed natural size (replaced elements, images).
    pub const fn sized(width: f32, height: f32) -> Self {
        Self {
            width: ContentSizes::fixed(width),
            height: ContentSizes::fixed(height),
        }
    }
}

/// Table-driven prober for content whose intrinsic sizes do not depend on the
/// available space. Unknown handles measure as empty content.
#[derive(Clone, Debug, Default)]
pub struct FixedContentProber {
    entries: HashMap<ItemRef, FixedContent>,
}

impl FixedContentProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: ItemRef, content: FixedContent) {
        self.entries.insert(item, content);
    }

    #[must_use]
    pub fn with(mut self, item: ItemRef, content: FixedContent) -> Self {
        self.insert(item, content);
        self
    }
}

impl IntrinsicSizeProber for FixedContentProber {
    fn measure(
        &self,
        item: ItemRef,
        dimension: Dimension,
        _available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes> {
        let Some(content) = self.entries.get(&item) else {
            debug!(target: "css::flexbox::engine", "no intrinsic sizes for {item:?}; using empty content");
            return Ok(ContentSizes::zero());
        };
        Ok(match dimension {
            Dimension::Width => content.width,
            Dimension::Height => content.height,
        })
    }
}
