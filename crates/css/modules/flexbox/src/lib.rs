//! CSS Flexible Box Layout Module Level 1: flex formatting context with
//! pagination-aware fragmentation.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec §4: Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec §5: Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec §6: Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec §7: Ordering and Orientation
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec §8: Flex Lines and Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec §9: Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;
// Spec §12: Fragmenting Flex Layout
#[path = "12_fragmentation/mod.rs"]
mod chapter12;

pub use chapter4::{FlexEngine, LayoutConfig, LayoutEngine};
pub use chapter5::{ContainerStyle, FlexContainer, FlexDirection, FlexWrap};
pub use chapter6::{
    FixedContent, FixedContentProber, FlexBasisValue, FlexItem, IntrinsicSizeProber, ItemContent,
    ItemRef,
};
pub use chapter7::{Axes, LogicalEdges, order_key, resolve_axes, sort_items_by_order_stable};
pub use chapter8::{AlignContent, AlignItems, AlignSelf, JustifyContent};
pub use chapter9::ResolvedItemBox;
pub use chapter9::basis::FlexBasis;
pub use chapter12::{
    BreakBetween, BreakInside, FragmentOutcome, FragmentPhase, FragmentState, ItemSlice,
};
