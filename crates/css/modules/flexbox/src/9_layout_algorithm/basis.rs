//! Flex base size and hypothetical main size determination.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>

use anyhow::{Result as AnyResult, bail};
use css_box::{MarginValue, sanitize_factor, sanitize_length};
use css_sizing::{AvailableSize, SizeValue, clamp_min_wins};
use log::debug;

use super::{FlexChild, ItemMeasurer};
use crate::chapter5::FlexContainer;
use crate::chapter6::FlexBasisValue;
use crate::chapter7::Axes;

/// The used flex basis of an item.
///
/// Percentages stay deferred until the container's main size is known; against
/// an indefinite main size they behave as `content`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlexBasis {
    Definite(f32),
    /// Fraction of the container's inner main size.
    Percentage(f32),
    Content,
}

impl FlexBasis {
    /// Used flex basis from the `flex-basis` property and the item's main size
    /// property. `auto` falls back to the main size property, then to `content`.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#valdef-flex-basis-auto>
    pub fn from_style(basis: FlexBasisValue, main_size: SizeValue) -> Self {
        match basis {
            FlexBasisValue::Length(px) => Self::Definite(sanitize_length(px)),
            FlexBasisValue::Percent(fraction) => Self::Percentage(fraction),
            FlexBasisValue::Content => Self::Content,
            FlexBasisValue::Auto => match main_size {
                SizeValue::Length(px) => Self::Definite(sanitize_length(px)),
                SizeValue::Percent(fraction) => Self::Percentage(fraction),
                SizeValue::Auto => Self::Content,
            },
        }
    }

    /// Resolve a deferred percentage against the container's main size.
    #[must_use]
    pub fn against(self, container_main: Option<f32>) -> Self {
        match self {
            Self::Percentage(fraction) => container_main.map_or(Self::Content, |main| {
                Self::Definite(sanitize_length(main * fraction))
            }),
            other => other,
        }
    }

    #[inline]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}

/// Resolve every item's flex basis, min/max main size and hypothetical main
/// size, in `order` sequence.
///
/// # Errors
/// Propagates measurement failures from the intrinsic size capability.
pub fn collect_children<M: ItemMeasurer + ?Sized>(
    container: &FlexContainer,
    order: &[usize],
    axes: Axes,
    container_main: Option<f32>,
    container_cross: Option<f32>,
    measurer: &M,
) -> AnyResult<Vec<FlexChild>> {
    let main_dim = axes.main_dimension();
    let cross_dim = axes.cross_dimension();
    let mut children = Vec::with_capacity(order.len());
    for &index in order {
        let Some(item) = container.items.get(index) else {
            bail!("order references item {index} of {}", container.items.len());
        };
        let basis = FlexBasis::from_style(item.flex_basis, item.size(main_dim)).against(container_main);
        let cross_prop = item.size(cross_dim).resolve(container_cross);
        let max_main = item.max_size(main_dim).resolve_max(container_main);

        let (base_size, content_min) = match basis {
            FlexBasis::Definite(px) => (px, None),
            FlexBasis::Content | FlexBasis::Percentage(_) => {
                let opposite = cross_prop.map_or(AvailableSize::Indefinite, AvailableSize::Definite);
                let sizes = measurer.measure_item(item, main_dim, opposite)?;
                (sizes.max_content, Some(sizes.min_content))
            }
        };

        let min_main = match item.min_size(main_dim) {
            // Automatic minimum: content-based items never shrink below
            // min-content (or their specified size, if smaller).
            SizeValue::Auto => content_min.map_or(0.0, |min_content| {
                let specified = item.size(main_dim).resolve(container_main);
                specified
                    .map_or(min_content, |size| size.min(min_content))
                    .min(max_main)
            }),
            other => other.resolve_min(container_main),
        };
        let hypothetical_main = clamp_min_wins(base_size, min_main, max_main);
        let margins = axes.to_logical(item.margin);

        debug!(
            target: "css::flexbox::basis",
            "item {:?}: basis={basis:?} base={base_size:.3} min={min_main:.3} max={max_main:.3} hypothetical={hypothetical_main:.3}",
            item.handle
        );

        children.push(FlexChild {
            index,
            handle: item.handle,
            basis,
            base_size,
            hypothetical_main,
            content_min,
            min_main,
            max_main,
            flex_grow: sanitize_factor(item.flex_grow),
            flex_shrink: sanitize_factor(item.flex_shrink),
            margin: margins.map(MarginValue::fixed_or_zero),
            auto_margin: margins.map(MarginValue::is_auto),
            cross_prop,
            min_cross: item.min_size(cross_dim).resolve_min(container_cross),
            max_cross: item.max_size(cross_dim).resolve_max(container_cross),
            align: item.align_self.resolve(container.style.align_items),
        });
    }
    Ok(children)
}
