//! Intrinsic sizes of flex containers and of the items inside them.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-sizes>

use anyhow::{Context as _, Result as AnyResult};
use css_sizing::{AvailableSize, ContentSizes, Dimension};
use log::debug;

use super::FlexEngine;
use crate::chapter5::FlexContainer;
use crate::chapter6::{FlexItem, IntrinsicSizeProber, ItemContent};
use crate::chapter7::resolve_axes;
use crate::chapter9::distribution::gaps_total;
use crate::chapter9::{ItemMeasurer, main_contributions};

/// Measures items for one layout pass at a given nesting depth. Opaque content
/// goes to the caller's prober; nested flex containers are measured by the
/// engine one level deeper.
pub struct NestedMeasurer<'engine, 'prober, P: ?Sized> {
    pub engine: &'engine FlexEngine<'prober, P>,
    pub depth: usize,
}

impl<P: IntrinsicSizeProber + ?Sized> ItemMeasurer for NestedMeasurer<'_, '_, P> {
    fn measure_item(
        &self,
        item: &FlexItem,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes> {
        match &item.content {
            ItemContent::Opaque => self
                .engine
                .prober
                .measure(item.handle, dimension, available_opposite)
                .map(ContentSizes::sanitized)
                .with_context(|| format!("measuring {:?} ({dimension:?})", item.handle)),
            ItemContent::Flex(nested) => {
                self.engine
                    .measure_at(nested, dimension, available_opposite, self.depth + 1)
            }
        }
    }
}

/// Map physical available space to a container's (main, cross) space.
pub fn space_for(
    container: &FlexContainer,
    width: AvailableSize,
    height: AvailableSize,
) -> (AvailableSize, AvailableSize) {
    let axes = resolve_axes(container.style.direction, container.style.wrap);
    if axes.main_is_inline {
        (width, height)
    } else {
        (height, width)
    }
}

impl<P: IntrinsicSizeProber + ?Sized> FlexEngine<'_, P> {
    /// Min/max-content size of `container` along `dimension`.
    ///
    /// Along the main axis this sums item contributions (a multi-line
    /// container's min-content is its largest contribution). Along the cross
    /// axis the container is laid out at `available_opposite` and its used
    /// cross size is reported for both.
    pub(super) fn measure_at(
        &self,
        container: &FlexContainer,
        dimension: Dimension,
        available_opposite: AvailableSize,
        depth: usize,
    ) -> AnyResult<ContentSizes> {
        self.check_depth(depth)?;
        let axes = resolve_axes(container.style.direction, container.style.wrap);
        let sizes = if dimension == axes.main_dimension() {
            let measurer = NestedMeasurer {
                engine: self,
                depth,
            };
            let contributions = main_contributions(container, available_opposite, &measurer)?;
            let gaps = gaps_total(contributions.len(), container.style.main_gap.max(0.0));
            let max_content = contributions.iter().map(|&(_, max)| max).sum::<f32>() + gaps;
            let min_content = if container.style.is_single_line() {
                contributions.iter().map(|&(min, _)| min).sum::<f32>() + gaps
            } else {
                contributions
                    .iter()
                    .map(|&(min, _)| min)
                    .fold(0.0_f32, f32::max)
            };
            ContentSizes {
                min_content,
                max_content,
                baseline: None,
            }
        } else {
            let layout = self.logical_at(container, available_opposite, AvailableSize::Indefinite, depth)?;
            ContentSizes::fixed(layout.cross_size)
        };
        debug!(
            target: "css::flexbox::engine",
            "measured container at depth {depth} along {dimension:?}: min={:.3} max={:.3}",
            sizes.min_content,
            sizes.max_content
        );
        Ok(sizes.sanitized())
    }
}
