//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-formatting-context>
//!
//! The engine entry points. A [`FlexEngine`] borrows the caller's intrinsic
//! size prober and lays out containers in one shot, fragment by fragment, or
//! measures them for an outer formatting context.

pub mod config;
pub mod intrinsic;

use anyhow::{Context as _, Result as AnyResult, bail};
use css_sizing::{AvailableSize, ContentSizes, Dimension};
use log::{debug, error};
use rayon::prelude::*;
use tracing::info_span;

use crate::chapter5::FlexContainer;
use crate::chapter6::{FlexItem, IntrinsicSizeProber};
use crate::chapter9::{Frame, LogicalLayout, ResolvedItemBox, layout_logical, place_box};
use crate::chapter12::{
    FragmentHost, FragmentOutcome, FragmentState, ItemSlice, fragment_container,
};
pub use config::LayoutConfig;
use intrinsic::{NestedMeasurer, space_for};

/// Flex layout as seen by an outer formatting context.
pub trait LayoutEngine {
    /// Lay out `container` in one pass and return its items' boxes in line
    /// order, relative to the container's content box.
    ///
    /// # Errors
    /// Returns an error when intrinsic measurement or nested layout fails.
    fn layout_single(
        &self,
        container: &FlexContainer,
        available_main: AvailableSize,
        available_cross: AvailableSize,
    ) -> AnyResult<Vec<ResolvedItemBox>>;

    /// Produce the next fragment of `container` given `available_block_extent`
    /// of vertical space. Start with [`FragmentState::new`] and pass each
    /// returned state into the next call.
    ///
    /// # Errors
    /// Returns an error when `state` belongs to another container or layout
    /// fails.
    fn layout_fragment(
        &self,
        container: &FlexContainer,
        state: FragmentState,
        available_block_extent: f32,
    ) -> AnyResult<FragmentOutcome>;

    /// Min-content and max-content size of `container` along `dimension`.
    ///
    /// # Errors
    /// Returns an error when intrinsic measurement fails.
    fn measure_container(
        &self,
        container: &FlexContainer,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes>;
}

/// The flex layout engine.
#[derive(Debug)]
pub struct FlexEngine<'prober, P: ?Sized> {
    prober: &'prober P,
    config: LayoutConfig,
}

impl<'prober, P: IntrinsicSizeProber + ?Sized> FlexEngine<'prober, P> {
    pub fn new(prober: &'prober P) -> Self {
        Self::with_config(prober, LayoutConfig::default())
    }

    pub const fn with_config(prober: &'prober P, config: LayoutConfig) -> Self {
        Self { prober, config }
    }

    #[inline]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out independent containers in parallel, each into its own
    /// `available_main` / `available_cross`.
    pub fn layout_many(&self, containers: &[FlexContainer]) -> Vec<AnyResult<Vec<ResolvedItemBox>>>
    where
        P: Sync,
    {
        containers
            .par_iter()
            .map(|container| {
                self.layout_single(container, container.available_main, container.available_cross)
            })
            .collect()
    }

    fn check_depth(&self, depth: usize) -> AnyResult<()> {
        if depth > self.config.max_nesting_depth {
            error!(
                target: "css::flexbox::engine",
                "flex nesting depth {depth} exceeds the limit of {}",
                self.config.max_nesting_depth
            );
            bail!(
                "flex containers nested deeper than {} levels",
                self.config.max_nesting_depth
            );
        }
        Ok(())
    }

    fn logical_at(
        &self,
        container: &FlexContainer,
        available_main: AvailableSize,
        available_cross: AvailableSize,
        depth: usize,
    ) -> AnyResult<LogicalLayout> {
        self.check_depth(depth)?;
        let measurer = NestedMeasurer {
            engine: self,
            depth,
        };
        layout_logical(
            container,
            available_main,
            available_cross,
            self.config.snap_to_layout_unit,
            &measurer,
        )
    }

    fn single_at(
        &self,
        container: &FlexContainer,
        available_main: AvailableSize,
        available_cross: AvailableSize,
        depth: usize,
    ) -> AnyResult<Vec<ResolvedItemBox>> {
        let layout = self.logical_at(container, available_main, available_cross, depth)?;
        let frame = Frame::whole(&layout);
        let mut placed = Vec::with_capacity(container.items.len());
        for line in &layout.lines {
            for item in &line.items {
                let mut resolved =
                    place_box(layout.axes, item, line.cross_offset, frame, ItemSlice::Whole);
                if let Some(source) = container.items.get(item.index) {
                    self.attach_children(source, &mut resolved, depth)?;
                }
                placed.push(resolved);
            }
        }
        debug!(
            target: "css::flexbox::engine",
            "depth {depth}: {} lines, {} boxes, used {:.3}x{:.3} (main x cross)",
            layout.lines.len(),
            placed.len(),
            layout.main_size,
            layout.cross_size
        );
        Ok(placed)
    }

    /// Lay out the flex container nested in `item` into its content box.
    fn attach_children(
        &self,
        item: &FlexItem,
        placed: &mut ResolvedItemBox,
        depth: usize,
    ) -> AnyResult<()> {
        let Some(nested) = item.nested() else {
            return Ok(());
        };
        let (main, cross) = space_for(
            nested,
            AvailableSize::Definite(placed.content_box.width),
            AvailableSize::Definite(placed.content_box.height),
        );
        placed.children = self
            .single_at(nested, main, cross, depth + 1)
            .with_context(|| format!("laying out the flex container inside {:?}", item.handle))?;
        Ok(())
    }

    fn fragment_at(
        &self,
        container: &FlexContainer,
        state: FragmentState,
        extent: f32,
        space: (AvailableSize, AvailableSize),
        depth: usize,
    ) -> AnyResult<FragmentOutcome> {
        self.check_depth(depth)?;
        fragment_container(self, container, state, extent, space, depth)
    }
}

impl<P: IntrinsicSizeProber + ?Sized> FragmentHost for FlexEngine<'_, P> {
    fn fit_tolerance(&self) -> f32 {
        self.config.fit_tolerance
    }

    fn natural_layout(
        &self,
        container: &FlexContainer,
        space: (AvailableSize, AvailableSize),
        depth: usize,
    ) -> AnyResult<LogicalLayout> {
        self.logical_at(container, space.0, space.1, depth)
    }

    fn place_children(
        &self,
        item: &FlexItem,
        placed: &mut ResolvedItemBox,
        depth: usize,
    ) -> AnyResult<()> {
        self.attach_children(item, placed, depth)
    }

    fn fragment_nested(
        &self,
        nested: &FlexContainer,
        state: FragmentState,
        extent: f32,
        inline_size: f32,
        depth: usize,
    ) -> AnyResult<FragmentOutcome> {
        let space = space_for(
            nested,
            AvailableSize::Definite(inline_size),
            AvailableSize::Indefinite,
        );
        self.fragment_at(nested, state, extent, space, depth + 1)
            .context("fragmenting a nested flex container")
    }
}

impl<P: IntrinsicSizeProber + ?Sized> LayoutEngine for FlexEngine<'_, P> {
    fn layout_single(
        &self,
        container: &FlexContainer,
        available_main: AvailableSize,
        available_cross: AvailableSize,
    ) -> AnyResult<Vec<ResolvedItemBox>> {
        let _span = info_span!("flex.layout_single", items = container.items.len()).entered();
        self.single_at(container, available_main, available_cross, 0)
    }

    fn layout_fragment(
        &self,
        container: &FlexContainer,
        state: FragmentState,
        available_block_extent: f32,
    ) -> AnyResult<FragmentOutcome> {
        let _span = info_span!(
            "flex.layout_fragment",
            fragment = state.fragment_count(),
            extent = available_block_extent
        )
        .entered();
        self.fragment_at(
            container,
            state,
            available_block_extent,
            (container.available_main, container.available_cross),
            0,
        )
    }

    fn measure_container(
        &self,
        container: &FlexContainer,
        dimension: Dimension,
        available_opposite: AvailableSize,
    ) -> AnyResult<ContentSizes> {
        let _span = info_span!("flex.measure_container", ?dimension).entered();
        self.measure_at(container, dimension, available_opposite, 0)
    }
}
