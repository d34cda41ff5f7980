//! Tests for paginated flex layout.

use anyhow::Result as AnyResult;
use css_sizing::{AvailableSize, SizeValue};

use super::*;
use crate::chapter4::{FlexEngine, LayoutEngine as _};
use crate::chapter5::{ContainerStyle, FlexContainer, FlexDirection, FlexWrap};
use crate::chapter6::{FixedContentProber, FlexItem, ItemContent, ItemRef};

mod column_tests;

pub fn sized_item(handle: u64, width: f32, height: f32) -> FlexItem {
    let mut item = FlexItem::new(ItemRef(handle));
    item.width = SizeValue::Length(width);
    item.height = SizeValue::Length(height);
    item
}

/// A wrapping row container of `count` full-width items `height` tall, so
/// every item forms its own line.
pub fn stacked_rows(count: u64, height: f32) -> FlexContainer {
    let style = ContainerStyle {
        wrap: FlexWrap::Wrap,
        ..ContainerStyle::default()
    };
    let items = (1..=count).map(|handle| sized_item(handle, 100.0, height)).collect();
    FlexContainer::new(style, items)
        .with_available(AvailableSize::Definite(100.0), AvailableSize::Indefinite)
}

/// A column container of items with the given heights.
pub fn column(heights: &[f32]) -> FlexContainer {
    let style = ContainerStyle {
        direction: FlexDirection::Column,
        ..ContainerStyle::default()
    };
    let items = heights
        .iter()
        .zip(1_u64..)
        .map(|(&height, handle)| sized_item(handle, 50.0, height))
        .collect();
    FlexContainer::new(style, items)
        .with_available(AvailableSize::Indefinite, AvailableSize::Definite(50.0))
}

pub fn nested(handle: u64, inner: FlexContainer) -> FlexItem {
    let mut item = FlexItem::new(ItemRef(handle));
    item.content = ItemContent::Flex(Box::new(inner));
    item
}

/// Request fragments of `extent` until the session completes.
pub fn paginate(container: &FlexContainer, extent: f32) -> AnyResult<Vec<FragmentOutcome>> {
    let prober = FixedContentProber::new();
    let engine = FlexEngine::new(&prober);
    let mut state = FragmentState::new();
    let mut fragments = Vec::new();
    for _ in 0..64 {
        let outcome = engine.layout_fragment(container, state, extent)?;
        state = outcome.state.clone();
        let done = outcome.is_complete;
        fragments.push(outcome);
        if done {
            break;
        }
    }
    Ok(fragments)
}

pub fn handles(outcome: &FragmentOutcome) -> Vec<u64> {
    outcome.placed.iter().map(|placed| placed.handle.0).collect()
}

pub fn ys(outcome: &FragmentOutcome) -> Vec<f32> {
    outcome.placed.iter().map(|placed| placed.margin_box.y).collect()
}

pub fn approx(got: &[f32], expected: &[f32]) -> bool {
    got.len() == expected.len()
        && got
            .iter()
            .zip(expected)
            .all(|(left, right)| (left - right).abs() < 0.01)
}

#[test]
/// # Panics
/// Panics if a request after completion places anything.
fn request_after_completion_is_empty() -> AnyResult<()> {
    let container = stacked_rows(1, 20.0);
    let prober = FixedContentProber::new();
    let engine = FlexEngine::new(&prober);
    let first = engine.layout_fragment(&container, FragmentState::new(), 100.0)?;
    assert!(first.is_complete);
    assert_eq!(first.state.phase(), FragmentPhase::Complete);
    let again = engine.layout_fragment(&container, first.state, 100.0)?;
    assert!(again.is_complete && again.placed.is_empty());
    assert!(again.consumed_extent.abs() < f32::EPSILON);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a state is accepted for a container with different items.
fn state_is_bound_to_its_container() -> AnyResult<()> {
    let prober = FixedContentProber::new();
    let engine = FlexEngine::new(&prober);
    let first = engine.layout_fragment(&stacked_rows(3, 50.0), FragmentState::new(), 60.0)?;
    assert_eq!(first.state.phase(), FragmentPhase::InProgress);
    let mismatched = engine.layout_fragment(&stacked_rows(5, 50.0), first.state, 60.0);
    assert!(matches!(mismatched, Err(err) if err.to_string().contains("3 items")));
    Ok(())
}

#[test]
/// # Panics
/// Panics if fragments lose, duplicate or reorder items, or consumption decreases.
fn fragments_cover_every_item_once() -> AnyResult<()> {
    for container in [stacked_rows(7, 30.0), column(&[30.0, 45.0, 10.0, 60.0, 25.0])] {
        let fragments = paginate(&container, 70.0)?;
        let mut seen: Vec<u64> = fragments.iter().flat_map(handles).collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (1..=container.items.len() as u64).collect();
        assert_eq!(seen, expected);
        let mut total = 0.0_f32;
        for outcome in &fragments {
            assert!(outcome.consumed_extent >= 0.0);
            assert!(outcome.state.consumed_total() >= total);
            total = outcome.state.consumed_total();
        }
        assert!(fragments.last().is_some_and(|last| last.is_complete));
    }
    Ok(())
}
