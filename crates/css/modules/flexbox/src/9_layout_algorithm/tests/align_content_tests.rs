//! Tests for `align-content` line packing.

use super::*;

/// Two 50px-tall lines in a 100px-wide wrap container.
fn two_lines(align: AlignContent) -> FlexContainer {
    let items = vec![basis_item(1, 60.0), basis_item(2, 60.0)];
    let style = ContainerStyle {
        align_content: align,
        ..wrap_style()
    };
    container(style, items)
}

fn tall_prober() -> FixedContentProber {
    FixedContentProber::new()
        .with(ItemRef(1), FixedContent::sized(60.0, 50.0))
        .with(ItemRef(2), FixedContent::sized(60.0, 50.0))
}

fn line_offsets(layout: &LogicalLayout) -> Vec<f32> {
    layout.lines.iter().map(|line| line.cross_offset).collect()
}

fn line_sizes(layout: &LogicalLayout) -> Vec<f32> {
    layout.lines.iter().map(|line| line.cross_size).collect()
}

#[test]
/// Center, end and space-between distribute the leftover cross space.
///
/// # Panics
/// Panics if a packing mode places lines incorrectly.
fn packing_modes_place_lines() -> AnyResult<()> {
    let cases = [
        (AlignContent::Center, [100.0, 150.0]),
        (AlignContent::End, [200.0, 250.0]),
        (AlignContent::SpaceBetween, [0.0, 250.0]),
        (AlignContent::SpaceAround, [50.0, 200.0]),
        (AlignContent::Start, [0.0, 50.0]),
    ];
    for (align, expected) in cases {
        let layout = run_with(&two_lines(align), Some(100.0), Some(300.0), &tall_prober())?;
        assert!(approx(&line_offsets(&layout), &expected), "{align:?}");
    }
    Ok(())
}

#[test]
/// Stretch grows every line and stretch items grow with their line.
///
/// # Panics
/// Panics if lines or items are not stretched to 150px.
fn stretch_grows_lines_and_items() -> AnyResult<()> {
    let layout = run_with(&two_lines(AlignContent::Stretch), Some(100.0), Some(300.0), &tall_prober())?;
    assert!(approx(&line_sizes(&layout), &[150.0, 150.0]));
    assert!(approx(&line_offsets(&layout), &[0.0, 150.0]));
    let item_cross: Vec<f32> = all_items(&layout).iter().map(|item| item.cross_size).collect();
    assert!(approx(&item_cross, &[150.0, 150.0]));
    Ok(())
}

#[test]
/// Negative leftover makes space-around fall back to center.
///
/// # Panics
/// Panics if overflowing lines are not centered.
fn overflowing_space_around_centers() -> AnyResult<()> {
    let layout = run_with(&two_lines(AlignContent::SpaceAround), Some(100.0), Some(60.0), &tall_prober())?;
    assert!(approx(&line_offsets(&layout), &[-20.0, 30.0]));
    Ok(())
}

#[test]
/// A single-line container's line spans the definite cross size regardless of
/// `align-content`.
///
/// # Panics
/// Panics if the single line is shifted or not sized to the container.
fn single_line_ignores_align_content() -> AnyResult<()> {
    let style = ContainerStyle {
        align_content: AlignContent::Center,
        ..row_style()
    };
    let flex = container(style, vec![basis_item(1, 60.0)]);
    let layout = run_with(&flex, Some(100.0), Some(300.0), &tall_prober())?;
    assert!(approx(&line_offsets(&layout), &[0.0]));
    assert!(approx(&line_sizes(&layout), &[300.0]));
    Ok(())
}
