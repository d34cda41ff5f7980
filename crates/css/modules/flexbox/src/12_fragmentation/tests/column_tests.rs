//! Column containers fragment between items, and split nested containers.

use super::*;

#[test]
/// # Panics
/// Panics if items are not carried over to later fragments from the top.
fn items_flow_across_fragments() -> AnyResult<()> {
    let fragments = paginate(&column(&[40.0, 40.0, 40.0, 40.0, 40.0]), 100.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1, 2], vec![3, 4], vec![5]]);
    let second = fragments.get(1);
    assert!(second.is_some_and(|outcome| approx(&ys(outcome), &[0.0, 40.0])));
    assert!(second.is_some_and(|outcome| (outcome.consumed_extent - 80.0).abs() < 0.01));
    Ok(())
}

#[test]
/// # Panics
/// Panics if `column-reverse` is not mirrored within each fragment.
fn column_reverse_mirrors_within_fragment() -> AnyResult<()> {
    let mut container = column(&[40.0, 40.0, 40.0]);
    container.style.direction = FlexDirection::ColumnReverse;
    let fragments = paginate(&container, 100.0)?;
    let first = fragments.first();
    assert!(first.is_some_and(|outcome| handles(outcome) == vec![1, 2] && approx(&ys(outcome), &[40.0, 0.0])));
    Ok(())
}

#[test]
/// # Panics
/// Panics if an unbreakable item is split or not deferred.
fn avoid_item_is_deferred_then_overflows() -> AnyResult<()> {
    let inner = column(&[60.0, 60.0]);
    let mut container = column(&[50.0]);
    let mut atomic = nested(2, inner);
    atomic.width = SizeValue::Length(50.0);
    atomic.break_inside = BreakInside::Avoid;
    container.items.push(atomic);

    let fragments = paginate(&container, 100.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![2]]);
    let second = fragments.get(1);
    assert!(second.is_some_and(|outcome| outcome.overflowed));
    assert!(second.is_some_and(|outcome| outcome.placed.iter().all(|placed| placed.slice == ItemSlice::Whole)));
    Ok(())
}

#[test]
/// # Panics
/// Panics if a nested column container is not split into first, middle and
/// last slices carrying its items, with continuing slices filling their
/// fragment.
fn nested_container_is_split_into_slices() -> AnyResult<()> {
    let inner = column(&[30.0, 30.0, 30.0, 30.0, 30.0]);
    let mut outer_item = nested(1, inner);
    outer_item.width = SizeValue::Length(50.0);
    let style = ContainerStyle {
        direction: FlexDirection::Column,
        ..ContainerStyle::default()
    };
    let container = FlexContainer::new(style, vec![outer_item])
        .with_available(AvailableSize::Indefinite, AvailableSize::Definite(50.0));

    let fragments = paginate(&container, 70.0)?;
    let slices: Vec<ItemSlice> = fragments
        .iter()
        .flat_map(|outcome| outcome.placed.iter().map(|placed| placed.slice))
        .collect();
    assert_eq!(slices, vec![ItemSlice::First, ItemSlice::Middle, ItemSlice::Last]);
    let children: Vec<Vec<u64>> = fragments
        .iter()
        .flat_map(|outcome| &outcome.placed)
        .map(|placed| placed.children.iter().map(|child| child.handle.0).collect())
        .collect();
    assert_eq!(children, vec![vec![1, 2], vec![3, 4], vec![5]]);
    let heights: Vec<f32> = fragments
        .iter()
        .flat_map(|outcome| &outcome.placed)
        .map(|placed| placed.margin_box.height)
        .collect();
    assert!(approx(&heights, &[70.0, 70.0, 30.0]));
    Ok(())
}

#[test]
/// # Panics
/// Panics if an item that fits whole after a split is not placed behind it.
fn items_follow_a_completed_split() -> AnyResult<()> {
    let inner = column(&[40.0, 40.0]);
    let mut split = nested(1, inner);
    split.width = SizeValue::Length(50.0);
    let mut container = column(&[]);
    container.items.push(split);
    container.items.push(sized_item(2, 50.0, 20.0));

    let fragments = paginate(&container, 60.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![1, 2]]);
    let second = fragments.get(1);
    assert!(second.is_some_and(|outcome| approx(&ys(outcome), &[0.0, 40.0])));
    Ok(())
}

/// A column of `heights` plus a splittable item wrapping a nested column.
fn column_with_split(heights: &[f32], inner: &[f32], handle: u64) -> FlexContainer {
    let mut split = nested(handle, column(inner));
    split.width = SizeValue::Length(50.0);
    let mut container = column(heights);
    container.items.push(split);
    container
}

fn consumed(fragments: &[FragmentOutcome]) -> Vec<f32> {
    fragments.iter().map(|outcome| outcome.consumed_extent).collect()
}

#[test]
/// # Panics
/// Panics if `break-before: always` does not start a new fragment.
fn break_before_starts_new_fragment() -> AnyResult<()> {
    let mut container = column(&[40.0, 40.0, 40.0]);
    if let Some(second) = container.items.get_mut(1) {
        second.break_before = BreakBetween::Always;
    }
    let fragments = paginate(&container, 200.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![2, 3]]);
    assert!(approx(&consumed(&fragments), &[40.0, 80.0]));
    Ok(())
}

#[test]
/// # Panics
/// Panics if `break-after: always` does not end the fragment behind its item.
fn break_after_ends_fragment() -> AnyResult<()> {
    let mut container = column(&[40.0, 40.0, 40.0]);
    if let Some(first) = container.items.first_mut() {
        first.break_after = BreakBetween::Always;
    }
    let fragments = paginate(&container, 200.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![2, 3]]);
    let second = fragments.get(1);
    assert!(second.is_some_and(|outcome| approx(&ys(outcome), &[0.0, 40.0])));
    Ok(())
}

#[test]
/// # Panics
/// Panics if a forced break before a split item fires again while the item
/// continues, leaving an empty fragment.
fn forced_break_applies_once_to_split_item() -> AnyResult<()> {
    let mut container = column_with_split(&[20.0], &[40.0, 40.0], 2);
    if let Some(split) = container.items.last_mut() {
        split.break_before = BreakBetween::Always;
    }
    let fragments = paginate(&container, 60.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![2], vec![2]]);
    let slices: Vec<ItemSlice> = fragments
        .iter()
        .flat_map(|outcome| outcome.placed.iter().map(|placed| placed.slice))
        .collect();
    assert_eq!(slices, vec![ItemSlice::Whole, ItemSlice::First, ItemSlice::Last]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if the item behind a split item with `break-after: always` shares
/// the split item's last fragment.
fn break_after_split_item_waits_for_last_slice() -> AnyResult<()> {
    let mut split = nested(1, column(&[40.0, 40.0]));
    split.width = SizeValue::Length(50.0);
    split.break_after = BreakBetween::Always;
    let mut container = column(&[]);
    container.items.push(split);
    container.items.push(sized_item(2, 50.0, 10.0));

    let fragments = paginate(&container, 60.0)?;
    let per_fragment: Vec<Vec<u64>> = fragments.iter().map(handles).collect();
    assert_eq!(per_fragment, vec![vec![1], vec![1], vec![2]]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a continuing slice of an item taller than its nested content
/// stops where the content stops instead of at the fragment end.
fn tall_split_item_fills_each_fragment() -> AnyResult<()> {
    let mut container = column_with_split(&[], &[60.0, 60.0], 1);
    if let Some(split) = container.items.first_mut() {
        split.height = SizeValue::Length(300.0);
    }
    let fragments = paginate(&container, 100.0)?;
    assert!(approx(&consumed(&fragments), &[100.0, 100.0, 100.0]));
    let slices: Vec<ItemSlice> = fragments
        .iter()
        .flat_map(|outcome| outcome.placed.iter().map(|placed| placed.slice))
        .collect();
    assert_eq!(slices, vec![ItemSlice::First, ItemSlice::Middle, ItemSlice::Last]);
    let children: Vec<usize> = fragments
        .iter()
        .flat_map(|outcome| &outcome.placed)
        .map(|placed| placed.children.len())
        .collect();
    assert_eq!(children, vec![1, 1, 0]);
    Ok(())
}
