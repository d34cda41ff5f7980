//! Slicing a container's natural layout into block-axis fragments.
//!
//! Row containers fragment between lines: a line is never split. Column
//! containers fragment between the items of each line, and an item whose
//! content is itself a flex container is split by fragmenting that container.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#pagination>
//! Spec: <https://www.w3.org/TR/css-break-3/#breaking-rules>

use anyhow::{Result as AnyResult, bail};
use css_box::sanitize_length;
use css_sizing::AvailableSize;
use log::{debug, warn};

use super::state::{FragmentPhase, FragmentState, LineCursor, PartialItem, Session};
use super::{BreakBetween, BreakInside, ItemSlice};
use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;
use crate::chapter7::LogicalEdges;
use crate::chapter9::{Frame, LaidOutItem, LaidOutLine, LogicalLayout, ResolvedItemBox, place_box};

/// Result of one fragment request.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentOutcome {
    /// Boxes placed in this fragment, positioned relative to the fragment's
    /// top-left corner.
    pub placed: Vec<ResolvedItemBox>,
    /// Block extent used by this fragment.
    pub consumed_extent: f32,
    pub is_complete: bool,
    /// Something larger than the fragment had to be placed to make progress.
    pub overflowed: bool,
    /// Token for the next request.
    pub state: FragmentState,
}

/// Layout services the fragmentation walk relies on.
pub trait FragmentHost {
    /// Slack allowed when deciding whether something fits.
    fn fit_tolerance(&self) -> f32;

    /// # Errors
    /// Propagates layout failures.
    fn natural_layout(
        &self,
        container: &FlexContainer,
        space: (AvailableSize, AvailableSize),
        depth: usize,
    ) -> AnyResult<LogicalLayout>;

    /// Lay out the flex container nested in an unsplit item, if any.
    ///
    /// # Errors
    /// Propagates layout failures.
    fn place_children(
        &self,
        item: &FlexItem,
        placed: &mut ResolvedItemBox,
        depth: usize,
    ) -> AnyResult<()>;

    /// Produce the next fragment of the flex container nested in a split item.
    ///
    /// # Errors
    /// Propagates layout failures.
    fn fragment_nested(
        &self,
        nested: &FlexContainer,
        state: FragmentState,
        extent: f32,
        inline_size: f32,
        depth: usize,
    ) -> AnyResult<FragmentOutcome>;
}

/// What one fragment of a session produced.
struct Step {
    placed: Vec<ResolvedItemBox>,
    consumed: f32,
    complete: bool,
    overflowed: bool,
}

/// An item placed in a column fragment, waiting for the fragment's extent to
/// be known before it is mapped to physical coordinates.
struct Pending {
    /// Main offset is fragment-local.
    item: LaidOutItem,
    line_cross_offset: f32,
    slice: ItemSlice,
    /// Boxes of a split nested container; `None` lays the item out whole.
    children: Option<Vec<ResolvedItemBox>>,
}

/// Produce the next fragment of `container` with `extent` of block space.
///
/// `space` is the available main/cross space for the natural layout, which is
/// computed on the first request and reused after that.
///
/// # Errors
/// Fails when `state` belongs to a different container or layout fails.
pub fn fragment_container<H: FragmentHost + ?Sized>(
    host: &H,
    container: &FlexContainer,
    mut state: FragmentState,
    extent: f32,
    space: (AvailableSize, AvailableSize),
    depth: usize,
) -> AnyResult<FragmentOutcome> {
    let extent = sanitize_length(extent);
    if state.is_complete() {
        debug!(target: "css::flexbox::fragmentation", "request after completion: nothing to place");
        return Ok(FragmentOutcome {
            placed: Vec::new(),
            consumed_extent: 0.0,
            is_complete: true,
            overflowed: false,
            state,
        });
    }
    if matches!(state.phase, FragmentPhase::NotStarted) {
        let layout = host.natural_layout(container, space, depth)?;
        state.session = Some(Box::new(Session::new(layout, container.items.len())));
        state.phase = FragmentPhase::InProgress;
    }
    let session = state.session_mut(container.items.len())?;
    let step = if session.layout.axes.main_is_inline {
        fragment_rows(host, container, session, extent, depth)?
    } else {
        fragment_columns(host, container, session, extent, depth)?
    };

    state.consumed += step.consumed;
    state.fragments += 1;
    if step.complete {
        state.phase = FragmentPhase::Complete;
        state.session = None;
    }
    debug!(
        target: "css::flexbox::fragmentation",
        "fragment #{} extent={extent:.3} consumed={:.3} placed={} complete={} overflowed={}",
        state.fragments,
        step.consumed,
        step.placed.len(),
        step.complete,
        step.overflowed
    );
    Ok(FragmentOutcome {
        placed: step.placed,
        consumed_extent: step.consumed,
        is_complete: step.complete,
        overflowed: step.overflowed,
        state,
    })
}

fn wants_break(container: &FlexContainer, item: &LaidOutItem, after: bool) -> bool {
    container.items.get(item.index).is_some_and(|source| {
        let value = if after {
            source.break_after
        } else {
            source.break_before
        };
        matches!(value, BreakBetween::Always)
    })
}

/// Forced break between line `idx - 1` and line `idx`.
fn forced_break_before_line(container: &FlexContainer, lines: &[LaidOutLine], idx: usize) -> bool {
    let after_previous = idx
        .checked_sub(1)
        .and_then(|prev| lines.get(prev))
        .is_some_and(|line| line.items.iter().any(|item| wants_break(container, item, true)));
    let before_current = lines
        .get(idx)
        .is_some_and(|line| line.items.iter().any(|item| wants_break(container, item, false)));
    after_previous || before_current
}

/// Forced break between item `idx - 1` and item `idx` of a line.
fn forced_break_before_item(container: &FlexContainer, line: &LaidOutLine, idx: usize) -> bool {
    let after_previous = idx
        .checked_sub(1)
        .and_then(|prev| line.items.get(prev))
        .is_some_and(|item| wants_break(container, item, true));
    let before_current = line
        .items
        .get(idx)
        .is_some_and(|item| wants_break(container, item, false));
    after_previous || before_current
}

/// Place whole lines while they fit. The block axis is the cross axis.
fn fragment_rows<H: FragmentHost + ?Sized>(
    host: &H,
    container: &FlexContainer,
    session: &mut Session,
    extent: f32,
    depth: usize,
) -> AnyResult<Step> {
    let tolerance = host.fit_tolerance();
    let layout = &session.layout;
    let total = layout.lines.len();
    let first = session.next_line;
    let origin = if first == 0 {
        0.0
    } else {
        layout.lines.get(first).map_or(0.0, |line| line.cross_offset)
    };

    let mut end_line = first;
    let mut consumed = 0.0_f32;
    let mut overflowed = false;
    for (idx, line) in layout.lines.iter().enumerate().skip(first) {
        if idx > first && forced_break_before_line(container, &layout.lines, idx) {
            debug!(target: "css::flexbox::fragmentation", "forced break before line {idx}");
            break;
        }
        let end = line.cross_offset + line.cross_size - origin;
        if end > extent + tolerance {
            if idx > first {
                break;
            }
            warn!(
                target: "css::flexbox::fragmentation",
                "line {idx} needs {end:.3} but the fragment has {extent:.3}; placing it anyway"
            );
            overflowed = true;
        }
        consumed = end;
        end_line = idx + 1;
    }

    let frame = Frame {
        main_start: 0.0,
        main_extent: layout.main_size,
        cross_start: origin,
        cross_extent: consumed,
    };
    let mut placed = Vec::new();
    for line in layout.lines.get(first..end_line).unwrap_or(&[]) {
        for item in &line.items {
            let mut resolved = place_box(layout.axes, item, line.cross_offset, frame, ItemSlice::Whole);
            if let Some(source) = container.items.get(item.index) {
                host.place_children(source, &mut resolved, depth)?;
            }
            placed.push(resolved);
        }
    }
    session.next_line = end_line;
    Ok(Step {
        placed,
        consumed,
        complete: end_line >= total,
        overflowed,
    })
}

/// Place items of every line while they fit. The block axis is the main axis,
/// and each line keeps its own position.
fn fragment_columns<H: FragmentHost + ?Sized>(
    host: &H,
    container: &FlexContainer,
    session: &mut Session,
    extent: f32,
    depth: usize,
) -> AnyResult<Step> {
    let Session {
        layout, cursors, ..
    } = session;
    let mut pending = Vec::new();
    let mut consumed = 0.0_f32;
    let mut overflowed = false;
    for (line, cursor) in layout.lines.iter().zip(cursors.iter_mut()) {
        let (end, line_overflowed) =
            walk_line(host, container, line, cursor, extent, depth, &mut pending)?;
        consumed = consumed.max(end);
        overflowed |= line_overflowed;
    }
    let complete = layout
        .lines
        .iter()
        .zip(cursors.iter())
        .all(|(line, cursor)| cursor.partial.is_none() && cursor.next_item >= line.items.len());

    let frame = Frame {
        main_start: 0.0,
        main_extent: consumed,
        cross_start: 0.0,
        cross_extent: layout.cross_size,
    };
    let mut placed = Vec::with_capacity(pending.len());
    for entry in pending {
        let mut resolved = place_box(
            layout.axes,
            &entry.item,
            entry.line_cross_offset,
            frame,
            entry.slice,
        );
        match entry.children {
            Some(children) => resolved.children = children,
            None => {
                if let Some(source) = container.items.get(entry.item.index) {
                    host.place_children(source, &mut resolved, depth)?;
                }
            }
        }
        placed.push(resolved);
    }
    Ok(Step {
        placed,
        consumed,
        complete,
        overflowed,
    })
}

/// Advance one column line through the current fragment. Returns the
/// fragment-local end of the placed content and whether anything overflowed.
fn walk_line<H: FragmentHost + ?Sized>(
    host: &H,
    container: &FlexContainer,
    line: &LaidOutLine,
    cursor: &mut LineCursor,
    extent: f32,
    depth: usize,
    pending: &mut Vec<Pending>,
) -> AnyResult<(f32, bool)> {
    let tolerance = host.fit_tolerance();
    let mut end = 0.0_f32;
    let mut overflowed = false;
    let mut placed_any = false;

    while let Some(item) = line.items.get(cursor.next_item).copied() {
        let Some(source) = container.items.get(item.index) else {
            bail!("laid-out item {} has no source item", item.index);
        };
        let continuing = cursor.partial.is_some();
        if !continuing && placed_any && forced_break_before_item(container, line, cursor.next_item)
        {
            debug!(target: "css::flexbox::fragmentation", "forced break before {:?}", item.handle);
            break;
        }
        let local_start = item.main_offset - cursor.shift;
        let local_end = local_start + item.outer_main();
        if !continuing && local_end <= extent + tolerance {
            pending.push(Pending {
                item: LaidOutItem {
                    main_offset: local_start,
                    ..item
                },
                line_cross_offset: line.cross_offset,
                slice: ItemSlice::Whole,
                children: None,
            });
            end = end.max(local_end);
            placed_any = true;
            cursor.next_item += 1;
            continue;
        }

        let splittable = source
            .nested()
            .filter(|_| matches!(source.break_inside, BreakInside::Auto));
        let Some(nested) = splittable else {
            if placed_any {
                break;
            }
            warn!(
                target: "css::flexbox::fragmentation",
                "unbreakable {:?} needs {local_end:.3} but the fragment has {extent:.3}; placing it anyway",
                item.handle
            );
            pending.push(Pending {
                item: LaidOutItem {
                    main_offset: local_start,
                    ..item
                },
                line_cross_offset: line.cross_offset,
                slice: ItemSlice::Whole,
                children: None,
            });
            end = end.max(local_end);
            overflowed = true;
            placed_any = true;
            cursor.next_item += 1;
            continue;
        };

        let (partial, content_start) = match cursor.partial.take() {
            Some(partial) => (partial, 0.0),
            None => {
                let content_start = local_start + item.margin.main_start;
                if placed_any && content_start >= extent - tolerance {
                    break;
                }
                let fresh = PartialItem {
                    nested: FragmentState::new(),
                    done: 0.0,
                };
                (fresh, content_start)
            }
        };
        let first_slice = partial.nested.fragment_count() == 0;
        let available = (extent - content_start).max(0.0);
        let outcome = host.fragment_nested(nested, partial.nested, available, item.cross_size, depth)?;
        overflowed |= outcome.overflowed;

        // The item may be taller than its nested content; the rest is blank.
        let remaining = (item.main_size - partial.done).max(outcome.consumed_extent);
        let (content_len, done) = if !outcome.is_complete {
            // A continuing slice runs to the fragment end.
            (available.min(remaining).max(outcome.consumed_extent), false)
        } else if remaining <= available + tolerance || available <= tolerance {
            (remaining, true)
        } else {
            (available, false)
        };
        let slice = match (first_slice, done) {
            (true, true) => ItemSlice::Whole,
            (true, false) => ItemSlice::First,
            (false, false) => ItemSlice::Middle,
            (false, true) => ItemSlice::Last,
        };
        let margin = LogicalEdges {
            main_start: if first_slice { item.margin.main_start } else { 0.0 },
            main_end: if done { item.margin.main_end } else { 0.0 },
            ..item.margin
        };
        let slice_item = LaidOutItem {
            main_offset: content_start - margin.main_start,
            main_size: content_len,
            margin,
            ..item
        };
        let slice_end = slice_item.main_offset + slice_item.outer_main();
        if slice_end > extent + tolerance {
            warn!(
                target: "css::flexbox::fragmentation",
                "slice of {:?} ends at {slice_end:.3} past the fragment extent {extent:.3}",
                item.handle
            );
            overflowed = true;
        }
        debug!(
            target: "css::flexbox::fragmentation",
            "split {:?}: {slice:?} content={content_len:.3}",
            item.handle
        );
        pending.push(Pending {
            item: slice_item,
            line_cross_offset: line.cross_offset,
            slice,
            children: Some(outcome.placed),
        });
        end = end.max(slice_end);
        placed_any = true;

        if done {
            cursor.shift = item.main_offset + item.outer_main() - slice_end;
            cursor.next_item += 1;
            continue;
        }
        cursor.partial = Some(PartialItem {
            nested: outcome.state,
            done: partial.done + content_len,
        });
        break;
    }

    if cursor.partial.is_none()
        && let Some(next) = line.items.get(cursor.next_item)
    {
        cursor.shift = next.main_offset;
    }
    Ok((end, overflowed))
}
