//! Flex grow and shrink distribution.
//!
//! Implements "Resolving Flexible Lengths" as an explicit loop over the line's
//! items with a frozen set: each pass distributes the remaining free space among
//! unfrozen items, clamps them to their min/max, and freezes the violators.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use anyhow::{Result as AnyResult, bail};
use css_sizing::clamp_min_wins;
use log::{debug, error};

use super::super::FlexChild;
use super::gaps_total;

/// Differences smaller than this are treated as zero free space / no violation.
const EPSILON: f32 = 1e-4;

/// Free space left once frozen items take their target size and unfrozen items
/// their flex base size.
fn remaining_free_space(
    line: &[FlexChild],
    frozen: &[bool],
    targets: &[f32],
    available: f32,
    gaps: f32,
) -> f32 {
    let used: f32 = line
        .iter()
        .zip(frozen)
        .zip(targets)
        .map(|((child, &is_frozen), &target)| {
            let inner = if is_frozen { target } else { child.base_size };
            inner + child.margin.main_sum()
        })
        .sum();
    available - used - gaps
}

/// Resolve the used main sizes of one line's items.
///
/// With an indefinite container main size every item keeps its hypothetical
/// main size. The loop freezes at least one item per pass, so it runs at most
/// once per item; running longer is an internal invariant failure.
///
/// # Errors
/// Returns an error if the freeze loop exceeds its iteration bound.
pub fn resolve_flexible_lengths(
    line: &[FlexChild],
    container_main: Option<f32>,
    main_gap: f32,
) -> AnyResult<Vec<f32>> {
    let mut targets: Vec<f32> = line.iter().map(|child| child.hypothetical_main).collect();
    let Some(available) = container_main else {
        debug!(target: "css::flexbox::flex", "indefinite main size: keeping hypothetical sizes");
        return Ok(targets);
    };
    let count = line.len();
    let gaps = gaps_total(count, main_gap);
    let outer_hypothetical: f32 = line
        .iter()
        .map(|child| child.hypothetical_main + child.margin.main_sum())
        .sum::<f32>()
        + gaps;
    let growing = outer_hypothetical < available;
    let factor = |child: &FlexChild| {
        if growing {
            child.flex_grow
        } else {
            child.flex_shrink
        }
    };

    // Size inflexible items.
    let mut frozen: Vec<bool> = line
        .iter()
        .map(|child| {
            factor(child) <= 0.0
                || (growing && child.base_size > child.hypothetical_main)
                || (!growing && child.base_size < child.hypothetical_main)
        })
        .collect();
    let initial_free = remaining_free_space(line, &frozen, &targets, available, gaps);
    debug!(
        target: "css::flexbox::flex",
        "[FLEX-LINE] items={count} available={available:.3} outer_hypothetical={outer_hypothetical:.3} growing={growing} initial_free={initial_free:.3}"
    );

    let bound = count + 1;
    let mut iterations = 0_usize;
    while frozen.iter().any(|is_frozen| !is_frozen) {
        iterations += 1;
        if iterations > bound {
            error!(
                target: "css::flexbox::flex",
                "freeze loop did not converge: {iterations} passes for {count} items"
            );
            bail!("flexible length resolution exceeded {bound} passes for {count} items");
        }

        let mut free = remaining_free_space(line, &frozen, &targets, available, gaps);
        let factor_sum: f32 = line
            .iter()
            .zip(&frozen)
            .filter(|&(_, &is_frozen)| !is_frozen)
            .map(|(child, _)| factor(child))
            .sum();
        if factor_sum < 1.0 {
            let scaled = initial_free * factor_sum;
            if scaled.abs() < free.abs() {
                free = scaled;
            }
        }

        let scaled_shrink_sum: f32 = line
            .iter()
            .zip(&frozen)
            .filter(|&(_, &is_frozen)| !is_frozen)
            .map(|(child, _)| child.flex_shrink * child.base_size)
            .sum();
        for ((child, target), &is_frozen) in line.iter().zip(targets.iter_mut()).zip(&frozen) {
            if is_frozen {
                continue;
            }
            *target = if free.abs() <= EPSILON {
                child.base_size
            } else if growing {
                child.base_size + free * (child.flex_grow / factor_sum)
            } else if scaled_shrink_sum > 0.0 {
                let ratio = child.flex_shrink * child.base_size / scaled_shrink_sum;
                child.base_size + free * ratio
            } else {
                child.base_size
            };
        }

        // Clamp, then freeze the items that violated in the dominant direction.
        let mut violations = vec![0.0_f32; count];
        let mut total_violation = 0.0_f32;
        for (((child, target), violation), &is_frozen) in line
            .iter()
            .zip(targets.iter_mut())
            .zip(violations.iter_mut())
            .zip(&frozen)
        {
            if is_frozen {
                continue;
            }
            let clamped = clamp_min_wins(*target, child.min_main, child.max_main).max(0.0);
            *violation = clamped - *target;
            total_violation += *violation;
            *target = clamped;
        }
        for (is_frozen, &violation) in frozen.iter_mut().zip(&violations) {
            if *is_frozen {
                continue;
            }
            let freeze = if total_violation.abs() <= EPSILON {
                true
            } else if total_violation > 0.0 {
                violation > 0.0
            } else {
                violation < 0.0
            };
            if freeze {
                *is_frozen = true;
            }
        }
        debug!(
            target: "css::flexbox::flex",
            "[FLEX-LINE] pass={iterations} free={free:.3} total_violation={total_violation:.3}"
        );
    }
    Ok(targets)
}
