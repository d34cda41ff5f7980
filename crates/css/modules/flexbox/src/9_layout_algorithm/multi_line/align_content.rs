//! Align-content packing logic for flex lines.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-align>

use css_box::LayoutUnit;
use log::debug;

use super::super::distribution::gaps_total;
use crate::chapter8::{AlignContent, align_content_distribution};

/// Final cross sizes and offsets of the lines, plus the container's used cross size.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePacking {
    pub line_cross: Vec<f32>,
    pub offsets: Vec<f32>,
    pub container_cross: f32,
}

/// Pack lines along the cross axis according to `align-content`.
///
/// Single-line containers ignore `align-content`: their one line already spans
/// a definite container cross size. Multi-line containers with a definite cross
/// size distribute the leftover space; `stretch` grows every line equally when
/// the leftover is positive.
pub fn pack_lines(
    align: AlignContent,
    natural: &[f32],
    container_cross: Option<f32>,
    cross_gap: f32,
    single_line: bool,
    snap: bool,
) -> LinePacking {
    let quantize = |value: f32| {
        if snap {
            LayoutUnit::snap(value)
        } else {
            value
        }
    };
    let mut line_cross: Vec<f32> = natural.to_vec();
    let line_count = line_cross.len();
    let gaps = gaps_total(line_count, cross_gap);
    let content_total: f32 = line_cross.iter().sum::<f32>() + gaps;

    let (leading, between) = match container_cross {
        Some(available) if !single_line && line_count > 0 => {
            let mut free = available - content_total;
            if matches!(align, AlignContent::Stretch) && free > 0.0 {
                let add_each = free / line_count as f32;
                debug!(
                    target: "css::flexbox::lines",
                    "[ALIGN-CONTENT] stretch: remaining={free:.3} add_each={add_each:.3}"
                );
                for value in &mut line_cross {
                    *value += add_each;
                }
                free = 0.0;
            }
            let dist = align_content_distribution(align, free, line_count);
            (dist.leading, dist.between)
        }
        _ => (0.0, 0.0),
    };
    debug!(
        target: "css::flexbox::lines",
        "[ALIGN-CONTENT] mode={align:?} container_cross={container_cross:?} lines_total={content_total:.3} line_count={line_count}"
    );

    let mut offsets = Vec::with_capacity(line_count);
    let mut cursor = quantize(leading);
    for size in &line_cross {
        offsets.push(cursor);
        cursor = quantize(cursor + size + cross_gap + between);
    }
    LinePacking {
        line_cross,
        offsets,
        container_cross: container_cross.unwrap_or(content_total),
    }
}
