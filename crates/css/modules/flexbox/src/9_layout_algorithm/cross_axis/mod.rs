//! Cross-axis sizing, baseline participation, and alignment within a line.

pub mod alignment;
pub mod baseline;
pub mod sizing;

pub use alignment::place_in_line;
pub use baseline::{baseline_offset, line_baseline_groups};
pub use sizing::{CrossMeasure, hypothetical_cross, line_cross_size};
