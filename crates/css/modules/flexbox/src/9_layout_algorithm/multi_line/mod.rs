//! Multi-line flex layout: line breaking and line packing.

pub mod align_content;
pub mod line_breaking;

pub use align_content::pack_lines;
pub use line_breaking::break_into_lines;
