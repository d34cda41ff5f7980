//! Auto margin resolution for flex items.
//!
//! Implements CSS Flexbox auto margin distribution along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use super::super::FlexChild;

/// Outcome of main-axis auto margin resolution for one line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MainAutoMargins {
    /// Size given to each `auto` main margin.
    pub each: f32,
    /// Free space still left for `justify-content`.
    pub leftover: f32,
}

impl MainAutoMargins {
    /// Whether auto margins took the free space (so `justify-content` is moot).
    #[inline]
    pub fn absorbed(&self) -> bool {
        self.each > 0.0
    }
}

/// Distribute a line's positive free space equally among its `auto` main
/// margins. Non-positive free space leaves auto margins at zero.
pub fn resolve_main_auto_margins(line: &[FlexChild], free_space: f32) -> MainAutoMargins {
    let auto_slots = line.iter().fold(0_usize, |acc, child| {
        acc.saturating_add(usize::from(child.auto_margin.main_start))
            .saturating_add(usize::from(child.auto_margin.main_end))
    });
    if auto_slots == 0 || free_space <= 0.0 {
        return MainAutoMargins {
            each: 0.0,
            leftover: free_space,
        };
    }
    MainAutoMargins {
        each: free_space / auto_slots as f32,
        leftover: 0.0,
    }
}
