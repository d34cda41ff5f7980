//! Fragmenting Flex Layout
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#pagination>
//!
//! A paginated layout is a session of fragment requests. The caller owns a
//! [`FragmentState`] and passes it back with every request; each request
//! places what fits into the given block extent and returns the next state.

pub mod controller;
pub mod state;

use serde::{Deserialize, Serialize};

pub use controller::{FragmentHost, FragmentOutcome, fragment_container};
pub use state::{FragmentPhase, FragmentState};

/// `break-before` / `break-after`.
///
/// Spec: <https://www.w3.org/TR/css-break-3/#break-between>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BreakBetween {
    #[default]
    Auto,
    /// Force a fragment break.
    Always,
}

/// `break-inside`.
///
/// Spec: <https://www.w3.org/TR/css-break-3/#break-within>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BreakInside {
    #[default]
    Auto,
    /// Keep the item in one piece.
    Avoid,
}

/// Which part of an item a box represents.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ItemSlice {
    /// The item is not split.
    #[default]
    Whole,
    First,
    Middle,
    Last,
}

#[cfg(test)]
mod tests;
