//! CSS Box Model Module Level 3: Box geometry primitives used by layout.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Padding, border and painting live with the caller; this crate only carries
//! the geometry that crosses the layout boundary (rectangles, edge sets,
//! margins) plus the normalisation applied to raw style inputs.

pub mod layout_unit;
pub use layout_unit::LayoutUnit;

use log::debug;
use serde::{Deserialize, Serialize};

/// A point in a container's local coordinate space, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned rectangle in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rectangle by the given edge widths. Sizes never go negative.
    #[inline]
    #[must_use]
    pub fn deflate(&self, edges: &Edges<f32>) -> Self {
        Self {
            x: self.x + edges.left,
            y: self.y + edges.top,
            width: (self.width - edges.left - edges.right).max(0.0),
            height: (self.height - edges.top - edges.bottom).max(0.0),
        }
    }
}

/// Four physical edges (margin, padding or border widths).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    /// Same value on all four edges.
    #[inline]
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[inline]
    pub fn map<U>(self, mut func: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            top: func(self.top),
            right: func(self.right),
            bottom: func(self.bottom),
            left: func(self.left),
        }
    }
}

/// A margin value as it arrives from the cascade.
///
/// Spec: <https://www.w3.org/TR/css-box-3/#margins>
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MarginValue {
    /// Fixed margin in px (may be negative).
    Length(f32),
    /// `auto`: absorbs free space during flex alignment.
    Auto,
}

impl Default for MarginValue {
    fn default() -> Self {
        Self::Length(0.0)
    }
}

impl MarginValue {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The fixed part of the margin; `auto` contributes nothing until resolved.
    #[inline]
    pub fn fixed_or_zero(self) -> f32 {
        match self {
            Self::Length(px) if px.is_finite() => px,
            Self::Length(_) | Self::Auto => 0.0,
        }
    }
}

/// Normalise a size-like input: NaN, infinities and negatives become 0.
///
/// Layout never fails on a bad length; it clamps to the nearest valid value the
/// way CSS treats invalid used values.
#[inline]
pub fn sanitize_length(value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        debug!(target: "css::box", "normalising invalid length {value} to 0");
        0.0
    }
}

/// Normalise a flex factor (`flex-grow`/`flex-shrink`): NaN, infinities and
/// negatives become 0.
#[inline]
pub fn sanitize_factor(value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        debug!(target: "css::box", "normalising invalid flex factor {value} to 0");
        0.0
    }
}
