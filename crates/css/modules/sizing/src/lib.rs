//! CSS Sizing Module - sizing vocabulary shared by every layout mode
//!
//! [Spec: CSS Sizing Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! ## Architecture
//!
//! Layout modes never read raw style here. They receive already-resolved values
//! and use this crate to answer three questions:
//!
//! ```text
//! 1. How much room is there?        -> AvailableSize
//! 2. What did the author ask for?   -> SizeValue (auto / length / percentage)
//! 3. What does the content want?    -> ContentSizes (min-content / max-content / baselines)
//!   ↓
//! clamp_min_wins(): clamp a used size into [min, max], min winning over max
//! ```
//!
//! ## Spec Coverage Status
//!
//! - [Production] Available space (definite, indefinite, min/max-content constraints)
//! - [Production] Percentage resolution against definite and indefinite references
//! - [Production] Min/max constraints (min wins over max)
//! - [Production] Intrinsic sizes with optional baselines
//! - [TODO] Aspect ratio preservation

use css_box::sanitize_length;
use log::debug;
use serde::{Deserialize, Serialize};

//=============================================================================
// Dimensions and available space
//=============================================================================

/// Dimension being sized (width or height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The other physical dimension.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// Space available to a box in one dimension.
///
/// [Spec: CSS Sizing Level 3 §2.1 Available Space]
/// <https://www.w3.org/TR/css-sizing-3/#available>
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AvailableSize {
    /// A definite amount of space in px.
    Definite(f32),
    /// No definite reference (e.g. `height: auto` on the container).
    Indefinite,
    /// Laying out under a min-content constraint.
    MinContent,
    /// Laying out under a max-content constraint.
    MaxContent,
}

impl AvailableSize {
    /// The definite amount of space, sanitised, if there is one.
    #[inline]
    pub fn definite(self) -> Option<f32> {
        match self {
            Self::Definite(px) => Some(sanitize_length(px)),
            Self::Indefinite | Self::MinContent | Self::MaxContent => None,
        }
    }

    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }

    /// The definite amount of space, or `fallback` when there is none.
    #[inline]
    pub fn resolve(self, fallback: f32) -> f32 {
        self.definite().unwrap_or(fallback)
    }
}

//=============================================================================
// Author-specified sizes
//=============================================================================

/// A size-like property value (`width`, `min-height`, `flex-basis: <length>`, ...).
///
/// Percentages are stored as fractions: `Percent(0.5)` is `50%`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SizeValue {
    #[default]
    Auto,
    Length(f32),
    Percent(f32),
}

impl SizeValue {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Resolve against a reference size.
    ///
    /// Returns `None` for `auto`, and for a percentage when the reference is
    /// indefinite. Negative and non-finite results are normalised to 0.
    ///
    /// [Spec: CSS Values Level 4 §5.1.1 Percentages]
    /// <https://www.w3.org/TR/css-values-4/#percentages>
    #[inline]
    pub fn resolve(self, reference: Option<f32>) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Length(px) => Some(sanitize_length(px)),
            Self::Percent(fraction) => {
                let resolved = reference.map(|basis| sanitize_length(basis * fraction));
                if resolved.is_none() {
                    debug!(
                        target: "css::sizing",
                        "percentage {fraction} against an indefinite reference behaves as auto"
                    );
                }
                resolved
            }
        }
    }

    /// Resolve a `min-*` value: anything unresolvable becomes 0.
    #[inline]
    pub fn resolve_min(self, reference: Option<f32>) -> f32 {
        self.resolve(reference).unwrap_or(0.0)
    }

    /// Resolve a `max-*` value: anything unresolvable becomes `none` (infinity).
    #[inline]
    pub fn resolve_max(self, reference: Option<f32>) -> f32 {
        self.resolve(reference).unwrap_or(f32::INFINITY)
    }
}

//=============================================================================
// Constraints
//=============================================================================

/// Clamp into `[min, max]` where `max` may be infinite; `min` wins on conflict.
///
/// [Spec: CSS Sizing Level 3 §4.5 Min/Max Constraints]
#[inline]
pub fn clamp_min_wins(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

//=============================================================================
// Intrinsic Sizing
//=============================================================================

/// First and last baseline offsets, measured from the box's cross-start edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baselines {
    pub first: f32,
    pub last: f32,
}

impl Baselines {
    /// A box with a single baseline (first == last).
    #[inline]
    pub const fn single(offset: f32) -> Self {
        Self {
            first: offset,
            last: offset,
        }
    }
}

/// Intrinsic sizes of a box in one dimension.
///
/// [Spec: CSS Sizing Level 3 §4 Intrinsic Size Determination]
/// <https://www.w3.org/TR/css-sizing-3/#intrinsic-sizes>
///
/// - **Min-content**: the smallest size the content can take without overflow.
/// - **Max-content**: the size the content would take given infinite space.
/// - **Baseline**: alignment baselines, when the content has any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentSizes {
    pub min_content: f32,
    pub max_content: f32,
    pub baseline: Option<Baselines>,
}

impl ContentSizes {
    /// Empty content: zero in every respect.
    pub const fn zero() -> Self {
        Self {
            min_content: 0.0,
            max_content: 0.0,
            baseline: None,
        }
    }

    /// Content whose size does not depend on available space (replaced
    /// elements, fixed-size widgets).
    pub const fn fixed(size: f32) -> Self {
        Self {
            min_content: size,
            max_content: size,
            baseline: None,
        }
    }

    #[must_use]
    pub const fn with_baseline(mut self, baseline: Baselines) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Normalise a measurement coming from outside: lengths are made valid and
    /// max-content is never smaller than min-content.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let min_content = sanitize_length(self.min_content);
        let max_content = sanitize_length(self.max_content).max(min_content);
        let baseline = self.baseline.map(|metrics| Baselines {
            first: sanitize_length(metrics.first),
            last: sanitize_length(metrics.last),
        });
        Self {
            min_content,
            max_content,
            baseline,
        }
    }
}

impl Default for ContentSizes {
    fn default() -> Self {
        Self::zero()
    }
}
