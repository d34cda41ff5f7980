//! Engine configuration.
//!
//! Settings can be loaded from environment variables or constructed
//! programmatically.

use log::debug;
use std::env;

const SNAP_VAR: &str = "FOLIO_FLEX_SNAP";
const FIT_TOLERANCE_VAR: &str = "FOLIO_FLEX_FIT_TOLERANCE";
const MAX_DEPTH_VAR: &str = "FOLIO_FLEX_MAX_DEPTH";

/// Tunables of the flex layout engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Quantize offsets to the 1/64 px layout unit.
    pub snap_to_layout_unit: bool,
    /// Slack in px when deciding whether a line or item fits in a fragment.
    pub fit_tolerance: f32,
    /// Deepest allowed nesting of flex containers inside flex items.
    pub max_nesting_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snap_to_layout_unit: true,
            fit_tolerance: 0.01,
            max_nesting_depth: 64,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `FOLIO_FLEX_SNAP`: Set to "0" to keep unquantized offsets (default: snapping on)
    /// - `FOLIO_FLEX_FIT_TOLERANCE`: Fit slack in px (default: 0.01)
    /// - `FOLIO_FLEX_MAX_DEPTH`: Maximum nesting depth (default: 64)
    ///
    /// Unparseable or out-of-range values fall back to the defaults.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Build a configuration from `lookup`, which maps a variable name to its
    /// raw value. Same rules as [`LayoutConfig::from_env`].
    #[must_use]
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        let snap_to_layout_unit = lookup(SNAP_VAR)
            .map_or(defaults.snap_to_layout_unit, |val| val.trim() != "0");
        let fit_tolerance = lookup(FIT_TOLERANCE_VAR)
            .and_then(|val| val.trim().parse::<f32>().ok())
            .filter(|tolerance| tolerance.is_finite() && *tolerance >= 0.0)
            .unwrap_or(defaults.fit_tolerance);
        let max_nesting_depth = lookup(MAX_DEPTH_VAR)
            .and_then(|val| val.trim().parse::<usize>().ok())
            .filter(|depth| *depth > 0)
            .unwrap_or(defaults.max_nesting_depth);
        let config = Self {
            snap_to_layout_unit,
            fit_tolerance,
            max_nesting_depth,
        };
        if config != defaults {
            debug!(target: "css::flexbox::engine", "layout config overridden from environment: {config:?}");
        }
        config
    }

    #[inline]
    #[must_use]
    pub const fn with_snapping(mut self, snap: bool) -> Self {
        self.snap_to_layout_unit = snap;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
