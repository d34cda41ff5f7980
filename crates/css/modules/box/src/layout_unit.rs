//! Sub-pixel layout coordinates using fixed-point arithmetic.
//!
//! Flex offsets are accumulated in floating point and then snapped to 1/64px
//! so that repeated layout passes produce identical coordinates and adjacent
//! items never drift apart by accumulated rounding.

/// Fixed-point coordinate in 1/64px units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct LayoutUnit(i32);

impl LayoutUnit {
    /// Number of fractional bits (6 bits = 1/64px precision)
    pub const FRACTIONAL_BITS: u32 = 6;

    /// Scale factor (2^6 = 64)
    pub const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    /// Create from raw 1/64px units
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from pixels, rounding to the nearest unit.
    #[inline]
    pub fn from_px(pixels: f32) -> Self {
        Self((pixels * Self::SCALE as f32).round() as i32)
    }

    /// Create from pixels, rounding toward negative infinity.
    #[inline]
    pub fn from_px_floor(pixels: f32) -> Self {
        Self((pixels * Self::SCALE as f32).floor() as i32)
    }

    /// Convert to pixels (f32)
    #[inline]
    pub const fn to_px(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// Get the raw 1/64px value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Zero value
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Snap a pixel value to the nearest layout unit.
    #[inline]
    pub fn snap(pixels: f32) -> f32 {
        Self::from_px(pixels).to_px()
    }

    /// Snap a pixel value down to a layout unit.
    ///
    /// Used for repeated spacing (between-item gaps) so that `n` copies of the
    /// spacing never sum past the space they were carved from.
    #[inline]
    pub fn snap_floor(pixels: f32) -> f32 {
        Self::from_px_floor(pixels).to_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if conversions do not match expected values.
    #[test]
    fn conversions_round_trip_whole_and_fractional_pixels() {
        assert!((LayoutUnit::from_px(10.0).to_px() - 10.0).abs() < 0.01);
        assert!((LayoutUnit::from_px(8.328_125).to_px() - 8.328_125).abs() < 0.01);
        assert_eq!(LayoutUnit::from_px(8.328_125).raw(), 533);
    }

    /// # Panics
    /// Panics if snapping does not land on 1/64px boundaries.
    #[test]
    fn snapping_lands_on_sixty_fourths() {
        let third = 100.0 / 3.0;
        let snapped = LayoutUnit::snap(third);
        assert!((snapped * 64.0 - (snapped * 64.0).round()).abs() < f32::EPSILON);
        assert!((snapped - third).abs() <= 1.0 / 128.0);
        assert!(LayoutUnit::snap_floor(third) <= third);
    }
}
