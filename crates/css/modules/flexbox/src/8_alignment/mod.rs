//! Alignment keywords and the shared space-distribution formulas
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>
//! Spec: <https://www.w3.org/TR/css-align-3/#distribution-values>

use log::debug;

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    LastBaseline,
}

impl AlignItems {
    #[inline]
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::Baseline | Self::LastBaseline)
    }
}

/// `align-self`: `auto` defers to the container's `align-items`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-align-self>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    LastBaseline,
}

impl AlignSelf {
    /// The effective alignment for an item in a container with `align_items`.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::LastBaseline => AlignItems::LastBaseline,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[default]
    Stretch,
}

/// Leading offset and extra between-spacing (on top of CSS gaps) for a run of
/// boxes sharing some free space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    pub leading: f32,
    pub between: f32,
}

/// The content-distribution families shared by `justify-content` and
/// `align-content`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Spread {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

/// Distribute `free_space` among `count` boxes.
///
/// Negative free space falls back as CSS Box Alignment specifies:
/// `space-between` behaves as start, `space-around` and `space-evenly` as
/// center. `end` and `center` overflow the start edge.
fn distribute(spread: Spread, free_space: f32, count: usize) -> Distribution {
    let effective = match spread {
        Spread::Between if free_space < 0.0 || count < 2 => Spread::Start,
        Spread::Around | Spread::Evenly if free_space < 0.0 || count < 2 => Spread::Center,
        other => other,
    };
    let slots = count as f32;
    let (leading, between) = match effective {
        Spread::Start => (0.0, 0.0),
        Spread::Center => (free_space * 0.5, 0.0),
        Spread::End => (free_space, 0.0),
        Spread::Between => (0.0, free_space / (slots - 1.0)),
        Spread::Around => (free_space / (slots * 2.0), free_space / slots),
        Spread::Evenly => (free_space / (slots + 1.0), free_space / (slots + 1.0)),
    };
    Distribution { leading, between }
}

/// `justify-content` distribution of a line's leftover main-axis space.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
pub fn justify_distribution(
    justify: JustifyContent,
    free_space: f32,
    item_count: usize,
) -> Distribution {
    let spread = match justify {
        JustifyContent::Start => Spread::Start,
        JustifyContent::Center => Spread::Center,
        JustifyContent::End => Spread::End,
        JustifyContent::SpaceBetween => Spread::Between,
        JustifyContent::SpaceAround => Spread::Around,
        JustifyContent::SpaceEvenly => Spread::Evenly,
    };
    let out = distribute(spread, free_space, item_count);
    debug!(
        target: "css::flexbox::flex",
        "[FLEX-JUSTIFY] mode={justify:?} free={free_space:.3} items={item_count} leading={:.3} between={:.3}",
        out.leading,
        out.between
    );
    out
}

/// `align-content` distribution of the container's leftover cross space among
/// lines. `stretch` grows the lines instead and packs them at the start.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
pub fn align_content_distribution(
    align: AlignContent,
    free_space: f32,
    line_count: usize,
) -> Distribution {
    let spread = match align {
        AlignContent::Start | AlignContent::Stretch => Spread::Start,
        AlignContent::Center => Spread::Center,
        AlignContent::End => Spread::End,
        AlignContent::SpaceBetween => Spread::Between,
        AlignContent::SpaceAround => Spread::Around,
        AlignContent::SpaceEvenly => Spread::Evenly,
    };
    distribute(spread, free_space, line_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    /// # Panics
    /// Panics if the positive-space formulas disagree with CSS.
    fn positive_space_formulas() {
        let between = justify_distribution(JustifyContent::SpaceBetween, 90.0, 4);
        assert_close(between.leading, 0.0);
        assert_close(between.between, 30.0);
        let around = justify_distribution(JustifyContent::SpaceAround, 90.0, 3);
        assert_close(around.leading, 15.0);
        assert_close(around.between, 30.0);
        let evenly = justify_distribution(JustifyContent::SpaceEvenly, 90.0, 2);
        assert_close(evenly.leading, 30.0);
        assert_close(evenly.between, 30.0);
        let center = justify_distribution(JustifyContent::Center, 90.0, 2);
        assert_close(center.leading, 45.0);
    }

    #[test]
    /// # Panics
    /// Panics if negative free space does not use the CSS fallbacks.
    fn negative_space_fallbacks() {
        let between = justify_distribution(JustifyContent::SpaceBetween, -40.0, 3);
        assert_eq!(between, Distribution::default());
        let around = justify_distribution(JustifyContent::SpaceAround, -40.0, 3);
        assert_close(around.leading, -20.0);
        assert_close(around.between, 0.0);
        let end = justify_distribution(JustifyContent::End, -40.0, 3);
        assert_close(end.leading, -40.0);
    }

    #[test]
    /// # Panics
    /// Panics if a single box does not use the single-item fallbacks.
    fn single_box_fallbacks() {
        let between = align_content_distribution(AlignContent::SpaceBetween, 50.0, 1);
        assert_close(between.leading, 0.0);
        let evenly = align_content_distribution(AlignContent::SpaceEvenly, 50.0, 1);
        assert_close(evenly.leading, 25.0);
        let stretch = align_content_distribution(AlignContent::Stretch, 50.0, 3);
        assert_eq!(stretch, Distribution::default());
    }

    #[test]
    /// # Panics
    /// Panics if `align-self: auto` does not inherit `align-items`.
    fn align_self_auto_inherits() {
        assert_eq!(
            AlignSelf::Auto.resolve(AlignItems::Center),
            AlignItems::Center
        );
        assert_eq!(
            AlignSelf::FlexEnd.resolve(AlignItems::Center),
            AlignItems::FlexEnd
        );
        assert!(AlignSelf::LastBaseline.resolve(AlignItems::Stretch).is_baseline());
    }
}
