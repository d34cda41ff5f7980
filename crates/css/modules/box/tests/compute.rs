use css_box::{Edges, LayoutUnit, MarginValue, Rect, sanitize_factor, sanitize_length};

#[test]
/// # Panics
/// Panics if deflating by margins does not produce the inner box.
fn deflate_by_margins() {
    let outer = Rect::new(10.0, 20.0, 100.0, 50.0);
    let margins = Edges {
        top: 4.0,
        right: 6.0,
        bottom: 2.0,
        left: 8.0,
    };
    let inner = outer.deflate(&margins);
    assert_eq!(inner, Rect::new(18.0, 24.0, 86.0, 44.0));
    assert!((inner.right() - 104.0).abs() < f32::EPSILON);
    assert!((inner.bottom() - 68.0).abs() < f32::EPSILON);
}

#[test]
/// # Panics
/// Panics if margins wider than the box produce a negative size.
fn deflate_never_goes_negative() {
    let inner = Rect::new(0.0, 0.0, 10.0, 10.0).deflate(&Edges::all(8.0));
    assert!(inner.width.abs() < f32::EPSILON && inner.height.abs() < f32::EPSILON);
}

#[test]
/// # Panics
/// Panics if margin values from the cascade resolve to the wrong fixed part.
fn margin_values_resolve_their_fixed_part() {
    let margins = Edges {
        top: MarginValue::Length(-5.0),
        right: MarginValue::Auto,
        bottom: MarginValue::Length(f32::NAN),
        left: MarginValue::default(),
    };
    let fixed = margins.map(MarginValue::fixed_or_zero);
    assert_eq!(fixed, Edges { top: -5.0, right: 0.0, bottom: 0.0, left: 0.0 });
    assert!(margins.right.is_auto());
}

#[test]
/// # Panics
/// Panics if invalid raw inputs are not normalised to zero.
fn raw_inputs_are_sanitized() {
    for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -3.0] {
        assert!(sanitize_length(bad).abs() < f32::EPSILON);
        assert!(sanitize_factor(bad).abs() < f32::EPSILON);
    }
    assert!((sanitize_length(12.5) - 12.5).abs() < f32::EPSILON);
    assert!((sanitize_factor(2.0) - 2.0).abs() < f32::EPSILON);
}

#[test]
/// # Panics
/// Panics if snapped offsets drift when accumulated.
fn snapped_thirds_accumulate_exactly() {
    let third = LayoutUnit::snap_floor(100.0 / 3.0);
    let total = third * 3.0;
    assert!(total <= 100.0);
    assert!(100.0 - total < 3.0 / 64.0 + f32::EPSILON);
    assert_eq!(LayoutUnit::from_px(1.0).raw(), LayoutUnit::SCALE);
}
