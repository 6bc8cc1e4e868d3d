use super::*;

#[test]
fn millis_secs_conversion_rounds() {
    assert_eq!(Millis::from_secs_f64(0.6), Millis(600));
    assert_eq!(Millis::from_secs_f64(-1.0), Millis::ZERO);
    assert_eq!(Millis(1500).as_secs_f64(), 1.5);
    assert_eq!(Millis(50).css(), "50ms");
}

#[test]
fn viewport_rejects_zero_dims() {
    assert!(Viewport::new(0, 900).is_err());
    assert!(Viewport::new(1440, 0).is_err());
    assert!(Viewport::new(1440, 900).is_ok());
}

#[test]
fn intersection_ratio_boundaries() {
    let vp = Viewport::new(100, 100).unwrap();
    let section = Rect::new(0.0, 100.0, 100.0, 200.0);

    assert_eq!(intersection_ratio(section, vp.rect_at(0.0)), 0.0);
    assert_eq!(intersection_ratio(section, vp.rect_at(100.0)), 1.0);
    assert!((intersection_ratio(section, vp.rect_at(30.0)) - 0.3).abs() < 1e-9);
}

#[test]
fn intersection_ratio_of_degenerate_target_is_zero() {
    let empty = Rect::new(0.0, 10.0, 100.0, 10.0);
    assert_eq!(intersection_ratio(empty, Rect::new(0.0, 0.0, 100.0, 100.0)), 0.0);
}
