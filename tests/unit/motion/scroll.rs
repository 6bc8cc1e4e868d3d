use super::*;

fn scroller(sections: usize) -> SnapScroller {
    SnapScroller::new(Viewport::new(1280, 800).unwrap(), sections).unwrap()
}

#[test]
fn snap_points_are_viewport_multiples() {
    assert_eq!(scroller(3).snap_points(), [0.0, 800.0, 1600.0]);
}

#[test]
fn small_gestures_settle_back() {
    let mut s = scroller(6);
    assert_eq!(s.gesture(120.0), 0.0);
    assert_eq!(s.gesture(-399.0), 0.0);
    assert_eq!(s.index(), 0);
}

#[test]
fn any_velocity_moves_exactly_one_section() {
    let mut s = scroller(6);
    assert_eq!(s.gesture(400.0), 800.0);
    assert_eq!(s.gesture(50_000.0), 1600.0);
    assert_eq!(s.gesture(-9_999.0), 800.0);
    assert_eq!(s.index(), 1);
}

#[test]
fn clamped_at_both_ends() {
    let mut s = scroller(2);
    assert_eq!(s.gesture(-2_000.0), 0.0);
    s.gesture(2_000.0);
    assert_eq!(s.gesture(2_000.0), 800.0);
    assert_eq!(s.index(), 1);
}

#[test]
fn non_finite_gestures_are_ignored() {
    let mut s = scroller(3);
    s.gesture(f64::NAN);
    s.gesture(f64::INFINITY);
    assert_eq!(s.index(), 0);
}

#[test]
fn scroll_to_is_bounds_checked() {
    let mut s = scroller(3);
    assert_eq!(s.scroll_to(2).unwrap(), 1600.0);
    assert!(s.scroll_to(3).is_err());
    assert!(SnapScroller::new(Viewport::default(), 0).is_err());
}
