use super::*;

#[test]
fn validate_rejects_non_positive_params() {
    assert!(Spring::new(300.0, 20.0).validate().is_ok());
    assert!(Spring::new(0.0, 20.0).validate().is_err());
    assert!(Spring::new(300.0, -1.0).validate().is_err());
    assert!(
        Spring {
            mass: 0.0,
            ..Spring::new(300.0, 20.0)
        }
        .validate()
        .is_err()
    );
}

#[test]
fn underdamped_spring_overshoots_then_settles() {
    let s = Spring::new(300.0, 20.0);
    assert!(s.damping_ratio() < 1.0);
    assert_eq!(s.position(0.0), 0.0);

    let peak = (1..400)
        .map(|ms| s.position(ms as f64 / 1000.0))
        .fold(0.0, f64::max);
    assert!(peak > 1.0);

    let settle = s.settle_time();
    assert!(settle > Millis(200) && settle < Millis(1500), "{settle:?}");
    assert!((s.position(settle.as_secs_f64() + 0.5) - 1.0).abs() <= 0.005);
}

#[test]
fn critically_and_overdamped_springs_do_not_overshoot() {
    for s in [Spring::new(100.0, 20.0), Spring::new(100.0, 60.0)] {
        for ms in 0..2000 {
            assert!(s.position(ms as f64 / 1000.0) <= 1.0 + 1e-9);
        }
    }
}

#[test]
fn css_linear_starts_at_zero_and_ends_at_one() {
    let css = Spring::new(300.0, 20.0).css_linear(16);
    assert!(css.starts_with("linear(0, "));
    assert!(css.ends_with(", 1)"));
    assert_eq!(css.matches(',').count(), 15);
}
