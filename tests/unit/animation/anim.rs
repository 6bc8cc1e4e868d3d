use super::*;

fn ctx(ms: u64) -> SampleCtx {
    SampleCtx::at(Millis(ms))
}

fn ramp(mode: InterpMode) -> Anim<f64> {
    Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: Millis(0),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: Millis(100),
                value: 10.0,
                ease: Ease::Linear,
            },
        ],
        mode,
        default: None,
    })
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let anim = ramp(InterpMode::Hold);
    assert_eq!(anim.sample(ctx(50)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(100)).unwrap(), 10.0);
}

#[test]
fn keyframes_linear_interpolates_and_clamps() {
    let anim = ramp(InterpMode::Linear);
    assert_eq!(anim.sample(ctx(50)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(500)).unwrap(), 10.0);
}

#[test]
fn empty_keyframes_use_default_or_fail() {
    let kf = Keyframes::<f64> {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    };
    assert!(kf.validate().is_err());
    assert!(kf.sample(ctx(0)).is_err());

    let kf = Keyframes {
        default: Some(2.0),
        ..kf
    };
    assert_eq!(kf.sample(ctx(0)).unwrap(), 2.0);
}

#[test]
fn unsorted_keys_are_rejected() {
    let anim = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: Millis(10),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: Millis(0),
                value: 1.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    assert!(anim.validate().is_err());
}

#[test]
fn sequence_spaces_keys_evenly() {
    let pulse = Anim::sequence(vec![1.0, 1.05, 1.0], Millis(2000), Ease::Linear).unwrap();
    assert_eq!(pulse.sample(ctx(1000)).unwrap(), 1.05);
    assert_eq!(pulse.sample(ctx(2000)).unwrap(), 1.0);
    assert!(Anim::<f64>::sequence(vec![], Millis(10), Ease::Linear).is_err());
}

#[test]
fn delay_holds_first_value() {
    let anim = delay(ramp(InterpMode::Linear), Millis(100));
    assert_eq!(anim.sample(ctx(50)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(150)).unwrap(), 5.0);
}

#[test]
fn loop_repeat_and_ping_pong() {
    let rep = loop_(ramp(InterpMode::Linear), Millis(100), LoopMode::Repeat);
    assert_eq!(rep.sample(ctx(150)).unwrap(), 5.0);

    let pp = loop_(ramp(InterpMode::Linear), Millis(100), LoopMode::PingPong);
    assert_eq!(pp.sample(ctx(175)).unwrap(), 2.5);

    let bad = loop_(ramp(InterpMode::Linear), Millis(0), LoopMode::Repeat);
    assert!(bad.validate().is_err());
}

#[test]
fn option_lerp_prefers_present_side() {
    assert_eq!(Option::<f64>::lerp(&None, &Some(4.0), 0.5), Some(4.0));
    assert_eq!(Option::<f64>::lerp(&Some(2.0), &Some(4.0), 0.5), Some(3.0));
}
