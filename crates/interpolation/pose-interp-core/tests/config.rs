use pose_interp_core::{
    config::{DEFAULT_DURATION, DEFAULT_INTERMEDIATE_FRAMES},
    Config, Engine, FrameSet, InterpError, InterpolationKind, ManualClock, Orientation,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn empty_object_takes_defaults() {
    let cfg = Config::from_json("{}").expect("defaults validate");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.duration, DEFAULT_DURATION);
    assert_eq!(cfg.intermediate_frames, DEFAULT_INTERMEDIATE_FRAMES);
    assert_eq!(cfg.start.position, [-1.0, 0.0, 0.0]);
}

#[test]
fn partial_pose_keeps_remaining_defaults() {
    let cfg = Config::from_json(r#"{ "end": { "euler": [0.0, 0.0, 1.0] } }"#).expect("config");
    assert_eq!(cfg.end.position, [0.0, 0.0, 0.0]);
    assert_eq!(cfg.end.euler, [0.0, 0.0, 1.0]);
    assert_eq!(cfg.end.quat, None);
}

#[test]
fn out_of_range_values_are_rejected() {
    for name in pose_interp_test_fixtures::invalid_configs::keys() {
        let json = pose_interp_test_fixtures::invalid_configs::json(&name).expect("fixture");
        let err = Config::from_json(&json).expect_err("invalid config must fail");
        assert_eq!(err.category(), "validation", "{name}: {err}");
    }

    let err = Config::from_json(r#"{ "duration": 0.0 }"#).expect_err("zero duration");
    assert!(matches!(err, InterpError::InvalidDuration { .. }), "{err}");

    let err = Config::from_json(r#"{ "intermediate_frames": 101 }"#).expect_err("too many");
    match err {
        InterpError::InvalidFrameCount { count, min, max } => {
            assert_eq!((count, min, max), (101, 2, 100));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Config::from_json(r#"{ "duration": "#).expect_err("truncated");
    assert!(matches!(err, InterpError::Parse(_)));
    assert_eq!(err.category(), "serialization");
}

#[test]
fn engine_rejects_invalid_config() {
    let cfg = Config {
        intermediate_frames: 1,
        ..Config::default()
    };
    let res = Engine::from_config_with_time_source(FrameSet::default(), &cfg, ManualClock::new());
    assert!(matches!(res, Err(InterpError::InvalidFrameCount { .. })));
}

#[test]
fn config_round_trips_through_json() {
    let cfg: Config = pose_interp_test_fixtures::configs::load("quarter-turns").expect("fixture");
    let back = Config::from_json(&cfg.to_json().expect("serialize")).expect("reparse");
    assert_eq!(back, cfg);
}

#[test]
fn every_fixture_builds_an_engine() {
    for name in pose_interp_test_fixtures::configs::keys() {
        let json = pose_interp_test_fixtures::configs::json(&name).expect("fixture");
        let cfg = Config::from_json(&json).unwrap_or_else(|e| panic!("{name}: {e}"));
        let eng =
            Engine::from_config_with_time_source(FrameSet::default(), &cfg, ManualClock::new())
                .unwrap_or_else(|e| panic!("{name}: {e}"));
        for kind in InterpolationKind::ALL {
            let group = eng.targets().group(kind);
            assert_eq!(group.intermediate.len(), cfg.intermediate_frames, "{name}");
            assert_eq!(group.main.position, cfg.start.position, "{name}");
        }
    }
}

#[test]
fn quat_fixture_derives_euler_angles() {
    let json = pose_interp_test_fixtures::configs::json("sign-flipped").expect("fixture");
    let cfg = Config::from_json(&json).expect("config");
    let eng = Engine::from_config_with_time_source(FrameSet::default(), &cfg, ManualClock::new())
        .expect("engine");

    assert_eq!(eng.end_quat(), [0.0, 0.0, 0.0, -1.0]);
    for angle in eng.end_euler_angles() {
        approx(angle.sin(), 0.0, 1e-5);
    }

    // Euler targets see no rotation anywhere along the path.
    for frame in &eng.targets().euler.intermediate {
        match frame.orientation {
            Orientation::Euler(e) => {
                for angle in e {
                    approx(angle.sin(), 0.0, 1e-5);
                }
            }
            other => panic!("expected Euler orientation, got {other:?}"),
        }
    }
}

#[test]
fn yaw_wrap_fixture_sweeps_through_pi() {
    let cfg: Config = pose_interp_test_fixtures::configs::load("yaw-wrap").expect("fixture");
    let eng = Engine::from_config_with_time_source(FrameSet::default(), &cfg, ManualClock::new())
        .expect("engine");
    // Five frames over two seconds: the middle one sits at t = 1.
    match eng.targets().euler.intermediate[2].orientation {
        Orientation::Euler(e) => approx(e[2].abs(), std::f32::consts::PI, 0.01),
        other => panic!("expected Euler orientation, got {other:?}"),
    }
}
