use vizij_tween_core::{LoopCount, Tween, TweenCommand, TweenConfig, TweenError};

#[test]
fn missing_fields_take_defaults() {
    let cfg = TweenConfig::from_json("{}").unwrap();
    assert_eq!(cfg, TweenConfig::default());
    assert_eq!(cfg.duration, 1.0);
    assert_eq!(cfg.loops, LoopCount::ONCE);
    assert!(!cfg.pingpong);
}

#[test]
fn zero_loops_means_infinite() {
    let cfg = TweenConfig::from_json(r#"{ "duration": 2.5, "loops": 0, "pingpong": true }"#)
        .unwrap();
    assert_eq!(cfg.loops, LoopCount::Infinite);
    assert!(cfg.pingpong);
    let json = serde_json::to_value(&cfg).unwrap();
    assert_eq!(json["loops"], 0);
}

#[test]
fn finite_loops_round_trip_as_integers() {
    let cfg = TweenConfig::from_json(r#"{ "loops": 4 }"#).unwrap();
    assert_eq!(cfg.loops.target(), Some(4));
    let back: TweenConfig = serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn non_positive_duration_is_rejected() {
    let err = TweenConfig::from_json(r#"{ "duration": 0 }"#).unwrap_err();
    assert!(matches!(err, TweenError::InvalidConfiguration { .. }));
    let err = Tween::new(TweenConfig::default().with_duration(-1.0)).unwrap_err();
    assert!(matches!(err, TweenError::InvalidConfiguration { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Tween::from_json(r#"{ "duration": "#).unwrap_err();
    assert!(matches!(err, TweenError::Parse { .. }));
}

#[test]
fn tween_from_json_keeps_config() {
    let t = Tween::from_json(r#"{ "duration": 3, "loops": 2 }"#).unwrap();
    assert_eq!(t.duration(), 3.0);
    assert_eq!(t.loops().target(), Some(2));
    assert!(!t.pingpong());
}

#[test]
fn commands_parse_single_or_batch() {
    let one = TweenCommand::parse_batch(r#"{ "type": "reverse" }"#).unwrap();
    assert_eq!(one, vec![TweenCommand::Reverse]);
    let many =
        TweenCommand::parse_batch(r#"[{ "type": "pause_resume" }, { "type": "reset" }]"#).unwrap();
    assert_eq!(many, vec![TweenCommand::PauseResume, TweenCommand::Reset]);
    assert!(TweenCommand::parse_batch(r#"{ "type": "rewind" }"#).is_err());
}
