// Config loading tests (native). JSON parsing needs `--features serde_json`;
// the bounds checks run in every build.

use kana_quiz::config::MAX_MAGNITUDE;
use kana_quiz::{Quiz, QuizConfig, QuizError, QuizSession, Viewport, WritingSystem};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn huge_jitter_is_rejected_before_a_session_runs() {
    let mut cfg = QuizConfig::default();
    cfg.petals.jitter = 1e308;
    assert!(matches!(cfg.validate(), Err(QuizError::InvalidConfig(_))));
}

#[test]
fn largest_accepted_magnitudes_keep_frames_running() {
    let mut cfg = QuizConfig::default();
    cfg.petals.jitter = MAX_MAGNITUDE;
    cfg.petals.spin = MAX_MAGNITUDE;
    cfg.petals.fall_speed = MAX_MAGNITUDE;
    cfg.petals.spawn_chance = 1.0;
    cfg.petals.min_scale = MAX_MAGNITUDE;
    cfg.petals.max_scale = MAX_MAGNITUDE;
    cfg.advance_delay_ms = MAX_MAGNITUDE;
    assert!(cfg.validate().is_ok());

    let quiz = Quiz::starting_at(WritingSystem::Hiragana, "あ").unwrap();
    let mut s = QuizSession::with_quiz(
        &cfg,
        Viewport::new(800.0, 600.0),
        quiz,
        StdRng::seed_from_u64(21),
    );
    s.edit("a");
    s.submit(0.0);
    s.spawn_tick();
    for i in 0..60 {
        s.frame(i as f64 * 16.0);
    }
    assert_eq!(s.pending_advances(), &[MAX_MAGNITUDE]);
    assert!(s.petals().falling().is_empty());
}

#[cfg(feature = "serde_json")]
#[test]
fn partial_json_keeps_defaults() {
    let cfg = QuizConfig::from_json(
        r#"{ "writing_system": "katakana", "petals": { "burst_size": 8 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.writing_system, WritingSystem::Katakana);
    assert_eq!(cfg.petals.burst_size, 8);
    assert_eq!(cfg.petals.shrink_factor, 0.95);
    assert_eq!(cfg.advance_delay_ms, 1500.0);
}

#[cfg(feature = "serde_json")]
#[test]
fn json_errors_surface() {
    assert!(matches!(
        QuizConfig::from_json("{ not json"),
        Err(QuizError::ConfigParse(_))
    ));
    assert!(matches!(
        QuizConfig::from_json(r#"{ "petals": { "burst_size": 0 } }"#),
        Err(QuizError::InvalidConfig(_))
    ));
    assert!(matches!(
        QuizConfig::from_json(r#"{ "petals": { "jitter": 1e308 } }"#),
        Err(QuizError::InvalidConfig(_))
    ));
}

#[cfg(feature = "serde_json")]
#[test]
fn fixed_scale_json_is_accepted() {
    let cfg = QuizConfig::from_json(r#"{ "petals": { "min_scale": 0.7, "max_scale": 0.7 } }"#)
        .unwrap();
    assert_eq!(cfg.petals.min_scale, cfg.petals.max_scale);
}
