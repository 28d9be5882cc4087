// Integration tests (native) for the `kana-quiz` crate.
// These drive `QuizSession` the way the widget's timers and listeners do, with a
// seeded RNG and explicit timestamps.

use kana_quiz::{
    Phase, Quiz, QuizConfig, QuizSession, Verdict, Viewport, WritingSystem, quiz::CORRECT_MESSAGE,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session(system: WritingSystem, glyph: &str, seed: u64) -> QuizSession<StdRng> {
    let quiz = Quiz::starting_at(system, glyph).unwrap();
    QuizSession::with_quiz(
        &QuizConfig::default(),
        Viewport::new(1280.0, 720.0),
        quiz,
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn correct_answer_bursts_and_auto_advances() {
    let mut s = session(WritingSystem::Hiragana, "あ", 1);
    s.edit("a");
    let out = s.submit(10_000.0);

    assert_eq!(out.verdict, Verdict::Correct);
    assert!(out.play_sound);
    assert_eq!(s.quiz().feedback().as_deref(), Some(CORRECT_MESSAGE));
    assert_eq!(s.petals().explosion().len(), 5);
    for p in s.petals().explosion() {
        assert_eq!((p.x, p.y), (640.0, 360.0));
    }

    // Frames before the delay elapse leave the feedback up.
    let mut t = 10_000.0;
    while t < 11_500.0 {
        assert!(!s.frame(t));
        t += 16.0;
    }
    assert!(matches!(s.quiz().phase(), Phase::Feedback(Verdict::Correct)));

    assert!(s.frame(11_500.0));
    assert_eq!(s.quiz().phase(), &Phase::Prompting);
    assert_eq!(s.quiz().input(), "");
    assert_eq!(s.quiz().writing_system(), WritingSystem::Hiragana);
}

#[test]
fn incorrect_answer_names_expected_reading() {
    let mut s = session(WritingSystem::Hiragana, "し", 2);
    s.edit("si");
    let out = s.submit(0.0);

    assert_eq!(out.verdict, Verdict::Incorrect { expected: "shi" });
    assert!(!out.play_sound);
    let msg = s.quiz().feedback().unwrap();
    assert!(msg.contains("Incorrect"), "{msg}");
    assert!(msg.ends_with("shi"), "{msg}");
    assert!(s.pending_advances().is_empty());

    for i in 0..500 {
        s.frame(i as f64 * 16.0);
    }
    assert_eq!(s.quiz().prompt().glyph, "し");
    assert_eq!(s.quiz().input(), "si");

    // Retrying is allowed.
    s.edit("SHI");
    assert!(s.submit(9_000.0).play_sound);
}

#[test]
fn switching_system_resets_input_and_feedback() {
    let mut s = session(WritingSystem::Hiragana, "か", 3);
    s.edit("ko");
    s.submit(0.0);
    s.set_writing_system(WritingSystem::Katakana);

    assert_eq!(s.quiz().input(), "");
    assert!(s.quiz().feedback().is_none());
    assert!(kana_quiz::KATAKANA.contains(s.quiz().prompt()));

    s.set_writing_system(WritingSystem::Hiragana);
    assert!(kana_quiz::HIRAGANA.contains(s.quiz().prompt()));
}

#[test]
fn skip_always_draws_a_fresh_prompt_state() {
    let mut s = session(WritingSystem::Katakana, "ン", 4);
    for round in 0..50 {
        if round % 2 == 0 {
            s.edit("wrong");
            s.submit(round as f64);
        }
        s.skip();
        assert_eq!(s.quiz().phase(), &Phase::Prompting);
        assert_eq!(s.quiz().input(), "");
        assert!(kana_quiz::KATAKANA.contains(s.quiz().prompt()));
    }
}

#[test]
fn ambient_petals_come_and_go() {
    let mut s = session(WritingSystem::Hiragana, "ね", 5);
    let mut t = 0.0;
    // ~5s of wall time: spawner every 100ms, frames every ~16ms.
    for tick in 0..50 {
        s.spawn_tick();
        for _ in 0..6 {
            s.frame(t);
            t += 16.0;
        }
        assert!(s.petals().falling().iter().all(|p| p.y < 720.0), "tick {tick}");
    }
    // Long enough for every falling petal to leave a 720px viewport.
    for _ in 0..800 {
        s.frame(t);
        t += 16.0;
    }
    assert!(s.petals().is_empty());
    assert_eq!(s.quiz().prompt().glyph, "ね");
}

#[test]
fn same_seed_same_session() {
    let run = |seed| {
        let mut s = QuizSession::new(
            &QuizConfig::default(),
            Viewport::new(800.0, 600.0),
            StdRng::seed_from_u64(seed),
        );
        let mut glyphs = vec![s.quiz().prompt().glyph];
        for _ in 0..10 {
            s.skip();
            glyphs.push(s.quiz().prompt().glyph);
        }
        glyphs
    };
    assert_eq!(run(99), run(99));
}
