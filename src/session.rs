//! Browser-independent session core.
//!
//! `QuizSession` is what the widget's timers and event listeners drive. Time is
//! passed in explicitly (`performance.now()` in the browser, plain numbers in
//! tests), so the auto-advance after a correct answer is a deadline owned by
//! the session rather than a free-floating JS timeout: dropping the session
//! drops every pending advance with it.

use rand::Rng;

use crate::config::QuizConfig;
use crate::kana::WritingSystem;
use crate::petals::{PetalField, Viewport};
use crate::quiz::{Quiz, Verdict};

/// Side effects the presentation layer has to perform after a submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    /// Play the success sound (best effort).
    pub play_sound: bool,
}

pub struct QuizSession<R: Rng> {
    quiz: Quiz,
    petals: PetalField,
    rng: R,
    advance_delay_ms: f64,
    /// Deadlines (ms) of scheduled auto-advances, in scheduling order.
    pending_advances: Vec<f64>,
}

impl<R: Rng> QuizSession<R> {
    pub fn new(cfg: &QuizConfig, viewport: Viewport, mut rng: R) -> Self {
        let quiz = Quiz::new(cfg.writing_system, &mut rng);
        Self::with_quiz(cfg, viewport, quiz, rng)
    }

    /// Wrap an already positioned quiz (see `Quiz::starting_at`).
    pub fn with_quiz(cfg: &QuizConfig, viewport: Viewport, quiz: Quiz, rng: R) -> Self {
        Self {
            quiz,
            petals: PetalField::new(cfg.petals.clone(), viewport),
            rng,
            advance_delay_ms: cfg.advance_delay_ms,
            pending_advances: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn petals(&self) -> &PetalField {
        &self.petals
    }

    pub fn pending_advances(&self) -> &[f64] {
        &self.pending_advances
    }

    pub fn edit(&mut self, raw: &str) {
        self.quiz.edit(raw);
    }

    /// Evaluate the current input. A correct answer bursts petals and schedules
    /// an automatic next prompt `advance_delay_ms` after `now_ms`.
    pub fn submit(&mut self, now_ms: f64) -> SubmitOutcome {
        let verdict = self.quiz.submit();
        let correct = verdict.is_correct();
        if correct {
            self.petals.burst(&mut self.rng);
            self.pending_advances.push(now_ms + self.advance_delay_ms);
        }
        SubmitOutcome {
            verdict,
            play_sound: correct,
        }
    }

    /// Next prompt now. Scheduled auto-advances stay pending.
    pub fn skip(&mut self) {
        self.quiz.skip(&mut self.rng);
    }

    pub fn set_writing_system(&mut self, system: WritingSystem) {
        log::debug!("writing system -> {system}");
        self.quiz.set_writing_system(system, &mut self.rng);
    }

    /// Spawner timer tick.
    pub fn spawn_tick(&mut self) -> bool {
        self.petals.spawn_tick(&mut self.rng)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.petals.resize(viewport);
    }

    /// Animation-frame tick: advance petals and run every auto-advance whose
    /// deadline has passed. Returns whether the prompt changed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.petals.advance(&mut self.rng);
        let due = self.pending_advances.iter().filter(|&&t| t <= now_ms).count();
        if due == 0 {
            return false;
        }
        self.pending_advances.retain(|&t| t > now_ms);
        for _ in 0..due {
            self.quiz.next_prompt(&mut self.rng);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session_at(glyph: &str) -> QuizSession<StdRng> {
        let cfg = QuizConfig::default();
        let quiz = Quiz::starting_at(WritingSystem::Hiragana, glyph).unwrap();
        QuizSession::with_quiz(
            &cfg,
            Viewport::new(1024.0, 768.0),
            quiz,
            StdRng::seed_from_u64(17),
        )
    }

    #[test]
    fn test_new_session_draws_from_configured_system() {
        let cfg = QuizConfig {
            writing_system: WritingSystem::Katakana,
            ..QuizConfig::default()
        };
        let s = QuizSession::new(&cfg, Viewport::new(10.0, 10.0), StdRng::seed_from_u64(0));
        assert_eq!(s.quiz().writing_system(), WritingSystem::Katakana);
        assert!(crate::kana::KATAKANA.contains(s.quiz().prompt()));
        assert!(s.quiz().feedback().is_none());
    }

    #[test]
    fn test_auto_advance_fires_at_deadline() {
        let mut s = session_at("か");
        s.edit("ka");
        let out = s.submit(1000.0);
        assert!(out.play_sound);
        assert_eq!(s.pending_advances(), &[2500.0]);

        assert!(!s.frame(2499.0));
        assert!(s.quiz().verdict().is_some());
        assert_eq!(s.quiz().input(), "ka");

        assert!(s.frame(2500.0));
        assert!(s.quiz().verdict().is_none());
        assert_eq!(s.quiz().input(), "");
        assert!(s.pending_advances().is_empty());
    }

    #[test]
    fn test_incorrect_answer_never_advances() {
        let mut s = session_at("し");
        s.edit("si");
        let out = s.submit(0.0);
        assert!(!out.play_sound);
        assert!(s.petals().explosion().is_empty());
        assert!(s.pending_advances().is_empty());
        for t in 0..100 {
            assert!(!s.frame(t as f64 * 100.0));
        }
        assert_eq!(s.quiz().prompt().glyph, "し");
    }

    #[test]
    fn test_skip_keeps_pending_advance() {
        let mut s = session_at("あ");
        s.edit("a");
        s.submit(0.0);
        s.skip();
        assert!(s.quiz().verdict().is_none());
        assert_eq!(s.pending_advances().len(), 1);
        s.edit("x");
        assert!(s.frame(1500.0));
        assert_eq!(s.quiz().input(), "");
    }

    #[test]
    fn test_spawner_feeds_petal_field() {
        let cfg = QuizConfig::default();
        let mut s = QuizSession::new(&cfg, Viewport::new(640.0, 480.0), StdRng::seed_from_u64(6));
        let spawned = (0..500).filter(|_| s.spawn_tick()).count();
        assert_eq!(s.petals().falling().len(), spawned);
    }
}
