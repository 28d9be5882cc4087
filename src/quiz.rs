//! Prompt selection, answer checking and the quiz state holder.
//!
//! The quiz is always showing a prompt; after a submit it additionally carries
//! the verdict until the next prompt is drawn. `Phase` makes "feedback without a
//! prompt" unrepresentable since `Quiz` owns the prompt unconditionally.

use rand::Rng;

use crate::QuizError;
use crate::kana::{KanaEntry, WritingSystem};

pub const CORRECT_MESSAGE: &str = "正解! (Correct!)";
const INCORRECT_PREFIX: &str = "不正解 (Incorrect). The correct answer is: ";

/// Draw one entry of `system`'s table uniformly at random (with replacement).
pub fn select_prompt<R: Rng + ?Sized>(system: WritingSystem, rng: &mut R) -> &'static KanaEntry {
    let table = system.table();
    &table[rng.gen_range(0..table.len())]
}

/// Result of checking one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: &'static str },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Feedback line shown to the learner.
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => CORRECT_MESSAGE.to_string(),
            Verdict::Incorrect { expected } => format!("{INCORRECT_PREFIX}{expected}"),
        }
    }
}

/// Lowercase the raw input and compare it verbatim against the stored reading.
/// Whitespace and punctuation are significant.
pub fn evaluate(input: &str, expected: &'static str) -> Verdict {
    if input.to_lowercase() == expected {
        Verdict::Correct
    } else {
        Verdict::Incorrect { expected }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer.
    Prompting,
    /// The last submit's verdict is on screen.
    Feedback(Verdict),
}

#[derive(Clone, Debug)]
pub struct Quiz {
    system: WritingSystem,
    prompt: &'static KanaEntry,
    input: String,
    phase: Phase,
}

impl Quiz {
    pub fn new<R: Rng + ?Sized>(system: WritingSystem, rng: &mut R) -> Self {
        Self::at(system, select_prompt(system, rng))
    }

    /// Start on a known glyph instead of a random draw.
    pub fn starting_at(system: WritingSystem, glyph: &str) -> Result<Self, QuizError> {
        let entry = system.entry(glyph).ok_or_else(|| QuizError::UnknownGlyph {
            system,
            glyph: glyph.to_string(),
        })?;
        Ok(Self::at(system, entry))
    }

    fn at(system: WritingSystem, prompt: &'static KanaEntry) -> Self {
        Self {
            system,
            prompt,
            input: String::new(),
            phase: Phase::Prompting,
        }
    }

    pub fn writing_system(&self) -> WritingSystem {
        self.system
    }

    pub fn prompt(&self) -> &'static KanaEntry {
        self.prompt
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.phase {
            Phase::Prompting => None,
            Phase::Feedback(v) => Some(v),
        }
    }

    /// Feedback line, if any is showing.
    pub fn feedback(&self) -> Option<String> {
        self.verdict().map(Verdict::message)
    }

    /// Draw a fresh prompt from the active table and clear input and feedback.
    pub fn next_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.prompt = select_prompt(self.system, rng);
        self.input.clear();
        self.phase = Phase::Prompting;
        log::debug!("next prompt {} ({})", self.prompt.glyph, self.system);
    }

    /// Replace the input buffer with the raw control value.
    pub fn edit(&mut self, raw: &str) {
        self.input.clear();
        self.input.push_str(raw);
    }

    /// Check the current input against the prompt's reading.
    pub fn submit(&mut self) -> Verdict {
        let verdict = evaluate(&self.input, self.prompt.reading);
        log::debug!(
            "submit '{}' for {}: {}",
            self.input,
            self.prompt.glyph,
            if verdict.is_correct() { "correct" } else { "incorrect" }
        );
        self.phase = Phase::Feedback(verdict);
        verdict
    }

    pub fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.next_prompt(rng);
    }

    /// Switch tables; always re-initializes, even when `system` is already active.
    pub fn set_writing_system<R: Rng + ?Sized>(&mut self, system: WritingSystem, rng: &mut R) {
        self.system = system;
        self.next_prompt(rng);
    }
}
