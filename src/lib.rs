//! Kana Quiz core crate.
//!
//! A single-card drill: show a random hiragana / katakana glyph, take a romaji
//! guess, say whether it was right. Correct answers burst sakura petals and move
//! on to the next glyph automatically; petals keep drifting down in the
//! background the whole time.
//!
//! The pure pieces (`kana`, `quiz`, `petals`, `session`, `config`) have no
//! browser dependency and are tested natively. `widget` binds them to the DOM.

use wasm_bindgen::prelude::*;

pub mod config;
mod error;
pub mod kana;
pub mod petals;
pub mod quiz;
pub mod session;
pub mod widget;

pub use config::{AssetConfig, PetalConfig, QuizConfig};
pub use error::QuizError;
pub use kana::{HIRAGANA, KATAKANA, KanaEntry, WritingSystem, lookup};
pub use petals::{Petal, PetalField, PetalKind, Viewport};
pub use quiz::{Phase, Quiz, Verdict, evaluate, select_prompt};
pub use session::{QuizSession, SubmitOutcome};
pub use widget::QuizHandle;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the quiz with default settings. Keep the returned handle; `stop()`
/// (or freeing it) removes the widget and its timers.
#[wasm_bindgen]
pub fn start_quiz() -> Result<QuizHandle, JsValue> {
    widget::mount(QuizConfig::default())
}

/// Mount the quiz with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_quiz_with_config(json: &str) -> Result<QuizHandle, JsValue> {
    widget::mount(QuizConfig::from_json(json)?)
}

/// Romaji reading for a glyph, for page scripts that want to label things.
#[wasm_bindgen]
pub fn reading_of(system: &str, glyph: &str) -> Result<String, JsValue> {
    let system: WritingSystem = system.parse()?;
    Ok(lookup(system, glyph)?.to_string())
}
