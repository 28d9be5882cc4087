use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::kana::WritingSystem;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("glyph '{glyph}' is not part of the {system} table")]
    UnknownGlyph { system: WritingSystem, glyph: String },

    #[error("unknown writing system '{0}' (expected 'hiragana' or 'katakana')")]
    UnknownWritingSystem(String),

    #[error("invalid quiz config: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde_json")]
    #[error("could not parse quiz config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<QuizError> for JsValue {
    fn from(err: QuizError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
