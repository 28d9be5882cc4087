//! Tunables for the quiz widget and its petal animation.
//!
//! Defaults reproduce the reference widget; the JSON entrypoint
//! (`start_quiz_with_config`) only needs to name the fields it overrides.

use crate::QuizError;
use crate::kana::WritingSystem;

pub const DEFAULT_BACKGROUND_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/e6f31762-e1e4-4745-b1b7-c64ce36c20df-vG5HBjbA4wnVnoE4ZDhsrFpvef7Aek.png";
pub const DEFAULT_PETAL_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/af00f217a09f037d633e19ac0a550236-cXlcEDHKrnDi8y0m8iAIqqEWpjHiIC.gif";
pub const DEFAULT_SOUND_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/BONK-Zyh081p4XaXYfN6lWahTOPN6uVFww6.mp3";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuizConfig {
    /// Writing system selected when the widget starts.
    pub writing_system: WritingSystem,
    /// Delay between a correct answer and the automatic next prompt.
    pub advance_delay_ms: f64,
    pub petals: PetalConfig,
    pub assets: AssetConfig,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PetalConfig {
    /// Period of the falling-petal spawner tick.
    pub spawn_interval_ms: u32,
    /// Probability that a spawner tick produces a petal.
    pub spawn_chance: f64,
    /// Starting y of a fresh falling petal (above the visible area).
    pub spawn_y: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Downward movement per animation frame, in px.
    pub fall_speed: f64,
    /// Number of explosion petals per correct answer.
    pub burst_size: usize,
    /// Max per-frame displacement of an explosion petal on each axis.
    pub jitter: f64,
    /// Upper bound of the per-frame rotation increment, in degrees.
    pub spin: f64,
    pub shrink_factor: f64,
    /// Explosion petals are discarded once their scale drops below this.
    pub min_visible_scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssetConfig {
    pub background_url: String,
    pub petal_url: String,
    /// Played on correct answers; `None` disables sound.
    pub sound_url: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            writing_system: WritingSystem::Hiragana,
            advance_delay_ms: 1500.0,
            petals: PetalConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for PetalConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 100,
            spawn_chance: 0.1,
            spawn_y: -50.0,
            min_scale: 0.5,
            max_scale: 1.0,
            fall_speed: 1.0,
            burst_size: 5,
            jitter: 2.5,
            spin: 10.0,
            shrink_factor: 0.95,
            min_visible_scale: 0.1,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            background_url: DEFAULT_BACKGROUND_URL.to_string(),
            petal_url: DEFAULT_PETAL_URL.to_string(),
            sound_url: Some(DEFAULT_SOUND_URL.to_string()),
        }
    }
}

/// Upper bound for any distance, speed, scale or delay. Keeps every sampled
/// range (`-jitter..=jitter` and friends) finite.
pub const MAX_MAGNITUDE: f64 = 1e6;

fn within(v: f64, lo: f64, hi: f64) -> bool {
    v.is_finite() && lo <= v && v <= hi
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if !within(self.advance_delay_ms, 0.0, MAX_MAGNITUDE) {
            return Err(invalid("advance_delay_ms must lie in [0, 1e6]"));
        }
        self.petals.validate()
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let cfg: QuizConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl PetalConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        let p = self;
        if p.spawn_interval_ms == 0 {
            return Err(invalid("petals.spawn_interval_ms must be > 0"));
        }
        if !within(p.spawn_chance, 0.0, 1.0) {
            return Err(invalid("petals.spawn_chance must lie in [0, 1]"));
        }
        if !within(p.spawn_y, -MAX_MAGNITUDE, MAX_MAGNITUDE) {
            return Err(invalid("petals.spawn_y must lie in [-1e6, 1e6]"));
        }
        if !(within(p.min_scale, 0.0, MAX_MAGNITUDE) && within(p.max_scale, 0.0, MAX_MAGNITUDE)) {
            return Err(invalid("petals.min_scale and max_scale must lie in [0, 1e6]"));
        }
        if !(p.min_scale > 0.0 && p.min_scale <= p.max_scale) {
            return Err(invalid("petals.min_scale must be > 0 and not above max_scale"));
        }
        if !(within(p.fall_speed, 0.0, MAX_MAGNITUDE) && p.fall_speed > 0.0) {
            return Err(invalid("petals.fall_speed must lie in (0, 1e6]"));
        }
        if p.burst_size == 0 {
            return Err(invalid("petals.burst_size must be > 0"));
        }
        if !(within(p.jitter, 0.0, MAX_MAGNITUDE) && within(p.spin, 0.0, MAX_MAGNITUDE)) {
            return Err(invalid("petals.jitter and petals.spin must lie in [0, 1e6]"));
        }
        if !(p.shrink_factor > 0.0 && p.shrink_factor < 1.0) {
            return Err(invalid("petals.shrink_factor must lie in (0, 1)"));
        }
        if !(p.min_visible_scale > 0.0 && p.min_visible_scale < 1.0) {
            return Err(invalid("petals.min_visible_scale must lie in (0, 1)"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> QuizError {
    QuizError::InvalidConfig(msg.to_string())
}
