//! Kana datasets and the writing-system selector.
//!
//! Both tables keep the gojūon order followed by the dakuten / handakuten rows.
//! Readings are lowercase Hepburn-style romaji; a reading may repeat inside a
//! table (じ/ぢ, ず/づ) but each glyph maps to exactly one reading.

use std::fmt;
use std::str::FromStr;

use crate::QuizError;

/// One glyph and the romaji a learner must type for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KanaEntry {
    pub glyph: &'static str,
    pub reading: &'static str,
}

const fn k(glyph: &'static str, reading: &'static str) -> KanaEntry {
    KanaEntry { glyph, reading }
}

pub const HIRAGANA: &[KanaEntry] = &[
    k("あ", "a"), k("い", "i"), k("う", "u"), k("え", "e"), k("お", "o"),
    k("か", "ka"), k("き", "ki"), k("く", "ku"), k("け", "ke"), k("こ", "ko"),
    k("さ", "sa"), k("し", "shi"), k("す", "su"), k("せ", "se"), k("そ", "so"),
    k("た", "ta"), k("ち", "chi"), k("つ", "tsu"), k("て", "te"), k("と", "to"),
    k("な", "na"), k("に", "ni"), k("ぬ", "nu"), k("ね", "ne"), k("の", "no"),
    k("は", "ha"), k("ひ", "hi"), k("ふ", "fu"), k("へ", "he"), k("ほ", "ho"),
    k("ま", "ma"), k("み", "mi"), k("む", "mu"), k("め", "me"), k("も", "mo"),
    k("や", "ya"), k("ゆ", "yu"), k("よ", "yo"),
    k("ら", "ra"), k("り", "ri"), k("る", "ru"), k("れ", "re"), k("ろ", "ro"),
    k("わ", "wa"), k("を", "wo"), k("ん", "n"),
    k("が", "ga"), k("ぎ", "gi"), k("ぐ", "gu"), k("げ", "ge"), k("ご", "go"),
    k("ざ", "za"), k("じ", "ji"), k("ず", "zu"), k("ぜ", "ze"), k("ぞ", "zo"),
    k("だ", "da"), k("ぢ", "ji"), k("づ", "zu"), k("で", "de"), k("ど", "do"),
    k("ば", "ba"), k("び", "bi"), k("ぶ", "bu"), k("べ", "be"), k("ぼ", "bo"),
    k("ぱ", "pa"), k("ぴ", "pi"), k("ぷ", "pu"), k("ぺ", "pe"), k("ぽ", "po"),
];

pub const KATAKANA: &[KanaEntry] = &[
    k("ア", "a"), k("イ", "i"), k("ウ", "u"), k("エ", "e"), k("オ", "o"),
    k("カ", "ka"), k("キ", "ki"), k("ク", "ku"), k("ケ", "ke"), k("コ", "ko"),
    k("サ", "sa"), k("シ", "shi"), k("ス", "su"), k("セ", "se"), k("ソ", "so"),
    k("タ", "ta"), k("チ", "chi"), k("ツ", "tsu"), k("テ", "te"), k("ト", "to"),
    k("ナ", "na"), k("ニ", "ni"), k("ヌ", "nu"), k("ネ", "ne"), k("ノ", "no"),
    k("ハ", "ha"), k("ヒ", "hi"), k("フ", "fu"), k("ヘ", "he"), k("ホ", "ho"),
    k("マ", "ma"), k("ミ", "mi"), k("ム", "mu"), k("メ", "me"), k("モ", "mo"),
    k("ヤ", "ya"), k("ユ", "yu"), k("ヨ", "yo"),
    k("ラ", "ra"), k("リ", "ri"), k("ル", "ru"), k("レ", "re"), k("ロ", "ro"),
    k("ワ", "wa"), k("ヲ", "wo"), k("ン", "n"),
    k("ガ", "ga"), k("ギ", "gi"), k("グ", "gu"), k("ゲ", "ge"), k("ゴ", "go"),
    k("ザ", "za"), k("ジ", "ji"), k("ズ", "zu"), k("ゼ", "ze"), k("ゾ", "zo"),
    k("ダ", "da"), k("ヂ", "ji"), k("ヅ", "zu"), k("デ", "de"), k("ド", "do"),
    k("バ", "ba"), k("ビ", "bi"), k("ブ", "bu"), k("ベ", "be"), k("ボ", "bo"),
    k("パ", "pa"), k("ピ", "pi"), k("プ", "pu"), k("ペ", "pe"), k("ポ", "po"),
];

/// Which kana set the quiz draws prompts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WritingSystem {
    #[default]
    Hiragana,
    Katakana,
}

impl WritingSystem {
    pub const ALL: [WritingSystem; 2] = [WritingSystem::Hiragana, WritingSystem::Katakana];

    pub fn table(self) -> &'static [KanaEntry] {
        match self {
            WritingSystem::Hiragana => HIRAGANA,
            WritingSystem::Katakana => KATAKANA,
        }
    }

    /// Token used for the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            WritingSystem::Hiragana => "hiragana",
            WritingSystem::Katakana => "katakana",
        }
    }

    /// Human label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            WritingSystem::Hiragana => "Hiragana",
            WritingSystem::Katakana => "Katakana",
        }
    }

    /// Find the table entry for `glyph`, if this system contains it.
    pub fn entry(self, glyph: &str) -> Option<&'static KanaEntry> {
        self.table().iter().find(|e| e.glyph == glyph)
    }
}

impl fmt::Display for WritingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingSystem {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hiragana" => Ok(WritingSystem::Hiragana),
            "katakana" => Ok(WritingSystem::Katakana),
            other => Err(QuizError::UnknownWritingSystem(other.to_string())),
        }
    }
}

/// Reading recorded for `glyph` in `system`'s table.
pub fn lookup(system: WritingSystem, glyph: &str) -> Result<&'static str, QuizError> {
    system
        .entry(glyph)
        .map(|e| e.reading)
        .ok_or_else(|| QuizError::UnknownGlyph {
            system,
            glyph: glyph.to_string(),
        })
}
