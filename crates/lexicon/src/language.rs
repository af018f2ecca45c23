use std::fmt;
use std::str::FromStr;

use canonical::Script;
use serde::{Deserialize, Serialize};

/// Languages with a built-in rule set.
///
/// Serialized as the two-letter ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "zh")]
    Mandarin,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
        Language::Arabic,
        Language::Russian,
        Language::Mandarin,
    ];

    /// Rule set used when no language is known.
    pub const DEFAULT: Language = Language::English;

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::Mandarin => "zh",
        }
    }

    /// Resolves a language tag such as `"de"`, `"ru-RU"`, `"zh_Hans"`,
    /// `"ara"` or `"english"`. Matching is case-insensitive and only the
    /// primary subtag is considered.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let lang = match primary.as_str() {
            "en" | "eng" | "english" => Language::English,
            "fr" | "fra" | "fre" | "french" => Language::French,
            "de" | "deu" | "ger" | "german" => Language::German,
            "it" | "ita" | "italian" => Language::Italian,
            "es" | "spa" | "spanish" => Language::Spanish,
            "pt" | "por" | "portuguese" => Language::Portuguese,
            "ar" | "ara" | "arabic" => Language::Arabic,
            "ru" | "rus" | "russian" => Language::Russian,
            "zh" | "zho" | "chi" | "cmn" | "chinese" | "mandarin" => Language::Mandarin,
            _ => return None,
        };
        Some(lang)
    }

    /// Script names in this language are natively written in.
    pub fn native_script(self) -> Script {
        match self {
            Language::Arabic => Script::Arabic,
            Language::Russian => Script::Cyrillic,
            Language::Mandarin => Script::Han,
            _ => Script::Latin,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| format!("unknown language tag `{s}`"))
    }
}
