//! The loaded, read-only dictionary handle.
//!
//! [`Dictionaries::load`] builds the built-in tables; the builder merges
//! JSON overlays on top before validating. Once built the handle is never
//! mutated, so it can be shared across threads behind an `Arc` or a
//! `&'static` reference.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use canonical::{NormalizeConfig, TransliterationTable};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::LexiconError;
use crate::language::Language;
use crate::languages::{self, LanguageSpec};
use crate::rules::LanguageRules;
use crate::sets::HonorificSet;

/// Languages whose transliteration tables apply to every name, so that
/// native-script text is romanized even when the hint names another
/// language.
const SCRIPT_LANGUAGES: [Language; 3] = [Language::Arabic, Language::Russian, Language::Mandarin];

/// Immutable per-language rule sets plus the cross-language honorifics.
#[derive(Debug)]
pub struct Dictionaries {
    rules: Vec<Box<dyn LanguageRules>>,
    common: HonorificSet,
    /// Prefix honorifics of every language, for abbreviated titles.
    any_prefix: HonorificSet,
    normalize: NormalizeConfig,
}

impl Dictionaries {
    /// Loads the built-in dictionaries.
    pub fn load() -> Result<Self, LexiconError> {
        Self::builder().build()
    }

    pub fn builder() -> DictionariesBuilder {
        DictionariesBuilder::new()
    }

    /// Rules for `language`. Every [`Language`] has a rule set.
    pub fn rules(&self, language: Language) -> &dyn LanguageRules {
        self.rules[language.index()].as_ref()
    }

    /// Resolves a caller-supplied language tag. Unknown tags fall back to
    /// [`Language::DEFAULT`]; the second value reports whether that happened.
    pub fn resolve(&self, tag: &str) -> (Language, bool) {
        match Language::from_tag(tag) {
            Some(language) => (language, false),
            None => {
                warn!(
                    requested = %tag,
                    fallback = %Language::DEFAULT,
                    "unsupported_language_fallback"
                );
                (Language::DEFAULT, true)
            }
        }
    }

    pub fn common_honorifics(&self) -> &HonorificSet {
        &self.common
    }

    /// Whether `key` is a prefix honorific in any language ("dott", "sra").
    pub fn is_any_prefix_honorific(&self, key: &str) -> bool {
        self.any_prefix.is_prefix(key)
    }

    pub fn normalize_config(&self) -> &NormalizeConfig {
        &self.normalize
    }

    /// Comparison key for `text` read as `language`.
    ///
    /// The language's own table is consulted first, then the tables of the
    /// non-Latin-script languages.
    pub fn normalize(&self, text: &str, language: Language) -> String {
        canonical::normalize(text, &self.table_chain(language), &self.normalize)
    }

    fn table_chain(&self, language: Language) -> Vec<&TransliterationTable> {
        let mut chain = vec![&self.rules(language).tables().transliteration];
        for script_language in SCRIPT_LANGUAGES {
            if script_language != language {
                chain.push(&self.rules(script_language).tables().transliteration);
            }
        }
        chain
    }
}

/// Transliteration additions in an overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransliterationOverlay {
    /// Single characters to Latin text.
    pub chars: BTreeMap<String, String>,
    /// Whole words to Latin text.
    pub words: BTreeMap<String, String>,
}

/// Per-language overlay entries.
///
/// Tables left out are untouched. With `replace` set, every table that is
/// present replaces the built-in one instead of extending it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageOverlay {
    pub replace: bool,
    pub honorifics: Option<Vec<String>>,
    pub suffixes: Option<Vec<String>>,
    pub particles: Option<Vec<String>>,
    pub diminutives: Option<Vec<Vec<String>>>,
    pub equivalences: Option<Vec<Vec<String>>>,
    pub transliteration: Option<TransliterationOverlay>,
    pub surname_variants: Option<BTreeMap<String, String>>,
}

/// A JSON dictionary overlay.
///
/// ```json
/// {
///   "common_honorifics": ["rt hon"],
///   "languages": {
///     "en": { "diminutives": [["gwendolyn", "gwen"]] }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overlay {
    pub common_honorifics: Vec<String>,
    pub common_suffixes: Vec<String>,
    pub languages: BTreeMap<String, LanguageOverlay>,
}

impl Overlay {
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Collects overlays and settings, then validates everything in
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct DictionariesBuilder {
    overlays: Vec<Overlay>,
    normalize: NormalizeConfig,
}

impl DictionariesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    pub fn with_overlay_json(self, json: &str) -> Result<Self, LexiconError> {
        Ok(self.with_overlay(Overlay::from_json(json)?))
    }

    pub fn with_overlay_file(self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Ok(self.with_overlay(Overlay::from_file(path)?))
    }

    pub fn build(self) -> Result<Dictionaries, LexiconError> {
        self.normalize
            .validate()
            .map_err(|err| LexiconError::InvalidDictionary(err.to_string()))?;

        let mut specs = languages::builtin();
        let mut common = languages::common_honorifics();

        for overlay in &self.overlays {
            common.extend_prefixes(overlay.common_honorifics.iter().map(String::as_str));
            common.extend_suffixes(overlay.common_suffixes.iter().map(String::as_str));
            for (tag, entry) in &overlay.languages {
                let language = Language::from_tag(tag).ok_or_else(|| {
                    LexiconError::InvalidDictionary(format!("unknown language `{tag}`"))
                })?;
                apply_overlay(&mut specs[language.index()], entry)?;
            }
        }

        let mut rules = Vec::with_capacity(specs.len());
        let mut any_prefix = HonorificSet::new(common.prefixes(), []);
        for spec in specs {
            let rule_set = spec.into_rules();
            validate(rule_set.as_ref())?;
            let tables = rule_set.tables();
            info!(
                language = %rule_set.language(),
                honorifics = tables.honorifics.len(),
                particles = tables.particles.len(),
                diminutive_classes = tables.diminutives.len(),
                equivalence_classes = tables.equivalences.len(),
                transliterations = tables.transliteration.len(),
                "dictionary_loaded"
            );
            any_prefix.extend_prefixes(tables.honorifics.prefixes());
            rules.push(rule_set);
        }

        Ok(Dictionaries {
            rules,
            common,
            any_prefix,
            normalize: self.normalize,
        })
    }
}

fn validate(rules: &dyn LanguageRules) -> Result<(), LexiconError> {
    for kind in rules.required_tables() {
        if rules.tables().is_table_empty(*kind) {
            return Err(LexiconError::DictionaryUnavailable {
                language: rules.language().code().to_string(),
                table: kind.name().to_string(),
            });
        }
    }
    Ok(())
}

fn apply_overlay(spec: &mut LanguageSpec, entry: &LanguageOverlay) -> Result<(), LexiconError> {
    let tables = &mut spec.tables;
    let replace = entry.replace;

    if let Some(items) = &entry.honorifics {
        if replace {
            let suffixes = entry.suffixes.as_deref().unwrap_or_default();
            tables.honorifics = HonorificSet::new(strs(items), strs(suffixes));
        } else {
            tables.honorifics.extend_prefixes(strs(items));
        }
    }
    if let Some(items) = &entry.suffixes {
        if !(replace && entry.honorifics.is_some()) {
            tables.honorifics.extend_suffixes(strs(items));
        }
    }
    if let Some(items) = &entry.particles {
        if replace {
            tables.particles = Default::default();
        }
        tables.particles.extend(strs(items));
    }
    if let Some(classes) = &entry.diminutives {
        let mut builder = if replace {
            Default::default()
        } else {
            tables.diminutives.to_builder()
        };
        for class in classes {
            builder.add_class(strs(class));
        }
        tables.diminutives = builder.build();
    }
    if let Some(classes) = &entry.equivalences {
        let mut builder = if replace {
            Default::default()
        } else {
            tables.equivalences.to_builder()
        };
        for class in classes {
            builder.add_class(strs(class));
        }
        tables.equivalences = builder.build();
    }
    if let Some(overlay) = &entry.transliteration {
        let mut table = TransliterationTable::new();
        for (source, latin) in &overlay.chars {
            let mut chars = source.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => table.insert_char(ch, latin),
                _ => {
                    return Err(LexiconError::InvalidDictionary(format!(
                        "transliteration char entry `{source}` for {} is not a single character",
                        spec.language
                    )))
                }
            }
        }
        for (word, latin) in &overlay.words {
            table.insert_word(word, latin);
        }
        if replace {
            if tables.transliteration.is_syllabic() {
                table = table.syllabic();
            }
            tables.transliteration = table;
        } else {
            tables.transliteration.extend(&table);
        }
    }
    if let Some(variants) = &entry.surname_variants {
        let folded = variants
            .iter()
            .map(|(from, to)| (canonical::fold(from), canonical::fold(to)));
        if replace {
            tables.surname_variants = folded.collect::<FxHashMap<_, _>>();
        } else {
            tables.surname_variants.extend(folded);
        }
    }
    Ok(())
}

fn strs(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(String::as_str)
}
