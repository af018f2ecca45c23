use canonical::Script;
use lexicon::{Dictionaries, Language};
use phonetic::{agree, PhoneticKeys};
use serde::Serialize;

use crate::config::SimilarityConfig;
use crate::metrics::lexical;

/// One spelling a token may be compared under: the token itself or a
/// diminutive variant of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub key: String,
    /// Transliteration-equivalence key used on the cross-script path.
    pub loose: String,
    pub phonetic: PhoneticKeys,
    /// False for variants contributed by a diminutive class.
    pub own: bool,
}

impl Variant {
    pub fn new(key: impl Into<String>, phonetic: PhoneticKeys, own: bool) -> Self {
        let key = key.into();
        Self {
            loose: canonical::loose_key(&key),
            key,
            phonetic,
            own,
        }
    }
}

/// A token prepared for comparison.
///
/// `variants[0]` is always the token's own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenProfile {
    pub script: Script,
    pub language: Language,
    pub variants: Vec<Variant>,
}

impl TokenProfile {
    pub fn key(&self) -> &str {
        self.variants.first().map(|v| v.key.as_str()).unwrap_or_default()
    }

    pub fn is_initial(&self) -> bool {
        self.key().chars().count() == 1
    }

    fn crosses_script(&self) -> bool {
        self.script != Script::Latin || self.language.native_script() != Script::Latin
    }
}

/// Best-scoring variant pair between two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore {
    pub score: f64,
    /// Index into the first token's variants.
    pub a: usize,
    /// Index into the second token's variants.
    pub b: usize,
    /// Whether the chosen pair's phonetic keys intersect.
    pub phonetic_agree: bool,
}

impl PairScore {
    const NONE: PairScore = PairScore {
        score: 0.0,
        a: 0,
        b: 0,
        phonetic_agree: false,
    };

    /// Higher score wins; on a tie, phonetic agreement wins.
    pub fn beats(&self, other: &PairScore) -> bool {
        self.score > other.score
            || (self.score == other.score && self.phonetic_agree && !other.phonetic_agree)
    }
}

/// Token similarity over comparison keys, phonetic keys and
/// transliteration equivalence.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityEngine<'a> {
    dicts: &'a Dictionaries,
    config: &'a SimilarityConfig,
    strict_script: bool,
    variant_discount: f64,
}

impl<'a> SimilarityEngine<'a> {
    pub fn new(dicts: &'a Dictionaries, config: &'a SimilarityConfig) -> Self {
        Self {
            dicts,
            config,
            strict_script: false,
            variant_discount: 1.0,
        }
    }

    /// Disables the equivalence override and the cross-script path.
    pub fn with_strict_script(mut self, strict: bool) -> Self {
        self.strict_script = strict;
        self
    }

    /// Multiplier applied to pairs where either side is a diminutive
    /// variant rather than the token itself.
    pub fn with_variant_discount(mut self, discount: f64) -> Self {
        self.variant_discount = discount;
        self
    }

    /// Similarity of two spellings in [0, 1].
    pub fn variants(
        &self,
        a: &TokenProfile,
        va: &Variant,
        b: &TokenProfile,
        vb: &Variant,
    ) -> f64 {
        if va.key == vb.key {
            return 1.0;
        }
        if !self.strict_script && self.equivalent(&va.key, &vb.key, a.language, b.language) {
            return self.config.equivalence_score;
        }

        let lex = lexical(&va.key, &vb.key, self.config);
        let mut score = lex.score;
        if agree(&va.phonetic, &vb.phonetic)
            && (lex.levenshtein >= self.config.levenshtein_floor
                || lex.jaro >= self.config.phonetic_min_jaro)
        {
            score = score.max(self.config.phonetic_floor);
        }

        if !self.strict_script && (a.crosses_script() || b.crosses_script()) {
            let loose = lexical(&va.loose, &vb.loose, self.config).score;
            score = score.max(loose * self.config.cross_script_factor);
        }
        score.clamp(0.0, 1.0)
    }

    /// Maximum similarity over all cross pairs of the two tokens' variant
    /// sets. With `initials`, a single letter matches any token it
    /// abbreviates.
    pub fn tokens(&self, a: &TokenProfile, b: &TokenProfile, initials: bool) -> PairScore {
        if initials && (a.is_initial() || b.is_initial()) && abbreviates(a.key(), b.key()) {
            return PairScore {
                score: self.config.initial_match_score,
                a: 0,
                b: 0,
                phonetic_agree: true,
            };
        }

        let mut best = PairScore::NONE;
        for (i, va) in a.variants.iter().enumerate() {
            for (j, vb) in b.variants.iter().enumerate() {
                let mut score = self.variants(a, va, b, vb);
                if !(va.own && vb.own) {
                    score *= self.variant_discount;
                }
                let candidate = PairScore {
                    score,
                    a: i,
                    b: j,
                    phonetic_agree: phonetic_agreement(va, vb),
                };
                if candidate.beats(&best) {
                    best = candidate;
                }
            }
        }
        best
    }

    fn equivalent(&self, a: &str, b: &str, la: Language, lb: Language) -> bool {
        [la, lb]
            .into_iter()
            .any(|language| self.dicts.rules(language).tables().equivalences.equivalent(a, b))
    }
}

/// Phonetic agreement of two spellings; without any phonetic keys on
/// either side, key equality decides.
pub fn phonetic_agreement(a: &Variant, b: &Variant) -> bool {
    if a.phonetic.is_empty() && b.phonetic.is_empty() {
        a.key == b.key
    } else {
        agree(&a.phonetic, &b.phonetic)
    }
}

fn abbreviates(a: &str, b: &str) -> bool {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    match (short.chars().next(), long.chars().next()) {
        (Some(initial), Some(head)) => short.chars().count() == 1 && initial == head,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonetic::PhoneticEncoder;

    fn profile(key: &str, language: Language, script: Script, extra: &[&str]) -> TokenProfile {
        let encoder = PhoneticEncoder::new();
        let mut variants = vec![Variant::new(key, encoder.encode(key, language), true)];
        for v in extra {
            variants.push(Variant::new(*v, encoder.encode(v, language), false));
        }
        TokenProfile {
            script,
            language,
            variants,
        }
    }

    fn latin(key: &str) -> TokenProfile {
        profile(key, Language::English, Script::Latin, &[])
    }

    fn with_engine<T>(f: impl FnOnce(SimilarityEngine<'_>) -> T) -> T {
        let dicts = Dictionaries::load().unwrap();
        let config = SimilarityConfig::default();
        f(SimilarityEngine::new(&dicts, &config).with_variant_discount(0.95))
    }

    #[test]
    fn phonetic_floor_lifts_close_spellings() {
        with_engine(|engine| {
            let score = engine.tokens(&latin("john"), &latin("jon"), false).score;
            assert!((score - 0.9166).abs() < 1e-3);
            let score = engine.tokens(&latin("smith"), &latin("smyth"), false).score;
            assert!(score >= 0.9);
        });
    }

    #[test]
    fn phonetic_floor_needs_lexical_support() {
        with_engine(|engine| {
            // "jane" and "john" share a metaphone code but little else.
            let score = engine.tokens(&latin("jane"), &latin("john"), false).score;
            assert!(score < 0.9);
        });
    }

    #[test]
    fn equivalence_override() {
        with_engine(|engine| {
            let a = profile("bin", Language::Arabic, Script::Latin, &[]);
            let b = profile("ibn", Language::Arabic, Script::Latin, &[]);
            assert_eq!(engine.tokens(&a, &b, false).score, 0.98);
            let strict = engine.with_strict_script(true);
            assert!(strict.tokens(&a, &b, false).score < 0.98);
        });
    }

    #[test]
    fn diminutive_variants_are_discounted() {
        with_engine(|engine| {
            let robert = profile("robert", Language::English, Script::Latin, &["bob", "rob"]);
            let bob = profile("bob", Language::English, Script::Latin, &["robert", "rob"]);
            let pair = engine.tokens(&robert, &bob, false);
            assert!((pair.score - 0.95).abs() < 1e-12);
            assert!(pair.phonetic_agree);
        });
    }

    #[test]
    fn initials_match_their_names() {
        with_engine(|engine| {
            let a = latin("a");
            assert_eq!(engine.tokens(&a, &latin("alan"), true).score, 1.0);
            assert!(engine.tokens(&a, &latin("brian"), true).score < 0.5);
            assert!(engine.tokens(&a, &latin("alan"), false).score < 1.0);
        });
    }

    #[test]
    fn cross_script_path_uses_loose_keys() {
        with_engine(|engine| {
            let native = profile("aleksandr", Language::Russian, Script::Cyrillic, &[]);
            let latin = latin("alexander");
            let cross = engine.tokens(&native, &latin, false).score;
            let strict = engine.with_strict_script(true).tokens(&native, &latin, false).score;
            assert!(cross >= strict);
            assert!(cross > 0.85);
        });
    }

    #[test]
    fn symmetric() {
        with_engine(|engine| {
            let pairs = [("dwayne", "duane"), ("catherine", "kathryn"), ("li", "lee")];
            for (x, y) in pairs {
                let (a, b) = (latin(x), latin(y));
                assert_eq!(
                    engine.tokens(&a, &b, false).score,
                    engine.tokens(&b, &a, false).score
                );
            }
        });
    }
}
