use std::sync::Arc;
use std::time::Instant;

use lexicon::{Dictionaries, LanguageDetector, ScriptDetector};
use parser::{LanguageSource, Name, Parser};
use phonetic::PhoneticEncoder;
use similarity::SimilarityEngine;
use tracing::{debug, span, warn, Level};

use crate::resolver::{DiminutiveResolver, PreparedName};
use crate::scorer::CompositeScorer;
use crate::types::{MatchError, MatchOptions, MatchResult, MatcherConfig, RoleScores, Side};


/// Name matcher over an immutable dictionary handle.
///
/// Construction validates the configuration and loads dictionaries; after
/// that every call only reads shared state, so one `Matcher` can serve any
/// number of threads.
pub struct Matcher {
    dicts: Arc<Dictionaries>,
    detector: Box<dyn LanguageDetector>,
    config: MatcherConfig,
    encoder: PhoneticEncoder,
}

impl Matcher {
    /// Builds a matcher over the built-in dictionaries.
    pub fn new(config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let dicts = Dictionaries::builder()
            .with_normalize(config.normalize.clone())
            .build()?;
        Self::with_dictionaries(Arc::new(dicts), config)
    }

    /// Builds a matcher over an already loaded dictionary handle, e.g. one
    /// extended with overlays and shared between matchers.
    pub fn with_dictionaries(
        dicts: Arc<Dictionaries>,
        config: MatcherConfig,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            dicts,
            detector: Box::new(ScriptDetector),
            config,
            encoder: PhoneticEncoder::new(),
        })
    }

    /// Replaces the language detector used when no hint is given.
    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn dictionaries(&self) -> &Arc<Dictionaries> {
        &self.dicts
    }

    /// Parses one name the way [`Matcher::match_names`] does.
    pub fn parse(&self, raw: &str, hint: Option<&str>) -> Name {
        Parser::new(&self.dicts, self.detector.as_ref()).parse(raw, hint)
    }

    /// Matches two names. Never fails: malformed input yields a low or zero
    /// confidence with the cause recorded in `diagnostics`.
    pub fn match_names(&self, name1: &str, name2: &str, options: &MatchOptions) -> MatchResult {
        let span = span!(Level::DEBUG, "matcher.match");
        let _guard = span.enter();
        let started = Instant::now();

        let a = self.parse(name1, options.language_hint1.as_deref());
        let b = self.parse(name2, options.language_hint2.as_deref());

        let mut diagnostics = Vec::new();
        for (side, name) in [(Side::Name1, &a), (Side::Name2, &b)] {
            if let LanguageSource::Fallback { requested } = &name.language_source {
                diagnostics.push(MatchError::UnsupportedLanguage {
                    requested: requested.clone(),
                    fallback: name.language.code().to_string(),
                });
            }
            if name.is_empty() {
                warn!(side = %side, "empty_name_input");
                diagnostics.push(MatchError::EmptyInput { side });
            }
        }

        if a.is_empty() || b.is_empty() {
            return MatchResult {
                name1: a,
                name2: b,
                scores: RoleScores::default(),
                weights: Default::default(),
                confidence: 0.0,
                best_pairs: Vec::new(),
                swapped_order: false,
                length_penalty: 1.0,
                disagreement_penalty: 1.0,
                min_confidence_threshold: options.min_confidence_threshold,
                diagnostics,
            };
        }

        let resolver = DiminutiveResolver::new(&self.dicts);
        let prepared_a = PreparedName::new(&a, &resolver, &self.encoder);
        let prepared_b = PreparedName::new(&b, &resolver, &self.encoder);

        let engine = SimilarityEngine::new(&self.dicts, &self.config.similarity)
            .with_strict_script(options.strict_script_matching);
        let composite = CompositeScorer::new(&self.config.scoring, engine).score(
            &a,
            &prepared_a,
            &b,
            &prepared_b,
        );
        let scored = composite.scored;

        debug!(
            language1 = %a.language,
            language2 = %b.language,
            confidence = scored.confidence,
            swapped = composite.swapped_order,
            elapsed_us = started.elapsed().as_micros() as u64,
            "match_scored"
        );

        MatchResult {
            name1: a,
            name2: b,
            scores: scored.scores,
            weights: scored.weights,
            confidence: scored.confidence,
            best_pairs: scored.best_pairs,
            swapped_order: composite.swapped_order,
            length_penalty: composite.length_penalty,
            disagreement_penalty: scored.disagreement_penalty,
            min_confidence_threshold: options.min_confidence_threshold,
            diagnostics,
        }
    }

    /// Confidence only, with default options.
    pub fn quick_match(&self, name1: &str, name2: &str) -> f64 {
        self.match_names(name1, name2, &MatchOptions::default())
            .confidence
    }
}
