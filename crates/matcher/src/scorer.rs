use lexicon::Language;
use parser::{Name, Role};
use similarity::{PairScore, SimilarityEngine, TokenProfile};

use crate::resolver::PreparedName;
use crate::types::{AppliedWeights, BestPair, RoleScores, ScoringConfig};

const ROLES: [Role; 3] = [Role::First, Role::Middle, Role::Last];

/// Similarity of one role across two names.
#[derive(Debug, Clone)]
struct RoleOutcome {
    role: Role,
    score: f64,
    phonetic: f64,
    best: BestPair,
}

/// Weighted combination of role scores before the order swap is
/// considered.
#[derive(Debug, Clone)]
pub(crate) struct Scored {
    pub scores: RoleScores,
    pub weights: AppliedWeights,
    pub confidence: f64,
    pub best_pairs: Vec<BestPair>,
    pub disagreement_penalty: f64,
}

impl Scored {
    fn empty() -> Self {
        Self {
            scores: RoleScores::default(),
            weights: AppliedWeights::default(),
            confidence: 0.0,
            best_pairs: Vec::new(),
            disagreement_penalty: 1.0,
        }
    }
}

/// Final composite outcome for a pair of names.
#[derive(Debug, Clone)]
pub(crate) struct Composite {
    pub scored: Scored,
    pub swapped_order: bool,
    pub length_penalty: f64,
}

/// Combines role similarities into one confidence.
pub(crate) struct CompositeScorer<'a> {
    config: &'a ScoringConfig,
    engine: SimilarityEngine<'a>,
}

impl<'a> CompositeScorer<'a> {
    pub fn new(config: &'a ScoringConfig, engine: SimilarityEngine<'a>) -> Self {
        Self {
            config,
            engine: engine.with_variant_discount(config.variant_discount),
        }
    }

    pub fn score(
        &self,
        name_a: &Name,
        a: &PreparedName,
        name_b: &Name,
        b: &PreparedName,
    ) -> Composite {
        let mut scored = self.score_prepared(a, b);
        let mut swapped_order = false;

        if name_a.language == Language::Mandarin || name_b.language == Language::Mandarin {
            let candidates = [
                a.swapped().map(|sa| self.score_prepared(&sa, b)),
                b.swapped().map(|sb| self.score_prepared(a, &sb)),
            ];
            let best_swap = candidates
                .into_iter()
                .flatten()
                .fold(None::<Scored>, |best, s| match best {
                    Some(best) if best.confidence >= s.confidence => Some(best),
                    _ => Some(s),
                });
            if let Some(mut swap) = best_swap {
                swap.confidence *= self.config.swapped_order_factor;
                if swap.confidence > scored.confidence {
                    scored = swap;
                    swapped_order = true;
                }
            }
        }

        let diff = name_a.comparable_len().abs_diff(name_b.comparable_len());
        let length_penalty = self.config.length_penalty(diff);
        scored.confidence *= length_penalty;

        let key_a = name_a.hyphen_insensitive_key();
        if !key_a.is_empty() && key_a == name_b.hyphen_insensitive_key() {
            scored.confidence = scored.confidence.max(self.config.hyphen_equivalence_score);
        }
        scored.confidence = scored.confidence.clamp(0.0, 1.0);

        Composite {
            scored,
            swapped_order,
            length_penalty,
        }
    }

    fn score_prepared(&self, a: &PreparedName, b: &PreparedName) -> Scored {
        let outcomes: Vec<RoleOutcome> = ROLES
            .into_iter()
            .filter_map(|role| self.role(role, a.role(role), b.role(role)))
            .collect();
        if outcomes.is_empty() {
            return Scored::empty();
        }

        let phonetic = outcomes.iter().map(|o| o.phonetic).sum::<f64>() / outcomes.len() as f64;
        let w = &self.config.weights;
        let mut scores = RoleScores {
            phonetic: Some(phonetic),
            ..RoleScores::default()
        };
        let mut entries: Vec<(f64, f64)> = Vec::with_capacity(4);
        for outcome in &outcomes {
            match outcome.role {
                Role::First => {
                    scores.first = Some(outcome.score);
                    entries.push((w.first, outcome.score));
                }
                Role::Middle => {
                    scores.middle = Some(outcome.score);
                    entries.push((w.middle, outcome.score));
                }
                _ => {
                    scores.last = Some(outcome.score);
                    entries.push((w.last, outcome.score));
                }
            }
        }
        entries.push((w.phonetic, phonetic));

        // Summed in one order so identical role scores give exactly 1.0.
        let total: f64 = entries.iter().map(|(weight, _)| weight).sum();
        let weighted: f64 = entries.iter().map(|(weight, score)| weight * score).sum();
        let raw = if total > 0.0 { weighted / total } else { 0.0 };

        let share = |present: bool, weight: f64| if present && total > 0.0 { weight / total } else { 0.0 };
        let weights = AppliedWeights {
            first: share(scores.first.is_some(), w.first),
            middle: share(scores.middle.is_some(), w.middle),
            last: share(scores.last.is_some(), w.last),
            phonetic: share(true, w.phonetic),
        };

        let disagreement_penalty = match (scores.first, scores.last) {
            (Some(x), Some(y)) => self.config.disagreement.factor(x.min(y), x.max(y)),
            (Some(x), None) | (None, Some(x)) => self.config.disagreement.factor(x, x),
            (None, None) => 1.0,
        };

        Scored {
            scores,
            weights,
            confidence: (raw * disagreement_penalty).clamp(0.0, 1.0),
            best_pairs: outcomes.into_iter().map(|o| o.best).collect(),
            disagreement_penalty,
        }
    }

    /// Symmetric mean of each side's best matches, or `None` when the role
    /// is missing on either side.
    fn role(&self, role: Role, a: &[TokenProfile], b: &[TokenProfile]) -> Option<RoleOutcome> {
        if a.is_empty() || b.is_empty() {
            return None;
        }
        let initials = role == Role::Middle;

        let mut overall: Option<(PairScore, usize, usize)> = None;
        let mut forward = Vec::with_capacity(a.len());
        for (i, pa) in a.iter().enumerate() {
            let mut best: Option<(PairScore, usize)> = None;
            for (j, pb) in b.iter().enumerate() {
                let pair = self.engine.tokens(pa, pb, initials);
                if best.as_ref().is_none_or(|(current, _)| pair.beats(current)) {
                    best = Some((pair, j));
                }
            }
            if let Some((pair, j)) = best {
                if overall.as_ref().is_none_or(|(current, _, _)| pair.beats(current)) {
                    overall = Some((pair, i, j));
                }
                forward.push(pair);
            }
        }

        let backward: Vec<PairScore> = b
            .iter()
            .filter_map(|pb| {
                a.iter()
                    .map(|pa| self.engine.tokens(pb, pa, initials))
                    .reduce(|best, pair| if pair.beats(&best) { pair } else { best })
            })
            .collect();

        let (pair, i, j) = overall?;
        let best = BestPair {
            role,
            left: a[i].variants[pair.a].key.clone(),
            right: b[j].variants[pair.b].key.clone(),
            score: pair.score,
        };
        Some(RoleOutcome {
            role,
            score: (mean(forward.iter().map(|p| p.score)) + mean(backward.iter().map(|p| p.score)))
                / 2.0,
            phonetic: (mean(forward.iter().map(agreement)) + mean(backward.iter().map(agreement)))
                / 2.0,
            best,
        })
    }
}

fn agreement(pair: &PairScore) -> f64 {
    if pair.phonetic_agree {
        1.0
    } else {
        0.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DiminutiveResolver;
    use lexicon::{Dictionaries, ScriptDetector};
    use parser::Parser;
    use phonetic::PhoneticEncoder;
    use similarity::SimilarityConfig;

    fn composite(a: &str, b: &str) -> Composite {
        composite_with(a, None, b, None)
    }

    fn composite_with(a: &str, hint_a: Option<&str>, b: &str, hint_b: Option<&str>) -> Composite {
        let dicts = Dictionaries::load().unwrap();
        let similarity = SimilarityConfig::default();
        let scoring = ScoringConfig::default();
        let parser = Parser::new(&dicts, &ScriptDetector);
        let resolver = DiminutiveResolver::new(&dicts);
        let encoder = PhoneticEncoder::new();
        let (na, nb) = (parser.parse(a, hint_a), parser.parse(b, hint_b));
        let (pa, pb) = (
            PreparedName::new(&na, &resolver, &encoder),
            PreparedName::new(&nb, &resolver, &encoder),
        );
        let scorer = CompositeScorer::new(&scoring, SimilarityEngine::new(&dicts, &similarity));
        scorer.score(&na, &pa, &nb, &pb)
    }

    #[test]
    fn absent_middle_redistributes_weight() {
        let c = composite("Robert A. Smith", "Bob Smith");
        assert_eq!(c.scored.scores.middle, None);
        assert_eq!(c.scored.weights.middle, 0.0);
        let w = c.scored.weights;
        assert!((w.first + w.last + w.phonetic - 1.0).abs() < 1e-12);
        assert!((w.first - 0.35 / 0.85).abs() < 1e-12);
    }

    #[test]
    fn identical_names_score_exactly_one() {
        for raw in ["John Smith", "Robert A. Smith", "Mary-Jane Watson", "王小明"] {
            let c = composite(raw, raw);
            assert_eq!(c.scored.confidence, 1.0, "{raw}");
            assert!(!c.swapped_order);
        }
    }

    #[test]
    fn best_pairs_name_the_winning_variants() {
        let c = composite("Robert Smith", "Bob Smith");
        let first = c
            .scored
            .best_pairs
            .iter()
            .find(|p| p.role == Role::First)
            .expect("first compared");
        assert_eq!(first.left, first.right);
        assert!((first.score - 0.95).abs() < 1e-12);
    }

    #[test]
    fn disagreement_on_both_anchors_collapses_confidence() {
        let c = composite("Jane Doe", "John Smith");
        assert!(c.scored.disagreement_penalty < 1.0);
        assert!(c.scored.confidence < 0.2);
    }

    #[test]
    fn reversed_romanized_chinese_reads_in_either_order() {
        let c = composite("Wang Xiaoming", "Xiaoming Wang");
        assert_eq!(c.scored.confidence, 1.0);
    }

    #[test]
    fn swapped_reading_is_discounted() {
        let c = composite_with("Zhang Wei", Some("zh"), "Zhang Wei", Some("en"));
        assert!(c.swapped_order);
        assert!((c.scored.confidence - 0.95).abs() < 1e-12);
    }

    #[test]
    fn no_swap_outside_mandarin() {
        let c = composite("Smith John", "John Smith");
        assert!(!c.swapped_order);
        assert!(c.scored.confidence < 0.5);
    }

    #[test]
    fn hyphen_floor() {
        let c = composite("Mary-Jane Watson", "Mary Jane Watson");
        assert!(c.scored.confidence >= 0.95);
    }

    #[test]
    fn hyphen_floor_ignores_particle_classification() {
        let c = composite_with("Abu Omar", Some("ar"), "Abu-Omar", Some("ar"));
        assert!(c.scored.confidence >= 0.95, "got {}", c.scored.confidence);
        let c = composite("Ibn-Sina", "Ibn Sina");
        assert!(c.scored.confidence >= 0.95, "got {}", c.scored.confidence);
        let c = composite("Dr. Ibn-Sina", "Ibn Sina");
        assert!(c.scored.confidence >= 0.95, "got {}", c.scored.confidence);
    }

    #[test]
    fn length_penalty_applies_beyond_threshold() {
        let c = composite("John Smith", "John Paul George Smith");
        assert!(c.length_penalty < 1.0);
        let c = composite("John Smith", "John Paul Smith");
        assert_eq!(c.length_penalty, 1.0);
    }
}
