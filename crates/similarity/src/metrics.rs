//! Edit-distance metrics over comparison keys.

use crate::config::SimilarityConfig;

/// Component scores of one lexical comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexical {
    pub jaro: f64,
    pub levenshtein: f64,
    /// The score the engine uses: Jaro-Winkler, or plain Jaro for short
    /// keys and for keys too far apart by edit distance.
    pub score: f64,
}

/// Compares two keys. Inputs are put in a canonical order first, so the
/// result does not depend on argument order.
pub fn lexical(a: &str, b: &str, config: &SimilarityConfig) -> Lexical {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    if a.is_empty() || b.is_empty() {
        let same = a == b;
        let score = if same { 1.0 } else { 0.0 };
        return Lexical {
            jaro: score,
            levenshtein: score,
            score,
        };
    }

    let jaro = strsim::jaro(a, b);
    let levenshtein = strsim::normalized_levenshtein(a, b);
    let shortest = a.chars().count().min(b.chars().count());
    let score = if shortest < config.min_prefix_len || levenshtein < config.levenshtein_floor {
        jaro
    } else {
        winkler(jaro, a, b, config.prefix_scale)
    };
    Lexical {
        jaro,
        levenshtein,
        score: score.clamp(0.0, 1.0),
    }
}

/// Winkler's common-prefix boost with a configurable scale;
/// `strsim::jaro_winkler` fixes the scale at 0.1.
fn winkler(jaro: f64, a: &str, b: &str, scale: f64) -> f64 {
    let prefix = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .take(4)
        .count();
    jaro + prefix as f64 * scale * (1.0 - jaro)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> f64 {
        lexical(a, b, &SimilarityConfig::default()).score
    }

    #[test]
    fn identical_keys_score_one() {
        assert_eq!(score("smith", "smith"), 1.0);
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score("smith", ""), 0.0);
    }

    #[test]
    fn short_keys_use_plain_jaro() {
        let l = lexical("john", "jon", &SimilarityConfig::default());
        assert!((l.score - l.jaro).abs() < 1e-12);
        assert!((l.score - 0.9166).abs() < 1e-3);
    }

    #[test]
    fn shared_prefix_is_rewarded() {
        let l = lexical("martha", "marhta", &SimilarityConfig::default());
        assert!(l.score > l.jaro);
        assert!((l.score - 0.9611).abs() < 1e-3);
    }

    #[test]
    fn default_scale_agrees_with_strsim() {
        for (a, b) in [("martha", "marhta"), ("dwayne", "duane"), ("dixon", "dicksonx")] {
            let jaro = strsim::jaro(a, b);
            assert!((winkler(jaro, a, b, 0.1) - strsim::jaro_winkler(a, b)).abs() < 1e-12);
        }
    }

    #[test]
    fn order_does_not_matter() {
        for (a, b) in [("dwayne", "duane"), ("dixon", "dicksonx"), ("jones", "johnson")] {
            assert_eq!(score(a, b), score(b, a));
        }
    }
}
