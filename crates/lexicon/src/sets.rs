use fxhash::FxHashSet;

/// Titles and courtesy forms removed before comparison.
///
/// Prefixes ("dr", "herr", "sheikh") are only stripped from the front of a
/// name, suffixes ("jr", "phd") only from the back. Entries are stored as
/// comparison keys, so "Dr." and "dr" are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HonorificSet {
    prefixes: FxHashSet<String>,
    suffixes: FxHashSet<String>,
}

impl HonorificSet {
    pub fn new<'a>(
        prefixes: impl IntoIterator<Item = &'a str>,
        suffixes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut set = Self::default();
        set.extend_prefixes(prefixes);
        set.extend_suffixes(suffixes);
        set
    }

    pub fn extend_prefixes<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        self.prefixes.extend(keys(items));
    }

    pub fn extend_suffixes<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        self.suffixes.extend(keys(items));
    }

    pub fn merge(&mut self, other: &HonorificSet) {
        self.prefixes.extend(other.prefixes.iter().cloned());
        self.suffixes.extend(other.suffixes.iter().cloned());
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn is_prefix(&self, key: &str) -> bool {
        self.prefixes.contains(key)
    }

    pub fn is_suffix(&self, key: &str) -> bool {
        self.suffixes.contains(key)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.suffixes.is_empty()
    }
}

/// Low-content surname prefixes ("von", "de la", "bin").
///
/// Multi-word particles are matched greedily, longest first. Single-letter
/// keys are never particles: they are indistinguishable from initials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticleSet {
    single: FxHashSet<String>,
    multi: Vec<Vec<String>>,
}

impl ParticleSet {
    pub fn new<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        set.extend(items);
        set
    }

    pub fn extend<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        for key in keys(items) {
            let words: Vec<String> = key.split(' ').map(str::to_string).collect();
            if words.len() > 1 {
                if !self.multi.contains(&words) {
                    self.multi.push(words);
                }
            } else if key.chars().count() > 1 {
                self.single.insert(key);
            }
        }
        self.multi.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.single.contains(key)
    }

    /// Number of tokens forming a particle starting at `keys[at]`, if any.
    pub fn match_at(&self, keys: &[&str], at: usize) -> Option<usize> {
        let rest = keys.get(at..)?;
        for words in &self.multi {
            if rest.len() >= words.len() && words.iter().zip(rest).all(|(w, k)| w == k) {
                return Some(words.len());
            }
        }
        rest.first()
            .filter(|key| self.single.contains(**key))
            .map(|_| 1)
    }

    pub fn len(&self) -> usize {
        self.single.len() + self.multi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.multi.is_empty()
    }
}

fn keys<'a>(items: impl IntoIterator<Item = &'a str>) -> impl Iterator<Item = String> {
    items
        .into_iter()
        .map(canonical::fold)
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honorifics_fold_punctuation() {
        let set = HonorificSet::new(["Dr.", "Prof"], ["Jr."]);
        assert!(set.is_prefix("dr"));
        assert!(set.is_prefix("prof"));
        assert!(set.is_suffix("jr"));
        assert!(!set.is_prefix("jr"));
    }

    #[test]
    fn multi_word_particles_win_over_single() {
        let set = ParticleSet::new(["de", "de la", "la", "van der"]);
        let keys = ["maria", "de", "la", "cruz"];
        assert_eq!(set.match_at(&keys, 1), Some(2));
        assert_eq!(set.match_at(&keys, 2), Some(1));
        assert_eq!(set.match_at(&keys, 3), None);
        assert_eq!(set.match_at(&keys, 9), None);
        assert!(set.contains("de"));
        assert!(!set.contains("van der"));
    }

    #[test]
    fn single_letters_are_not_particles() {
        let set = ParticleSet::new(["d'", "o'", "y"]);
        assert!(set.is_empty());
    }
}
