use lexicon::{Dictionaries, Language};
use parser::{Name, Role, Token};
use phonetic::PhoneticEncoder;
use similarity::{TokenProfile, Variant};

/// Expands given-name keys into their diminutive classes.
#[derive(Debug, Clone, Copy)]
pub struct DiminutiveResolver<'a> {
    dicts: &'a Dictionaries,
}

impl<'a> DiminutiveResolver<'a> {
    pub fn new(dicts: &'a Dictionaries) -> Self {
        Self { dicts }
    }

    /// Every known variant of `key`, the key itself first.
    ///
    /// The language's own class comes first, then every other language's
    /// class containing the key, so a romanized "Paco" read as English still
    /// reaches "Francisco". Unknown keys expand to themselves.
    pub fn expand(&self, key: &str, language: Language) -> Vec<String> {
        let mut variants = vec![key.to_string()];
        let languages = std::iter::once(language)
            .chain(Language::ALL.into_iter().filter(|other| *other != language));
        for class in languages.filter_map(|lang| self.class_of(key, lang)) {
            for member in class {
                if !variants.contains(member) {
                    variants.push(member.clone());
                }
            }
        }
        variants
    }

    /// Whether any language knows `key` as part of a diminutive class.
    pub fn is_known(&self, key: &str) -> bool {
        Language::ALL
            .into_iter()
            .any(|lang| self.class_of(key, lang).is_some())
    }

    fn class_of(&self, key: &str, language: Language) -> Option<&'a [String]> {
        self.dicts
            .rules(language)
            .tables()
            .diminutives
            .class_of(key)
    }
}

/// Comparison-ready tokens of one name, grouped by role.
///
/// Hyphenated tokens ("mary-jane") contribute one profile per part.
#[derive(Debug, Clone, Default)]
pub(crate) struct PreparedName {
    pub first: Vec<TokenProfile>,
    pub middle: Vec<TokenProfile>,
    pub last: Vec<TokenProfile>,
}

impl PreparedName {
    pub fn new(name: &Name, resolver: &DiminutiveResolver<'_>, encoder: &PhoneticEncoder) -> Self {
        let mut prepared = PreparedName::default();
        for token in &name.tokens {
            let slot = match token.role {
                Role::First => &mut prepared.first,
                Role::Middle => &mut prepared.middle,
                Role::Last => &mut prepared.last,
                Role::Honorific | Role::Particle => continue,
            };
            slot.extend(profiles(token, name.language, resolver, encoder));
        }
        prepared
    }

    pub fn role(&self, role: Role) -> &[TokenProfile] {
        match role {
            Role::First => &self.first,
            Role::Middle => &self.middle,
            Role::Last => &self.last,
            Role::Honorific | Role::Particle => &[],
        }
    }

    /// The reading with first and last exchanged, when both are present.
    pub fn swapped(&self) -> Option<PreparedName> {
        if self.first.is_empty() || self.last.is_empty() {
            return None;
        }
        Some(PreparedName {
            first: self.last.clone(),
            middle: self.middle.clone(),
            last: self.first.clone(),
        })
    }
}

fn profiles(
    token: &Token,
    language: Language,
    resolver: &DiminutiveResolver<'_>,
    encoder: &PhoneticEncoder,
) -> Vec<TokenProfile> {
    let expand = matches!(token.role, Role::First | Role::Middle);

    // "jean-pierre" is one class entry ("jp"); split only unknown compounds.
    let parts: Vec<&str> = if expand && resolver.is_known(&token.key) {
        vec![token.key.as_str()]
    } else {
        let split: Vec<&str> = token.key.split('-').filter(|p| !p.is_empty()).collect();
        if split.is_empty() {
            vec![token.key.as_str()]
        } else {
            split
        }
    };

    parts
        .into_iter()
        .map(|part| {
            let keys = if expand && part.chars().count() > 1 {
                resolver.expand(part, language)
            } else {
                vec![part.to_string()]
            };
            let variants = keys
                .into_iter()
                .enumerate()
                .map(|(i, key)| {
                    let phonetic = encoder.encode(&key, language);
                    Variant::new(key, phonetic, i == 0)
                })
                .collect();
            TokenProfile {
                script: token.script,
                language,
                variants,
            }
        })
        .collect()
}
