use canonical::Script;
use lexicon::Language;
use serde::{Deserialize, Serialize};

/// Role of a token within a parsed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Honorific,
    Particle,
    First,
    Middle,
    Last,
}

impl Role {
    /// Whether tokens in this role take part in comparison.
    pub fn is_comparable(self) -> bool {
        matches!(self, Role::First | Role::Middle | Role::Last)
    }
}

/// One surface token of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text as written in the input.
    pub surface: String,
    /// Comparison key: folded, transliterated, particle-free.
    pub key: String,
    /// Dominant script of the surface form.
    pub script: Script,
    pub role: Role,
    /// For particles, the index of the name token the particle belongs to.
    pub attaches_to: Option<usize>,
}

impl Token {
    /// Single-letter tokens ("A." in "Robert A. Smith").
    pub fn is_initial(&self) -> bool {
        self.key.chars().count() == 1
    }
}

/// Where the language used to parse a name came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LanguageSource {
    /// The caller's hint named a supported language.
    Hint,
    /// The detector recognized the name.
    Detected,
    /// Nothing recognized; the default rules were used.
    Default,
    /// The caller's hint named an unsupported language.
    Fallback { requested: String },
}

/// A parsed personal name.
///
/// `tokens` keeps every segment of the input in source order; parsing only
/// assigns roles, it never drops a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub raw: String,
    pub language: Language,
    pub language_source: LanguageSource,
    pub tokens: Vec<Token>,
}

impl Name {
    pub fn honorifics(&self) -> impl Iterator<Item = &Token> {
        self.with_role(Role::Honorific)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Token> {
        self.with_role(Role::Particle)
    }

    pub fn first(&self) -> Option<&Token> {
        self.with_role(Role::First).next()
    }

    pub fn middle(&self) -> Vec<&Token> {
        self.with_role(Role::Middle).collect()
    }

    pub fn last(&self) -> Vec<&Token> {
        self.with_role(Role::Last).collect()
    }

    /// Particles attached to the token at `index`.
    pub fn particles_of(&self, index: usize) -> impl Iterator<Item = &Token> {
        self.particles().filter(move |t| t.attaches_to == Some(index))
    }

    /// Number of first, middle and last tokens.
    pub fn comparable_len(&self) -> usize {
        self.tokens.iter().filter(|t| t.role.is_comparable()).count()
    }

    /// True when no token can be compared.
    pub fn is_empty(&self) -> bool {
        self.comparable_len() == 0
    }

    /// Comparable keys in source order, space separated.
    pub fn comparison_key(&self) -> String {
        self.tokens
            .iter()
            .filter(|t| t.role.is_comparable())
            .map(|t| t.key.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every token but the honorifics, folded and with hyphens read as
    /// word breaks. Role assignment does not affect it, so "Abu-Omar" and
    /// "Abu Omar" agree even though one parses a particle and one does not.
    pub fn hyphen_insensitive_key(&self) -> String {
        let folded = self
            .tokens
            .iter()
            .filter(|t| t.role != Role::Honorific)
            .map(|t| canonical::fold(&t.surface))
            .collect::<Vec<_>>()
            .join(" ");
        canonical::hyphen_insensitive(&folded)
    }

    /// The name as displayed: every surface token in source order.
    pub fn display(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn with_role(&self, role: Role) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.role == role)
    }
}
