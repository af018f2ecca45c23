use canonical::Segment;
use lexicon::{Dictionaries, Language, LanguageDetector, LanguageRules, NameOrder};
use tracing::trace;

use crate::name::{LanguageSource, Name, Role, Token};

/// Splits raw names into classified tokens.
///
/// Borrowing, cheap to build per call. The dictionaries and detector are
/// only read.
pub struct Parser<'a> {
    dicts: &'a Dictionaries,
    detector: &'a dyn LanguageDetector,
}

impl<'a> Parser<'a> {
    pub fn new(dicts: &'a Dictionaries, detector: &'a dyn LanguageDetector) -> Self {
        Self { dicts, detector }
    }

    /// Parses `raw`, picking the language from `hint` when given and from
    /// the detector otherwise.
    pub fn parse(&self, raw: &str, hint: Option<&str>) -> Name {
        let (language, source) = self.resolve_language(raw, hint);
        self.parse_as(raw, language, source)
    }

    /// Parses `raw` under an already-resolved language.
    pub fn parse_as(&self, raw: &str, language: Language, source: LanguageSource) -> Name {
        let rules = self.dicts.rules(language);
        let segments = rules.segment(raw);
        let keys: Vec<String> = segments
            .iter()
            .map(|seg| self.token_key(seg, language))
            .collect();

        let roles = assign_roles(self.dicts, rules, &segments, &keys);
        let tokens = segments
            .into_iter()
            .zip(keys)
            .zip(roles)
            .map(|((seg, key), (role, attaches_to))| {
                let key = if role == Role::Last {
                    rules
                        .surname_key(rules.strip_glued_particle(&key))
                        .to_string()
                } else {
                    key
                };
                Token {
                    script: canonical::dominant_script(&seg.text),
                    surface: seg.text,
                    key,
                    role,
                    attaches_to,
                }
            })
            .collect::<Vec<_>>();

        trace!(
            language = %language,
            tokens = tokens.len(),
            comparable = tokens.iter().filter(|t| t.role.is_comparable()).count(),
            "name_parsed"
        );

        Name {
            raw: raw.to_string(),
            language,
            language_source: source,
            tokens,
        }
    }

    fn resolve_language(&self, raw: &str, hint: Option<&str>) -> (Language, LanguageSource) {
        match hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(tag) => match self.dicts.resolve(tag) {
                (language, false) => (language, LanguageSource::Hint),
                (language, true) => (
                    language,
                    LanguageSource::Fallback {
                        requested: tag.to_string(),
                    },
                ),
            },
            None => match self.detector.detect(raw) {
                Some(language) => (language, LanguageSource::Detected),
                None => (Language::DEFAULT, LanguageSource::Default),
            },
        }
    }

    /// Normalized key with syllable breaks removed. Falls back to the folded
    /// surface when transliteration maps the token to nothing.
    fn token_key(&self, seg: &Segment, language: Language) -> String {
        let key: String = self
            .dicts
            .normalize(&seg.text, language)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if key.is_empty() {
            seg.text.to_lowercase()
        } else {
            key
        }
    }
}

type Assignment = (Role, Option<usize>);

fn assign_roles(
    dicts: &Dictionaries,
    rules: &dyn LanguageRules,
    segments: &[Segment],
    keys: &[String],
) -> Vec<Assignment> {
    let n = keys.len();
    let mut roles: Vec<Assignment> = vec![(Role::Last, None); n];
    if n == 0 {
        return roles;
    }

    let tables = rules.tables();
    let common = dicts.common_honorifics();
    let is_particle = |i: usize| tables.particles.contains(&keys[i]);

    // An abbreviated title ("Dott.", "Sra.") is recognized from any
    // language's table; a bare word only from its own language's.
    let is_prefix_honorific = |i: usize| {
        tables.honorifics.is_prefix(&keys[i])
            || common.is_prefix(&keys[i])
            || (segments[i].text.ends_with('.') && dicts.is_any_prefix_honorific(&keys[i]))
    };

    // Honorifics: never strip the last remaining token, and stop at a
    // particle so "Dr. von Neumann" keeps its "von".
    let mut lo = 0;
    let mut hi = n;
    while hi - lo > 1 && !is_particle(lo) && is_prefix_honorific(lo) {
        roles[lo] = (Role::Honorific, None);
        lo += 1;
    }
    while hi - lo > 1
        && !is_particle(hi - 1)
        && (tables.honorifics.is_suffix(&keys[hi - 1]) || common.is_suffix(&keys[hi - 1]))
    {
        roles[hi - 1] = (Role::Honorific, None);
        hi -= 1;
    }

    // Particles attach to the next token; a trailing particle is a name.
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let mut names = Vec::with_capacity(hi - lo);
    let mut surname_start = None;
    let mut i = lo;
    while i < hi {
        match tables.particles.match_at(&key_refs[..hi], i) {
            Some(len) if i + len < hi => {
                for slot in &mut roles[i..i + len] {
                    *slot = (Role::Particle, Some(i + len));
                }
                if i > lo && surname_start.is_none() && rules.particle_starts_surname() {
                    surname_start = Some(names.len());
                }
                i += len;
            }
            _ => {
                names.push(i);
                i += 1;
            }
        }
    }

    let given: &[usize];
    let family: &[usize];
    match surname_start {
        Some(start) if start > 0 => {
            given = &names[..start];
            family = &names[start..];
        }
        _ => {
            let surfaces: Vec<&str> = names.iter().map(|&i| segments[i].text.as_str()).collect();
            let name_keys: Vec<&str> = names.iter().map(|&i| key_refs[i]).collect();
            match (names.len(), rules.name_order(&surfaces, &name_keys)) {
                (0 | 1, _) => {
                    given = &[];
                    family = &names[..];
                }
                (_, NameOrder::GivenFirst) => {
                    given = &names[..names.len() - 1];
                    family = &names[names.len() - 1..];
                }
                (_, NameOrder::FamilyFirst) => {
                    // Family name first; reorder so the given name leads.
                    family = &names[..1];
                    given = &names[1..];
                }
            }
        }
    }

    if let Some((&first, middle)) = given.split_first() {
        roles[first] = (Role::First, None);
        for &i in middle {
            roles[i] = (Role::Middle, None);
        }
    }
    for &i in family {
        roles[i] = (Role::Last, None);
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::ScriptDetector;

    fn parse(raw: &str, hint: Option<&str>) -> Name {
        let dicts = Dictionaries::load().unwrap();
        Parser::new(&dicts, &ScriptDetector).parse(raw, hint)
    }

    fn keys(tokens: Vec<&Token>) -> Vec<&str> {
        tokens.into_iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn given_first_names() {
        let name = parse("Robert A. Smith", None);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("robert"));
        assert_eq!(keys(name.middle()), vec!["a"]);
        assert!(name.middle()[0].is_initial());
        assert_eq!(keys(name.last()), vec!["smith"]);
        assert_eq!(name.language, Language::English);
        assert_eq!(name.language_source, LanguageSource::Default);
    }

    #[test]
    fn honorific_before_particle_keeps_the_particle() {
        let name = parse("Dr. von Neumann", None);
        let honorifics: Vec<_> = name.honorifics().map(|t| t.surface.as_str()).collect();
        assert_eq!(honorifics, vec!["Dr."]);
        let particles: Vec<_> = name.particles().map(|t| t.surface.as_str()).collect();
        assert_eq!(particles, vec!["von"]);
        assert_eq!(keys(name.last()), vec!["neumann"]);
        assert!(name.first().is_none());
        assert_eq!(name.particles().next().and_then(|t| t.attaches_to), Some(2));
    }

    #[test]
    fn honorifics_never_consume_the_whole_name() {
        let name = parse("Dr. Prof.", Some("en"));
        assert_eq!(name.honorifics().count(), 1);
        assert_eq!(keys(name.last()), vec!["prof"]);

        let name = parse("Martin Luther King Jr.", Some("en"));
        assert_eq!(name.honorifics().map(|t| t.key.as_str()).collect::<Vec<_>>(), vec!["jr"]);
        assert_eq!(keys(name.last()), vec!["king"]);
    }

    #[test]
    fn single_token_is_the_last_name() {
        let name = parse("Madonna", None);
        assert!(name.first().is_none());
        assert_eq!(keys(name.last()), vec!["madonna"]);
    }

    #[test]
    fn particle_starts_a_multi_token_surname() {
        let name = parse("Maria de la Cruz Garcia", None);
        assert_eq!(name.language, Language::Spanish);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("maria"));
        assert_eq!(keys(name.last()), vec!["cruz", "garcia"]);
        assert_eq!(name.particles().count(), 2);
    }

    #[test]
    fn trailing_particle_is_a_name() {
        let name = parse("Anna Di", Some("it"));
        assert_eq!(keys(name.last()), vec!["di"]);
        assert_eq!(name.particles().count(), 0);
    }

    #[test]
    fn family_first_languages_reorder() {
        let name = parse("Wáng Wěi", None);
        assert_eq!(name.language, Language::Mandarin);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("wei"));
        assert_eq!(keys(name.last()), vec!["wang"]);

        let name = parse("王小明", None);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("xiaoming"));
        assert_eq!(keys(name.last()), vec!["wang"]);

        let name = parse("Xiaoming Wong", Some("zh"));
        assert_eq!(keys(name.last()), vec!["wang"]);
    }

    #[test]
    fn mandarin_title_suffix_is_an_honorific() {
        let name = parse("王先生", None);
        assert_eq!(name.honorifics().count(), 1);
        assert_eq!(keys(name.last()), vec!["wang"]);
    }

    #[test]
    fn russian_patronymic_is_a_middle_name() {
        let name = parse("Александр Сергеевич Пушкин", None);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("aleksandr"));
        assert_eq!(keys(name.middle()), vec!["sergeevich"]);
        assert_eq!(keys(name.last()), vec!["pushkin"]);

        let name = parse("Пушкин Александр Сергеевич", None);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("aleksandr"));
        assert_eq!(keys(name.last()), vec!["pushkin"]);
    }

    #[test]
    fn two_word_russian_names_are_given_name_first() {
        for (raw, first, last) in [
            ("Екатерина Ким", "ekaterina", "kim"),
            ("Марина Ким", "marina", "kim"),
            ("Константин Цой", "konstantin", "tsoy"),
        ] {
            let name = parse(raw, None);
            assert_eq!(name.language, Language::Russian);
            assert_eq!(name.first().map(|t| t.key.as_str()), Some(first), "{raw}");
            assert_eq!(keys(name.last()), vec![last], "{raw}");
        }
    }

    #[test]
    fn abbreviated_titles_from_other_languages() {
        let name = parse("Sra. Maria Santos", None);
        assert_eq!(name.honorifics().map(|t| t.key.as_str()).collect::<Vec<_>>(), vec!["sra"]);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("maria"));

        let name = parse("Dott. Francesco Romano", None);
        assert_eq!(name.language, Language::Italian);
        assert_eq!(name.honorifics().count(), 1);

        // Without the abbreviation mark a foreign title is an ordinary word.
        let name = parse("Don Smith", Some("en"));
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("don"));
    }

    #[test]
    fn arabic_compound_given_name_is_one_token() {
        let name = parse("Abdul Rahman", None);
        assert_eq!(name.language, Language::Arabic);
        assert_eq!(keys(name.last()), vec!["abdulrahman"]);
        assert_eq!(name.last()[0].surface, "Abdul Rahman");
        assert_eq!(name.display(), "Abdul Rahman");
    }

    #[test]
    fn arabic_lineage_particles() {
        let name = parse("Mohammed bin Hamad Al Thani", None);
        assert_eq!(name.language, Language::Arabic);
        assert_eq!(name.first().map(|t| t.key.as_str()), Some("mohammed"));
        assert_eq!(keys(name.last()), vec!["hamad", "thani"]);
        let particles: Vec<_> = name.particles().map(|t| t.key.as_str()).collect();
        assert_eq!(particles, vec!["bin", "al"]);

        let name = parse("Omar al-Farouk", None);
        assert_eq!(keys(name.last()), vec!["farouk"]);
        assert_eq!(name.last()[0].surface, "al-Farouk");
    }

    #[test]
    fn unknown_hint_falls_back() {
        let name = parse("John Smith", Some("tlh"));
        assert_eq!(name.language, Language::English);
        assert_eq!(
            name.language_source,
            LanguageSource::Fallback {
                requested: "tlh".into()
            }
        );
    }

    #[test]
    fn no_token_is_dropped() {
        for raw in [
            "Dr. von Neumann",
            "Mohammed bin Hamad Al Thani",
            "Martin Luther King Jr.",
            "  Mary-Jane   Watson ",
            "王小明",
        ] {
            let name = parse(raw, None);
            let surfaces: Vec<_> = name.tokens.iter().map(|t| t.surface.as_str()).collect();
            let segments: Vec<_> = canonical::segment(raw).into_iter().map(|s| s.text).collect();
            if raw == "王小明" {
                assert_eq!(surfaces.concat(), raw);
            } else {
                assert_eq!(surfaces, segments);
            }
        }
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let name = parse("   ", None);
        assert!(name.tokens.is_empty());
        assert!(name.is_empty());
    }
}
