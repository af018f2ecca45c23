use canonical::TransliterationTable;

use crate::language::Language;
use crate::rules::{LanguageRules, NameOrder, RuleTables, TableKind};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "gospodin", "gospozha", "tovarishch", "doktor", "professor", "akademik", "general",
    "polkovnik", "mayor", "kapitan", "knyaz", "knyaginya", "graf", "grafinya", "baron",
    "baronessa",
];

const PARTICLES: &[&str] = &["de", "van", "von", "la", "le", "du", "der", "des"];

const DIMINUTIVES: &[&[&str]] = &[
    &["aleksandr", "alexander", "alexandr", "aleksander", "sasha", "sanya", "shura", "sashka"],
    &["aleksandra", "alexandra", "shurochka"],
    &["aleksey", "alexey", "alexei", "aleksei", "alyosha", "lesha", "lyosha", "lyokha"],
    &["dmitriy", "dmitry", "dmitri", "dima", "mitya"],
    &["ivan", "vanya", "vanechka"],
    &["mikhail", "misha", "mishka"],
    &["nikolay", "nikolai", "kolya"],
    &["vladimir", "volodya", "vova"],
    &["sergey", "sergei", "seryozha", "serezha"],
    &["pavel", "pasha"],
    &["petr", "pyotr", "petya"],
    &["ekaterina", "yekaterina", "katya", "katyusha"],
    &["mariya", "maria", "masha", "marusya"],
    &["natalya", "natalia", "natasha"],
    &["elena", "yelena", "lena"],
    &["olga", "olya"],
    &["anna", "anya", "anechka", "nyura"],
    &["tatyana", "tatiana", "tanya"],
    &["yuliya", "yulia", "julia", "yulya"],
    &["svetlana", "sveta"],
    &["evgeniy", "evgeny", "yevgeny", "yevgeniy", "zhenya"],
    &["konstantin", "kostya"],
    &["andrey", "andrei", "andryusha"],
    &["boris", "borya"],
    &["anastasiya", "anastasia", "nastya"],
    &["yuriy", "yuri", "yura"],
    &["grigoriy", "grigory", "grisha"],
    &["viktor", "vitya"],
    &["maksim", "maxim", "maks"],
];

const LETTERS: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('і', "i"),
    ('ї', "yi"),
    ('є', "ye"),
    ('ґ', "g"),
];

/// Romanized patronymic endings, longest first.
pub(crate) const ROMANIZED_PATRONYMIC_ENDINGS: &[&str] =
    &["ovich", "evich", "ovna", "evna", "ichna", "inichna", "ich"];

#[derive(Debug)]
struct RussianRules {
    tables: RuleTables,
}

impl LanguageRules for RussianRules {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn tables(&self) -> &RuleTables {
        &self.tables
    }

    fn required_tables(&self) -> &'static [TableKind] {
        &[
            TableKind::Honorifics,
            TableKind::Particles,
            TableKind::Diminutives,
            TableKind::Transliteration,
        ]
    }

    fn is_patronymic(&self, key: &str) -> bool {
        key.chars().count() > 5
            && ROMANIZED_PATRONYMIC_ENDINGS
                .iter()
                .any(|end| key.ends_with(end))
    }

    /// Official documents write "Family Given Patronymic"; everyday usage
    /// writes "Given Patronymic Family". Without a patronymic to anchor on,
    /// two words are read given name first: surname endings such as "-ina"
    /// are shared with given names (Ekaterina, Marina).
    fn name_order(&self, _surfaces: &[&str], keys: &[&str]) -> NameOrder {
        match keys {
            [_, given, patronymic]
                if self.is_patronymic(patronymic) && !self.is_patronymic(given) =>
            {
                NameOrder::FamilyFirst
            }
            _ => NameOrder::GivenFirst,
        }
    }
}

pub(super) fn spec() -> LanguageSpec {
    let mut tables = tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]);
    tables.transliteration = TransliterationTable::from_chars(LETTERS);
    LanguageSpec {
        language: Language::Russian,
        tables,
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(RussianRules { tables })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> String {
        let spec = spec();
        let cfg = canonical::NormalizeConfig::default();
        canonical::normalize(text, &[&spec.tables.transliteration], &cfg)
    }

    #[test]
    fn transliterates_cyrillic() {
        assert_eq!(key("Александр Петров"), "aleksandr petrov");
        assert_eq!(key("Саша"), "sasha");
        assert_eq!(key("Пётр Щукин"), "petr shchukin");
        assert_eq!(key("Татьяна"), "tatyana");
    }

    #[test]
    fn sasha_is_a_diminutive_of_aleksandr() {
        let spec = spec();
        assert!(spec.tables.diminutives.equivalent("aleksandr", "sasha"));
        assert!(spec.tables.diminutives.equivalent("alexander", "sasha"));
    }

    #[test]
    fn patronymic_drives_order() {
        let rules = spec().into_rules();
        assert!(rules.is_patronymic("sergeevich"));
        assert!(rules.is_patronymic("ivanovna"));
        assert!(!rules.is_patronymic("rich"));
        assert_eq!(
            rules.name_order(&[], &["pushkin", "aleksandr", "sergeevich"]),
            NameOrder::FamilyFirst
        );
        assert_eq!(
            rules.name_order(&[], &["aleksandr", "sergeevich", "pushkin"]),
            NameOrder::GivenFirst
        );
        assert_eq!(rules.name_order(&[], &["ivan", "petrov"]), NameOrder::GivenFirst);
        assert_eq!(rules.name_order(&[], &["ekaterina", "kim"]), NameOrder::GivenFirst);
        assert_eq!(rules.name_order(&[], &["konstantin", "tsoy"]), NameOrder::GivenFirst);
    }
}
