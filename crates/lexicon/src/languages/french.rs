use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "m", "monsieur", "mme", "madame", "mlle", "mademoiselle", "me", "maitre", "dr", "docteur",
    "pr", "prof", "professeur", "general", "colonel", "commandant", "capitaine", "abbe", "pere",
    "soeur",
];

const PARTICLES: &[&str] = &[
    "de", "du", "des", "le", "la", "les", "di", "da", "del", "della", "de la",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["alexandre", "alex", "sacha"],
    &["jean", "jeannot"],
    &["francois", "franck", "fanfan"],
    &["guillaume", "guigui"],
    &["nicolas", "nico", "colas"],
    &["frederic", "fred"],
    &["catherine", "cathy", "cath"],
    &["marguerite", "margot", "maggy", "gogo"],
    &["elisabeth", "elise", "lisette", "lisa", "babette"],
    &["jacques", "jacquot", "jacky"],
    &["dominique", "dom"],
    &["christophe", "chris", "kiki"],
    &["philippe", "phil", "philou"],
    &["emmanuel", "manu"],
    &["stephane", "steph"],
    &["isabelle", "isa", "zaza"],
    &["benjamin", "ben", "benji"],
    &["maximilien", "maxime", "max"],
    &["thomas", "tom", "tomtom"],
    &["mathieu", "matthieu", "matt"],
    &["sebastien", "seb"],
    &["valerie", "val"],
    &["jean-baptiste", "jb"],
    &["jean-pierre", "jp"],
];

pub(super) fn spec() -> LanguageSpec {
    LanguageSpec {
        language: Language::French,
        tables: tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]),
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::French, tables))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn de_la_is_a_two_word_particle() {
        let spec = spec();
        assert_eq!(spec.tables.particles.match_at(&["de", "la", "fontaine"], 0), Some(2));
        assert!(spec.tables.diminutives.equivalent("alexandre", "alex"));
    }
}
