use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "senor", "senora", "senorita", "sr", "sra", "srta", "don", "dona", "doctor", "doctora",
    "dr", "dra", "profesor", "profesora", "prof", "ingeniero", "ingeniera", "ing", "licenciado",
    "licenciada", "lic", "arquitecto", "arquitecta", "padre", "hermano", "hermana",
];

const PARTICLES: &[&str] = &[
    "de", "del", "de la", "de las", "de los", "san", "santa", "santo", "da", "das", "dos", "do",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["francisco", "paco", "pancho", "curro", "fran", "quico"],
    &["jose", "pepe", "pepito", "chema"],
    &["manuel", "manolo", "manu", "lolo"],
    &["enrique", "quique"],
    &["guillermo", "memo", "guille"],
    &["ignacio", "nacho"],
    &["jesus", "chucho", "chuy", "chus"],
    &["alejandro", "alex", "ale", "jandro"],
    &["alberto", "beto", "tito"],
    &["concepcion", "concha", "conchita"],
    &["dolores", "lola", "loli"],
    &["mercedes", "meche", "merche"],
    &["rosario", "charo", "chayo"],
    &["guadalupe", "lupe", "lupita"],
    &["antonio", "tono", "toni", "antonito"],
    &["eduardo", "lalo", "edu"],
    &["luis", "lucho", "lucho"],
    &["rafael", "rafa"],
    &["josefa", "pepa", "pepita"],
    &["isabel", "chabela", "isa"],
    &["santiago", "santi", "chago"],
    &["fernando", "nando", "fer"],
];

pub(super) fn spec() -> LanguageSpec {
    LanguageSpec {
        language: Language::Spanish,
        tables: tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]),
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::Spanish, tables))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honorifics_are_stored_folded() {
        let spec = spec();
        assert!(spec.tables.honorifics.is_prefix("senor"));
        assert!(spec.tables.honorifics.is_prefix("dona"));
        assert_eq!(
            spec.tables.particles.match_at(&["garcia", "de", "los", "rios"], 1),
            Some(2)
        );
    }
}
