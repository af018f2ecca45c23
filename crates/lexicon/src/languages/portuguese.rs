use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "sr", "sra", "srta", "senhor", "senhora", "dr", "dra", "doutor", "doutora", "prof", "profa",
    "professor", "professora", "eng", "engenheiro", "engenheira", "dom", "dona",
];

const PARTICLES: &[&str] = &[
    "da", "das", "de", "del", "do", "dos", "san", "santa", "santo", "sao",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["jose", "ze", "zeca", "zezinho"],
    &["antonio", "tonho", "toninho", "tonico"],
    &["francisco", "chico", "xico", "chiquinho"],
    &["joao", "joaozinho", "jao"],
    &["manuel", "manoel", "manel", "mane"],
    &["luis", "luiz", "lula"],
    &["fernando", "nando"],
    &["eduardo", "dudu", "edu"],
    &["roberto", "beto", "betinho"],
    &["paulo", "paulinho"],
    &["ana", "aninha"],
    &["isabel", "bel", "belinha"],
    &["margarida", "guida"],
    &["ricardo", "rico", "cadu"],
    &["carlos", "carlinhos", "cacau"],
];

pub(super) fn spec() -> LanguageSpec {
    LanguageSpec {
        language: Language::Portuguese,
        tables: tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]),
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::Portuguese, tables))
}
