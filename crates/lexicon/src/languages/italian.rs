use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "signore", "signora", "signorina", "sig", "sigra", "dott", "dottore", "dottoressa", "prof",
    "professore", "professoressa", "ing", "ingegnere", "avv", "avvocato", "conte", "contessa",
    "barone", "baronessa", "marchese", "marchesa", "duca", "duchessa",
];

const PARTICLES: &[&str] = &[
    "di", "da", "del", "della", "dei", "delle", "dello", "degli", "de", "dal", "dalla", "dallo",
    "dalle", "san", "santa", "santo", "lo", "la",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["giuseppe", "beppe", "peppe", "pino", "peppino"],
    &["giovanni", "gianni", "vanni", "nanni"],
    &["francesco", "franco", "checco", "cecco"],
    &["alessandro", "sandro", "ale", "alex"],
    &["antonio", "toni", "tonino"],
    &["roberto", "robi", "berto"],
    &["salvatore", "turi", "toto"],
    &["vincenzo", "enzo", "vince"],
    &["domenico", "mimmo", "mimi"],
    &["luigi", "gigi", "gino"],
    &["caterina", "rina", "cate"],
    &["elisabetta", "betta", "elisa"],
    &["margherita", "ghita"],
    &["teresa", "tessa"],
    &["giacomo", "mino", "jack"],
    &["massimiliano", "max", "massimo"],
    &["federico", "fede", "chicco"],
];

pub(super) fn spec() -> LanguageSpec {
    LanguageSpec {
        language: Language::Italian,
        tables: tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]),
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::Italian, tables))
}
