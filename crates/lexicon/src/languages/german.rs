use canonical::TransliterationTable;

use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "herr", "frau", "fraulein", "dr", "prof", "professor", "dipl", "ing", "general", "oberst",
    "major", "hauptmann", "pfarrer",
];

const PARTICLES: &[&str] = &[
    "von", "zu", "zur", "zum", "vom", "der", "den", "van", "de", "am", "im", "und", "von der",
    "von dem", "von und zu", "van der", "van den",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["friedrich", "fritz", "fred", "friedel"],
    &["johannes", "johann", "hans", "hannes"],
    &["wilhelm", "willi", "willy", "helm"],
    &["elisabeth", "lisa", "liesel", "lisbeth", "elli", "else"],
    &["margarete", "margarethe", "grete", "gretchen", "greta", "gretel"],
    &["katharina", "kathi", "katja", "kathrin"],
    &["heinrich", "heinz", "heiko", "hinrich"],
    &["alexander", "alex", "sascha"],
    &["nikolaus", "klaus", "niko", "claus"],
    &["christoph", "christopher", "chris", "stoffel"],
    &["matthias", "matze", "hias"],
    &["josef", "joseph", "sepp", "seppl", "jupp"],
    &["maximilian", "max", "maxi"],
    &["wolfgang", "wolf", "wolfi"],
    &["michael", "michi", "micha"],
    &["barbara", "babsi", "barbel"],
    &["susanne", "susi", "sanne"],
    &["franziska", "franzi"],
    &["gottfried", "friedel"],
    &["ulrich", "uli", "ueli"],
    &["rudolf", "rudi", "dolf"],
];

const UMLAUTS: &[(char, &str)] = &[('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

pub(super) fn spec() -> LanguageSpec {
    let mut tables = tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]);
    tables.transliteration = TransliterationTable::from_chars(UMLAUTS);
    LanguageSpec {
        language: Language::German,
        tables,
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::German, tables))
}
