use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, StandardRules};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "miss", "ms", "mx", "dr", "prof", "professor", "sir", "lady", "lord", "dame",
    "rev", "reverend", "fr", "father", "sister", "brother", "capt", "captain", "col", "colonel",
    "maj", "major", "gen", "general", "lt", "lieutenant", "sgt", "sergeant", "hon", "judge",
    "rabbi", "pastor",
];

// English is also the fallback rule set, so it carries the particles that
// show up in anglicized names of other origins.
const PARTICLES: &[&str] = &[
    "van", "von", "der", "den", "de", "del", "della", "di", "da", "du", "la", "le", "st",
    "saint", "van der", "van den", "de la",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["robert", "bob", "bobby", "bobbie", "rob", "robbie", "bert"],
    &["william", "bill", "billy", "will", "willy", "willie", "liam"],
    &["richard", "rick", "ricky", "dick", "rich", "richie"],
    &["james", "jim", "jimmy", "jamie"],
    &["john", "jack", "johnny"],
    &["jonathan", "jon", "jonny"],
    &["elizabeth", "elisabeth", "liz", "lizzie", "beth", "betty", "bess", "eliza", "libby"],
    &["margaret", "maggie", "meg", "peggy", "marge", "margie", "greta"],
    &["katherine", "catherine", "kathryn", "kate", "katie", "kathy", "cathy", "kat", "kitty"],
    &["christopher", "chris", "kit", "topher"],
    &["benjamin", "ben", "benny", "benji"],
    &["rebecca", "becky", "becca"],
    &["alexander", "alex", "alec", "sandy", "xander"],
    &["alexandra", "sandra", "lexi", "alexa"],
    &["samuel", "sam", "sammy"],
    &["michael", "mike", "mikey", "mick", "mickey"],
    &["thomas", "tom", "tommy"],
    &["joseph", "joe", "joey"],
    &["daniel", "dan", "danny"],
    &["david", "dave", "davey"],
    &["edward", "ed", "eddie", "ted", "teddy", "ned"],
    &["charles", "charlie", "chuck", "chas"],
    &["anthony", "tony"],
    &["andrew", "andy", "drew"],
    &["matthew", "matt", "matty"],
    &["nicholas", "nick", "nicky"],
    &["patrick", "pat", "paddy"],
    &["peter", "pete"],
    &["steven", "stephen", "steve", "stevie"],
    &["timothy", "tim", "timmy"],
    &["gregory", "greg"],
    &["jennifer", "jen", "jenny"],
    &["susan", "sue", "susie"],
    &["deborah", "debbie", "deb"],
    &["patricia", "patty", "trish", "tricia"],
    &["jessica", "jess", "jessie"],
    &["victoria", "vicky", "tori"],
    &["dorothy", "dot", "dottie", "dolly"],
    &["frederick", "fred", "freddie"],
    &["henry", "harry", "hank"],
    &["lawrence", "larry"],
    &["leonard", "leo", "len", "lenny"],
    &["ronald", "ron", "ronnie"],
    &["donald", "don", "donnie"],
    &["gerald", "gerry", "jerry"],
    &["raymond", "ray"],
    &["kenneth", "ken", "kenny"],
    &["theodore", "theo"],
    &["abigail", "abby"],
    &["isabella", "bella", "izzy"],
    &["sarah", "sally", "sadie"],
    &["mary", "molly", "polly", "mae"],
    &["ann", "anne", "anna", "annie", "nancy"],
    &["helen", "nell", "nellie"],
    &["eleanor", "ellie", "nora"],
    &["virginia", "ginny"],
    &["barbara", "barb", "babs"],
    &["caroline", "carol", "carrie"],
    &["christina", "christine", "tina", "chrissy"],
    &["josephine", "josie"],
    &["jacqueline", "jackie"],
];

pub(super) fn spec() -> LanguageSpec {
    LanguageSpec {
        language: Language::English,
        tables: tables(HONORIFICS, PARTICLES, DIMINUTIVES, &[]),
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(StandardRules::new(Language::English, tables))
}
