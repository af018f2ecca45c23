use canonical::{NormalizeConfig, Segment, TransliterationTable};

use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables, TableKind};

use super::{tables, LanguageSpec};

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "miss", "ms", "dr", "prof", "sheikh", "shaikh", "shaykh", "sheikha", "imam",
    "hajj", "haji", "hajja", "sayyid", "sayyida", "emir", "ustadh", "ustaz", "prince",
    "princess", "hh",
];

const PARTICLES: &[&str] = &[
    "al", "el", "ul", "ibn", "bin", "ben", "bint", "binti", "abu", "abou", "um", "umm", "abd",
    "ould",
];

const DIMINUTIVES: &[&[&str]] = &[
    &["muhammad", "hamoudi", "hamada", "mido"],
    &["abdullah", "abboud", "aboudi"],
    &["fatima", "fattoum", "fofo"],
    &["khadija", "dija"],
    &["ibrahim", "barhoum", "hima"],
    &["mustafa", "mostafa", "taffy"],
];

const EQUIVALENCES: &[&[&str]] = &[
    &["bin", "ibn", "ben", "bn"],
    &["bint", "binti", "bent"],
    &["al", "el", "ul"],
    &["abu", "abou", "abo"],
    &["abd", "abdul", "abdel", "abdal"],
    &[
        "muhammad", "mohammed", "mohamed", "mohammad", "muhammed", "mohamad", "muhamad",
        "mohd", "mohamud",
    ],
    &["ahmad", "ahmed"],
    &["hussein", "husain", "hussain", "husayn", "hossein"],
    &["hassan", "hasan"],
    &["omar", "umar"],
    &["yusuf", "yousef", "youssef", "yusef", "yousuf"],
    &["khalid", "khaled"],
    &["abdullah", "abdallah"],
    &["abdulrahman", "abdelrahman", "abdurrahman", "abdalrahman"],
    &["abdulaziz", "abdelaziz"],
    &["ali", "aly"],
    &["mahmoud", "mahmud"],
    &["mustafa", "mostafa", "moustafa"],
    &["aisha", "ayesha", "aysha"],
    &["fatima", "fatimah", "fatma"],
    &["zainab", "zaynab", "zeinab"],
    &["ibrahim", "ebrahim"],
    &["said", "saeed", "saied"],
    &["salem", "salim"],
    &["thani", "thany"],
    &["nasser", "naser", "nasir"],
    &["mansour", "mansur"],
];

const LETTERS: &[(char, &str)] = &[
    ('ا', "a"),
    ('ب', "b"),
    ('ت', "t"),
    ('ث', "th"),
    ('ج', "j"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "dh"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "d"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', ""),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('و', "w"),
    ('ي', "y"),
    ('ة', "a"),
    ('ء', ""),
    ('ی', "y"),
    ('ک', "k"),
    ('گ', "g"),
    ('پ', "p"),
    ('چ', "ch"),
    ('ژ', "zh"),
];

// Conventional romanizations of frequent words, whose letter-by-letter form
// would lose the unwritten short vowels.
const WORDS: &[(&str, &str)] = &[
    ("محمد", "muhammad"),
    ("أحمد", "ahmad"),
    ("علي", "ali"),
    ("عبدالله", "abdullah"),
    ("عبدالرحمن", "abdulrahman"),
    ("عبدالعزيز", "abdulaziz"),
    ("خالد", "khalid"),
    ("سالم", "salem"),
    ("عمر", "omar"),
    ("يوسف", "yusuf"),
    ("إبراهيم", "ibrahim"),
    ("حسن", "hassan"),
    ("حسين", "hussein"),
    ("فاطمة", "fatima"),
    ("عائشة", "aisha"),
    ("خديجة", "khadija"),
    ("مريم", "mariam"),
    ("زينب", "zainab"),
    ("حمد", "hamad"),
    ("ثاني", "thani"),
    ("الثاني", "al-thani"),
    ("محمود", "mahmoud"),
    ("مصطفى", "mustafa"),
    ("سعيد", "said"),
    ("راشد", "rashid"),
    ("منصور", "mansour"),
    ("فيصل", "faisal"),
    ("زايد", "zayed"),
    ("خليفة", "khalifa"),
    ("ناصر", "nasser"),
    ("طارق", "tariq"),
    ("كريم", "karim"),
    ("ليلى", "layla"),
    ("نور", "nour"),
    ("سارة", "sara"),
    ("بن", "bin"),
    ("ابن", "ibn"),
    ("بنت", "bint"),
    ("أبو", "abu"),
    ("أم", "umm"),
    ("عبد", "abd"),
    ("الله", "allah"),
    ("الرحمن", "alrahman"),
    ("ال", "al"),
    ("آل", "al"),
    ("شيخ", "sheikh"),
    ("شيخة", "sheikha"),
    ("سيد", "sayyid"),
    ("حاج", "hajj"),
    ("دكتور", "dr"),
    ("أستاذ", "ustadh"),
];

/// Romanized given names frequent enough to identify Arabic text.
pub(crate) const ARABIC_GIVEN_NAMES: &[&str] = &[
    "muhammad", "mohammed", "mohamed", "mohammad", "ahmad", "ahmed", "ali", "omar", "umar",
    "hassan", "hussein", "khalid", "khaled", "abdullah", "abdulrahman", "fatima", "aisha",
    "yusuf", "youssef", "ibrahim", "mahmoud", "mustafa", "hamad", "khalifa", "rashid",
    "faisal", "tariq", "zayed", "nasser", "mansour", "zainab", "khadija",
];

/// Tokens that on their own mark a name as Arabic.
pub(crate) const ARABIC_MARKERS: &[&str] = &[
    "bin", "ibn", "bint", "binti", "abu", "abd", "abdul", "abdel", "ould",
];

/// "Servant of" prefixes that form one given name with the following word
/// ("Abdul Rahman" is "Abdulrahman").
const COMPOUND_PREFIXES: &[&str] = &["abd", "abdul", "abdel", "abdal", "abdu"];

const ARTICLES: &[&str] = &["al", "el", "ul"];

#[derive(Debug)]
struct ArabicRules {
    tables: RuleTables,
}

impl ArabicRules {
    fn key(&self, text: &str) -> String {
        canonical::normalize(text, &[&self.tables.transliteration], &NormalizeConfig::default())
    }
}

impl LanguageRules for ArabicRules {
    fn language(&self) -> Language {
        Language::Arabic
    }

    fn tables(&self) -> &RuleTables {
        &self.tables
    }

    fn required_tables(&self) -> &'static [TableKind] {
        &[
            TableKind::Honorifics,
            TableKind::Particles,
            TableKind::Equivalences,
            TableKind::Transliteration,
        ]
    }

    /// Joins a compound given name into one segment, taking an article
    /// along: "Abd al Aziz" is one segment.
    fn segment(&self, raw: &str) -> Vec<Segment> {
        let segments = canonical::segment(raw);
        let keys: Vec<String> = segments.iter().map(|seg| self.key(&seg.text)).collect();
        let is = |i: usize, set: &[&str]| keys.get(i).is_some_and(|k| set.contains(&k.as_str()));

        let mut out = Vec::with_capacity(segments.len());
        let mut i = 0;
        while i < segments.len() {
            let mut end = i;
            if is(i, COMPOUND_PREFIXES) && i + 1 < segments.len() {
                end = i + 1;
                if is(end, ARTICLES) && end + 1 < segments.len() {
                    end += 1;
                }
            }
            if end == i {
                out.push(segments[i].clone());
            } else {
                let (start, stop) = (segments[i].start, segments[end].end);
                out.push(Segment {
                    text: raw[start..stop].to_string(),
                    start,
                    end: stop,
                });
            }
            i = end + 1;
        }
        out
    }
}

pub(super) fn spec() -> LanguageSpec {
    let mut tables = tables(HONORIFICS, PARTICLES, DIMINUTIVES, EQUIVALENCES);
    tables.transliteration = TransliterationTable::from_chars(LETTERS).with_words(WORDS);
    LanguageSpec {
        language: Language::Arabic,
        tables,
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(ArabicRules { tables })
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
    fn native_and_romanized_forms_meet() {
        assert_eq!(key("مُحَمَّد"), "muhammad");
        assert_eq!(key("بن"), "bin");
        assert_eq!(key("آل ثاني"), "al thani");
        assert_eq!(key("الثاني"), "al-thani");
    }

    #[test]
    fn unlisted_words_fall_back_to_letters() {
        assert_eq!(key("جميل"), "jmyl");
    }

    #[test]
    fn bin_and_ibn_are_equivalent() {
        let spec = spec();
        assert!(spec.tables.equivalences.equivalent("bin", "ibn"));
        assert!(spec.tables.equivalences.equivalent("mohammed", "muhammad"));
        assert!(!spec.tables.equivalences.equivalent("bin", "bint"));
    }

    #[test]
    fn compound_given_names_are_one_segment() {
        let rules = spec().into_rules();
        let texts = |raw: &str| -> Vec<String> {
            rules.segment(raw).into_iter().map(|s| s.text).collect()
        };
        assert_eq!(texts("Abdul Rahman"), vec!["Abdul Rahman"]);
        assert_eq!(texts("Mohammed Abd al Aziz"), vec!["Mohammed", "Abd al Aziz"]);
        assert_eq!(texts("عبد الله"), vec!["عبد الله"]);
        assert_eq!(texts("Ali Abdul"), vec!["Ali", "Abdul"]);
        assert_eq!(texts("Mohammed bin Hamad"), vec!["Mohammed", "bin", "Hamad"]);
        assert_eq!(key("عبد الله"), "abd allah");
    }

    #[test]
    fn glued_article_is_stripped() {
        let rules = spec().into_rules();
        assert_eq!(rules.strip_glued_particle("al-thani"), "thani");
    }
}
