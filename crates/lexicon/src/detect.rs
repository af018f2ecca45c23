//! Default language detection.
//!
//! Detection only ever picks a rule set; a wrong guess degrades parsing but
//! never fails a match. Callers with better knowledge pass a hint instead.

use canonical::Script;

use crate::language::Language;
use crate::languages::{
    given_syllables, is_pinyin_tone_mark, romanized_surnames, ARABIC_GIVEN_NAMES, ARABIC_MARKERS,
    ROMANIZED_PATRONYMIC_ENDINGS,
};

/// Guesses the language a raw name is written in.
pub trait LanguageDetector: Send + Sync {
    /// `None` when nothing distinguishes the name from the default language.
    fn detect(&self, raw: &str) -> Option<Language>;
}

/// Script, diacritic and keyword based detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

const SURNAME_SUFFIXES: &[&str] = &["ov", "ova", "ev", "eva", "sky", "skiy", "skaya", "enko"];

const TITLES: &[(&str, Language)] = &[
    ("herr", Language::German),
    ("frau", Language::German),
    ("monsieur", Language::French),
    ("madame", Language::French),
    ("mme", Language::French),
    ("mlle", Language::French),
    ("senor", Language::Spanish),
    ("senora", Language::Spanish),
    ("senorita", Language::Spanish),
    ("signor", Language::Italian),
    ("signora", Language::Italian),
    ("sig", Language::Italian),
    ("sigra", Language::Italian),
    ("dott", Language::Italian),
    ("dottore", Language::Italian),
    ("dottoressa", Language::Italian),
    ("senhor", Language::Portuguese),
    ("senhora", Language::Portuguese),
    ("sheikh", Language::Arabic),
    ("sheikha", Language::Arabic),
];

const PARTICLES: &[(&str, Language)] = &[
    ("von", Language::German),
    ("zu", Language::German),
    ("vom", Language::German),
    ("zum", Language::German),
    ("zur", Language::German),
    ("du", Language::French),
    ("des", Language::French),
    ("le", Language::French),
    ("del", Language::Spanish),
    ("los", Language::Spanish),
    ("las", Language::Spanish),
    ("dos", Language::Portuguese),
    ("das", Language::Portuguese),
    ("do", Language::Portuguese),
    ("della", Language::Italian),
    ("degli", Language::Italian),
    ("dello", Language::Italian),
    ("delle", Language::Italian),
    ("dei", Language::Italian),
    ("di", Language::Italian),
    ("dal", Language::Italian),
];

/// Given names and surnames frequent in one language and rare in the
/// others. Names shared across these languages (Maria, Antonio) are left
/// out.
const KNOWN_NAMES: &[(&[&str], Language)] = &[
    (
        &[
            "hans", "friedrich", "fritz", "wolfgang", "gunther", "guenther", "gunter", "heinrich",
            "klaus", "ludwig", "kurt", "otto", "jurgen", "juergen", "dieter", "helmut", "horst",
            "manfred", "uwe", "sigrid", "gudrun", "muller", "mueller", "schmidt", "schneider",
            "fischer", "weber", "meyer", "wagner", "becker", "schulz", "hoffmann", "schafer",
            "schaefer", "koch", "bauer", "schroder", "schroeder", "neumann", "schwarz",
            "zimmermann", "braun", "kruger", "krueger", "hofmann", "hartmann", "krause",
            "lehmann", "schmitt", "kohler", "koehler", "herrmann",
        ],
        Language::German,
    ),
    (
        &[
            "jean", "pierre", "francois", "jacques", "henri", "philippe", "thierry", "didier",
            "gerard", "yves", "benoit", "guillaume", "sebastien", "stephane", "julien",
            "thibault", "amelie", "brigitte", "monique", "sylvie", "nathalie", "veronique",
            "genevieve", "helene", "therese", "jeanne", "dupont", "durand", "dubois", "moreau",
            "lefebvre", "lefevre", "leroy", "rousseau", "fournier", "girard", "bonnet",
            "mercier", "chevalier", "blanchard", "gauthier", "garnier", "faure", "boucher",
        ],
        Language::French,
    ),
    (
        &[
            "giovanni", "giuseppe", "francesco", "alessandro", "lorenzo", "matteo", "stefano",
            "giorgio", "giulio", "luigi", "massimo", "maurizio", "salvatore", "vincenzo",
            "tommaso", "gianni", "giulia", "chiara", "francesca", "giovanna", "giuseppina",
            "federica", "rossi", "russo", "ferrari", "esposito", "bianchi", "romano", "colombo",
            "ricci", "marino", "greco", "gallo", "conti", "mancini", "rizzo", "lombardi",
            "moretti", "barbieri", "santoro", "caruso", "giordano",
        ],
        Language::Italian,
    ),
    (
        &[
            "jose", "juan", "javier", "jesus", "miguel", "pablo", "alejandro", "diego", "jorge",
            "ramon", "raul", "ruben", "andres", "francisco", "carmen", "pilar", "dolores",
            "rocio", "guadalupe", "garcia", "rodriguez", "gonzalez", "fernandez", "lopez",
            "martinez", "sanchez", "perez", "gomez", "jimenez", "hernandez", "diaz", "alvarez",
            "munoz", "gutierrez", "vazquez", "ramirez", "dominguez", "suarez", "ortiz",
            "morales", "castillo",
        ],
        Language::Spanish,
    ),
    (
        &[
            "joao", "goncalo", "tiago", "joaquim", "sebastiao", "conceicao", "oliveira",
            "pereira", "ferreira", "carvalho", "rodrigues", "goncalves", "almeida", "ribeiro",
            "sousa", "souza", "barbosa", "araujo", "cardoso", "teixeira", "azevedo",
            "nascimento", "moreira", "correia",
        ],
        Language::Portuguese,
    ),
];

impl LanguageDetector for ScriptDetector {
    fn detect(&self, raw: &str) -> Option<Language> {
        if let Some(language) = by_script(raw) {
            return Some(language);
        }
        let lower = raw.to_lowercase();
        if lower.chars().any(is_pinyin_tone_mark) {
            return Some(Language::Mandarin);
        }

        let keys: Vec<String> = canonical::segment(raw)
            .iter()
            .map(|seg| canonical::fold(&seg.text))
            .filter(|key| !key.is_empty())
            .collect();

        if looks_romanized_chinese(&keys) {
            return Some(Language::Mandarin);
        }
        if looks_arabic(&keys) {
            return Some(Language::Arabic);
        }
        if looks_russian(&keys) {
            return Some(Language::Russian);
        }
        by_diacritic(&lower)
            .or_else(|| lookup(&keys, TITLES))
            .or_else(|| by_spanish_article(&keys))
            .or_else(|| by_known_name(&keys))
            .or_else(|| lookup(&keys, PARTICLES))
    }
}

fn by_script(raw: &str) -> Option<Language> {
    [Script::Han, Script::Cyrillic, Script::Arabic]
        .into_iter()
        .find(|script| canonical::contains_script(raw, *script))
        .map(|script| match script {
            Script::Han => Language::Mandarin,
            Script::Cyrillic => Language::Russian,
            _ => Language::Arabic,
        })
}

fn looks_romanized_chinese(keys: &[String]) -> bool {
    let surnames = romanized_surnames();
    let given = given_syllables();
    keys.len() >= 2
        && keys.iter().any(|k| surnames.contains(&k.as_str()))
        && keys
            .iter()
            .all(|k| surnames.contains(&k.as_str()) || given.contains(&k.as_str()))
}

fn looks_arabic(keys: &[String]) -> bool {
    keys.iter().any(|key| {
        ARABIC_MARKERS.contains(&key.as_str())
            || ARABIC_GIVEN_NAMES.contains(&key.as_str())
            || ((key.starts_with("al-") || key.starts_with("el-")) && key.len() > 3)
    })
}

fn looks_russian(keys: &[String]) -> bool {
    let patronymic = keys.iter().any(|key| {
        // A bare "-ich" is too common in Germanic surnames to count here.
        key.len() > 5
            && ROMANIZED_PATRONYMIC_ENDINGS
                .iter()
                .any(|end| end.len() > 3 && key.ends_with(end))
    });
    let surname = keys.len() >= 2
        && keys.last().is_some_and(|key| {
            key.len() >= 5 && SURNAME_SUFFIXES.iter().any(|end| key.ends_with(end))
        });
    patronymic || surname
}

fn by_diacritic(lower: &str) -> Option<Language> {
    let has = |set: &[char]| lower.chars().any(|c| set.contains(&c));
    if has(&['ã', 'õ']) {
        Some(Language::Portuguese)
    } else if has(&['ñ']) {
        Some(Language::Spanish)
    } else if has(&['ä', 'ö', 'ü', 'ß']) {
        Some(Language::German)
    } else if has(&['ç', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'œ', 'â', 'û']) {
        Some(Language::French)
    } else if has(&['ì', 'ò']) {
        Some(Language::Italian)
    } else if has(&['á', 'í', 'ó', 'ú']) {
        Some(Language::Spanish)
    } else {
        None
    }
}

/// "de la" and "de los" are Spanish; a bare "de" says nothing.
fn by_spanish_article(keys: &[String]) -> Option<Language> {
    keys.windows(2)
        .any(|pair| pair[0] == "de" && matches!(pair[1].as_str(), "la" | "los" | "las"))
        .then_some(Language::Spanish)
}

/// The surname decides first: "José Oliveira" is Portuguese.
fn by_known_name(keys: &[String]) -> Option<Language> {
    keys.iter().rev().find_map(|key| {
        KNOWN_NAMES
            .iter()
            .find(|(names, _)| names.contains(&key.as_str()))
            .map(|(_, language)| *language)
    })
}

fn lookup(keys: &[String], table: &[(&str, Language)]) -> Option<Language> {
    keys.iter().find_map(|key| {
        table
            .iter()
            .find(|(word, _)| word == key)
            .map(|(_, language)| *language)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(raw: &str) -> Option<Language> {
        ScriptDetector.detect(raw)
    }

    #[test]
    fn native_scripts() {
        assert_eq!(detect("王伟"), Some(Language::Mandarin));
        assert_eq!(detect("Александр Петров"), Some(Language::Russian));
        assert_eq!(detect("محمد بن حمد"), Some(Language::Arabic));
    }

    #[test]
    fn romanized_chinese() {
        assert_eq!(detect("Wáng Wěi"), Some(Language::Mandarin));
        assert_eq!(detect("Wei Wang"), Some(Language::Mandarin));
        assert_eq!(detect("Wang"), None);
    }

    #[test]
    fn romanized_arabic_and_russian() {
        assert_eq!(detect("Mohammed bin Hamad Al Thani"), Some(Language::Arabic));
        assert_eq!(detect("Omar al-Farouk"), Some(Language::Arabic));
        assert_eq!(detect("Ivan Sergeyevich"), Some(Language::Russian));
        assert_eq!(detect("Anna Petrova"), Some(Language::Russian));
    }

    #[test]
    fn european_markers() {
        assert_eq!(detect("João Silva"), Some(Language::Portuguese));
        assert_eq!(detect("Muñoz"), Some(Language::Spanish));
        assert_eq!(detect("Jürgen Müller"), Some(Language::German));
        assert_eq!(detect("François Dupont"), Some(Language::French));
        assert_eq!(detect("Dr. von Neumann"), Some(Language::German));
        assert_eq!(detect("Maria de la Cruz"), Some(Language::Spanish));
        assert_eq!(detect("Leonardo da Vinci"), None);
        assert_eq!(detect("Giovanni della Rovere"), Some(Language::Italian));
    }

    #[test]
    fn frequent_names_and_titles() {
        assert_eq!(detect("Francesco Romano"), Some(Language::Italian));
        assert_eq!(detect("Dott. Mario Bianchi"), Some(Language::Italian));
        assert_eq!(detect("Jean Dupont"), Some(Language::French));
        assert_eq!(detect("Paco García"), Some(Language::Spanish));
        assert_eq!(detect("Jose Garcia"), Some(Language::Spanish));
        assert_eq!(detect("José Oliveira"), Some(Language::Portuguese));
        assert_eq!(detect("Fritz Schmidt"), Some(Language::German));
        assert_eq!(detect("Niccolò Machiavelli"), Some(Language::Italian));
    }

    #[test]
    fn plain_names_are_undetected() {
        assert_eq!(detect("John Smith"), None);
        assert_eq!(detect("Robert A. Smith"), None);
        assert_eq!(detect("Richard Aldrich"), None);
        assert_eq!(detect(""), None);
    }
}
