use lexicon::{Dictionaries, Language, LanguageDetector, NameOrder, ScriptDetector};

#[test]
fn every_language_has_diminutives_or_equivalences() {
    let dicts = Dictionaries::load().expect("built-ins load");
    for language in Language::ALL {
        let tables = dicts.rules(language).tables();
        if language == Language::Mandarin {
            assert!(!tables.transliteration.is_empty());
            continue;
        }
        assert!(
            !tables.diminutives.is_empty() || !tables.equivalences.is_empty(),
            "{language} has no name classes"
        );
    }
}

#[test]
fn diminutive_classes_are_closed() {
    let dicts = Dictionaries::load().expect("built-ins load");
    for language in Language::ALL {
        let graph = &dicts.rules(language).tables().diminutives;
        for class in graph.classes() {
            for a in class {
                for b in class {
                    assert!(graph.equivalent(a, b), "{language}: {a} / {b}");
                    assert!(graph.equivalent(b, a), "{language}: {b} / {a}");
                }
            }
        }
    }
}

#[test]
fn normalization_is_idempotent_under_every_language() {
    let dicts = Dictionaries::load().expect("built-ins load");
    let samples = [
        "Jürgen Müller",
        "Александр Петров",
        "محمد بن حمد آل ثاني",
        "王小明",
        "Wáng Wěi",
        "O'Connor-Smith",
        "Dr. Zoë Saldaña",
    ];
    for language in Language::ALL {
        for sample in samples {
            let once = dicts.normalize(sample, language);
            assert_eq!(dicts.normalize(&once, language), once, "{language}: {sample}");
        }
    }
}

#[test]
fn detected_language_drives_name_order() {
    let dicts = Dictionaries::load().expect("built-ins load");
    let language = ScriptDetector.detect("Wang Wei").unwrap_or(Language::DEFAULT);
    assert_eq!(language, Language::Mandarin);
    let rules = dicts.rules(language);
    assert_eq!(
        rules.name_order(&["Wang", "Wei"], &["wang", "wei"]),
        NameOrder::FamilyFirst
    );
}
