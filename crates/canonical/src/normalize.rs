use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizeConfig;
use crate::transliterate::TransliterationTable;

/// Turns raw name text into a comparison key.
///
/// Each word goes through compatibility composition and lowercasing, then an
/// optional whole-word lookup in `tables`, then a per-grapheme pass that
/// applies the first table mapping the grapheme's base character and
/// otherwise decomposes the grapheme and strips its combining marks.
///
/// Apostrophes, periods and tatweel are dropped, dash variants become a
/// single `-` kept only between letters, and any other punctuation separates
/// words. The result is idempotent for a fixed table chain and config.
/// Characters nothing maps pass through unchanged.
pub fn normalize(text: &str, tables: &[&TransliterationTable], cfg: &NormalizeConfig) -> String {
    let mut out = String::with_capacity(text.len());
    for word in split_words(text) {
        let key = normalize_word(word, tables, cfg);
        if key.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&key);
    }
    out
}

/// Normalizes with the default config and no transliteration tables.
///
/// Used for dictionary keys, which are authored in the script they are
/// looked up in.
pub fn fold(text: &str) -> String {
    normalize(text, &[], &NormalizeConfig::default())
}

/// Reads hyphens as word breaks, so "mary-jane" and "mary jane" compare equal.
pub fn hyphen_insensitive(key: &str) -> String {
    key.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || is_word_break(c))
        .filter(|word| !word.is_empty())
}

fn is_word_break(ch: char) -> bool {
    ch.is_punctuation() && !is_dash(ch) && !is_elided(ch)
}

fn is_dash(ch: char) -> bool {
    ch.is_punctuation_dash()
}

/// Punctuation removed from inside a word rather than splitting it.
fn is_elided(ch: char) -> bool {
    matches!(
        ch,
        '\'' | '\u{2019}' | '\u{2018}' | '\u{02BC}' | '`' | '\u{00B4}' | '.' | '\u{0640}'
    )
}

/// The form a word takes when it is looked up in a transliteration table:
/// composed, lowercased, with elided punctuation and letter-variant marks
/// removed. Table authors key whole-word entries by this form.
pub fn lookup_form(word: &str, cfg: &NormalizeConfig) -> String {
    word.nfkc()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_elided(*c))
        .filter_map(|c| fold_letter_variant(c, cfg))
        .map(|c| if is_dash(c) { '-' } else { c })
        .collect()
}

fn normalize_word(word: &str, tables: &[&TransliterationTable], cfg: &NormalizeConfig) -> String {
    let cleaned = lookup_form(word, cfg);
    if cleaned.is_empty() {
        return cleaned;
    }

    if cfg.transliterate {
        if let Some(latin) = tables.iter().find_map(|t| t.lookup_word(&cleaned)) {
            return tidy(latin);
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    for grapheme in cleaned.graphemes(true) {
        let base = grapheme.chars().next().unwrap_or(' ');
        let mapped = if cfg.transliterate {
            tables
                .iter()
                .find_map(|t| t.lookup_char(base).map(|latin| (latin, t.is_syllabic())))
        } else {
            None
        };

        match mapped {
            Some((latin, syllabic)) => {
                if syllabic && !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(latin);
                if syllabic {
                    out.push(' ');
                }
            }
            None => fold_grapheme(grapheme, cfg, &mut out),
        }
    }
    tidy(&out)
}

/// Letter variants that only differ by a diacritic-like mark but are encoded
/// as separate code points. Folded before table lookup so that table keys can
/// be authored in the plain form.
fn fold_letter_variant(ch: char, cfg: &NormalizeConfig) -> Option<char> {
    if !cfg.fold_diacritics {
        return Some(ch);
    }
    match ch {
        '\u{064B}'..='\u{065F}' | '\u{0670}' => None,
        'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
        'ى' | 'ئ' => Some('ي'),
        'ؤ' => Some('و'),
        'ё' => Some('е'),
        other => Some(other),
    }
}

fn fold_grapheme(grapheme: &str, cfg: &NormalizeConfig, out: &mut String) {
    for ch in grapheme.nfd() {
        if cfg.fold_diacritics && is_combining(ch) {
            continue;
        }
        match ch {
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            'þ' => out.push_str("th"),
            'ø' if cfg.fold_diacritics => out.push('o'),
            'đ' | 'ð' if cfg.fold_diacritics => out.push('d'),
            'ł' if cfg.fold_diacritics => out.push('l'),
            'ı' if cfg.fold_diacritics => out.push('i'),
            'ħ' if cfg.fold_diacritics => out.push('h'),
            other => out.push(other),
        }
    }
}

fn is_combining(ch: char) -> bool {
    ch.is_mark_nonspacing() || ch.is_mark_spacing_combining() || ch.is_mark_enclosing()
}

/// Collapses whitespace and keeps hyphens only between two non-space
/// characters.
fn tidy(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut pending_hyphen = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            pending_hyphen = false;
        } else if ch == '-' {
            pending_hyphen = !out.is_empty() && !pending_space;
        } else {
            if pending_space {
                out.push(' ');
            } else if pending_hyphen {
                out.push('-');
            }
            pending_space = false;
            pending_hyphen = false;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyrillic() -> TransliterationTable {
        TransliterationTable::from_chars(&[
            ('а', "a"),
            ('с', "s"),
            ('ш', "sh"),
            ('п', "p"),
            ('е', "e"),
            ('т', "t"),
            ('р', "r"),
            ('о', "o"),
            ('в', "v"),
        ])
    }

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold("  José   GARCÍA "), "jose garcia");
        assert_eq!(fold("Wáng Wěi"), "wang wei");
        assert_eq!(fold("Straße"), "strasse");
    }

    #[test]
    fn drops_elided_punctuation_and_splits_on_other() {
        assert_eq!(fold("O'Connor"), "oconnor");
        assert_eq!(fold("Robert A. Smith"), "robert a smith");
        assert_eq!(fold("Smith, John"), "smith john");
    }

    #[test]
    fn keeps_inner_hyphens_only() {
        assert_eq!(fold("Mary-Jane"), "mary-jane");
        assert_eq!(fold("Mary--Jane"), "mary-jane");
        assert_eq!(fold("-Mary-"), "mary");
        assert_eq!(fold("Jean\u{2013}Luc"), "jean-luc");
        assert_eq!(hyphen_insensitive("mary-jane watson"), "mary jane watson");
    }

    #[test]
    fn transliterates_through_table_chain() {
        let table = cyrillic();
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("Саша Петров", &[&table], &cfg), "sasha petrov");
    }

    #[test]
    fn word_entries_win_over_letters() {
        let table = cyrillic().with_words(&[("саша", "sasha-alt")]);
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("Саша", &[&table], &cfg), "sasha-alt");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("Саша", &[], &cfg), "саша");
        let no_translit = NormalizeConfig::default().with_transliterate(false);
        assert_eq!(normalize("Саша", &[&cyrillic()], &no_translit), "саша");
    }

    #[test]
    fn arabic_marks_and_alef_variants_fold() {
        assert_eq!(fold("أَحْمَد"), "احمد");
        assert_eq!(fold("مُحَمَّد"), "محمد");
        assert_eq!(fold("Алёна"), "алена");
    }

    #[test]
    fn syllabic_tables_space_out_characters() {
        let han = TransliterationTable::from_chars(&[('王', "wang"), ('伟', "wei")]).syllabic();
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("王伟", &[&han], &cfg), "wang wei");
    }

    #[test]
    fn idempotent_on_mixed_input() {
        let table = cyrillic();
        let cfg = NormalizeConfig::default();
        for input in [
            "Dr. José-María O'Neil",
            "Саша Петров",
            "محمد بن حمد",
            "ÆSIR  Øyvind",
            "Ｆｕｌｌｗｉｄｔｈ",
            "한국",
        ] {
            let once = normalize(input, &[&table], &cfg);
            let twice = normalize(&once, &[&table], &cfg);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
