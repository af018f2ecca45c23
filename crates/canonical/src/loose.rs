/// Reduces a Latin comparison key to its transliteration-equivalence form.
///
/// Romanizations of the same name from different standards disagree on a
/// small set of spellings (`ks`/`x`, `kh`/`h`, `y`/`i`, doubled letters,
/// a silent trailing `e` or `h`). The loose key folds those so that, for
/// example, "aleksandr" and "alexander" or "mohammed" and "muhamad" land
/// close together. Words are folded independently; non-ASCII text passes
/// through untouched.
pub fn loose_key(key: &str) -> String {
    key.split(' ')
        .filter(|w| !w.is_empty())
        .map(loose_word)
        .collect::<Vec<_>>()
        .join(" ")
}

const DIGRAPHS: &[(&str, &str)] = &[
    ("dzh", "j"),
    ("kh", "h"),
    ("ks", "x"),
    ("ph", "f"),
    ("ou", "u"),
    ("ee", "i"),
    ("oo", "u"),
    ("ck", "k"),
];

fn loose_word(word: &str) -> String {
    if !word.is_ascii() {
        return word.to_string();
    }

    let mut folded = word.to_string();
    for (from, to) in DIGRAPHS {
        if folded.contains(from) {
            folded = folded.replace(from, to);
        }
    }

    let mut out = String::with_capacity(folded.len());
    for ch in folded.chars() {
        let mapped = match ch {
            'w' => 'v',
            'y' => 'i',
            'q' => 'k',
            other => other,
        };
        if out.ends_with(mapped) && mapped.is_ascii_alphabetic() {
            continue;
        }
        out.push(mapped);
    }

    while out.len() > 3 && (out.ends_with('e') || out.ends_with('h')) {
        out.pop();
    }
    out
}
