//! Consonant skeletons for Arabic names.
//!
//! Arabic writes short vowels only as optional marks, so romanizations of
//! one name differ mostly in their vowels ("muhammad", "mohammed",
//! "mhmd"). The skeleton keeps the consonants, merges letters that
//! romanization standards render differently, and drops vowels and
//! vowel-like glides.

const DIGRAPHS: &[(&str, char)] = &[
    ("kh", 'K'),
    ("gh", 'G'),
    ("sh", 'X'),
    ("ch", 'X'),
    ("th", 'T'),
    ("dh", 'D'),
    ("ph", 'F'),
    ("ck", 'K'),
];

/// Consonant skeleton of a Latin key, or `None` when nothing is left.
pub fn skeleton(key: &str) -> Option<String> {
    let word: Vec<u8> = key
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    let trimmed = match word.split_last() {
        // Final "h" after a vowel is ta marbuta ("fatimah").
        Some((b'h', rest)) if rest.last().is_some_and(|b| is_vowel(*b)) => rest,
        _ => &word[..],
    };

    let mut out = String::with_capacity(trimmed.len());
    let mut i = 0;
    while i < trimmed.len() {
        let (code, width) = code_at(trimmed, i);
        if let Some(code) = code {
            if !out.ends_with(code) {
                out.push(code);
            }
        }
        i += width;
    }
    (!out.is_empty()).then_some(out)
}

fn code_at(word: &[u8], i: usize) -> (Option<char>, usize) {
    if let Some(next) = word.get(i + 1) {
        let pair = [word[i], *next];
        if let Some((_, code)) = DIGRAPHS.iter().find(|(d, _)| d.as_bytes() == &pair[..]) {
            return (Some(*code), 2);
        }
    }
    let code = match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => None,
        // Glides count only at the start of a word.
        b'y' | b'w' if i > 0 => None,
        b'q' | b'k' | b'c' => Some('K'),
        b'g' | b'j' => Some('J'),
        b'p' | b'b' => Some('B'),
        b'v' | b'f' => Some('F'),
        b'x' => Some('K'),
        other => Some(char::from(other.to_ascii_uppercase())),
    };
    (code, 1)
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}
