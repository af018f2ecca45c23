/// Four-character American Soundex over the ASCII letters of `key`.
///
/// Returns `None` when `key` has no ASCII letter.
pub fn soundex(key: &str) -> Option<String> {
    let mut letters = key.bytes().filter(u8::is_ascii_alphabetic);
    let first = letters.next()?.to_ascii_uppercase();

    let mut out = String::with_capacity(4);
    out.push(char::from(first));
    let mut last = digit(first);
    for byte in letters {
        if out.len() == 4 {
            break;
        }
        let d = digit(byte);
        // 'h' and 'w' do not separate equal codes; vowels do.
        if d != 0 && d != last {
            out.push(char::from(b'0' + d));
        }
        if !matches!(byte.to_ascii_lowercase(), b'h' | b'w') {
            last = d;
        }
    }
    while out.len() < 4 {
        out.push('0');
    }
    Some(out)
}

fn digit(byte: u8) -> u8 {
    match byte.to_ascii_lowercase() {
        b'b' | b'f' | b'p' | b'v' => 1,
        b'c' | b'g' | b'j' | b'k' | b'q' | b's' | b'x' | b'z' => 2,
        b'd' | b't' => 3,
        b'l' => 4,
        b'm' | b'n' => 5,
        b'r' => 6,
        _ => 0,
    }
}
