//! Leading floating-point literal scanner
//!
//! Accepts `[-] digits [. digits] [(e|E) [+|-] digits]` with at least one
//! mantissa digit, plus `inf`, `infinity` and `nan` in any case. No leading
//! whitespace or `+` sign. An exponent marker not followed by digits is left
//! in the remainder.

/// Parse the longest float literal at the start of `text`.
///
/// Returns the value and the byte length consumed.
pub(crate) fn scan_float(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));

    let end = match scan_special(&bytes[sign..]) {
        Some(len) => sign + len,
        None => sign + scan_decimal(&bytes[sign..])?,
    };

    let value = text[..end].parse::<f64>().ok()?;
    Some((value, end))
}

fn scan_special(bytes: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"].into_iter().find_map(|word| {
        let candidate = bytes.get(..word.len())?;
        candidate.eq_ignore_ascii_case(word.as_bytes()).then_some(word.len())
    })
}

fn scan_decimal(bytes: &[u8]) -> Option<usize> {
    let int_digits = count_digits(bytes);
    let mut pos = int_digits;
    let mut frac_digits = 0;

    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        pos += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
