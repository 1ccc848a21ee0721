// pattern.rs - Pattern text preparation for UTF-16 conversion.
//
// Patterns in the corpus may spell one EUC-JP character as two byte escapes
// (`\244\242`). Those pairs become the raw character bytes. Every escape left
// over denotes a single byte, which in UTF-16 must be a whole code unit, so it
// is widened with a `\000` / `\x00` companion on the high-byte side.
//
// The escape text itself is left for the regex engine: backslashes go to the
// converter as ordinary characters.

use memchr::memmem;
use smallvec::smallvec;

use crate::encodings::Endianness;
use crate::literal::{octal_digits, octal_value, parse_hex_escape, rewrite_escapes, Replacement};

/// Rewrites a pattern body (the text between `/` delimiters) so that its
/// UTF-16 conversion keeps one code unit per escaped byte.
///
/// With `break_trigraphs`, every `??` becomes `?\?`.
pub fn reconstruct(pattern: &[u8], endian: Endianness, break_trigraphs: bool) -> Vec<u8> {
    let s = collapse_octal_pairs(pattern);
    let s = collapse_hex_pairs(&s);
    let s = widen_octal_escapes(&s, endian);
    let s = widen_hex_escapes(&s, endian);
    if break_trigraphs {
        break_trigraph_sequences(&s)
    } else {
        s
    }
}

/// `\NNN\NNN` -> two raw bytes. The first group backs off from three digits
/// to two when that lets the second escape start.
pub fn collapse_octal_pairs(s: &[u8]) -> Vec<u8> {
    rewrite_escapes(s, |rest| {
        let n1 = octal_digits(rest);
        (2..=n1).rev().find_map(|k| {
            if rest.get(k) != Some(&b'\\') {
                return None;
            }
            let second = &rest[k + 1..];
            let n2 = octal_digits(second);
            if n2 < 2 {
                return None;
            }
            let hi = octal_value(rest, k)?;
            let lo = octal_value(second, n2)?;
            Some((smallvec![hi, lo], k + 1 + n2))
        })
    })
}

/// `\xHH\xHH` -> two raw bytes.
pub fn collapse_hex_pairs(s: &[u8]) -> Vec<u8> {
    rewrite_escapes(s, |rest| {
        let (hi, n) = parse_hex_escape(rest)?;
        if rest.get(n) != Some(&b'\\') {
            return None;
        }
        let (lo, m) = parse_hex_escape(&rest[n + 1..])?;
        Some((smallvec![hi, lo], n + 1 + m))
    })
}

/// Single `\NNN` -> `\000\NNN` (big-endian) or `\NNN\000` (little-endian).
pub fn widen_octal_escapes(s: &[u8], endian: Endianness) -> Vec<u8> {
    rewrite_escapes(s, |rest| {
        let n = octal_digits(rest);
        (n >= 2).then(|| (widen(b"\\000", &rest[..n], endian), n))
    })
}

/// Single `\xHH` -> `\x00\xHH` (big-endian) or `\xHH\x00` (little-endian).
pub fn widen_hex_escapes(s: &[u8], endian: Endianness) -> Vec<u8> {
    rewrite_escapes(s, |rest| {
        let (_, n) = parse_hex_escape(rest)?;
        Some((widen(b"\\x00", &rest[..n], endian), n))
    })
}

fn widen(zero: &[u8], body: &[u8], endian: Endianness) -> Replacement {
    let mut out = Replacement::new();
    if endian == Endianness::Big {
        out.extend_from_slice(zero);
    }
    out.push(b'\\');
    out.extend_from_slice(body);
    if endian == Endianness::Little {
        out.extend_from_slice(zero);
    }
    out
}

/// `??` -> `?\?`, non-overlapping, left to right.
pub fn break_trigraph_sequences(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut p = 0;
    for i in memmem::find_iter(s, b"??") {
        out.extend_from_slice(&s[p..i]);
        out.extend_from_slice(b"?\\?");
        p = i + 2;
    }
    out.extend_from_slice(&s[p..]);
    out
}
