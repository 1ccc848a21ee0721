// literal.rs - Quoted literal parsing.
//
// Subjects are written as Ruby-style string literals. Single-quoted literals
// only unescape `\\`. Double-quoted literals expand named control escapes,
// then octal escapes, then hex escapes, each pass scanning the output of the
// previous one. Anything that is not a recognized escape is kept verbatim.

use memchr::memchr;
use smallvec::{smallvec, SmallVec};

/// Bytes replacing one escape sequence.
pub(crate) type Replacement = SmallVec<[u8; 8]>;

/// Parses a quoted literal token (quotes included) into raw bytes.
///
/// A token without matching surrounding quotes is returned unchanged.
pub fn parse_literal(token: &[u8]) -> Vec<u8> {
    match token {
        [b'\'', body @ .., b'\''] => unescape_single(body),
        [b'"', body @ .., b'"'] => unescape_double(body),
        _ => token.to_vec(),
    }
}

/// Body of a single-quoted literal: `\\` becomes `\`.
pub fn unescape_single(body: &[u8]) -> Vec<u8> {
    expand_escapes(body, |rest| match rest.first() {
        Some(b'\\') => Some((b'\\', 1)),
        _ => None,
    })
}

/// Body of a double-quoted literal.
pub fn unescape_double(body: &[u8]) -> Vec<u8> {
    let named = expand_escapes(body, |rest| {
        rest.first()
            .and_then(|&c| named_escape(c))
            .map(|b| (b, 1))
    });
    let octal = expand_escapes(&named, parse_octal_escape);
    expand_escapes(&octal, parse_hex_escape)
}

fn named_escape(c: u8) -> Option<u8> {
    match c {
        b'n' => Some(0x0a),
        b't' => Some(0x09),
        b'v' => Some(0x0b),
        b'r' => Some(0x0d),
        b'f' => Some(0x0c),
        b'a' => Some(0x07),
        b'e' => Some(0x1b),
        _ => None,
    }
}

#[inline]
fn is_octal_digit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

/// Number of leading octal digits of `rest`, at most 3.
pub fn octal_digits(rest: &[u8]) -> usize {
    rest.iter().take(3).take_while(|&&c| is_octal_digit(c)).count()
}

/// Value of the first `n` octal digits of `rest`, if it fits in a byte.
pub fn octal_value(rest: &[u8], n: usize) -> Option<u8> {
    let v = rest[..n]
        .iter()
        .fold(0u32, |acc, &c| acc * 8 + u32::from(c - b'0'));
    u8::try_from(v).ok()
}

/// `rest` follows a backslash. Matches 2-3 octal digits, greedily.
/// Returns the byte and the number of bytes consumed.
pub fn parse_octal_escape(rest: &[u8]) -> Option<(u8, usize)> {
    let n = octal_digits(rest);
    if n < 2 {
        return None;
    }
    octal_value(rest, n).map(|b| (b, n))
}

/// `rest` follows a backslash. Matches `x` plus exactly 2 hex digits.
pub fn parse_hex_escape(rest: &[u8]) -> Option<(u8, usize)> {
    match rest {
        [b'x', hi, lo, ..] => {
            let hi = (*hi as char).to_digit(16)?;
            let lo = (*lo as char).to_digit(16)?;
            Some(((hi * 16 + lo) as u8, 3))
        }
        _ => None,
    }
}

/// Rewrites every backslash escape accepted by `f`, left to right.
///
/// `f` sees the bytes after the backslash and returns the replacement bytes
/// and how many of those bytes it consumed. A rejected backslash is copied
/// and scanning resumes right after it.
pub(crate) fn rewrite_escapes<F>(s: &[u8], mut f: F) -> Vec<u8>
where
    F: FnMut(&[u8]) -> Option<(Replacement, usize)>,
{
    let mut out = Vec::with_capacity(s.len());
    let mut p = 0;
    while let Some(i) = memchr(b'\\', &s[p..]) {
        let bs = p + i;
        out.extend_from_slice(&s[p..bs]);
        match f(&s[bs + 1..]) {
            Some((bytes, n)) => {
                out.extend_from_slice(&bytes);
                p = bs + 1 + n;
            }
            None => {
                out.push(b'\\');
                p = bs + 1;
            }
        }
    }
    out.extend_from_slice(&s[p..]);
    out
}

fn expand_escapes<F>(s: &[u8], mut f: F) -> Vec<u8>
where
    F: FnMut(&[u8]) -> Option<(u8, usize)>,
{
    rewrite_escapes(s, |rest| f(rest).map(|(b, n)| (smallvec![b], n)))
}
