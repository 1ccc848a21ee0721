// regenc.rs - Encoding trait and shared position walks.
//
// Both offset walks in the remapper are the same loop: step through a buffer
// one character at a time using the encoding's lead-byte length rule.

use crate::error::ConvError;

// In C: OnigEncoding = OnigEncodingType*
pub type EncodingRef = &'static dyn Encoding;

// === Encoding Trait ===
pub trait Encoding: Send + Sync {
    /// Returns the byte length of the character starting at `p[0]`.
    /// `p` is never empty.
    fn mbc_enc_len(&self, p: &[u8]) -> usize;

    /// Minimum encoded character length in bytes
    fn min_enc_len(&self) -> usize;
}

/// Counts the characters that start before `byte_pos` in `s`.
///
/// An offset in the middle of a character counts that character.
pub fn enc_char_pos(enc: EncodingRef, s: &[u8], byte_pos: usize) -> Result<usize, ConvError> {
    if byte_pos > s.len() {
        return Err(ConvError::OffsetOutOfRange {
            offset: byte_pos,
            len: s.len(),
        });
    }

    let mut pos = 0;
    let mut i = 0;
    while i < byte_pos {
        i += enc.mbc_enc_len(&s[i..]);
        pos += 1;
    }
    Ok(pos)
}

/// Returns the number of bytes taken by the first `char_pos` characters of `s`.
pub fn enc_byte_pos(enc: EncodingRef, s: &[u8], char_pos: usize) -> Result<usize, ConvError> {
    let out_of_range = || ConvError::CharIndexOutOfRange {
        chars: char_pos,
        len: s.len(),
    };

    let mut i = 0;
    for _ in 0..char_pos {
        if i + enc.min_enc_len() > s.len() {
            return Err(out_of_range());
        }
        i += enc.mbc_enc_len(&s[i..]);
        if i > s.len() {
            return Err(out_of_range());
        }
    }
    Ok(i)
}
