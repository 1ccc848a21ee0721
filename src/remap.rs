// remap.rs - Match offset remapping between EUC-JP and UTF-16.
//
// Byte widths of one character differ arbitrarily between the two encodings,
// so offsets never cross the boundary as bytes. A source byte offset becomes a
// character index, and the character index becomes a target byte offset.

use crate::encodings::{Endianness, ONIG_ENCODING_EUC_JP};
use crate::error::ConvError;
use crate::regenc::{enc_byte_pos, enc_char_pos};

/// Number of EUC-JP characters that start before `byte_offset` in `src`.
///
/// ```
/// use testconvu::remap::source_char_index;
///
/// // "aあb"
/// let src = [b'a', 0xa4, 0xa2, b'b'];
/// assert_eq!(source_char_index(&src, 3), Ok(2));
/// ```
pub fn source_char_index(src: &[u8], byte_offset: usize) -> Result<usize, ConvError> {
    enc_char_pos(&ONIG_ENCODING_EUC_JP, src, byte_offset)
}

/// Byte offset in `converted` after `char_count` UTF-16 characters.
///
/// A lead surrogate and its trail count as one 4-byte character. Walking past
/// the end of `converted` is an error rather than a guessed offset.
pub fn target_byte_offset(
    endian: Endianness,
    converted: &[u8],
    char_count: usize,
) -> Result<usize, ConvError> {
    enc_byte_pos(endian.encoding(), converted, char_count)
}

/// Maps a `from..to` byte range of `src` onto `converted`.
pub fn remap_range(
    endian: Endianness,
    src: &[u8],
    converted: &[u8],
    from: usize,
    to: usize,
) -> Result<(usize, usize), ConvError> {
    if from > to {
        return Err(ConvError::InvalidRange { from, to });
    }
    let from_chars = source_char_index(src, from)?;
    let to_chars = source_char_index(src, to)?;
    Ok((
        target_byte_offset(endian, converted, from_chars)?,
        target_byte_offset(endian, converted, to_chars)?,
    ))
}
