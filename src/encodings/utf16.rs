// encodings/utf16.rs - UTF-16BE / UTF-16LE character width rules.
//
// Every character is one 16-bit unit, except characters outside the BMP
// which take a lead surrogate (0xD800-0xDBFF) plus a trail surrogate.

use std::fmt;

use crate::regenc::*;

/// Byte order of the 16-bit code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Suffix used in the engine's encoding names (`ONIG_ENCODING_UTF16_BE`).
    pub fn suffix(self) -> &'static str {
        match self {
            Endianness::Big => "BE",
            Endianness::Little => "LE",
        }
    }

    /// Index of the byte carrying the high bits of a code unit.
    #[inline]
    pub fn high_byte_index(self) -> usize {
        match self {
            Endianness::Big => 0,
            Endianness::Little => 1,
        }
    }

    /// Serializes one code unit in this byte order.
    #[inline]
    pub fn unit_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::Big => unit.to_be_bytes(),
            Endianness::Little => unit.to_le_bytes(),
        }
    }

    /// The UTF-16 encoding for this byte order.
    pub fn encoding(self) -> EncodingRef {
        match self {
            Endianness::Big => &ONIG_ENCODING_UTF16_BE,
            Endianness::Little => &ONIG_ENCODING_UTF16_LE,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTF-16{}", self.suffix())
    }
}

// === UTF-16 Helpers ===

#[inline]
fn utf16_is_lead(high: u8) -> bool {
    (0xd8..=0xdb).contains(&high)
}

// === UTF-16 Encoding Struct ===

pub struct Utf16Encoding {
    endian: Endianness,
}

pub static ONIG_ENCODING_UTF16_BE: Utf16Encoding = Utf16Encoding {
    endian: Endianness::Big,
};

pub static ONIG_ENCODING_UTF16_LE: Utf16Encoding = Utf16Encoding {
    endian: Endianness::Little,
};

impl Utf16Encoding {
    #[inline]
    fn high_byte(&self, p: &[u8]) -> Option<u8> {
        p.get(self.endian.high_byte_index()).copied()
    }
}

impl Encoding for Utf16Encoding {
    fn mbc_enc_len(&self, p: &[u8]) -> usize {
        match self.high_byte(p) {
            Some(high) if utf16_is_lead(high) => 4,
            _ => 2,
        }
    }

    fn min_enc_len(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmp_unit_is_two_bytes() {
        assert_eq!(ONIG_ENCODING_UTF16_BE.mbc_enc_len(&[0x30, 0x42]), 2);
        assert_eq!(ONIG_ENCODING_UTF16_LE.mbc_enc_len(&[0x42, 0x30]), 2);
    }

    #[test]
    fn lead_surrogate_uses_high_byte_of_unit() {
        // U+1F600 = D83D DE00
        assert_eq!(ONIG_ENCODING_UTF16_BE.mbc_enc_len(&[0xd8, 0x3d, 0xde, 0x00]), 4);
        assert_eq!(ONIG_ENCODING_UTF16_LE.mbc_enc_len(&[0x3d, 0xd8, 0x00, 0xde]), 4);
        // Same bytes, wrong byte order: the high byte is 0x3D.
        assert_eq!(ONIG_ENCODING_UTF16_BE.mbc_enc_len(&[0x3d, 0xd8, 0x00, 0xde]), 2);
    }

    #[test]
    fn unit_bytes_follow_endianness() {
        assert_eq!(Endianness::Big.unit_bytes(0x3042), [0x30, 0x42]);
        assert_eq!(Endianness::Little.unit_bytes(0x3042), [0x42, 0x30]);
    }

    #[test]
    fn names() {
        assert_eq!(Endianness::Big.to_string(), "UTF-16BE");
        assert_eq!(Endianness::Little.to_string(), "UTF-16LE");
    }
}
