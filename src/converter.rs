// converter.rs - EUC-JP to UTF-16 conversion handles.
//
// A `Converter` is opened once per byte order before a run and closed after
// it. Conversion itself is stateless: decoding goes through encoding_rs'
// EUC-JP decoder, encoding serializes the UTF-16 units in the handle's order.

use encoding_rs::EUC_JP;

use crate::encodings::{Endianness, ONIG_ENCODING_EUC_JP};
use crate::error::ConvError;
use crate::regenc::Encoding;

/// Whole-buffer substitute for input containing an unmappable character.
pub const INVALID_CHARACTER: &[u8] = b"Invalid character";

/// Two-byte NUL unit terminating every converted buffer.
pub const NUL_TERMINATOR: [u8; 2] = [0, 0];

/// Conversion handle for one target byte order.
#[derive(Debug)]
pub struct Converter {
    endian: Endianness,
    source: &'static encoding_rs::Encoding,
}

impl Converter {
    /// Acquire a handle converting EUC-JP into UTF-16 with the given byte order.
    pub fn open(endian: Endianness) -> Converter {
        Converter {
            endian,
            source: EUC_JP,
        }
    }

    /// Release the handle.
    pub fn close(self) {}

    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    /// Strict conversion. The output carries no terminator.
    pub fn convert(&self, src: &[u8]) -> Result<Vec<u8>, ConvError> {
        if let Some(offset) = ONIG_ENCODING_EUC_JP.invalid_mbc_offset(src) {
            return Err(ConvError::IllegalSequence { offset });
        }

        let text = match self
            .source
            .decode_without_bom_handling_and_without_replacement(src)
        {
            Some(text) => text,
            None => {
                return Err(ConvError::UnencodableCharacter {
                    offset: self.first_unmapped(src),
                })
            }
        };

        let mut out = Vec::with_capacity(text.len() * 2 + NUL_TERMINATOR.len());
        for unit in text.encode_utf16() {
            out.extend_from_slice(&self.endian.unit_bytes(unit));
        }
        Ok(out)
    }

    /// Best-effort conversion used by the emitter.
    ///
    /// An unmappable character replaces the whole output with
    /// [`INVALID_CHARACTER`]; an illegal sequence is still an error. The
    /// result, placeholder included, ends with [`NUL_TERMINATOR`].
    pub fn convert_lossy(&self, src: &[u8]) -> Result<Vec<u8>, ConvError> {
        let mut out = match self.convert(src) {
            Ok(out) => out,
            Err(ConvError::UnencodableCharacter { .. }) => INVALID_CHARACTER.to_vec(),
            Err(e) => return Err(e),
        };
        out.extend_from_slice(&NUL_TERMINATOR);
        Ok(out)
    }

    // Only called on already validated input.
    fn first_unmapped(&self, src: &[u8]) -> usize {
        let mut p = 0;
        while p < src.len() {
            let len = ONIG_ENCODING_EUC_JP.mbc_enc_len(&src[p..]);
            let ch = &src[p..(p + len).min(src.len())];
            if self
                .source
                .decode_without_bom_handling_and_without_replacement(ch)
                .is_none()
            {
                return p;
            }
            p += len;
        }
        src.len()
    }
}
