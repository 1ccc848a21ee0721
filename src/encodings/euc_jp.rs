// encodings/euc_jp.rs - EUC-JP character width rules.
//
// Code set 0 (ASCII) is one byte, code set 1 (JIS X 0208) and code set 2
// (SS2 0x8E + half-width katakana) are two bytes, code set 3 (SS3 0x8F +
// JIS X 0212) is three bytes.

use crate::regenc::*;

const SS2: u8 = 0x8e;
const SS3: u8 = 0x8f;

// === EncLen_EUCJP Table ===
// Maps lead byte to character length.

static ENC_LEN_EUCJP: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1,
];

#[inline]
fn eucjp_istail(c: u8) -> bool {
    (0xa1..=0xfe).contains(&c)
}

// Half-width katakana after SS2.
#[inline]
fn eucjp_is_kana_tail(c: u8) -> bool {
    (0xa1..=0xdf).contains(&c)
}

#[inline]
fn eucjp_islead(c: u8) -> bool {
    c < 0x80 || c == SS2 || c == SS3 || eucjp_istail(c)
}

// === EUC-JP Encoding Struct ===

pub struct EucJpEncoding;

pub static ONIG_ENCODING_EUC_JP: EucJpEncoding = EucJpEncoding;

impl Encoding for EucJpEncoding {
    fn mbc_enc_len(&self, p: &[u8]) -> usize {
        ENC_LEN_EUCJP[p[0] as usize] as usize
    }

    fn min_enc_len(&self) -> usize {
        1
    }
}

impl EucJpEncoding {
    /// Byte offset of the first structurally invalid character, or `None`
    /// if the whole buffer is well formed.
    pub fn invalid_mbc_offset(&self, s: &[u8]) -> Option<usize> {
        let mut p = 0;
        while p < s.len() {
            if !eucjp_islead(s[p]) {
                return Some(p);
            }
            let len = self.mbc_enc_len(&s[p..]);
            if p + len > s.len() {
                return Some(p);
            }
            let tail = &s[p + 1..p + len];
            let tail_ok = if s[p] == SS2 {
                tail.iter().all(|&c| eucjp_is_kana_tail(c))
            } else {
                tail.iter().all(|&c| eucjp_istail(c))
            };
            if !tail_ok {
                return Some(p);
            }
            p += len;
        }
        None
    }
}
