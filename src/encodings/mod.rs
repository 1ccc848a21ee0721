// encodings/mod.rs - Encoding registry
// One module per encoding the transcoder reads or writes.

pub mod euc_jp;
pub mod utf16;

pub use euc_jp::ONIG_ENCODING_EUC_JP;
pub use utf16::{Endianness, ONIG_ENCODING_UTF16_BE, ONIG_ENCODING_UTF16_LE};
