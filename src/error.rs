// error.rs - Error types for the transcoding pipeline.
//
// Conversion and remapping failures are per-directive: the emitter reports
// them as diagnostics and moves on to the next line.

use std::fmt;

/// Error type for conversion and offset remapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvError {
    /// The source bytes are not structurally EUC-JP.
    /// `offset` is the byte position of the offending character.
    IllegalSequence { offset: usize },
    /// The character at `offset` has no UTF-16 representation.
    UnencodableCharacter { offset: usize },
    /// A source byte offset lies past the end of the source buffer.
    OffsetOutOfRange { offset: usize, len: usize },
    /// The converted buffer holds fewer than `chars` characters.
    CharIndexOutOfRange { chars: usize, len: usize },
    /// `from > to` in a match directive.
    InvalidRange { from: usize, to: usize },
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvError::IllegalSequence { offset } => {
                write!(f, "illegal EUC-JP sequence at byte {}", offset)
            }
            ConvError::UnencodableCharacter { offset } => {
                write!(f, "character at byte {} has no UTF-16 mapping", offset)
            }
            ConvError::OffsetOutOfRange { offset, len } => {
                write!(f, "byte offset {} past end of {}-byte subject", offset, len)
            }
            ConvError::CharIndexOutOfRange { chars, len } => write!(
                f,
                "character index {} past end of {}-byte converted subject",
                chars, len
            ),
            ConvError::InvalidRange { from, to } => {
                write!(f, "expected range {}-{} is reversed", from, to)
            }
        }
    }
}

impl std::error::Error for ConvError {}
