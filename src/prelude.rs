// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use testconvu::prelude::*;
//!
//! let conv = Converter::open(Endianness::Little);
//! let bytes = conv.convert_lossy(b"a").unwrap();
//! assert_eq!(target_byte_offset(Endianness::Little, &bytes, 1), Ok(2));
//! ```

pub use crate::converter::Converter;
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use crate::directive::{parse_line, Directive, DirectiveKind, ParsedLine};
pub use crate::emit::{ConvertedDirective, SectionStats, Transcoder};
pub use crate::encodings::Endianness;
pub use crate::error::ConvError;
pub use crate::options::{Endians, TranscodeOptions};
pub use crate::remap::{source_char_index, target_byte_offset};
