//! # testconvu
//!
//! Converts Oniguruma's EUC-JP regex test directives into a C test program
//! that runs the same cases with UTF-16 (big- or little-endian) patterns and
//! subjects.
//!
//! Each directive line names a pattern, a subject and, for matches, the
//! expected character range. The range is rewritten into UTF-16 byte offsets
//! through a character index: EUC-JP bytes -> characters -> UTF-16 bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use testconvu::prelude::*;
//!
//! let mut t = Transcoder::new(TranscodeOptions::default(), DiagnosticSink::disabled());
//! let mut out = Vec::new();
//! t.transcode(b"x(/a/, \"a\", 0, 1)\n", &mut out).unwrap();
//!
//! let program = String::from_utf8(out).unwrap();
//! assert!(program.contains(r#"  x2("\000a\000\000", "\000a\000\000", 0, 2);"#));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`directive`] | Directive line recognition |
//! | [`literal`] | Quoted literal parsing |
//! | [`pattern`] | Pattern escape normalization |
//! | [`converter`] | EUC-JP -> UTF-16 conversion handles |
//! | [`remap`] | Match offset remapping |
//! | [`escape`] | C literal rendering |
//! | [`emit`] | Program generation |
//! | [`regenc`], [`encodings`] | Encoding trait and width rules |

pub mod cli;
pub mod converter;
pub mod diagnostics;
pub mod directive;
pub mod emit;
pub mod encodings;
pub mod error;
pub mod escape;
pub mod literal;
pub mod options;
pub mod pattern;
pub mod prelude;
pub mod regenc;
pub mod remap;
pub mod template;
