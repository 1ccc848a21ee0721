// options.rs - Run configuration for the transcoder.

use bitflags::bitflags;

use crate::encodings::Endianness;

bitflags! {
    /// Byte orders to emit test sections for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Endians: u8 {
        const BIG = 1;
        const LITTLE = 2;
    }
}

impl Endians {
    /// Selected byte orders, big-endian first.
    pub fn endianness(self) -> impl Iterator<Item = Endianness> {
        [
            (Endians::BIG, Endianness::Big),
            (Endians::LITTLE, Endianness::Little),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, e)| e)
    }
}

impl From<Endianness> for Endians {
    fn from(e: Endianness) -> Self {
        match e {
            Endianness::Big => Endians::BIG,
            Endianness::Little => Endians::LITTLE,
        }
    }
}

/// Options for one transcoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeOptions {
    endians: Endians,
    windows: bool,
}

impl Default for TranscodeOptions {
    /// Big-endian section only, no trigraph breaking.
    fn default() -> Self {
        TranscodeOptions {
            endians: Endians::BIG,
            windows: false,
        }
    }
}

impl TranscodeOptions {
    /// Create a [`TranscodeOptionsBuilder`] starting from the defaults.
    pub fn builder() -> TranscodeOptionsBuilder {
        TranscodeOptionsBuilder {
            options: TranscodeOptions::default(),
        }
    }

    pub fn endians(&self) -> Endians {
        self.endians
    }

    /// Windows output mode: `??` in patterns is broken up so the generated
    /// C source contains no trigraphs.
    pub fn windows(&self) -> bool {
        self.windows
    }
}

// === TranscodeOptionsBuilder ===

/// Builder for [`TranscodeOptions`].
///
/// # Examples
///
/// ```
/// use testconvu::options::{Endians, TranscodeOptions};
///
/// let opts = TranscodeOptions::builder()
///     .little_endian(true)
///     .windows(true)
///     .build();
/// assert_eq!(opts.endians(), Endians::BIG | Endians::LITTLE);
/// assert!(opts.windows());
/// ```
#[derive(Debug, Clone)]
pub struct TranscodeOptionsBuilder {
    options: TranscodeOptions,
}

impl TranscodeOptionsBuilder {
    /// Emit the big-endian section.
    pub fn big_endian(mut self, yes: bool) -> Self {
        self.options.endians.set(Endians::BIG, yes);
        self
    }

    /// Emit the little-endian section.
    pub fn little_endian(mut self, yes: bool) -> Self {
        self.options.endians.set(Endians::LITTLE, yes);
        self
    }

    /// Replace the whole byte order selection.
    pub fn endians(mut self, endians: Endians) -> Self {
        self.options.endians = endians;
        self
    }

    /// Enable or disable Windows output mode.
    pub fn windows(mut self, yes: bool) -> Self {
        self.options.windows = yes;
        self
    }

    pub fn build(self) -> TranscodeOptions {
        self.options
    }
}
