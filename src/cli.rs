// cli.rs - Command-line interface parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::options::{Endians, TranscodeOptions};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "Reads regex test directives written in EUC-JP and writes a C program that
replays them against Oniguruma with UTF-16 patterns and subjects.

Recognized lines:
  x(/pattern/, subject, from, to)
  i(/pattern/, subject, from, to)
  x(/pattern/, subject, from, to, group)
  n(/pattern/, subject)
All other lines are ignored. The program goes to stdout, diagnostics to stderr.";

/// Byte order selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EndianArg {
    /// UTF-16BE section only.
    Be,
    /// UTF-16LE section only.
    Le,
    /// Both sections, big-endian first.
    Both,
}

impl From<EndianArg> for Endians {
    fn from(arg: EndianArg) -> Self {
        match arg {
            EndianArg::Be => Endians::BIG,
            EndianArg::Le => Endians::LITTLE,
            EndianArg::Both => Endians::BIG | Endians::LITTLE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "testconvu",
    version = VERSION,
    about = "Convert EUC-JP regex test directives into a UTF-16 Oniguruma test program",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        long = "windows",
        action = ArgAction::SetTrue,
        long_help = "Break up `??` in patterns so the generated source has no trigraphs. The legacy spelling -win is accepted as the first argument."
    )]
    pub windows: bool,
    #[arg(
        long = "endian",
        value_enum,
        default_value_t = EndianArg::Be,
        long_help = "UTF-16 byte order(s) to generate test sections for."
    )]
    pub endian: EndianArg,
    #[arg(value_name = "INPUT", help = "Directive file")]
    pub input: PathBuf,
}

impl Cli {
    pub fn options(&self) -> TranscodeOptions {
        TranscodeOptions::builder()
            .endians(self.endian.into())
            .windows(self.windows)
            .build()
    }
}

/// Rewrites a leading `-win...` (any case) to `--windows`.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(first) = args.get_mut(1) {
        let is_legacy = first
            .to_str()
            .and_then(|s| s.get(..4))
            .is_some_and(|p| p.eq_ignore_ascii_case("-win"));
        if is_legacy {
            *first = OsString::from("--windows");
        }
    }
    args
}

/// Parses the process arguments, accepting the legacy `-win` flag.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_legacy_args(args))
}
