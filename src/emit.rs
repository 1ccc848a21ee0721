// emit.rs - Directive transcoding and test program generation.
//
// A `Transcoder` owns the two converter handles for the whole run. For every
// selected byte order it writes a section header and then one generated call
// per directive line; failures on one line become diagnostics and the run
// continues with the next line.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::converter::Converter;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};
use crate::directive::{parse_line, Directive, DirectiveKind};
use crate::encodings::Endianness;
use crate::error::ConvError;
use crate::escape::escape;
use crate::literal::parse_literal;
use crate::options::TranscodeOptions;
use crate::pattern::reconstruct;
use crate::remap::remap_range;
use crate::template::{section_header, PROLOGUE, TRAILER};

/// A directive rewritten for one UTF-16 byte order, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDirective {
    pub kind: DirectiveKind,
    /// Escaped UTF-16 pattern literal body.
    pub pattern: String,
    /// Escaped UTF-16 subject literal body.
    pub subject: String,
    /// Expected byte offsets into the converted subject.
    pub span: Option<(usize, usize)>,
    pub group: usize,
}

impl fmt::Display for ConvertedDirective {
    /// The generated C call, without indentation or newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.span.unwrap_or((0, 0));
        match self.kind {
            DirectiveKind::Match => write!(
                f,
                "x2(\"{}\", \"{}\", {}, {});",
                self.pattern, self.subject, from, to
            ),
            DirectiveKind::MatchWithGroup => write!(
                f,
                "x3(\"{}\", \"{}\", {}, {}, {});",
                self.pattern, self.subject, from, to, self.group
            ),
            DirectiveKind::NoMatch => {
                write!(f, "n(\"{}\", \"{}\");", self.pattern, self.subject)
            }
        }
    }
}

/// Line counts for one generated section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionStats {
    /// Calls written.
    pub emitted: usize,
    /// Directives dropped because of a conversion error.
    pub skipped: usize,
    /// Lines that are not directives.
    pub ignored: usize,
}

/// Drives the conversion of a directive file into a C test program.
#[derive(Debug)]
pub struct Transcoder {
    options: TranscodeOptions,
    big: Converter,
    little: Converter,
    diagnostics: DiagnosticSink,
}

impl Transcoder {
    /// Opens both converter handles.
    pub fn new(options: TranscodeOptions, diagnostics: DiagnosticSink) -> Self {
        Transcoder {
            options,
            big: Converter::open(Endianness::Big),
            little: Converter::open(Endianness::Little),
            diagnostics,
        }
    }

    pub fn options(&self) -> &TranscodeOptions {
        &self.options
    }

    /// Closes both converter handles and hands back the diagnostic sink.
    pub fn finish(self) -> DiagnosticSink {
        self.big.close();
        self.little.close();
        self.diagnostics
    }

    fn converter(&self, endian: Endianness) -> &Converter {
        match endian {
            Endianness::Big => &self.big,
            Endianness::Little => &self.little,
        }
    }

    fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.emit(&diag);
    }

    /// Converts one directive for `endian`.
    ///
    /// Illegal EUC-JP in either field is reported and the field is emitted
    /// empty. Offsets that cannot be remapped are an error and the caller
    /// skips the directive.
    pub fn convert_directive(
        &mut self,
        endian: Endianness,
        line: usize,
        directive: &Directive<'_>,
    ) -> Result<ConvertedDirective, ConvError> {
        let pattern = self.convert_pattern(endian, line, directive.pattern);

        let subject = parse_literal(directive.subject);
        let converted = self.convert_field(endian, line, &subject);
        let span = directive
            .expected
            .map(|(from, to)| remap_range(endian, &subject, &converted, from, to))
            .transpose()?;

        Ok(ConvertedDirective {
            kind: directive.kind,
            pattern,
            subject: escape(&converted),
            span,
            group: directive.group,
        })
    }

    fn convert_pattern(&mut self, endian: Endianness, line: usize, pattern: &[u8]) -> String {
        let rebuilt = reconstruct(pattern, endian, self.options.windows());
        escape(&self.convert_field(endian, line, &rebuilt))
    }

    // Empty on an illegal sequence, after reporting it.
    fn convert_field(&mut self, endian: Endianness, line: usize, field: &[u8]) -> Vec<u8> {
        match self.converter(endian).convert_lossy(field) {
            Ok(converted) => converted,
            Err(_) => {
                self.report(Diagnostic::illegal_sequence(line, field));
                Vec::new()
            }
        }
    }

    /// Writes the section for `endian`: its header, then one call per
    /// directive line of `input`.
    pub fn write_section<R: BufRead, W: Write>(
        &mut self,
        endian: Endianness,
        mut input: R,
        out: &mut W,
    ) -> io::Result<SectionStats> {
        out.write_all(section_header(endian).as_bytes())?;

        let mut stats = SectionStats::default();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let Some(directive) = parse_line(&buf).into_directive() else {
                stats.ignored += 1;
                continue;
            };
            match self.convert_directive(endian, line_no, &directive) {
                Ok(converted) => {
                    writeln!(out, "  {}", converted)?;
                    stats.emitted += 1;
                }
                Err(err) => {
                    self.report(Diagnostic::new(
                        Severity::Error,
                        Some(line_no),
                        format!("directive skipped: {}", err),
                    ));
                    stats.skipped += 1;
                }
            }
        }

        self.report(Diagnostic::new(
            Severity::Note,
            None,
            format!(
                "{}: {} directives emitted, {} skipped, {} lines ignored",
                endian, stats.emitted, stats.skipped, stats.ignored
            ),
        ));
        Ok(stats)
    }

    /// Writes the whole program. `open` is called once per selected byte
    /// order and must yield the directive input from its start.
    pub fn write_program<R, F, W>(
        &mut self,
        mut open: F,
        out: &mut W,
    ) -> io::Result<Vec<SectionStats>>
    where
        R: BufRead,
        F: FnMut() -> io::Result<R>,
        W: Write,
    {
        out.write_all(PROLOGUE.as_bytes())?;
        let mut sections = Vec::new();
        for endian in self.options.endians().endianness() {
            sections.push(self.write_section(endian, open()?, out)?);
        }
        out.write_all(TRAILER.as_bytes())?;
        out.flush()?;
        Ok(sections)
    }

    /// Generates the program for an in-memory directive file.
    pub fn transcode<W: Write>(
        &mut self,
        input: &[u8],
        out: &mut W,
    ) -> io::Result<Vec<SectionStats>> {
        self.write_program(|| Ok(input), out)
    }

    /// Generates the program for the directive file at `path`.
    pub fn transcode_file<W: Write>(
        &mut self,
        path: &Path,
        out: &mut W,
    ) -> io::Result<Vec<SectionStats>> {
        self.write_program(|| File::open(path).map(BufReader::new), out)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn transcoder(options: TranscodeOptions) -> Transcoder {
        Transcoder::new(options, DiagnosticSink::disabled())
    }

    fn convert(endian: Endianness, line: &[u8]) -> Result<ConvertedDirective, ConvError> {
        let directive = parse_line(line).into_directive().unwrap();
        transcoder(TranscodeOptions::default()).convert_directive(endian, 1, &directive)
    }

    #[test]
    fn ascii_match_big_endian() {
        let c = convert(Endianness::Big, b"x(/a/, \"a\", 0, 1)").unwrap();
        assert_eq!(c.pattern, r"\000a\000\000");
        assert_eq!(c.subject, r"\000a\000\000");
        assert_eq!(c.span, Some((0, 2)));
        assert_eq!(c.to_string(), r#"x2("\000a\000\000", "\000a\000\000", 0, 2);"#);
    }

    #[test]
    fn ascii_match_little_endian() {
        let c = convert(Endianness::Little, b"x(/a/, \"a\", 0, 1)").unwrap();
        assert_eq!(c.pattern, r"a\000\000\000");
        assert_eq!(c.span, Some((0, 2)));
    }

    #[test]
    fn multibyte_subject_offsets() {
        // "aあb", match "b" at bytes 3..4
        let line = [
            b"x(/b/, '".as_slice(),
            &[b'a', 0xa4, 0xa2, b'b'],
            b"', 3, 4)",
        ]
        .concat();
        let c = convert(Endianness::Big, &line).unwrap();
        assert_eq!(c.span, Some((4, 6)));
        assert_eq!(c.subject, r"\000a0B\000b\000\000");
    }

    #[test]
    fn group_directive() {
        let c = convert(Endianness::Big, b"x(/(a)(b)/, 'ab', 1, 2, 2)").unwrap();
        assert_eq!(c.kind, DirectiveKind::MatchWithGroup);
        assert_eq!(c.span, Some((2, 4)));
        assert!(c.to_string().starts_with("x3("));
        assert!(c.to_string().ends_with(", 2, 4, 2);"));
    }

    #[test]
    fn no_match_has_no_offsets() {
        let c = convert(Endianness::Big, b"n(/x/, \"y\")").unwrap();
        assert_eq!(c.span, None);
        assert_eq!(c.to_string(), r#"n("\000x\000\000", "\000y\000\000");"#);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            convert(Endianness::Big, b"x(/a/, 'aa', 2, 1)"),
            Err(ConvError::InvalidRange { from: 2, to: 1 })
        );
    }

    #[test]
    fn offset_past_subject_is_rejected() {
        assert_eq!(
            convert(Endianness::Big, b"x(/a/, 'a', 0, 5)"),
            Err(ConvError::OffsetOutOfRange { offset: 5, len: 1 })
        );
    }

    #[test]
    fn illegal_subject_with_offsets_is_rejected() {
        let line = [b"x(/a/, '".as_slice(), &[0x80], b"', 0, 1)"].concat();
        assert_eq!(
            convert(Endianness::Big, &line),
            Err(ConvError::CharIndexOutOfRange { chars: 1, len: 0 })
        );
    }

    #[test]
    fn illegal_subject_without_offsets_is_empty() {
        let line = [b"n(/a/, '".as_slice(), &[0x80], b"')"].concat();
        let c = convert(Endianness::Big, &line).unwrap();
        assert_eq!(c.subject, "");
    }

    #[test]
    fn ss2_with_non_kana_trail_is_emptied_not_replaced() {
        let line = [b"n(/a/, '".as_slice(), &[0x8e, 0xe0], b"')"].concat();
        let diags = Rc::new(RefCell::new(Vec::new()));
        let mut t = Transcoder::new(
            TranscodeOptions::default(),
            DiagnosticSink::from_writer(Box::new(SharedBuf(diags.clone()))),
        );
        let directive = parse_line(&line).into_directive().unwrap();
        let c = t.convert_directive(Endianness::Big, 7, &directive).unwrap();
        assert_eq!(c.subject, "");
        assert_eq!(
            String::from_utf8(diags.borrow().clone()).unwrap(),
            "error: line 7: IllegalSequence: [\\216\\340]\n"
        );
    }

    #[test]
    fn illegal_pattern_is_empty() {
        let line = [b"x(/".as_slice(), &[0xa4], b"/, 'a', 0, 1)"].concat();
        let c = convert(Endianness::Big, &line).unwrap();
        assert_eq!(c.pattern, "");
        assert_eq!(c.span, Some((0, 2)));
    }

    #[test]
    fn section_counts_lines() {
        let input = b"x(/a/, 'a', 0, 1)\n# comment\nx(/a/, 'a', 0, 9)\nn(/b/, 'a')\n";
        let mut t = transcoder(TranscodeOptions::default());
        let mut out = Vec::new();
        let stats = t.write_section(Endianness::Big, &input[..], &mut out).unwrap();
        assert_eq!(
            stats,
            SectionStats {
                emitted: 2,
                skipped: 1,
                ignored: 1,
            }
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#ifdef POSIX_TEST\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("  x2(")).count(), 1);
        assert_eq!(text.lines().filter(|l| l.starts_with("  n(")).count(), 1);
        assert_eq!(t.finish().emitted(), 2);
    }
}
