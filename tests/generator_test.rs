// generator_test.rs - Whole-program generation through the public API.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use testconvu::diagnostics::DiagnosticSink;
use testconvu::emit::{SectionStats, Transcoder};
use testconvu::encodings::Endianness;
use testconvu::options::{Endians, TranscodeOptions};
use testconvu::template::{section_header, PROLOGUE, TRAILER};

#[derive(Clone, Default)]
struct Shared(Rc<RefCell<Vec<u8>>>);

impl Shared {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Shared {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const INPUT: &[u8] = concat!(
    "# comment line\n",
    "x(/a/, \"a\", 0, 1)\n",
    "\n",
    "x(/(b)/, 'ab', 1, 2, 1)\n",
    "n(/c/, 'ab')\n",
    "  x(/indented/, 'x', 0, 1)\n",
)
.as_bytes();

fn generate(options: TranscodeOptions, input: &[u8]) -> (String, Vec<SectionStats>, String) {
    let diags = Shared::default();
    let mut t = Transcoder::new(options, DiagnosticSink::from_writer(Box::new(diags.clone())));
    let mut out = Vec::new();
    let stats = t.transcode(input, &mut out).unwrap();
    t.finish();
    (String::from_utf8(out).unwrap(), stats, diags.text())
}

#[test]
fn program_layout() {
    let (program, stats, _) = generate(TranscodeOptions::default(), INPUT);
    assert!(program.starts_with(PROLOGUE));
    assert!(program.ends_with(TRAILER));
    assert!(program.contains(&section_header(Endianness::Big)));
    assert!(!program.contains("UTF16_LE"));
    assert_eq!(
        stats,
        vec![SectionStats {
            emitted: 3,
            skipped: 0,
            ignored: 3,
        }]
    );
}

#[test]
fn indented_line_is_not_a_directive() {
    let (program, stats, _) = generate(TranscodeOptions::default(), INPUT);
    assert!(INPUT.ends_with(b"\n  x(/indented/, 'x', 0, 1)\n"));
    assert_eq!(stats[0].ignored, 3);
    assert!(!program.contains(r"\000i\000n\000d"));
}

#[test]
fn generated_calls() {
    let (program, _, _) = generate(TranscodeOptions::default(), INPUT);
    let calls: Vec<&str> = program
        .lines()
        .filter(|l| l.starts_with("  x2(") || l.starts_with("  x3(") || l.starts_with("  n("))
        .collect();
    assert_eq!(
        calls,
        vec![
            r#"  x2("\000a\000\000", "\000a\000\000", 0, 2);"#,
            r#"  x3("\000(\000b\000)\000\000", "\000a\000b\000\000", 2, 4, 1);"#,
            r#"  n("\000c\000\000", "\000a\000b\000\000");"#,
        ]
    );
}

#[test]
fn both_byte_orders_big_first() {
    let options = TranscodeOptions::builder()
        .endians(Endians::BIG | Endians::LITTLE)
        .build();
    let (program, stats, _) = generate(options, INPUT);
    let be = program.find(&section_header(Endianness::Big)).unwrap();
    let le = program.find(&section_header(Endianness::Little)).unwrap();
    assert!(be < le);
    assert_eq!(stats.len(), 2);
    assert!(program.contains(r#"  x2("a\000\000\000", "a\000\000\000", 0, 2);"#));
}

#[test]
fn no_sections_still_complete() {
    let options = TranscodeOptions::builder().endians(Endians::empty()).build();
    let (program, stats, _) = generate(options, INPUT);
    assert_eq!(program, format!("{PROLOGUE}{TRAILER}"));
    assert!(stats.is_empty());
}

#[test]
fn bad_lines_are_reported_and_skipped() {
    let input = b"x(/a/, 'a', 0, 1)\n\
x(/a/, 'a', 1, 0)\n\
x(/a/, 'a', 0, 9)\n\
n(/\xa4/, 'a')\n";
    let (program, stats, diags) = generate(TranscodeOptions::default(), input);
    assert_eq!(
        stats,
        vec![SectionStats {
            emitted: 2,
            skipped: 2,
            ignored: 0,
        }]
    );
    // The truncated pattern is emitted empty.
    assert!(program.contains(r#"  n("", "\000a\000\000");"#));

    let lines: Vec<&str> = diags.lines().collect();
    assert_eq!(lines.len(), 4, "{diags}");
    assert!(lines[0].starts_with("error: line 2: directive skipped"));
    assert!(lines[1].starts_with("error: line 3: directive skipped"));
    assert_eq!(lines[2], r"error: line 4: IllegalSequence: [\244]");
    assert_eq!(
        lines[3],
        "note: UTF-16BE: 2 directives emitted, 2 skipped, 0 lines ignored"
    );
}

#[test]
fn windows_mode() {
    let input = b"x(/a??/, 'a??', 0, 1)\n";
    let options = TranscodeOptions::builder().windows(true).build();
    let (program, _, _) = generate(options, input);
    assert!(program.contains(r#"  x2("\000a\000?\000\134\000?\000\000", "\000a\000?\000?\000\000", 0, 2);"#));
}

#[test]
fn missing_trailing_newline() {
    let (program, stats, _) = generate(TranscodeOptions::default(), b"n(/a/, 'b')");
    assert_eq!(stats[0].emitted, 1);
    assert!(program.contains(r#"  n("\000a\000\000", "\000b\000\000");"#));
}

#[test]
fn transcode_file_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("testconvu-{}.txt", std::process::id()));
    std::fs::write(&path, INPUT).unwrap();

    let options = TranscodeOptions::builder().little_endian(true).build();
    let mut t = Transcoder::new(options, DiagnosticSink::disabled());
    let mut out = Vec::new();
    let stats = t.transcode_file(&path, &mut out).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0], stats[1]);
    assert!(String::from_utf8(out).unwrap().ends_with(TRAILER));
}

#[test]
fn transcode_file_missing_input() {
    let mut t = Transcoder::new(TranscodeOptions::default(), DiagnosticSink::disabled());
    let mut out = Vec::new();
    let err = t
        .transcode_file(std::path::Path::new("/nonexistent/testconvu/input"), &mut out)
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
