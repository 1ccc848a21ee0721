// diagnostics.rs - Per-directive diagnostics and the sink they go to.
//
// Generated source goes to stdout; diagnostics go to a separate writer so a
// run with bad input lines still produces a complete program.

use std::fmt;
use std::io::{self, Write};

use crate::escape::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Note,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Note => "note",
            Severity::Error => "error",
        })
    }
}

/// One message about an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based input line, if the message is about a line.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, line: Option<usize>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            line,
            message: message.into(),
        }
    }

    /// Malformed EUC-JP in a pattern or subject field.
    pub fn illegal_sequence(line: usize, field: &[u8]) -> Self {
        Diagnostic::new(
            Severity::Error,
            Some(line),
            format!("IllegalSequence: [{}]", escape(field)),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: line {}: {}", self.severity, line, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Where diagnostics are written. A disabled sink drops them.
pub struct DiagnosticSink {
    writer: Option<Box<dyn Write>>,
    emitted: usize,
}

impl DiagnosticSink {
    pub fn stderr() -> Self {
        Self::from_writer(Box::new(io::stderr()))
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        DiagnosticSink {
            writer: Some(writer),
            emitted: 0,
        }
    }

    pub fn disabled() -> Self {
        DiagnosticSink {
            writer: None,
            emitted: 0,
        }
    }

    /// Number of diagnostics reported so far, including dropped ones.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn emit(&mut self, diag: &Diagnostic) {
        self.emitted += 1;
        if let Some(writer) = &mut self.writer {
            let _ = writeln!(writer, "{diag}");
        }
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("enabled", &self.writer.is_some())
            .field("emitted", &self.emitted)
            .finish()
    }
}
