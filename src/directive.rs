// directive.rs - Test directive recognition.
//
// A directive line is one of
//
//   x(/pattern/, subject, from, to)
//   i(/pattern/, subject, from, to)
//   x(/pattern/, subject, from, to, group)
//   n(/pattern/, subject)
//
// anchored at the start of the line. Each shape is a structural matcher; the
// first one that accepts the line wins. Anything else is not a directive.

use memchr::memchr;
use smallvec::SmallVec;

/// What a directive asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Whole match at `from..to`.
    Match,
    /// Capture group `group` at `from..to`.
    MatchWithGroup,
    /// No match at all.
    NoMatch,
}

/// One test directive, borrowed from its input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub kind: DirectiveKind,
    /// Pattern text between the `/` delimiters, escapes untouched.
    pub pattern: &'a [u8],
    /// Subject literal, quotes included.
    pub subject: &'a [u8],
    /// Expected `from..to` character offsets; `None` for [`DirectiveKind::NoMatch`].
    pub expected: Option<(usize, usize)>,
    /// Capture group index, 0 for the whole match.
    pub group: usize,
}

/// Result of matching one input line against the directive shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Match {
        pattern: &'a [u8],
        subject: &'a [u8],
        from: usize,
        to: usize,
    },
    MatchWithGroup {
        pattern: &'a [u8],
        subject: &'a [u8],
        from: usize,
        to: usize,
        group: usize,
    },
    NoMatch {
        pattern: &'a [u8],
        subject: &'a [u8],
    },
    Unrecognized,
}

impl<'a> ParsedLine<'a> {
    /// The directive carried by this line, if any.
    pub fn into_directive(self) -> Option<Directive<'a>> {
        match self {
            ParsedLine::Match {
                pattern,
                subject,
                from,
                to,
            } => Some(Directive {
                kind: DirectiveKind::Match,
                pattern,
                subject,
                expected: Some((from, to)),
                group: 0,
            }),
            ParsedLine::MatchWithGroup {
                pattern,
                subject,
                from,
                to,
                group,
            } => Some(Directive {
                kind: DirectiveKind::MatchWithGroup,
                pattern,
                subject,
                expected: Some((from, to)),
                group,
            }),
            ParsedLine::NoMatch { pattern, subject } => Some(Directive {
                kind: DirectiveKind::NoMatch,
                pattern,
                subject,
                expected: None,
                group: 0,
            }),
            ParsedLine::Unrecognized => None,
        }
    }
}

struct Shape {
    name: u8,
    numbers: usize,
    kind: DirectiveKind,
}

// Order matters only for documentation; no line fits two shapes.
static SHAPES: [Shape; 4] = [
    Shape {
        name: b'x',
        numbers: 2,
        kind: DirectiveKind::Match,
    },
    Shape {
        name: b'i',
        numbers: 2,
        kind: DirectiveKind::Match,
    },
    Shape {
        name: b'x',
        numbers: 3,
        kind: DirectiveKind::MatchWithGroup,
    },
    Shape {
        name: b'n',
        numbers: 0,
        kind: DirectiveKind::NoMatch,
    },
];

/// Classifies one input line (trailing newline allowed).
pub fn parse_line(line: &[u8]) -> ParsedLine<'_> {
    SHAPES
        .iter()
        .find_map(|shape| shape.parse(line))
        .unwrap_or(ParsedLine::Unrecognized)
}

impl Shape {
    fn parse<'a>(&self, line: &'a [u8]) -> Option<ParsedLine<'a>> {
        let mut cur = Cursor { s: line, p: 0 };
        cur.eat(self.name)?;
        cur.eat(b'(')?;
        let pattern = cur.pattern()?;
        cur.comma()?;
        let subject = cur.subject()?;
        let mut numbers: SmallVec<[usize; 3]> = SmallVec::new();
        for _ in 0..self.numbers {
            cur.comma()?;
            numbers.push(cur.number()?);
        }
        cur.eat(b')')?;

        Some(match (self.kind, numbers.as_slice()) {
            (DirectiveKind::Match, &[from, to]) => ParsedLine::Match {
                pattern,
                subject,
                from,
                to,
            },
            (DirectiveKind::MatchWithGroup, &[from, to, group]) => ParsedLine::MatchWithGroup {
                pattern,
                subject,
                from,
                to,
                group,
            },
            (DirectiveKind::NoMatch, &[]) => ParsedLine::NoMatch { pattern, subject },
            _ => return None,
        })
    }
}

#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0c)
}

struct Cursor<'a> {
    s: &'a [u8],
    p: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.s.get(self.p).copied()
    }

    fn eat(&mut self, c: u8) -> Option<()> {
        if self.peek() == Some(c) {
            self.p += 1;
            Some(())
        } else {
            None
        }
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.p += 1;
        }
    }

    /// `\s*,\s*`
    fn comma(&mut self) -> Option<()> {
        self.skip_space();
        self.eat(b',')?;
        self.skip_space();
        Some(())
    }

    /// `/.../` where a backslash escapes any byte except a newline.
    /// Returns the text between the delimiters.
    fn pattern(&mut self) -> Option<&'a [u8]> {
        self.eat(b'/')?;
        let start = self.p;
        loop {
            match self.peek()? {
                b'/' => break,
                b'\\' => match self.s.get(self.p + 1) {
                    Some(&c) if c != b'\n' => self.p += 2,
                    _ => return None,
                },
                _ => self.p += 1,
            }
        }
        let body = &self.s[start..self.p];
        self.p += 1;
        Some(body)
    }

    /// `'...'` or `"..."` with no inner quote of the same kind.
    /// Returns the literal with its quotes.
    fn subject(&mut self) -> Option<&'a [u8]> {
        let quote = self.peek().filter(|&c| c == b'\'' || c == b'"')?;
        let start = self.p;
        let close = memchr(quote, &self.s[start + 1..])?;
        self.p = start + 1 + close + 1;
        Some(&self.s[start..self.p])
    }

    /// A bare decimal token ending at whitespace, `,` or `)`.
    fn number(&mut self) -> Option<usize> {
        let start = self.p;
        while self
            .peek()
            .is_some_and(|c| !is_space(c) && c != b',' && c != b')')
        {
            self.p += 1;
        }
        let token = std::str::from_utf8(&self.s[start..self.p]).ok()?;
        token.parse().ok()
    }
}
