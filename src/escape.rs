// escape.rs - C string literal rendering.

/// Is `b` written as an octal escape inside a generated C literal?
#[inline]
pub fn needs_escape(b: u8) -> bool {
    b < 0x20 || b >= 0x7f || b == b'"' || b == b'\\'
}

/// Renders `bytes` as the body of a C string literal: control bytes, bytes
/// from 0x7F up, `"` and `\` become `\NNN`, everything else is copied.
///
/// ```
/// use testconvu::escape::escape;
///
/// assert_eq!(escape(b"a\0\"b"), r#"a\000\042b"#);
/// ```
pub fn escape(bytes: &[u8]) -> String {
    let mut q = String::with_capacity(bytes.len() * 4);
    for &b in bytes {
        if needs_escape(b) {
            q.push_str(&format!("\\{:03o}", b));
        } else {
            q.push(b as char);
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_is_copied() {
        assert_eq!(escape(b"abc XYZ ~!"), "abc XYZ ~!");
    }

    #[test]
    fn blocked_bytes_are_octal() {
        assert_eq!(escape(&[0x00]), r"\000");
        assert_eq!(escape(&[0x1f]), r"\037");
        assert_eq!(escape(&[0x7f]), r"\177");
        assert_eq!(escape(&[0xff]), r"\377");
        assert_eq!(escape(b"\\"), r"\134");
        assert_eq!(escape(b"\""), r"\042");
    }

    #[test]
    fn utf16_unit() {
        assert_eq!(escape(&[0x30, 0x42, 0x00, 0x00]), r"0B\000\000");
    }

    #[test]
    fn space_is_not_escaped() {
        assert!(!needs_escape(b' '));
        assert!(needs_escape(0x80));
    }
}
