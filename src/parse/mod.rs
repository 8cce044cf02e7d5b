//! Textual grammars for network identifiers.
//!
//! Every parser is a pure function of its input. Error values render to
//! stable text that downstream diagnostics embed verbatim.

mod addr;
mod mac;
mod prefix;

pub use addr::{parse_addr, Addr, AddrErrorKind, AddrParseError, Family};
pub use mac::{parse_mac, MacAddr, MacFormat, MacParseError};
pub use prefix::{parse_prefix, Prefix, PrefixErrorKind, PrefixParseError};

use std::fmt::{self, Write as _};

/// Double-quoted rendering of user input inside error text.
///
/// ASCII controls use C escapes or `\xNN`; other unprintable code points
/// use `\uNNNN` or `\UNNNNNNNN`. Hex digits are lowercase.
pub(crate) struct Quoted<'a>(pub(crate) &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\x07' => f.write_str("\\a")?,
                '\x08' => f.write_str("\\b")?,
                '\x0c' => f.write_str("\\f")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\x0b' => f.write_str("\\v")?,
                ' '..='~' => f.write_char(c)?,
                c if c.is_ascii() => write!(f, "\\x{:02x}", c as u32)?,
                c if is_printable(c) => f.write_char(c)?,
                c if (c as u32) < 0x10000 => write!(f, "\\u{:04x}", c as u32)?,
                c => write!(f, "\\U{:08x}", c as u32)?,
            }
        }
        f.write_char('"')
    }
}

/// Non-ASCII printability: letters, marks, numbers, punctuation and
/// symbols. Controls, format characters, separators and unassigned code
/// points are not. The leading `a` keeps combining marks from being
/// treated as a string-initial grapheme extender.
fn is_printable(c: char) -> bool {
    let s = format!("a{}", c);
    s.escape_debug().to_string() == s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(s: &str) -> String {
        Quoted(s).to_string()
    }

    #[test]
    fn test_quoted_ascii() {
        assert_eq!(quote("10.0.0.1"), "\"10.0.0.1\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("\x07\x08\x0c\n\r\t\x0b"), "\"\\a\\b\\f\\n\\r\\t\\v\"");
        assert_eq!(quote("\x01\x1f\x7f"), "\"\\x01\\x1f\\x7f\"");
    }

    #[test]
    fn test_quoted_unicode() {
        assert_eq!(quote("café"), "\"café\"");
        assert_eq!(quote("e\u{301}"), "\"e\u{301}\"");
        assert_eq!(quote("\u{ad}"), "\"\\u00ad\"");
        assert_eq!(quote("\u{85}"), "\"\\u0085\"");
        assert_eq!(quote("\u{a0}"), "\"\\u00a0\"");
        assert_eq!(quote("\u{10ffff}"), "\"\\U0010ffff\"");
    }
}
