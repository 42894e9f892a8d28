//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::vec::Vec;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. On the wire, the text is a sequence
/// of character strings each starting with a length octet. Only the length
/// octet of the first string is dropped. Everything after it up to the end
/// of the record data is kept as is, length octets of further strings
/// included.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Txt {
    text: Vec<u8>,
}

impl Txt {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Txt { text: text.into() }
    }

    /// Returns the text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Returns the text if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.text).ok()
    }

    /// Decodes the record data.
    ///
    /// Empty record data is rejected since there isn’t even a length octet.
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        let len = rest_len!(rdlen, 1, "TXT")?;
        cursor.skip(1)?;
        cursor.parse_octets(len).map(Txt::new)
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &ch in &self.text {
            if ch == b'"' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if (0x20..0x7F).contains(&ch) {
                write!(f, "{}", ch as char)?;
            } else {
                write!(f, "\\{:03}", ch)?;
            }
        }
        f.write_str("\"")
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    #[test]
    fn parse() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x05hello\x02hi", &config);
        let txt = Txt::parse(&mut cursor, 9).unwrap();
        assert_eq!(txt.text(), b"hello\x02hi");
        assert_eq!(txt.to_string(), "\"hello\\002hi\"");
    }

    #[test]
    fn empty_string() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x00", &config);
        let txt = Txt::parse(&mut cursor, 1).unwrap();
        assert_eq!(txt.text(), b"");
        assert_eq!(txt.as_str(), Some(""));
    }

    #[test]
    fn no_data() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"", &config);
        assert!(matches!(
            Txt::parse(&mut cursor, 0),
            Err(DecodeError::InvalidLength(_))
        ));
    }
}
