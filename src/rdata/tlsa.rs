//! Record data from [RFC 6698]: TLSA records.
//!
//! [RFC 6698]: https://tools.ietf.org/html/rfc6698

use super::fmt_hex;
use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::vec::Vec;

//------------ Tlsa ----------------------------------------------------------

/// TLSA record data.
///
/// The TLSA record associates a TLS server certificate or public key with
/// the domain name where the record is found.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tlsa {
    usage: u8,
    selector: u8,
    matching_type: u8,
    data: Vec<u8>,
}

impl Tlsa {
    pub fn new(
        usage: u8,
        selector: u8,
        matching_type: u8,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Tlsa {
            usage,
            selector,
            matching_type,
            data: data.into(),
        }
    }

    /// Returns the certificate usage.
    pub fn usage(&self) -> u8 {
        self.usage
    }

    /// Returns the selector.
    pub fn selector(&self) -> u8 {
        self.selector
    }

    /// Returns the matching type.
    pub fn matching_type(&self) -> u8 {
        self.matching_type
    }

    /// Returns the certificate association data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        let len = rest_len!(rdlen, 3, "TLSA")?;
        Ok(Self::new(
            cursor.parse_u8()?,
            cursor.parse_u8()?,
            cursor.parse_u8()?,
            cursor.parse_octets(len)?,
        ))
    }
}

//--- Display

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ", self.usage, self.selector, self.matching_type)?;
        fmt_hex(&self.data, f)
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
        let mut cursor = Cursor::new(b"\x03\x01\x01\xab\xcd\xef", &config);
        let tlsa = Tlsa::parse(&mut cursor, 6).unwrap();
        assert_eq!(tlsa, Tlsa::new(3, 1, 1, b"\xab\xcd\xef".as_slice()));
        assert_eq!(tlsa.to_string(), "3 1 1 abcdef");
    }

    #[test]
    fn too_short() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x03\x01", &config);
        assert!(matches!(
            Tlsa::parse(&mut cursor, 2),
            Err(DecodeError::InvalidLength(_))
        ));
    }
}
