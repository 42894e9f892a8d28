//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the Aaaa record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host. The wire format is the
/// 128 bit IPv6 address in network byte order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Decodes the record data.
    ///
    /// The record data must be exactly sixteen octets long.
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        if rdlen != 16 {
            return Err(DecodeError::InvalidLength(
                "AAAA record data must be 16 octets",
            ));
        }
        cursor.parse_array::<16>().map(|octets| Aaaa::new(octets.into()))
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use rstest::rstest;

    #[test]
    fn parse() {
        let config = Config::default();
        let octets = [
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
        ];
        let mut cursor = Cursor::new(&octets, &config);
        let aaaa = Aaaa::parse(&mut cursor, 16).unwrap();
        assert_eq!(aaaa.to_string(), "2001:db8::1");
    }

    #[rstest]
    #[case(4)]
    #[case(15)]
    #[case(17)]
    fn bad_length(#[case] rdlen: u16) {
        let config = Config::default();
        let mut cursor = Cursor::new(&[0u8; 20], &config);
        assert!(matches!(
            Aaaa::parse(&mut cursor, rdlen),
            Err(DecodeError::InvalidLength(_))
        ));
    }
}
