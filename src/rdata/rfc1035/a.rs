//! Record data for the A record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Decodes the record data.
    ///
    /// The record data must be exactly four octets long.
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        if rdlen != 4 {
            return Err(DecodeError::InvalidLength(
                "A record data must be 4 octets",
            ));
        }
        cursor.parse_array::<4>().map(|octets| A::new(octets.into()))
    }
}

//--- From

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<A> for Ipv4Addr {
    fn from(a: A) -> Self {
        a.addr
    }
}

//--- Display

impl fmt::Display for A {
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
        let mut cursor = Cursor::new(b"\xc0\x00\x02\x01", &config);
        let a = A::parse(&mut cursor, 4).unwrap();
        assert_eq!(a, A::from_octets(192, 0, 2, 1));
        assert_eq!(a.to_string(), "192.0.2.1");
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(5)]
    #[case(16)]
    fn bad_length(#[case] rdlen: u16) {
        let config = Config::default();
        let mut cursor = Cursor::new(&[0u8; 16], &config);
        assert!(matches!(
            A::parse(&mut cursor, rdlen),
            Err(DecodeError::InvalidLength(_))
        ));
    }
}
