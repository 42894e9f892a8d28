//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name;
use crate::base::serial::Serial;
use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::string::String;

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The responsible person is decoded as a mailbox, i.e., with an `@`
/// after its first label.
///
/// The Soa record type is defined in [RFC 1035, section 3.3.13][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: String,
    rname: String,
    serial: Serial,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    pub fn new(
        mname: impl Into<String>,
        rname: impl Into<String>,
        serial: Serial,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname: mname.into(),
            rname: rname.into(),
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &str {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &str {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    /// The time interval in seconds before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time in seconds before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time in seconds the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        Ok(Self::new(
            name::parse(cursor)?,
            name::parse_mailbox(cursor)?,
            Serial::parse(cursor)?,
            cursor.parse_u32()?,
            cursor.parse_u32()?,
            cursor.parse_u32()?,
            cursor.parse_u32()?,
        ))
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
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
        let mut data = Vec::new();
        data.extend_from_slice(b"\x02ns\x07example\x03com\0");
        data.extend_from_slice(b"\x0ahostmaster\xc0\x03");
        data.extend_from_slice(&2024010101u32.to_be_bytes());
        data.extend_from_slice(&7200u32.to_be_bytes());
        data.extend_from_slice(&3600u32.to_be_bytes());
        data.extend_from_slice(&1209600u32.to_be_bytes());
        data.extend_from_slice(&300u32.to_be_bytes());
        let mut cursor = Cursor::new(&data, &config);
        let soa = Soa::parse(&mut cursor).unwrap();
        assert_eq!(soa.mname(), "ns.example.com.");
        assert_eq!(soa.rname(), "hostmaster@example.com.");
        assert_eq!(soa.serial(), Serial(2024010101));
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 3600);
        assert_eq!(soa.expire(), 1209600);
        assert_eq!(soa.minimum(), 300);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn truncated() {
        let config = Config::default();
        let mut cursor =
            Cursor::new(b"\0\0\x00\x00\x00\x01\x00\x00", &config);
        assert_eq!(Soa::parse(&mut cursor), Err(DecodeError::ShortInput));
    }
}
