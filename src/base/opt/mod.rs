//! Record data for OPT records.
//!
//! Since DNS message headers are relatively short, the amount of information
//! that can be conveyed through them is very limited. In order to provide an
//! extensible means to transmit additional information, [RFC 6891] introduces
//! a resource record called OPT that can be added to the additional section
//! of a message. The record data in turn consists of a sequence of options.
//!
//! This module contains the record data type [`Opt`], the [`OptData`] enum
//! for a single option, and the [`OptRecord`] view that also interprets the
//! fields of the record header the way EDNS uses them. Only the client
//! subnet option in [`subnet`] has a type of its own. All other options
//! are kept as raw octets.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

pub use self::subnet::ClientSubnet;

pub mod subnet;

use super::iana::{OptionCode, Rtype};
use super::record::Record;
use super::wire::{Cursor, DecodeError};
use crate::rdata::RecordData;
use core::fmt;
use std::vec::Vec;

//------------ Opt -----------------------------------------------------------

/// OPT record data.
///
/// This is the record data type for OPT records. It is a list of options in
/// the order they appeared in.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opt {
    options: Vec<OptData>,
}

impl Opt {
    pub fn new(options: Vec<OptData>) -> Self {
        Opt { options }
    }

    /// Returns the options.
    pub fn options(&self) -> &[OptData] {
        &self.options
    }

    /// Returns whether there are no options at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns an iterator over the options.
    pub fn iter(&self) -> core::slice::Iter<'_, OptData> {
        self.options.iter()
    }

    /// Returns the first client subnet option if there is one.
    pub fn client_subnet(&self) -> Option<&ClientSubnet> {
        self.options.iter().find_map(|option| match option {
            OptData::ClientSubnet(subnet) => Some(subnet),
            _ => None,
        })
    }

    /// Decodes the options from `rdlen` octets of record data.
    ///
    /// Each option takes four octets for code and length plus its data.
    /// The options must add up to exactly `rdlen`. If an option claims more
    /// than what is left, decoding fails with
    /// [`DecodeError::InvalidLength`].
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        let mut options = Vec::new();
        let mut remaining = i32::from(rdlen);
        while remaining != 0 {
            if remaining < 4 {
                return Err(DecodeError::InvalidLength(
                    "option length exceeds OPT record data",
                ));
            }
            let code = OptionCode::parse(cursor)?;
            let len = cursor.parse_u16()?;
            remaining -= 4 + i32::from(len);
            if remaining < 0 {
                return Err(DecodeError::InvalidLength(
                    "option length exceeds OPT record data",
                ));
            }
            options.push(cursor.parse_block(len.into(), |cursor| {
                OptData::parse(cursor, code, len)
            })?);
        }
        Ok(Opt { options })
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Opt {
    type Item = &'a OptData;
    type IntoIter = core::slice::Iter<'a, OptData>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

//------------ OptData -------------------------------------------------------

/// A single EDNS option.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptData {
    /// The client subnet option.
    ClientSubnet(ClientSubnet),

    /// Any other option with its raw data.
    Unknown { code: OptionCode, data: Vec<u8> },
}

impl OptData {
    /// Returns the option code of the option.
    pub fn code(&self) -> OptionCode {
        match *self {
            OptData::ClientSubnet(_) => OptionCode::ClientSubnet,
            OptData::Unknown { code, .. } => code,
        }
    }

    /// Decodes the data of an option with the given code and length.
    pub fn parse(
        cursor: &mut Cursor,
        code: OptionCode,
        len: u16,
    ) -> Result<Self, DecodeError> {
        if code == OptionCode::ClientSubnet {
            ClientSubnet::parse(cursor, len).map(OptData::ClientSubnet)
        } else {
            Ok(OptData::Unknown {
                code,
                data: cursor.parse_octets(len.into())?,
            })
        }
    }
}

//--- Display

impl fmt::Display for OptData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptData::ClientSubnet(subnet) => {
                write!(f, "{}: {}", self.code(), subnet)
            }
            OptData::Unknown { code, data } => {
                write!(f, "{}: ", code)?;
                crate::rdata::fmt_hex(data, f)
            }
        }
    }
}

//------------ OptRecord -----------------------------------------------------

/// An entire OPT record.
///
/// Because the EDNS specificiation uses parts of the header of the OPT record
/// to convey some information, a special view is necessary for OPT records.
/// It interprets the class as the UDP payload size and the TTL as extended
/// rcode, version, and flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptRecord<'a> {
    /// The UDP payload size field from the record header.
    udp_payload_size: u16,

    /// The upper eight bits of the extended rcode.
    ext_rcode: u8,

    /// The EDNS version.
    version: u8,

    /// The EDNS flags.
    flags: u16,

    /// The record data.
    data: &'a Opt,
}

impl<'a> OptRecord<'a> {
    /// Creates the view for a record if it is an OPT record.
    pub fn from_record(record: &'a Record) -> Option<Self> {
        if record.rtype() != Rtype::OPT {
            return None;
        }
        let data = match record.data() {
            RecordData::Opt(data) => data,
            _ => return None,
        };
        let ttl = record.ttl();
        Some(OptRecord {
            udp_payload_size: record.class(),
            ext_rcode: (ttl >> 24) as u8,
            version: (ttl >> 16) as u8,
            flags: ttl as u16,
            data,
        })
    }

    /// Returns the UDP payload size.
    ///
    /// Through this field a sender of a message can signal the maximum size
    /// of UDP payload the sender is able to handle when receiving messages.
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// Returns the upper eight bits of the extended rcode.
    ///
    /// The lower four bits are in the message header.
    pub fn ext_rcode(&self) -> u8 {
        self.ext_rcode
    }

    /// Returns the EDNS version of the OPT header.
    ///
    /// Only EDNS version 0 is currently defined.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    pub fn dnssec_ok(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    /// Returns the raw EDNS flags.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns the record data.
    pub fn opt(&self) -> &'a Opt {
        self.data
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use std::net::IpAddr;

    fn parse(data: &[u8]) -> Result<Opt, DecodeError> {
        let config = Config::default();
        let mut cursor = Cursor::new(data, &config);
        Opt::parse(&mut cursor, data.len() as u16)
    }

    #[test]
    fn empty() {
        assert!(parse(b"").unwrap().is_empty());
    }

    #[test]
    fn options_fill_exactly() {
        let opt = parse(
            b"\x00\x0a\x00\x08\x01\x02\x03\x04\x05\x06\x07\x08\
              \x00\x08\x00\x05\x00\x01\x08\x00\xc0\
              \x00\x0c\x00\x00",
        )
        .unwrap();
        assert_eq!(opt.options().len(), 3);
        assert_eq!(
            opt.options()[0],
            OptData::Unknown {
                code: OptionCode::Cookie,
                data: vec![1, 2, 3, 4, 5, 6, 7, 8]
            }
        );
        assert_eq!(
            opt.client_subnet().unwrap().addr(),
            IpAddr::from([192, 0, 0, 0])
        );
        assert_eq!(opt.options()[2].code(), OptionCode::Padding);
        assert_eq!(opt.iter().count(), 3);
    }

    #[test]
    fn option_overshoots() {
        let config = Config::default();
        let data = b"\x00\x0a\x00\x08\x01\x02\x03\x04\x05\x06\x07\x08";

        // The record data claims fewer octets than the option needs.
        let mut cursor = Cursor::new(data, &config);
        assert!(matches!(
            cursor.parse_block(10, |cursor| Opt::parse(cursor, 10)),
            Err(DecodeError::InvalidLength(_))
        ));

        // Not even room for the option header.
        let mut cursor = Cursor::new(data, &config);
        assert!(matches!(
            cursor.parse_block(2, |cursor| Opt::parse(cursor, 2)),
            Err(DecodeError::InvalidLength(_))
        ));

        // Room for one empty option but not for the next header.
        let data = b"\x00\x0c\x00\x00\x00\x0a";
        let mut cursor = Cursor::new(data, &config);
        assert!(matches!(
            cursor.parse_block(6, |cursor| Opt::parse(cursor, 6)),
            Err(DecodeError::InvalidLength(_))
        ));
    }

    #[test]
    fn option_beyond_input() {
        assert_eq!(
            parse(b"\x00\x0a\x00\x08\x01\x02"),
            Err(DecodeError::InvalidLength(
                "option length exceeds OPT record data"
            ))
        );
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x00\x0a\x00\x08\x01\x02", &config);
        assert_eq!(
            Opt::parse(&mut cursor, 12),
            Err(DecodeError::ShortInput)
        );
    }

    #[test]
    fn bad_subnet_fails_record() {
        assert_eq!(
            parse(b"\x00\x08\x00\x05\x00\x03\x08\x00\xc0"),
            Err(DecodeError::UnsupportedFamily(3))
        );
    }

    #[test]
    fn display() {
        let opt = parse(b"\x00\x08\x00\x05\x00\x01\x08\x00\xc0").unwrap();
        assert_eq!(
            opt.options()[0].to_string(),
            "edns-client-subnet: 192.0.0.0/8"
        );
    }
}
