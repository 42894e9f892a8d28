//! Resource data implementations.
//!
//! This module contains the types for the record data of the record types
//! that are interpreted when decoding. The types are named after the record
//! type they implement and are grouped into submodules by the RFCs they are
//! defined in. All types are also re-exported at the top level here. Ie.,
//! for the AAAA record type, you can simple `use domain_wire::rdata::Aaaa`.
//!
//! The enum [`RecordData`] is the closed set of all record data this crate
//! knows about plus a catch-all variant for everything else. The OPT record
//! data is defined in [`base::opt`][crate::base::opt] since it is really
//! part of the message rather than ordinary data.

#[macro_use]
mod macros;

pub mod aaaa;
pub mod dnssec;
pub mod rfc1035;
pub mod srv;
pub mod tlsa;

pub use self::aaaa::Aaaa;
pub use self::dnssec::{Dnskey, Ds, Rrsig, Timestamp};
pub use self::rfc1035::{Cname, Dname, Mx, Ns, Null, Ptr, Soa, Txt, A};
pub use self::srv::Srv;
pub use self::tlsa::Tlsa;

use crate::base::iana::Rtype;
use crate::base::opt::Opt;
use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::vec::Vec;

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
///
/// Which variant is used is determined by the record type alone. CDS and
/// CDNSKEY records share their data types with DS and DNSKEY but have
/// variants of their own.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    A(A),
    Ns(Ns),
    Cname(Cname),
    Soa(Soa),
    Null(Null),
    Ptr(Ptr),
    Mx(Mx),
    Txt(Txt),
    Aaaa(Aaaa),
    Srv(Srv),
    Dname(Dname),
    Opt(Opt),
    Ds(Ds),
    Rrsig(Rrsig),
    Dnskey(Dnskey),
    Tlsa(Tlsa),
    Cds(Ds),
    Cdnskey(Dnskey),
    Unknown(UnknownRecordData),
}

impl RecordData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(_) => Rtype::A,
            RecordData::Ns(_) => Rtype::NS,
            RecordData::Cname(_) => Rtype::CNAME,
            RecordData::Soa(_) => Rtype::SOA,
            RecordData::Null(_) => Rtype::NULL,
            RecordData::Ptr(_) => Rtype::PTR,
            RecordData::Mx(_) => Rtype::MX,
            RecordData::Txt(_) => Rtype::TXT,
            RecordData::Aaaa(_) => Rtype::AAAA,
            RecordData::Srv(_) => Rtype::SRV,
            RecordData::Dname(_) => Rtype::DNAME,
            RecordData::Opt(_) => Rtype::OPT,
            RecordData::Ds(_) => Rtype::DS,
            RecordData::Rrsig(_) => Rtype::RRSIG,
            RecordData::Dnskey(_) => Rtype::DNSKEY,
            RecordData::Tlsa(_) => Rtype::TLSA,
            RecordData::Cds(_) => Rtype::CDS,
            RecordData::Cdnskey(_) => Rtype::CDNSKEY,
            RecordData::Unknown(ref data) => data.rtype(),
        }
    }

    /// Decodes record data of the given type.
    ///
    /// The cursor should be limited to the record data already. The length
    /// is passed in separately for those types that need it.
    pub fn parse(
        cursor: &mut Cursor,
        rtype: Rtype,
        rdlen: u16,
    ) -> Result<Self, DecodeError> {
        let res = match rtype {
            Rtype::A => A::parse(cursor, rdlen)?.into(),
            Rtype::NS => Ns::parse(cursor)?.into(),
            Rtype::CNAME => Cname::parse(cursor)?.into(),
            Rtype::SOA => Soa::parse(cursor)?.into(),
            Rtype::NULL => Null::parse(cursor, rdlen)?.into(),
            Rtype::PTR => Ptr::parse(cursor)?.into(),
            Rtype::MX => Mx::parse(cursor)?.into(),
            Rtype::TXT => Txt::parse(cursor, rdlen)?.into(),
            Rtype::AAAA => Aaaa::parse(cursor, rdlen)?.into(),
            Rtype::SRV => Srv::parse(cursor)?.into(),
            Rtype::DNAME => Dname::parse(cursor)?.into(),
            Rtype::OPT => RecordData::Opt(Opt::parse(cursor, rdlen)?),
            Rtype::DS => RecordData::Ds(Ds::parse(cursor, rdlen)?),
            Rtype::RRSIG => Rrsig::parse(cursor, rdlen)?.into(),
            Rtype::DNSKEY => RecordData::Dnskey(Dnskey::parse(cursor, rdlen)?),
            Rtype::TLSA => Tlsa::parse(cursor, rdlen)?.into(),
            Rtype::CDS => RecordData::Cds(Ds::parse(cursor, rdlen)?),
            Rtype::CDNSKEY => {
                RecordData::Cdnskey(Dnskey::parse(cursor, rdlen)?)
            }
            _ => UnknownRecordData::parse(cursor, rtype, rdlen)?.into(),
        };
        Ok(res)
    }
}

//--- From

macro_rules! record_data_from {
    ( $( $variant:ident ),* ) => {
        $(
            impl From<$variant> for RecordData {
                fn from(data: $variant) -> Self {
                    RecordData::$variant(data)
                }
            }
        )*
    }
}

record_data_from!(
    A, Ns, Cname, Soa, Null, Ptr, Mx, Txt, Aaaa, Srv, Dname, Rrsig, Tlsa
);

impl From<UnknownRecordData> for RecordData {
    fn from(data: UnknownRecordData) -> Self {
        RecordData::Unknown(data)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ns(ref data) => fmt::Display::fmt(data, f),
            RecordData::Cname(ref data) => fmt::Display::fmt(data, f),
            RecordData::Soa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Null(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ptr(ref data) => fmt::Display::fmt(data, f),
            RecordData::Mx(ref data) => fmt::Display::fmt(data, f),
            RecordData::Txt(ref data) => fmt::Display::fmt(data, f),
            RecordData::Aaaa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Srv(ref data) => fmt::Display::fmt(data, f),
            RecordData::Dname(ref data) => fmt::Display::fmt(data, f),
            RecordData::Opt(ref data) => {
                let mut sep = "";
                for option in data {
                    write!(f, "{}{}", sep, option)?;
                    sep = "; ";
                }
                Ok(())
            }
            RecordData::Ds(ref data) | RecordData::Cds(ref data) => {
                fmt::Display::fmt(data, f)
            }
            RecordData::Rrsig(ref data) => fmt::Display::fmt(data, f),
            RecordData::Dnskey(ref data) | RecordData::Cdnskey(ref data) => {
                fmt::Display::fmt(data, f)
            }
            RecordData::Tlsa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Unknown(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// The data of a record of a type without a dedicated data type.
///
/// The data is kept as raw octets together with the record type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    pub fn from_octets(rtype: Rtype, data: impl Into<Vec<u8>>) -> Self {
        UnknownRecordData {
            rtype,
            data: data.into(),
        }
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn parse(
        cursor: &mut Cursor,
        rtype: Rtype,
        rdlen: u16,
    ) -> Result<Self, DecodeError> {
        cursor
            .parse_octets(rdlen.into())
            .map(|data| Self::from_octets(rtype, data))
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        if !self.data.is_empty() {
            f.write_str(" ")?;
            fmt_hex(&self.data, f)?;
        }
        Ok(())
    }
}

//------------ Helpers -------------------------------------------------------

/// Writes octets as lowercase hex digits.
pub(crate) fn fmt_hex(data: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    for ch in data {
        write!(f, "{:02x}", ch)?;
    }
    Ok(())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    fn parse(rtype: Rtype, data: &[u8]) -> Result<RecordData, DecodeError> {
        let config = Config::default();
        let mut cursor = Cursor::new(data, &config);
        RecordData::parse(&mut cursor, rtype, data.len() as u16)
    }

    #[test]
    fn dispatch() {
        assert_eq!(
            parse(Rtype::A, b"\x7f\x00\x00\x01").unwrap(),
            RecordData::A(A::from_octets(127, 0, 0, 1))
        );
        assert_eq!(
            parse(Rtype::PTR, b"\x04host\0").unwrap(),
            RecordData::Ptr(Ptr::new("host."))
        );
        assert_eq!(
            parse(Rtype::NULL, b"\x01\x02\x03").unwrap(),
            RecordData::Null(Null)
        );
        assert_eq!(
            parse(Rtype::OPT, b"").unwrap(),
            RecordData::Opt(Opt::default())
        );
    }

    #[test]
    fn child_copies() {
        let data = parse(Rtype::CDS, b"\x30\x39\x08\x02\xab").unwrap();
        assert_eq!(data, RecordData::Cds(Ds::new(12345, 8, 2, vec![0xab])));
        assert_eq!(data.rtype(), Rtype::CDS);
        let data = parse(Rtype::CDNSKEY, b"\x01\x01\x03\x08\xab").unwrap();
        assert_eq!(data.rtype(), Rtype::CDNSKEY);
        assert_eq!(data.to_string(), "257 3 8 ab");
    }

    #[test]
    fn unknown() {
        let data = parse(Rtype::from_int(65280), b"\xde\xad").unwrap();
        assert_eq!(
            data,
            RecordData::Unknown(UnknownRecordData::from_octets(
                Rtype::from_int(65280),
                b"\xde\xad".as_slice()
            ))
        );
        assert_eq!(data.rtype(), Rtype::from_int(65280));
        assert_eq!(data.to_string(), "\\# 2 dead");

        // Known types without a data type of their own end up here, too.
        let data = parse(Rtype::CAA, b"\x00").unwrap();
        assert_eq!(data.rtype(), Rtype::CAA);
    }
}
