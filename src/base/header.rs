//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! Only the first part of the header survives decoding as [`Header`]. The
//! section counts in [`HeaderCounts`] are merely used to drive decoding of
//! the sections. Afterwards, the lengths of the section lists are what
//! counts.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Cursor, DecodeError};
use core::fmt;

//------------ Header --------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags. On
/// the wire, the data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The basic structure and most of the fields re defined in [RFC 1035],
/// except for the AD and CD flags, which are defined in [RFC 4035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 4035]: https://tools.ietf.org/html/rfc4035
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    id: u16,
    flags: Flags,
}

impl Header {
    /// Decodes the header from the first four octets.
    ///
    /// Fails with [`DecodeError::UnsupportedOpcode`] if the opcode isn’t
    /// assigned.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let id = cursor.parse_u16()?;
        let flags = Flags::from_word(cursor.parse_u16()?)?;
        Ok(Header { id, flags })
    }

    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub fn id(self) -> u16 {
        self.id
    }

    /// Returns the flags of the message.
    pub fn flags(self) -> Flags {
        self.flags
    }

    /// Returns whether the message is a response.
    pub fn qr(self) -> bool {
        self.flags.qr
    }

    /// Returns the kind of query.
    pub fn opcode(self) -> Opcode {
        self.flags.opcode
    }

    /// Returns the response code.
    pub fn rcode(self) -> Rcode {
        self.flags.rcode
    }
}

//------------ Flags ---------------------------------------------------

/// The flags contained in the DNS message header.
///
/// Next to the single bit flags, this includes the opcode and the four bit
/// response code since they share the same 16 bit word.
///
/// The text notation produced by `Display` only covers the bit flags. Each
/// flag that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name. If mutliple flags are set, the
/// tokens are separated by space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    pub qr: bool,

    /// The kind of query.
    pub opcode: Opcode,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available then
    /// fit into the message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the name
    /// server to try and recursively gather a response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether the
    /// responding name server supports recursion.
    pub ra: bool,

    /// The *authentic data* (`AD`) bit is used by security-aware recursive name
    /// servers to indicate that it considers all RRsets in its response are
    /// authentic.
    pub ad: bool,

    /// The *checking disabled* (`CD`) bit is used by a security-aware resolver
    /// to indicate that it does not want upstream name servers to perform
    /// verification.
    pub cd: bool,

    /// The response code from the header.
    ///
    /// Any value is accepted here.
    pub rcode: Rcode,
}

impl Flags {
    /// Decodes the flags from the second 16 bit word of the header.
    pub fn from_word(word: u16) -> Result<Self, DecodeError> {
        Ok(Flags {
            qr: word & 0x8000 != 0,
            opcode: Opcode::check(((word >> 11) & 0x0F) as u8)?,
            aa: word & 0x0400 != 0,
            tc: word & 0x0200 != 0,
            rd: word & 0x0100 != 0,
            ra: word & 0x0080 != 0,
            ad: word & 0x0020 != 0,
            cd: word & 0x0010 != 0,
            rcode: Rcode::from_int((word & 0x0F) as u8),
        })
    }
}

//--- Display

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
            (self.ad, "AD"),
            (self.cd, "CD"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

//------------ HeaderCounts -------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    /// The number of questions.
    pub qdcount: u16,

    /// The number of answer records.
    pub ancount: u16,

    /// The number of authority records.
    pub nscount: u16,

    /// The number of additional records.
    pub arcount: u16,
}

impl HeaderCounts {
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        Ok(HeaderCounts {
            qdcount: cursor.parse_u16()?,
            ancount: cursor.parse_u16()?,
            nscount: cursor.parse_u16()?,
            arcount: cursor.parse_u16()?,
        })
    }
}

//============ Testing ======================================================
