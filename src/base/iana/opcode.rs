//! DNS OpCodes.

use super::super::wire::DecodeError;
use core::fmt;

//------------ Opcode --------------------------------------------------------

/// DNS OpCodes.
///
/// The opcode specifies the kind of query to be performed. It is a four bit
/// value in the message header.
///
/// Unlike most other IANA types, this one is closed: a message with an
/// opcode not listed here can’t be decoded at all since we wouldn’t know
/// what its sections mean.
///
/// The opcode and its initial set of values are defined in [RFC 1035].
/// Additional values have been defined over time. All currently assigned
/// values can be found in the [IANA registry].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opcode {
    /// A standard query (0).
    ///
    /// This value is defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    Query,

    /// An inverse query (IQUERY) (1, obsolete).
    ///
    /// This value was defined in [RFC 1035] and obsoleted by [RFC 3425].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 3425]: https://tools.ietf.org/html/rfc3425
    IQuery,

    /// A server status request (2).
    Status,

    /// A NOTIFY query (4).
    ///
    /// This value and the NOTIFY query are defined in [RFC 1996].
    ///
    /// [RFC 1996]: https://tools.ietf.org/html/rfc1996
    Notify,

    /// An UPDATE query (5).
    ///
    /// This value and the UPDATE query are defined in [RFC 2136].
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    Update,

    /// DNS Stateful operations (DSO) (6).
    ///
    /// This value and the DSO query are defined in [RFC 8490].
    ///
    /// [RFC 8490]: https://tools.ietf.org/html/rfc8490
    Dso,
}

impl Opcode {
    /// Returns the opcode for the given value if it is assigned.
    pub fn from_int(value: u8) -> Option<Opcode> {
        match value {
            0 => Some(Opcode::Query),
            1 => Some(Opcode::IQuery),
            2 => Some(Opcode::Status),
            4 => Some(Opcode::Notify),
            5 => Some(Opcode::Update),
            6 => Some(Opcode::Dso),
            _ => None,
        }
    }

    /// Returns the integer value for this opcode.
    pub fn to_int(self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Dso => 6,
        }
    }

    /// Decodes the opcode from a four bit value.
    ///
    /// Fails with [`DecodeError::UnsupportedOpcode`] for unassigned values.
    pub fn check(value: u8) -> Result<Opcode, DecodeError> {
        Opcode::from_int(value).ok_or(DecodeError::UnsupportedOpcode(value))
    }
}

//--- From

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> u8 {
        value.to_int()
    }
}

//--- Display

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Opcode::Query => "QUERY",
            Opcode::IQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Notify => "NOTIFY",
            Opcode::Update => "UPDATE",
            Opcode::Dso => "DSO",
        })
    }
}

//============ Testing =======================================================
