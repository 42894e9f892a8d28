//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. The type [`Rcode`] defined herein
//! represents these codes. Extended response codes carried in the OPT
//! record are available as raw bits through
//! [`OptRecord::ext_rcode`][crate::base::opt::OptRecord::ext_rcode].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
#![allow(clippy::upper_case_acronyms)]

use core::{cmp, fmt, hash};

//------------ Rcode --------------------------------------------------------

/// DNS Response Codes.
///
/// The response code of a response indicates what happend on the server
/// when trying to answer the query. The code is a 4 bit value and part of
/// the header of a DNS message.
///
/// All sixteen values decode. Those without a variant of their own end up
/// in [`Rcode::Int`].
#[derive(Clone, Copy, Debug)]
pub enum Rcode {
    /// No error condition.
    NoError,

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    FormErr,

    /// Server failure.
    ServFail,

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    NXDomain,

    /// Not implemented.
    NotImp,

    /// Query refused.
    Refused,

    /// Name exists when it should not.
    ///
    /// Defined in [RFC 2136].
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    YXDomain,

    /// RR set exists when it should not.
    YXRRSet,

    /// RR set that should exist does not.
    NXRRSet,

    /// Server not authoritative for zone or client not authorized.
    NotAuth,

    /// Name not contained in zone.
    NotZone,

    /// A raw, integer rcode value.
    ///
    /// When converting to an `u8`, only the lower four bits are used.
    Int(u8),
}

impl Rcode {
    /// Creates an rcode from an integer.
    ///
    /// Only the lower four bits of `value` are considered.
    pub fn from_int(value: u8) -> Rcode {
        use self::Rcode::*;

        match value & 0x0F {
            0 => NoError,
            1 => FormErr,
            2 => ServFail,
            3 => NXDomain,
            4 => NotImp,
            5 => Refused,
            6 => YXDomain,
            7 => YXRRSet,
            8 => NXRRSet,
            9 => NotAuth,
            10 => NotZone,
            value => Int(value),
        }
    }

    /// Returns the integer value for this rcode.
    pub fn to_int(self) -> u8 {
        use self::Rcode::*;

        match self {
            NoError => 0,
            FormErr => 1,
            ServFail => 2,
            NXDomain => 3,
            NotImp => 4,
            Refused => 5,
            YXDomain => 6,
            YXRRSet => 7,
            NXRRSet => 8,
            NotAuth => 9,
            NotZone => 10,
            Int(value) => value & 0x0F,
        }
    }
}

//--- From

impl From<u8> for Rcode {
    fn from(value: u8) -> Rcode {
        Rcode::from_int(value)
    }
}

impl From<Rcode> for u8 {
    fn from(value: Rcode) -> u8 {
        value.to_int()
    }
}

//--- Display

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Rcode::*;

        match *self {
            NoError => f.write_str("NOERROR"),
            FormErr => f.write_str("FORMERR"),
            ServFail => f.write_str("SERVFAIL"),
            NXDomain => f.write_str("NXDOMAIN"),
            NotImp => f.write_str("NOTIMP"),
            Refused => f.write_str("REFUSED"),
            YXDomain => f.write_str("YXDOMAIN"),
            YXRRSet => f.write_str("YXRRSET"),
            NXRRSet => f.write_str("NXRRSET"),
            NotAuth => f.write_str("NOAUTH"),
            NotZone => f.write_str("NOTZONE"),
            Int(i) => match Rcode::from_int(i) {
                Rcode::Int(i) => write!(f, "RCODE{}", i),
                value => fmt::Display::fmt(&value, f),
            },
        }
    }
}

//--- PartialEq and Eq

impl cmp::PartialEq for Rcode {
    fn eq(&self, other: &Rcode) -> bool {
        self.to_int() == other.to_int()
    }
}

impl cmp::PartialEq<u8> for Rcode {
    fn eq(&self, other: &u8) -> bool {
        self.to_int() == *other
    }
}

impl cmp::Eq for Rcode {}

//--- Hash

impl hash::Hash for Rcode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.to_int(), state)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Rcode {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_int(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rcode {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        <u8 as serde::Deserialize>::deserialize(deserializer)
            .map(Rcode::from_int)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unassigned_values_decode() {
        assert_eq!(Rcode::from_int(11), Rcode::Int(11));
        assert_eq!(Rcode::from_int(15).to_int(), 15);
        assert_eq!(Rcode::from_int(15).to_string(), "RCODE15");
    }

    #[test]
    fn int_equals_variant() {
        assert_eq!(Rcode::Int(3), Rcode::NXDomain);
        assert_eq!(Rcode::Int(3).to_string(), "NXDOMAIN");
        assert_eq!(Rcode::from_int(0x13), Rcode::NXDomain);
    }
}
