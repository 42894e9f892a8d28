//! Serial numbers.
//!
//! DNS uses 32 bit values in various places that are conceptionally viewed
//! as the 32 bit modulus of a larger number space, zone serials and the
//! signature times of RRSIG records among them. This module provides the
//! type [`Serial`] for such values.

use super::wire::{Cursor, DecodeError};
use core::fmt;

//------------ Serial --------------------------------------------------------

/// A 32 bit value in a wrapping number space.
///
/// The value itself is kept as a native `u32`. Since it can wrap, it only
/// becomes an absolute number once it is [resolved][Serial::resolve]
/// against a reference point, following the arithmetic of [RFC 1982].
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

impl Serial {
    /// Returns the serial number as a raw integer.
    pub fn into_int(self) -> u32 {
        self.0
    }

    /// Resolves the serial number against a reference point.
    ///
    /// Returns the unique value congruent to `self` modulo `2^32` that lies
    /// in the window `reference - 2^31 ..= reference + 2^31 - 1`. This is
    /// how 32 bit time values such as RRSIG signature times are turned back
    /// into absolute points in time.
    pub fn resolve(self, reference: i64) -> i64 {
        // Truncating the reference keeps its residue modulo 2^32, negative
        // references included.
        let delta = self.0.wrapping_sub(reference as u32) as i32;
        reference + i64::from(delta)
    }

    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        cursor.parse_u32().map(Self)
    }
}

//--- From

impl From<u32> for Serial {
    fn from(value: u32) -> Serial {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> u32 {
        serial.0
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//============ Testing =======================================================
