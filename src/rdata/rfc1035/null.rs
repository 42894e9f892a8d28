//! Record data for the NULL record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::wire::{Cursor, DecodeError};
use core::fmt;

//------------ Null ---------------------------------------------------------

/// Null record data.
///
/// Null records can contain whatever data. They are experimental and not
/// allowed in zone files. Their content carries no meaning and is skipped.
///
/// The Null record type is defined in [RFC 1035, section 3.3.10][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.10
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Null;

impl Null {
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        cursor.skip(rdlen.into()).map(|_| Null)
    }
}

//--- Display

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\\# 0")
    }
}
