//! Resource Records.
//!
//! This module defines [`Record`], a single resource record of a message
//! with its data decoded into [`RecordData`].
//!
//! Each resource record consists of a header with the owner name, record
//! type, class, time-to-live, and length of the data, followed by the data
//! itself. The data is decoded strictly within the octets given by its
//! length. Whatever the type specific decoder leaves unread is skipped.

use super::iana::Rtype;
use super::name;
use super::wire::{Cursor, DecodeError};
use crate::rdata::RecordData;
use core::fmt;
use std::string::String;
use tracing::trace;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// The class is kept as a raw number. For most records it is 1 (IN) but
/// the OPT record abuses it for the UDP payload size.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner of the record.
    owner: String,

    /// The record type.
    rtype: Rtype,

    /// The class of the record.
    class: u16,

    /// The time-to-live value of the record.
    ttl: u32,

    /// The record data.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    ///
    /// The record type is taken from the data.
    pub fn new(
        owner: impl Into<String>,
        class: u16,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Record {
            owner: owner.into(),
            rtype: data.rtype(),
            class,
            ttl,
            data,
        }
    }

    /// Returns a reference to the owner domain name.
    ///
    /// The owner of a record is the domain name that specifies the node in
    /// the DNS tree this record belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the raw class of the record.
    pub fn class(&self) -> u16 {
        self.class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }
}

/// # Decoding
///
impl Record {
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let owner = name::parse(cursor)?;
        let rtype = Rtype::parse(cursor)?;
        let class = cursor.parse_u16()?;
        let ttl = cursor.parse_u32()?;
        let rdlen = cursor.parse_u16()?;
        let data = cursor.parse_block(rdlen.into(), |cursor| {
            RecordData::parse(cursor, rtype, rdlen)
        })?;
        trace!(owner = %owner, rtype = %rtype, rdlen, "decoded record");
        Ok(Record {
            owner,
            rtype,
            class,
            ttl,
            data,
        })
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tCLASS{}\t{}\t{}",
            self.owner, self.ttl, self.class, self.rtype, self.data
        )
    }
}

//============ Testing =======================================================
