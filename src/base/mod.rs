//! Basics.
//!
//! This module provides the types for DNS messages and the machinery to
//! decode them from their wire format.
//!
//! All decoding happens on buffers holding a complete DNS message. This is
//! necessary because domain names in a message may be compressed by
//! referencing names that appeared earlier in the same message. The
//! fundamental type for decoding is the [`Cursor`][wire::Cursor] in the
//! [wire] module. It keeps the read position and the names decoded so far.
//! Unless you are adding your own record types, you are unlikely to ever
//! deal with it directly.
//!
//! Instead, [`Message::from_slice`] takes the octets of a DNS message and
//! gives you the header and the questions and records of its four sections.
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data arranged in
//! submodules:
//!
//! * [header] for the header of DNS messages,
//! * [name] for decoding domain names,
//! * [opt] for the record data of OPT records used in EDNS,
//! * [question] for questions,
//! * [serial] for serial numbers of zones, and
//! * [record] for DNS resource records including record data.
//!
//! The [iana] module contains the codes for the various parameters used in
//! DNS that are administered by IANA.

pub use self::header::{Flags, Header, HeaderCounts};
pub use self::iana::{Opcode, OptionCode, Rcode, Rtype};
pub use self::message::Message;
pub use self::question::Question;
pub use self::record::Record;
pub use self::serial::Serial;
pub use self::wire::{Cursor, DecodeError};

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod opt;
pub mod question;
pub mod record;
pub mod serial;
pub mod wire;
