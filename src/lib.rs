//! Decoding DNS messages from their wire format.
//!
//! This crate turns the octets of DNS messages as they arrive over the
//! network into fully decoded values: the header, the questions, and the
//! resource records of the answer, authority, and additional sections
//! including their record data. The input is treated as untrusted. Any
//! inconsistency leads to an error rather than a partial result and no
//! input, however malformed, will make decoding loop or panic.
//!
//! The crate only decodes. It neither builds messages nor does it deal with
//! sending and receiving them beyond the thin helpers in the `net` module.
//!
//! # Modules
//!
//! * [base] contains the types for messages, their header, questions, and
//!   records as well as the decoding machinery,
//! * [rdata] contains the types for the record data of the record types
//!   that are decoded into their fields,
//! * [stream] splits a buffer of length-prefixed messages as received over
//!   a stream transport, and
//! * [config] has the few knobs that influence decoding.
//!
//! # Decoding
//!
//! In the simplest case, [`decode`] takes a single message:
//!
//! ```
//! let msg = domain_wire::decode(
//!     b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
//!       \x07example\x03com\x00\x00\x01\x00\x01"
//! ).unwrap();
//! assert_eq!(msg.header().id(), 0x1234);
//! assert_eq!(msg.questions()[0].qname(), "example.com.");
//! ```
//!
//! Signature validity times in RRSIG records are 32 bit values that wrap
//! around. By default, they are interpreted as seconds since the Unix
//! epoch which gives a window from 1970 to early 2106. With [`decode_at`]
//! they are instead resolved to the instant closest to a given reference
//! time. A [`Decoder`] keeps such settings around for repeated use.
//!
//! # Reference of Feature Flags
//!
//! * `net`: Enables the `net` module with async helpers for receiving
//!   messages via [Tokio](https://tokio.rs/).
//! * `serde`: Enables serde serialization for all decoded types and the
//!   configuration.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::base::message::Message;
pub use self::base::wire::DecodeError;
pub use self::config::Config;
pub use self::decoder::Decoder;
pub use self::stream::StreamBatch;

pub mod base;
pub mod config;
pub mod decoder;
#[cfg(feature = "net")]
#[cfg_attr(docsrs, doc(cfg(feature = "net")))]
pub mod net;
pub mod rdata;
pub mod stream;

use time::OffsetDateTime;

/// Decodes a single message with the default configuration.
pub fn decode(octets: &[u8]) -> Result<Message, DecodeError> {
    Message::from_slice(octets)
}

/// Decodes a single message resolving timestamps relative to `reference`.
pub fn decode_at(
    octets: &[u8],
    reference: OffsetDateTime,
) -> Result<Message, DecodeError> {
    Decoder::with_reference_time(reference).decode(octets)
}

/// Decodes a sequence of length-prefixed messages.
///
/// See [`stream::parse_stream`] for details.
pub fn decode_stream(
    octets: &[u8],
) -> Result<StreamBatch<'_>, DecodeError> {
    stream::parse_stream(octets, &Config::default())
}
