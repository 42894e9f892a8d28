//! Decoding a sequence of length-prefixed messages.
//!
//! When DNS messages are sent over a stream transport such as TCP, each
//! message is preceded by its length as a 16 bit integer in network byte
//! order. This module splits a buffer holding a number of such messages
//! and decodes each one of them.
//!
//! The buffer does not have to end at a message boundary. Octets that are
//! too few to form another length prefix are handed back to the caller who
//! can prepend them to whatever arrives next.

use crate::base::message::Message;
use crate::base::wire::DecodeError;
use crate::config::Config;
use octseq::parse::Parser;
use std::vec::Vec;
use tracing::debug;

//------------ StreamBatch ---------------------------------------------------

/// The messages decoded from a buffer plus the octets left over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamBatch<'a> {
    /// The messages in the order they appeared in.
    pub messages: Vec<Message>,

    /// The octets following the last complete message.
    ///
    /// This is at most one octet long.
    pub leftover: &'a [u8],
}

impl<'a> StreamBatch<'a> {
    /// Returns whether the buffer ended exactly after the last message.
    pub fn is_complete(&self) -> bool {
        self.leftover.is_empty()
    }
}

//------------ parse_stream --------------------------------------------------

/// Decodes all length-prefixed messages in `buf`.
///
/// Decoding stops once fewer than two octets are left. If a length prefix
/// promises more octets than there are, decoding fails with
/// [`DecodeError::ShortInput`]. If any message fails to decode, the whole
/// batch fails.
///
/// Each message is decoded with its own cursor. Compression pointers are
/// offsets from the start of the message they appear in.
pub fn parse_stream<'a>(
    buf: &'a [u8],
    config: &Config,
) -> Result<StreamBatch<'a>, DecodeError> {
    let mut parser = Parser::from_ref(buf);
    let mut messages = Vec::new();
    while parser.remaining() >= 2 {
        let len = usize::from(parser.parse_u16_be()?);
        let start = parser.pos();
        parser.advance(len)?;
        messages.push(Message::from_slice_with(
            &buf[start..start + len],
            config,
        )?);
    }
    let leftover = &buf[parser.pos()..];
    if !leftover.is_empty() {
        debug!(
            messages = messages.len(),
            leftover = leftover.len(),
            "octets left after last message"
        );
    }
    Ok(StreamBatch { messages, leftover })
}

//============ Testing =======================================================
