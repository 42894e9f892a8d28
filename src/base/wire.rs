//! Consuming data in wire format.
//!
//! All decoding happens through a [`Cursor`]. It wraps an
//! [`octseq::parse::Parser`] over the octets of a single DNS message and
//! adds the one piece of state that decoding a message needs beyond a read
//! position: a cache of the domain names already decoded, keyed by the
//! absolute offset at which they started. Compression pointers are
//! resolved through this cache only, so a pointer can never lead to a name
//! that hasn’t been decoded earlier.

use crate::config::Config;
use octseq::parse::{Parser, ShortInput};
use std::collections::HashMap;
use std::string::String;
use std::vec::Vec;
use core::{fmt, mem};
use tracing::debug;

//------------ Cursor --------------------------------------------------------

/// A read position in a DNS message.
///
/// The cursor provides bounded reads of integers in network byte order and
/// raw octets. All of them fail with [`DecodeError::ShortInput`] if fewer
/// octets are left than requested. Through
/// [`parse_block`][Self::parse_block], reads can be restricted to the next
/// `len` octets.
pub struct Cursor<'a> {
    /// The parser for the octets currently in scope.
    parser: Parser<'a, [u8]>,

    /// Names decoded so far by their start offset.
    names: HashMap<usize, CachedName>,

    /// The configuration for this decoding run.
    config: &'a Config,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `octets`.
    ///
    /// The octets must be a complete message since compression pointers
    /// are offsets from its start.
    pub fn new(octets: &'a [u8], config: &'a Config) -> Self {
        Cursor {
            parser: Parser::from_ref(octets),
            names: HashMap::new(),
            config,
        }
    }

    /// Returns the configuration of the cursor.
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Returns the current position as an offset from the message start.
    pub fn pos(&self) -> usize {
        self.parser.pos()
    }

    /// Returns the number of octets left in the current scope.
    pub fn remaining(&self) -> usize {
        self.parser.remaining()
    }

    pub fn parse_u8(&mut self) -> Result<u8, DecodeError> {
        self.parser.parse_u8().map_err(Into::into)
    }

    pub fn parse_u16(&mut self) -> Result<u16, DecodeError> {
        self.parser.parse_u16_be().map_err(Into::into)
    }

    pub fn parse_u32(&mut self) -> Result<u32, DecodeError> {
        self.parser.parse_u32_be().map_err(Into::into)
    }

    /// Fills `buf` with the next octets.
    pub fn parse_buf(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        self.parser.parse_buf(buf).map_err(Into::into)
    }

    /// Takes a fixed number of octets.
    pub fn parse_array<const N: usize>(
        &mut self,
    ) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        self.parse_buf(&mut buf)?;
        Ok(buf)
    }

    /// Takes exactly `len` octets.
    pub fn parse_octets(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        // Check first so a bogus length can’t make us allocate.
        if self.remaining() < len {
            return Err(DecodeError::ShortInput);
        }
        let mut buf = vec![0u8; len];
        self.parse_buf(&mut buf)?;
        Ok(buf)
    }

    /// Skips over `len` octets.
    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.parser.advance(len).map_err(Into::into)
    }

    /// Runs `op` with reads limited to the next `len` octets.
    ///
    /// Afterwards, the cursor is positioned right behind those octets no
    /// matter how many of them `op` actually consumed. Octets left over by
    /// a successful `op` are quietly absorbed.
    pub fn parse_block<F, T>(
        &mut self,
        len: usize,
        op: F,
    ) -> Result<T, DecodeError>
    where
        F: FnOnce(&mut Self) -> Result<T, DecodeError>,
    {
        let block = self.parser.parse_parser(len)?;
        let outer = mem::replace(&mut self.parser, block);
        let res = op(self);
        let block = mem::replace(&mut self.parser, outer);
        if res.is_ok() && block.remaining() > 0 {
            debug!(
                pos = block.pos(),
                unread = block.remaining(),
                "absorbing unread octets at end of block"
            );
        }
        res
    }

    /// Returns the name that started at `pos`, if one was decoded.
    pub fn cached_name(&self, pos: usize) -> Option<&CachedName> {
        self.names.get(&pos)
    }

    /// Remembers the name that started at `pos`.
    ///
    /// Decoding the same position twice has to yield the same name, so an
    /// existing entry is simply replaced.
    pub fn cache_name(&mut self, pos: usize, name: CachedName) {
        self.names.insert(pos, name);
    }
}

//------------ CachedName ----------------------------------------------------

/// A domain name as kept in the cursor’s cache.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CachedName {
    /// The name in its textual form with `.` separators.
    pub text: String,

    /// The length of the name in uncompressed wire format.
    pub wire_len: usize,
}

//============ Error Types ===================================================

//------------ DecodeError ---------------------------------------------------

/// Decoding a message failed.
///
/// Any error aborts decoding of the entire message. There is no partial
/// result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// An attempt was made to go beyond the end of the input.
    ShortInput,

    /// A compression pointer referenced an offset without a decoded name.
    InvalidPointer(usize),

    /// The header contained an opcode we don’t know.
    UnsupportedOpcode(u8),

    /// A length field was inconsistent with the data.
    InvalidLength(&'static str),

    /// A client subnet option used an unknown address family.
    UnsupportedFamily(u16),

    /// A label used the extended or reserved label type.
    ExtendedLabel(u8),

    /// A domain name exceeded 255 octets.
    LongName,

    /// A time value could not be resolved to a representable date.
    InvalidTimestamp(u32),
}

//--- From

impl From<ShortInput> for DecodeError {
    fn from(_: ShortInput) -> Self {
        DecodeError::ShortInput
    }
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::ShortInput => f.write_str("unexpected end of input"),
            DecodeError::InvalidPointer(pos) => {
                write!(f, "compression pointer to unknown offset {}", pos)
            }
            DecodeError::UnsupportedOpcode(value) => {
                write!(f, "unsupported opcode 0x{:x}", value)
            }
            DecodeError::InvalidLength(msg) => {
                write!(f, "invalid length: {}", msg)
            }
            DecodeError::UnsupportedFamily(family) => {
                write!(f, "unsupported address family {}", family)
            }
            DecodeError::ExtendedLabel(value) => {
                write!(f, "unsupported extended label type 0x{:02x}", value)
            }
            DecodeError::LongName => f.write_str("long domain name"),
            DecodeError::InvalidTimestamp(value) => {
                write!(f, "timestamp {} out of range", value)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

//============ Testing =======================================================
