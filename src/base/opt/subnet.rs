//! EDNS option for carrying client subnet information.
//!
//! The option in this module – [`ClientSubnet`] – can be used by a resolver
//! to include information about the network a query originated from in its
//! own query to an authoritative server so it can tailor its response for
//! that network.
//!
//! The option is defined in [RFC 7871](https://tools.ietf.org/html/rfc7871)
//! which also includes some guidance on its use.

use super::super::wire::{Cursor, DecodeError};
use core::fmt;
use std::net::IpAddr;

//------------ ClientSubnet --------------------------------------------------

/// Option data for the client subnet option.
///
/// The option identifies the network through an address prefix, i.e., an
/// IP address of which only a certain number of left-side bits is
/// interpreted. The option uses two such numbers: The _source prefix length_
/// is the number of bits provided by the client when describing its network
/// and the _scope prefix length_ is the number of bits that the server
/// considered when providing the answer.
///
/// On the wire, the address is truncated to the octets needed. When
/// decoding, the octets present are padded with zeros to a full address
/// of the family. The prefix lengths are taken as they are. Bits beyond the
/// source prefix length are neither checked nor cleared.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientSubnet {
    /// The source prefix length.
    source_prefix_len: u8,

    /// The scope prefix length.
    scope_prefix_len: u8,

    /// The address.
    addr: IpAddr,
}

impl ClientSubnet {
    /// Creates a new client subnet value.
    pub fn new(
        source_prefix_len: u8,
        scope_prefix_len: u8,
        addr: IpAddr,
    ) -> ClientSubnet {
        ClientSubnet {
            source_prefix_len,
            scope_prefix_len,
            addr,
        }
    }

    /// Returns the source prefix length.
    ///
    /// The source prefix length is the prefix length as specified by the
    /// client in a query.
    pub fn source_prefix_len(&self) -> u8 {
        self.source_prefix_len
    }

    /// Returns the scope prefix length.
    ///
    /// The scope prefix length is the prefix length used by the server for
    /// its answer.
    pub fn scope_prefix_len(&self) -> u8 {
        self.scope_prefix_len
    }

    /// Returns the address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Decodes option data of the given length.
    ///
    /// Family 1 is IPv4 and family 2 is IPv6. Anything else fails with
    /// [`DecodeError::UnsupportedFamily`]. An address part longer than the
    /// family’s address is an invalid length.
    pub fn parse(cursor: &mut Cursor, len: u16) -> Result<Self, DecodeError> {
        const ERR_ADDR_LEN: &str = "invalid address length in client \
                                    subnet option";

        let prefix_len = usize::from(len).checked_sub(4).ok_or(
            DecodeError::InvalidLength("client subnet option too short"),
        )?;
        let family = cursor.parse_u16()?;
        let source_prefix_len = cursor.parse_u8()?;
        let scope_prefix_len = cursor.parse_u8()?;

        let addr = match family {
            1 => {
                let mut buf = [0; 4];
                if prefix_len > buf.len() {
                    return Err(DecodeError::InvalidLength(ERR_ADDR_LEN));
                }
                cursor.parse_buf(&mut buf[..prefix_len])?;
                IpAddr::from(buf)
            }
            2 => {
                let mut buf = [0; 16];
                if prefix_len > buf.len() {
                    return Err(DecodeError::InvalidLength(ERR_ADDR_LEN));
                }
                cursor.parse_buf(&mut buf[..prefix_len])?;
                IpAddr::from(buf)
            }
            _ => return Err(DecodeError::UnsupportedFamily(family)),
        };

        Ok(ClientSubnet::new(source_prefix_len, scope_prefix_len, addr))
    }
}

//--- Display

impl fmt::Display for ClientSubnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr {
            IpAddr::V4(a) => {
                if self.scope_prefix_len != 0 {
                    write!(
                        f,
                        "{}/{}/{}",
                        a, self.source_prefix_len, self.scope_prefix_len
                    )
                } else {
                    write!(f, "{}/{}", a, self.source_prefix_len)
                }
            }
            IpAddr::V6(a) => {
                if self.scope_prefix_len != 0 {
                    write!(
                        f,
                        "{}/{}/{}",
                        a, self.source_prefix_len, self.scope_prefix_len
                    )
                } else {
                    write!(f, "{}/{}", a, self.source_prefix_len)
                }
            }
        }
    }
}

//============ Testing =======================================================
