//! Record data from [RFC 2782]: SRV records.
//!
//! This RFC defines the Srv record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::name;
use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::string::String;

//------------ Srv ---------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl Srv {
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<String>,
    ) -> Self {
        Srv {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }

    pub fn into_target(self) -> String {
        self.target
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        Ok(Srv {
            priority: cursor.parse_u16()?,
            weight: cursor.parse_u16()?,
            port: cursor.parse_u16()?,
            target: name::parse(cursor)?,
        })
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    #[test]
    fn parse() {
        let config = Config::default();
        let mut cursor = Cursor::new(
            b"\x00\x0a\x00\x05\x14\x95\x03sip\x07example\x03com\0",
            &config,
        );
        let srv = Srv::parse(&mut cursor).unwrap();
        assert_eq!(srv, Srv::new(10, 5, 5269, "sip.example.com."));
        assert_eq!(srv.to_string(), "10 5 5269 sip.example.com.");
    }
}
