//! A single question in a DNS message.

use super::iana::Rtype;
use super::name;
use super::wire::{Cursor, DecodeError};
use core::fmt;
use std::string::String;
use tracing::trace;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. On the wire
/// it consists of three elements: a domain name, a record type, and a
/// class. Only the first two are kept. The class is read and dropped.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: String,

    /// The record type of the question.
    qtype: Rtype,
}

impl Question {
    /// Creates a new question from its components.
    pub fn new(qname: impl Into<String>, qtype: Rtype) -> Self {
        Question {
            qname: qname.into(),
            qtype,
        }
    }

    /// Returns the domain name of the question.
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> String {
        self.qname
    }

    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let qname = name::parse(cursor)?;
        let qtype = Rtype::parse(cursor)?;
        let _qclass = cursor.parse_u16()?;
        trace!(qname = %qname, qtype = %qtype, "decoded question");
        Ok(Question { qname, qtype })
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.qname, self.qtype)
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
            b"\x07example\x03com\0\x00\x01\x00\x01\xc0\x00\x00\x1c\x00\xff",
            &config,
        );
        let question = Question::parse(&mut cursor).unwrap();
        assert_eq!(question, Question::new("example.com.", Rtype::A));
        let question = Question::parse(&mut cursor).unwrap();
        assert_eq!(question.qname(), "example.com.");
        assert_eq!(question.qtype(), Rtype::AAAA);
        assert_eq!(question.to_string(), "example.com.\tAAAA");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn missing_class() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\0\x00\x01\x00", &config);
        assert_eq!(
            Question::parse(&mut cursor),
            Err(DecodeError::ShortInput)
        );
    }
}
