//! Accessing existing DNS messages.
//!
//! This module defines the type [`Message`] which holds a DNS message fully
//! decoded from its wire format. A message consists of the header followed
//! by four sections: the question section with the [`Question`]s and the
//! answer, authority, and additional sections with [`Record`]s. The number
//! of entries in each section is given by the counts in the header. These
//! counts are only used while decoding. Afterwards, the length of each
//! section is all there is.
//!
//! Decoding is all or nothing. If any part of the message is broken,
//! decoding fails and no part of it is returned.

use super::header::{Header, HeaderCounts};
use super::opt::OptRecord;
use super::question::Question;
use super::record::Record;
use super::wire::{Cursor, DecodeError};
use crate::config::Config;
use std::vec::Vec;

//------------ Message -------------------------------------------------------

/// A decoded DNS message.
///
/// You create a message from the octets of a single message via
/// [`from_slice`][Self::from_slice] or, if the decoding should use a
/// non-default configuration, via [`from_slice_with`][Self::from_slice_with].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creation and Decoding
///
impl Message {
    /// Creates a message from its parts.
    pub fn new(
        header: Header,
        questions: Vec<Question>,
        answers: Vec<Record>,
        authority: Vec<Record>,
        additional: Vec<Record>,
    ) -> Self {
        Message {
            header,
            questions,
            answers,
            authority,
            additional,
        }
    }

    /// Decodes a message using the default configuration.
    pub fn from_slice(octets: &[u8]) -> Result<Self, DecodeError> {
        Self::from_slice_with(octets, &Config::default())
    }

    /// Decodes a message using the given configuration.
    ///
    /// The slice must contain exactly one message. Octets following the
    /// last record announced by the header are ignored.
    pub fn from_slice_with(
        octets: &[u8],
        config: &Config,
    ) -> Result<Self, DecodeError> {
        let mut cursor = Cursor::new(octets, config);
        Self::parse(&mut cursor)
    }

    /// Decodes a message starting at the cursor’s current position.
    ///
    /// Since compression pointers are offsets from the start of the
    /// message, the cursor should be at the start of its octets.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let header = Header::parse(cursor)?;
        let counts = HeaderCounts::parse(cursor)?;
        let questions =
            parse_section(cursor, counts.qdcount, Question::parse)?;
        let answers = parse_section(cursor, counts.ancount, Record::parse)?;
        let authority = parse_section(cursor, counts.nscount, Record::parse)?;
        let additional = parse_section(cursor, counts.arcount, Record::parse)?;
        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }
}

/// # Header Section
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }
}

/// # Access to Sections
///
impl Message {
    /// Returns the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Returns the first question, if there is any.
    ///
    /// The method will return `None` both if there are no questions or if
    /// the question section is empty.
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the OPT record of the message if there is one.
    ///
    /// Only the first OPT record in the additional section is considered.
    pub fn opt(&self) -> Option<OptRecord<'_>> {
        self.additional.iter().find_map(OptRecord::from_record)
    }
}

//------------ Helpers -------------------------------------------------------

fn parse_section<T>(
    cursor: &mut Cursor,
    count: u16,
    op: fn(&mut Cursor) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    // Don’t trust the count for allocation. Every entry takes at least
    // five octets, so this bounds the capacity by the input.
    let capacity = usize::from(count).min(cursor.remaining() / 5);
    let mut res = Vec::with_capacity(capacity);
    for _ in 0..count {
        res.push(op(cursor)?);
    }
    Ok(res)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Opcode, Rcode, Rtype};
    use crate::rdata::{Cname, RecordData, A};

    // A response for example.com. A with a CNAME and an A record in the
    // answer and an OPT record in the additional section.
    fn response() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"\xab\xcd\x81\x80\x00\x01\x00\x02\x00\x00\x00\x01");
        // Question at offset 12.
        buf.extend_from_slice(b"\x07example\x03com\0\x00\x01\x00\x01");
        // CNAME: example.com. -> www.example.com.
        buf.extend_from_slice(b"\xc0\x0c\x00\x05\x00\x01\x00\x00\x01\x2c\x00\x06");
        buf.extend_from_slice(b"\x03www\xc0\x0c");
        // A for www.example.com., pointing at the CNAME target at 41.
        buf.extend_from_slice(b"\xc0\x29\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04");
        buf.extend_from_slice(b"\xc0\x00\x02\x01");
        // OPT with a payload size of 1232 and the DO bit.
        buf.extend_from_slice(b"\x00\x00\x29\x04\xd0\x00\x00\x80\x00\x00\x00");
        buf
    }

    #[test]
    fn parse_response() {
        let msg = Message::from_slice(&response()).unwrap();
        assert_eq!(msg.header().id(), 0xabcd);
        assert!(msg.header().qr());
        assert_eq!(msg.header().opcode(), Opcode::Query);
        assert_eq!(msg.header().rcode(), Rcode::NoError);

        let question = msg.first_question().unwrap();
        assert_eq!(question.qname(), "example.com.");
        assert_eq!(question.qtype(), Rtype::A);

        assert_eq!(msg.answers().len(), 2);
        assert_eq!(msg.answers()[0].owner(), "example.com.");
        assert_eq!(
            msg.answers()[0].data(),
            &RecordData::Cname(Cname::new("www.example.com."))
        );
        assert_eq!(msg.answers()[1].owner(), "www.example.com.");
        assert_eq!(
            msg.answers()[1].data(),
            &RecordData::A(A::from_octets(192, 0, 2, 1))
        );
        assert!(msg.authority().is_empty());

        let opt = msg.opt().unwrap();
        assert_eq!(opt.udp_payload_size(), 1232);
        assert!(opt.dnssec_ok());
        assert_eq!(opt.version(), 0);
        assert!(opt.opt().is_empty());
    }

    #[test]
    fn truncated_anywhere() {
        let buf = response();
        for len in 0..buf.len() {
            assert!(
                Message::from_slice(&buf[..len]).is_err(),
                "decoding {} octets succeeded",
                len
            );
        }
    }

    #[test]
    fn counts_beyond_data() {
        // Header claims a question but there is none.
        assert_eq!(
            Message::from_slice(b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00"),
            Err(DecodeError::ShortInput)
        );
        // Huge counts must not cause huge allocations before failing.
        assert_eq!(
            Message::from_slice(b"\x00\x01\x00\x00\xff\xff\xff\xff\xff\xff\xff\xff"),
            Err(DecodeError::ShortInput)
        );
    }

    #[test]
    fn no_opt() {
        let msg = Message::from_slice(
            b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00",
        )
        .unwrap();
        assert!(msg.first_question().is_none());
        assert!(msg.opt().is_none());
    }
}
