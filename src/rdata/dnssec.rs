//! Record data from [RFC 4034] and [RFC 7344]: DS, DNSKEY, and RRSIG.
//!
//! This RFC defines the record types for DNSSEC. The child copies CDS and
//! CDNSKEY from RFC 7344 share the layouts of DS and DNSKEY and therefore
//! use the same types.
//!
//! Nothing here validates anything. The types merely make the fields of
//! the records available.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034
//! [RFC 7344]: https://tools.ietf.org/html/rfc7344

use super::fmt_hex;
use crate::base::iana::Rtype;
use crate::base::name;
use crate::base::serial::Serial;
use crate::base::wire::{Cursor, DecodeError};
use core::fmt;
use std::string::String;
use std::vec::Vec;
use time::OffsetDateTime;

//------------ Dnskey --------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dnskey {
    flags: u16,
    protocol: u8,
    algorithm: u8,
    public_key: Vec<u8>,
}

impl Dnskey {
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: u8,
        public_key: impl Into<Vec<u8>>,
    ) -> Self {
        Dnskey {
            flags,
            protocol,
            algorithm,
            public_key: public_key.into(),
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Returns whether the Revoke flag is set.
    ///
    /// See [RFC 5011, Section 3].
    ///
    /// [RFC 5011, Section 3]: https://tools.ietf.org/html/rfc5011#section-3
    pub fn is_revoked(&self) -> bool {
        self.flags & 0b0000_0000_1000_0000 != 0
    }

    /// Returns whether the the Secure Entry Point (SEP) flag is set.
    ///
    /// See [RFC 4034, Section 2.1.1]:
    ///
    /// > This flag is only intended to be a hint to zone signing or
    /// > debugging software as to the intended use of this DNSKEY record;
    /// > validators MUST NOT alter their behavior during the signature
    /// > validation process in any way based on the setting of this bit.
    ///
    /// [RFC 4034, Section 2.1.1]: https://tools.ietf.org/html/rfc4034#section-2.1.1
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0b0000_0000_0000_0001 != 0
    }

    /// Returns whether the Zone Key flag is set.
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0b0000_0001_0000_0000 != 0
    }

    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        let len = rest_len!(rdlen, 4, "DNSKEY")?;
        Ok(Self::new(
            cursor.parse_u16()?,
            cursor.parse_u8()?,
            cursor.parse_u8()?,
            cursor.parse_octets(len)?,
        ))
    }
}

//--- Display

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ", self.flags, self.protocol, self.algorithm)?;
        fmt_hex(&self.public_key, f)
    }
}

//------------ Timestamp -----------------------------------------------------

/// A signature time value.
///
/// [RFC 4034] defines these as the number of seconds elapsed since 1 January
/// 1970 00:00:00 UTC, ignoring leap seconds, modulo 2^32. They are resolved
/// using [RFC 1982] serial number arithmetic to the point in time that lies
/// within 2^31 seconds of the reference time configured via
/// [`Config::set_reference_time`].
///
/// Without a reference time, the nominal reference of
/// [`NOMINAL_REFERENCE`] makes this the plain unsigned interpretation. Raw
/// values then always resolve to a time between 1970-01-01T00:00:00Z and
/// 2106-02-07T06:28:15Z. A signature time from after 2106 needs a
/// reference time to come out right.
///
/// Both the raw value and the resolved time are kept.
///
/// [`Config::set_reference_time`]: crate::config::Config::set_reference_time
/// [`NOMINAL_REFERENCE`]: crate::config::NOMINAL_REFERENCE
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    serial: Serial,
    time: OffsetDateTime,
}

impl Timestamp {
    /// Resolves a raw value against a reference in Unix seconds.
    pub fn resolve(value: u32, reference: i64) -> Result<Self, DecodeError> {
        let serial = Serial(value);
        OffsetDateTime::from_unix_timestamp(serial.resolve(reference))
            .map(|time| Timestamp { serial, time })
            .map_err(|_| DecodeError::InvalidTimestamp(value))
    }

    /// Returns the timestamp as a raw integer.
    #[must_use]
    pub fn into_int(self) -> u32 {
        self.serial.into_int()
    }

    /// Returns the raw value as a serial number.
    pub fn serial(self) -> Serial {
        self.serial
    }

    /// Returns the resolved point in time.
    pub fn time(self) -> OffsetDateTime {
        self.time
    }

    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let value = cursor.parse_u32()?;
        Self::resolve(value, cursor.config().reference_secs())
    }
}

//--- Display

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            self.time.year(),
            u8::from(self.time.month()),
            self.time.day(),
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

//------------ Rrsig ---------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rrsig {
    type_covered: Rtype,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    expiration: Timestamp,
    inception: Timestamp,
    key_tag: u16,
    signer_name: String,
    signature: Vec<u8>,
}

impl Rrsig {
    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn labels(&self) -> u8 {
        self.labels
    }

    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    pub fn expiration(&self) -> Timestamp {
        self.expiration
    }

    pub fn inception(&self) -> Timestamp {
        self.inception
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer_name(&self) -> &str {
        &self.signer_name
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Decodes the record data.
    ///
    /// The signature takes up whatever is left after the signer name.
    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        rest_len!(rdlen, 18, "RRSIG")?;
        let type_covered = Rtype::parse(cursor)?;
        let algorithm = cursor.parse_u8()?;
        let labels = cursor.parse_u8()?;
        let original_ttl = cursor.parse_u32()?;
        let expiration = Timestamp::parse(cursor)?;
        let inception = Timestamp::parse(cursor)?;
        let key_tag = cursor.parse_u16()?;
        let signer_name = name::parse(cursor)?;
        let signature = cursor.parse_octets(cursor.remaining())?;
        Ok(Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        })
    }
}

//--- Display

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} ",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name
        )?;
        fmt_hex(&self.signature, f)
    }
}

//------------ Ds -----------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ds {
    key_tag: u16,
    algorithm: u8,
    digest_type: u8,
    digest: Vec<u8>,
}

impl Ds {
    pub fn new(
        key_tag: u16,
        algorithm: u8,
        digest_type: u8,
        digest: impl Into<Vec<u8>>,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest: digest.into(),
        }
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn digest_type(&self) -> u8 {
        self.digest_type
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn parse(cursor: &mut Cursor, rdlen: u16) -> Result<Self, DecodeError> {
        let len = rest_len!(rdlen, 4, "DS")?;
        Ok(Self::new(
            cursor.parse_u16()?,
            cursor.parse_u8()?,
            cursor.parse_u8()?,
            cursor.parse_octets(len)?,
        ))
    }
}

//--- Display

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        fmt_hex(&self.digest, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use rstest::rstest;

    fn rrsig_data(expiration: u32, inception: u32) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"\x00\x01\x08\x02\x00\x00\x0e\x10");
        data.extend_from_slice(&expiration.to_be_bytes());
        data.extend_from_slice(&inception.to_be_bytes());
        data.extend_from_slice(b"\x30\x39\x07example\x03com\0");
        data.extend_from_slice(b"\xde\xad\xbe\xef");
        data
    }

    #[test]
    fn rrsig() {
        let config = Config::default();
        let data = rrsig_data(1_700_086_400, 1_700_000_000);
        let mut cursor = Cursor::new(&data, &config);
        let rrsig = Rrsig::parse(&mut cursor, data.len() as u16).unwrap();
        assert_eq!(rrsig.type_covered(), Rtype::A);
        assert_eq!(rrsig.algorithm(), 8);
        assert_eq!(rrsig.labels(), 2);
        assert_eq!(rrsig.original_ttl(), 3600);
        assert_eq!(rrsig.expiration().into_int(), 1_700_086_400);
        assert_eq!(
            rrsig.inception().time().unix_timestamp(),
            1_700_000_000
        );
        assert_eq!(rrsig.inception().to_string(), "20231114221320");
        assert_eq!(rrsig.key_tag(), 12345);
        assert_eq!(rrsig.signer_name(), "example.com.");
        assert_eq!(rrsig.signature(), b"\xde\xad\xbe\xef");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn rrsig_too_short() {
        let config = Config::default();
        let data = rrsig_data(0, 0);
        let mut cursor = Cursor::new(&data, &config);
        assert!(matches!(
            Rrsig::parse(&mut cursor, 17),
            Err(DecodeError::InvalidLength(_))
        ));
    }

    #[test]
    fn timestamp_nominal_window() {
        let nominal = crate::config::NOMINAL_REFERENCE;
        let low = Timestamp::resolve(0, nominal).unwrap();
        assert_eq!(low.time(), OffsetDateTime::UNIX_EPOCH);
        let high = Timestamp::resolve(u32::MAX, nominal).unwrap();
        assert_eq!(high.to_string(), "21060207062815");
    }

    #[test]
    fn timestamp_with_reference() {
        let mut config = Config::default();
        // 2100-01-01T00:00:00Z
        config.set_reference_time(Some(
            OffsetDateTime::from_unix_timestamp(4_102_444_800).unwrap(),
        ));
        let mut cursor = Cursor::new(b"\x00\x00\x00\x64", &config);
        let ts = Timestamp::parse(&mut cursor).unwrap();
        assert_eq!(ts.into_int(), 100);
        assert_eq!(ts.time().unix_timestamp(), (1i64 << 32) + 100);
    }

    #[rstest]
    #[case(4, b"".as_slice())]
    #[case(6, b"\xab\xcd".as_slice())]
    fn ds(#[case] rdlen: u16, #[case] digest: &[u8]) {
        let config = Config::default();
        let mut data = b"\x30\x39\x08\x02".to_vec();
        data.extend_from_slice(digest);
        let mut cursor = Cursor::new(&data, &config);
        let ds = Ds::parse(&mut cursor, rdlen).unwrap();
        assert_eq!(ds, Ds::new(12345, 8, 2, digest));
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn ds_too_short(#[case] rdlen: u16) {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x30\x39\x08", &config);
        assert!(matches!(
            Ds::parse(&mut cursor, rdlen),
            Err(DecodeError::InvalidLength(_))
        ));
    }

    #[test]
    fn dnskey() {
        let config = Config::default();
        let mut cursor = Cursor::new(b"\x01\x01\x03\x08\x01\x02\x03", &config);
        let key = Dnskey::parse(&mut cursor, 7).unwrap();
        assert_eq!(key.flags(), 257);
        assert!(key.is_zone_key());
        assert!(key.is_secure_entry_point());
        assert!(!key.is_revoked());
        assert_eq!(key.protocol(), 3);
        assert_eq!(key.algorithm(), 8);
        assert_eq!(key.public_key(), b"\x01\x02\x03");
        assert_eq!(key.to_string(), "257 3 8 010203");
    }
}
