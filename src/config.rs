//! Configuring the decoder.
//!
//! Decoding is almost entirely determined by the wire format. The two
//! exceptions are collected in [`Config`]: the reference point used to
//! resolve 32 bit time values and the treatment of the extended label type
//! that RFC 1035 leaves undefined.

use time::OffsetDateTime;

//------------ Constants -----------------------------------------------------

/// The reference used for time values if none is configured.
///
/// This is `2^31` seconds after the Unix epoch. Resolving against it yields
/// exactly the unsigned interpretation of a 32 bit time value, i.e., the
/// window from 1970-01-01T00:00:00Z to 2106-02-07T06:28:15Z.
pub const NOMINAL_REFERENCE: i64 = 1 << 31;

//------------ Config --------------------------------------------------------

/// Configuration for decoding messages.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The reference point for resolving time values.
    reference_time: Option<OffsetDateTime>,

    /// How to deal with labels of the extended label type.
    extended_labels: ExtendedLabels,
}

impl Config {
    /// Creates a new, default config.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the reference time if one has been set.
    pub fn reference_time(&self) -> Option<OffsetDateTime> {
        self.reference_time
    }

    /// Sets the reference time.
    ///
    /// Time values in RRSIG records are 32 bit numbers that wrap around
    /// every 136 years or so. They are resolved to the point in time
    /// closest to the reference time, i.e., within 68 years either way.
    /// Without a reference time, [`NOMINAL_REFERENCE`] is used.
    pub fn set_reference_time(&mut self, time: Option<OffsetDateTime>) {
        self.reference_time = time
    }

    /// Returns the reference time in seconds since the Unix epoch.
    pub fn reference_secs(&self) -> i64 {
        self.reference_time
            .map(OffsetDateTime::unix_timestamp)
            .unwrap_or(NOMINAL_REFERENCE)
    }

    /// Returns the policy for extended labels.
    pub fn extended_labels(&self) -> ExtendedLabels {
        self.extended_labels
    }

    /// Sets the policy for extended labels.
    pub fn set_extended_labels(&mut self, policy: ExtendedLabels) {
        self.extended_labels = policy
    }
}

//------------ ExtendedLabels ------------------------------------------------

/// What to do when encountering a label of the extended label type.
///
/// A label header with its top two bits set to `01` marks an extended
/// label. No such label type is in use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtendedLabels {
    /// Fail with [`DecodeError::ExtendedLabel`].
    ///
    /// [`DecodeError::ExtendedLabel`]: crate::base::wire::DecodeError::ExtendedLabel
    #[default]
    Reject,

    /// End the name with an empty remainder without reading any further.
    Empty,
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.reference_time(), None);
        assert_eq!(config.reference_secs(), NOMINAL_REFERENCE);
        assert_eq!(config.extended_labels(), ExtendedLabels::Reject);
    }

    #[test]
    fn reference_secs() {
        let mut config = Config::new();
        let time = OffsetDateTime::from_unix_timestamp(1_000_000).unwrap();
        config.set_reference_time(Some(time));
        assert_eq!(config.reference_secs(), 1_000_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let mut config = Config::new();
        config.set_extended_labels(ExtendedLabels::Empty);
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
