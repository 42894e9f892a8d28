//! A configured decoder.

use crate::base::message::Message;
use crate::base::wire::DecodeError;
use crate::config::Config;
use crate::stream::{parse_stream, StreamBatch};
use time::OffsetDateTime;

//------------ Decoder -------------------------------------------------------

/// A decoder for DNS messages using a certain configuration.
///
/// The decoder holds no state besides its configuration. It can be shared
/// freely and used for any number of messages.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: Config,
}

impl Decoder {
    /// Creates a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Decoder { config }
    }

    /// Creates a decoder resolving timestamps relative to `reference`.
    pub fn with_reference_time(reference: OffsetDateTime) -> Self {
        let mut config = Config::new();
        config.set_reference_time(Some(reference));
        Self::with_config(config)
    }

    /// Returns the configuration of the decoder.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes a single message.
    pub fn decode(&self, octets: &[u8]) -> Result<Message, DecodeError> {
        Message::from_slice_with(octets, &self.config)
    }

    /// Decodes a sequence of length-prefixed messages.
    pub fn decode_stream<'a>(
        &self,
        octets: &'a [u8],
    ) -> Result<StreamBatch<'a>, DecodeError> {
        parse_stream(octets, &self.config)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ExtendedLabels;

    #[test]
    fn config_applies() {
        // A question whose name is a single extended label.
        let msg = b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                    \x41\x00\x01\x00\x01";
        assert_eq!(
            Decoder::new().decode(msg),
            Err(DecodeError::ExtendedLabel(0x41))
        );

        let mut config = Config::new();
        config.set_extended_labels(ExtendedLabels::Empty);
        let decoder = Decoder::with_config(config);
        assert_eq!(decoder.config().extended_labels(), ExtendedLabels::Empty);
        let msg = decoder.decode(msg).unwrap();
        assert_eq!(msg.questions()[0].qname(), "");
    }

    #[test]
    fn reference_time() {
        let reference = OffsetDateTime::from_unix_timestamp(0).unwrap();
        let decoder = Decoder::with_reference_time(reference);
        assert_eq!(decoder.config().reference_time(), Some(reference));
    }
}
