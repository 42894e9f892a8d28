//! Receiving DNS messages.
//!
//! This module contains thin helpers that read a single message from a
//! stream or datagram socket and decode it. They impose no policy of their
//! own. There are no timeouts and no retries. Anything beyond reading the
//! octets is left to the caller.
//!
//! * [stream] reads length-prefixed messages from anything implementing
//!   Tokio’s [`AsyncRead`][tokio::io::AsyncRead], and
//! * [dgram] receives a message from a [`UdpSocket`][tokio::net::UdpSocket].

pub mod dgram;
pub mod stream;

use crate::base::wire::DecodeError;
use std::sync::Arc;
use std::{error, fmt, io};

//------------ Error ---------------------------------------------------------

/// Receiving a message failed.
#[derive(Clone, Debug)]
pub enum Error {
    /// Reading from the transport gave an error.
    Io(Arc<io::Error>),

    /// The stream ended in the middle of a message.
    UnexpectedEndOfData,

    /// The received message could not be decoded.
    Decode(DecodeError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "error reading message: {}", err),
            Error::UnexpectedEndOfData => {
                f.write_str("unexpected end of data")
            }
            Error::Decode(err) => write!(f, "error decoding message: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            Error::UnexpectedEndOfData => None,
            Error::Decode(err) => Some(err),
        }
    }
}
