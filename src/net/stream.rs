//! Reading messages from a byte stream.

use super::Error;
use crate::base::message::Message;
use crate::decoder::Decoder;
use bytes::BytesMut;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

/// Reads and decodes the next message from a stream.
///
/// Reading has to be done in two steps: first read a two octet value that
/// specifies the length of the message, and then read exactly that many
/// octets of message.
///
/// Returns `Ok(None)` if the stream ends cleanly before the next message.
/// If it ends anywhere else, [`Error::UnexpectedEndOfData`] is returned.
///
/// This function is not cancellation safe. If the future is dropped after
/// part of a message was read, the stream is out of sync.
pub async fn read_message<R>(
    reader: &mut R,
    decoder: &Decoder,
) -> Result<Option<Message>, Error>
where
    R: AsyncRead + Unpin,
{
    let mut len = [0u8; 2];
    if reader.read(&mut len[..1]).await? == 0 {
        return Ok(None);
    }
    reader.read_exact(&mut len[1..]).await.map_err(eof_to_error)?;
    let len = usize::from(u16::from_be_bytes(len));

    let mut buf = BytesMut::zeroed(len);
    reader
        .read_exact(buf.as_mut())
        .await
        .map_err(eof_to_error)?;
    trace!(len, "read message from stream");
    decoder.decode(&buf).map(Some).map_err(Into::into)
}

fn eof_to_error(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::UnexpectedEndOfData
    } else {
        err.into()
    }
}

//============ Testing =======================================================
