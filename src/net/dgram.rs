//! Receiving messages from a datagram socket.

use super::Error;
use crate::base::message::Message;
use crate::decoder::Decoder;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::trace;

/// The largest possible UDP payload.
const MAX_DGRAM_LEN: usize = 65535;

/// Receives and decodes a single message from a UDP socket.
///
/// Returns the message together with the address of its sender.
pub async fn recv_message(
    socket: &UdpSocket,
    decoder: &Decoder,
) -> Result<(Message, SocketAddr), Error> {
    let mut buf = vec![0u8; MAX_DGRAM_LEN];
    let (len, addr) = socket.recv_from(&mut buf).await?;
    trace!(len, %addr, "received datagram");
    let msg = decoder.decode(&buf[..len])?;
    Ok((msg, addr))
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn loopback() {
        let recv = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let send = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        send.send_to(
            b"\xbe\xef\x81\x83\x00\x00\x00\x00\x00\x00\x00\x00",
            recv.local_addr().unwrap(),
        )
        .await
        .unwrap();
        let (msg, addr) = recv_message(&recv, &Decoder::new()).await.unwrap();
        assert_eq!(addr, send.local_addr().unwrap());
        assert_eq!(msg.header().id(), 0xbeef);
        assert_eq!(msg.header().rcode(), crate::base::iana::Rcode::NXDomain);
    }
}
