#![allow(dead_code)]

pub fn init_logging() {
    // Initialize tracing based logging. Override with env var RUST_LOG, e.g.
    // RUST_LOG=trace. TRACE level shows every decoded question and record.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Assembles a message from a header and the octets of its sections.
pub fn message(
    id: u16,
    flags: u16,
    counts: [u16; 4],
    sections: &[&[u8]],
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    for count in counts {
        buf.extend_from_slice(&count.to_be_bytes());
    }
    for section in sections {
        buf.extend_from_slice(section);
    }
    buf
}

/// Prefixes a message with its length for stream transports.
pub fn framed(msg: &[u8]) -> Vec<u8> {
    let mut buf = (msg.len() as u16).to_be_bytes().to_vec();
    buf.extend_from_slice(msg);
    buf
}

/// The question for example.com. A, starting at offset 12.
pub const EXAMPLE_COM_A: &[u8] = b"\x07example\x03com\x00\x00\x01\x00\x01";
